//! Results export: flat end-of-session record and its file writers
//!
//! # Components
//! - `record.rs`: ExportRecord built from a finished session
//! - `writer.rs`: CSV / JSON file output

pub mod record;
pub mod writer;

pub use record::ExportRecord;
pub use writer::{write_record, ExportError, ExportFormat};
