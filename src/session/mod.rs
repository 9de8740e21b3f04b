//! Session Management: experiment phases, block scoring and final summary
//!
//! # Components
//! - `config.rs`: Variant presets and the gain/loss money policy
//! - `state.rs`: SessionState machine driving the phases
//! - `summary.rs`: Block results, learning coefficient and money outcome
//! - `errors.rs`: Out-of-phase operation errors

pub mod config;
pub mod errors;
pub mod state;
pub mod summary;

pub use config::{ExperimentConfig, Group, Variant};
pub use errors::SessionError;
pub use state::{Action, Feedback, FeedbackKind, Phase, SessionState};
pub use summary::{format_money, BlockDetail, BlockTime, FinalSummary};
