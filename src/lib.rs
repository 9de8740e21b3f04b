//! Cognitive motivation experiment: gain vs. loss framing
//!
//! A participant subtracts 13 repeatedly from a start number until a
//! threshold is reached, over four timed blocks. Money is awarded for
//! completed blocks (gain framing) or deducted for failed ones (loss
//! framing).
//!
//! - `session`: phase state machine, scoring and final summary
//! - `export`: end-of-session record written as CSV or JSON
//! - `cli`: crossterm screens and key mapping

pub mod cli;
pub mod export;
pub mod session;
