//! Flat record of one finished session

use crate::session::{SessionError, SessionState};
use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

/// Timestamp layout shared by every export format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Field order is the column order of the CSV export
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportRecord {
    pub final_money: i64,
    pub mood_rating: u8,
    pub mental_fatigue_rating: u8,
    pub total_errors: u32,
    /// Rendered coefficient, e.g. `0.75` or `perfect (0 errors in block 1)`
    pub learning_coefficient: String,
    pub money_outcome_description: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Local>,
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Local>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

impl ExportRecord {
    /// Build the record from a session that reached the results screen
    pub fn from_session(
        session: &SessionState,
        timestamp: DateTime<Local>,
    ) -> Result<Self, SessionError> {
        let summary = session.summary()?;
        Ok(ExportRecord {
            final_money: session.current_money,
            mood_rating: session.mood_rating,
            mental_fatigue_rating: session.mental_fatigue_rating,
            total_errors: summary.total_errors,
            learning_coefficient: summary.learning_coefficient.to_string(),
            money_outcome_description: summary.money_outcome.to_string(),
            timestamp,
        })
    }
}
