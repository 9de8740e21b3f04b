//! Session precondition errors
//!
//! Wrong answers, malformed input and timeouts are not errors: they are
//! reported as feedback. Only calling an operation from a phase that does
//! not allow it ends up here.

use super::state::Phase;
use std::fmt;

/// Participant-level action names, used in error messages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Begin,
    StartTask,
    Submit,
    EndBlock,
    PollPause,
    Reset,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Begin => "begin",
            ActionKind::StartTask => "start task",
            ActionKind::Submit => "submit answer",
            ActionKind::EndBlock => "end block",
            ActionKind::PollPause => "poll pause",
            ActionKind::Reset => "reset",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {action} while in the {phase} phase")]
    InvalidPhase { action: ActionKind, phase: Phase },

    #[error("final summary is not available before the results phase")]
    NoSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_phase_message() {
        let err = SessionError::InvalidPhase {
            action: ActionKind::Submit,
            phase: Phase::Welcome,
        };
        assert_eq!(
            err.to_string(),
            "cannot submit answer while in the welcome phase"
        );
    }
}
