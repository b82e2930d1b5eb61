// Domain-level errors for referee operations.

use std::fmt;

use super::state::Phase;

/// Operations a collaborator can request of the referee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Tick,
    SubmitFrame,
    Advance,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Tick => "tick",
            Self::SubmitFrame => "submit_frame",
            Self::Advance => "advance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefereeError {
    // The action is not valid in the current phase; state is unchanged.
    Rejected { action: Action, phase: Phase },
    InvalidWinningScore,
}

impl fmt::Display for RefereeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefereeError::Rejected { action, phase } => write!(
                f,
                "{} is not allowed during {}",
                action.as_str(),
                phase.as_str()
            ),
            RefereeError::InvalidWinningScore => f.write_str("winning_score must be positive"),
        }
    }
}

impl std::error::Error for RefereeError {}
