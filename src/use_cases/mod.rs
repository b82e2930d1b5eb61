// Use cases layer: the referee state machine and its hosting workflows.

pub mod referee;
pub mod session;
pub mod ticker;

#[cfg(test)]
pub(crate) mod test_support;

pub use referee::{Countdown, FrameVerdict, MatchController, RefereeSettings};
pub use session::{BoxedMoves, MatchSession};
pub use ticker::countdown_ticker;
