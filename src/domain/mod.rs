// Domain layer: hand model, gesture rules and match state.

pub mod classifier;
pub mod errors;
pub mod gesture;
pub mod landmarks;
pub mod ports;
pub mod state;

pub use classifier::{FingerStates, classify, finger_states};
pub use errors::{Action, RefereeError};
pub use gesture::{Gesture, MatchWinner, Move, Outcome, resolve};
pub use landmarks::{HandLandmark, LANDMARK_COUNT, LandmarkError, LandmarkSet, Point};
pub use ports::{Clock, MoveSource};
pub use state::{MatchSnapshot, MatchState, Phase, RoundSummary};
