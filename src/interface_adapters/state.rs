use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Instant;

use crate::domain::{Clock, Move, MoveSource};
use crate::use_cases::MatchSession;

// Shared application state for the HTTP handlers.
pub struct AppState {
    // The single match hosted by this process.
    pub session: Arc<MatchSession>,
    // Winning score applied when a start request does not name one.
    pub default_winning_score: u32,
}

// Uniform computer-move source backed by a `rand` generator.
pub struct RandomMoves<R> {
    rng: R,
}

impl RandomMoves<SmallRng> {
    // Seeds from the thread-local generator; suitable for production play.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R> MoveSource for RandomMoves<R>
where
    R: Rng + Send,
{
    fn draw(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }
}

// System clock adapter used by the match session.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
