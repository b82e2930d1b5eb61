use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::domain::{Clock, Move, MoveSource};

// Computer moves replayed in order (and then repeated) for deterministic rounds.
pub(crate) struct ScriptedMoves {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedMoves {
    pub(crate) fn new(moves: &[Move]) -> Self {
        Self {
            moves: moves.to_vec(),
            next: 0,
        }
    }
}

impl MoveSource for ScriptedMoves {
    fn draw(&mut self) -> Move {
        let Some(mv) = self.moves.get(self.next % self.moves.len().max(1)).copied() else {
            return Move::Rock;
        };
        self.next += 1;
        mv
    }
}

// Manually advanced time source shared between a test and the code under test.
#[derive(Clone)]
pub(crate) struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub(crate) fn advance(&self, by: std::time::Duration) {
        let mut guard = self.now.lock().expect("clock mutex poisoned");
        *guard += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().expect("clock mutex poisoned")
    }
}
