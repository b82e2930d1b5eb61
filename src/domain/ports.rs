use std::time::Instant;

use crate::domain::gesture::Move;

// Port for drawing the computer's move; must be uniform over the three moves.
pub trait MoveSource: Send {
    fn draw(&mut self) -> Move;
}

// Port for retrieving a monotonic "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

impl<M> MoveSource for Box<M>
where
    M: MoveSource + ?Sized,
{
    fn draw(&mut self) -> Move {
        (**self).draw()
    }
}
