// Single shared match: serializes collaborator events and publishes snapshots.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{Mutex, watch};
use tracing::debug;

use crate::domain::{Clock, LandmarkSet, MatchSnapshot, MoveSource, Phase, RefereeError};
use crate::use_cases::referee::{Countdown, FrameVerdict, MatchController, RefereeSettings};

pub type BoxedMoves = Box<dyn MoveSource>;

/// The one in-process match, guarded for access from many request tasks.
pub struct MatchSession {
    referee: Mutex<MatchController<BoxedMoves>>,
    clock: Arc<dyn Clock>,
    // Latest snapshot for subscribers (WebSocket feeds).
    snapshot_tx: watch::Sender<MatchSnapshot>,
}

impl MatchSession {
    pub fn new(moves: BoxedMoves, clock: Arc<dyn Clock>, settings: RefereeSettings) -> Self {
        let referee = MatchController::new(moves, settings);
        let (snapshot_tx, _snapshot_rx) = watch::channel(referee.snapshot(clock.now()));
        Self {
            referee: Mutex::new(referee),
            clock,
            snapshot_tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<MatchSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Current view of the match, with any elapsed countdown applied first.
    pub async fn snapshot(&self) -> MatchSnapshot {
        let mut referee = self.referee.lock().await;
        let now = self.clock.now();
        catch_up(&mut referee, now);
        self.publish(referee.snapshot(now))
    }

    pub async fn start(&self, winning_score: u32) -> Result<MatchSnapshot, RefereeError> {
        let mut referee = self.referee.lock().await;
        let now = self.clock.now();
        referee.start(winning_score, now)?;
        Ok(self.publish(referee.snapshot(now)))
    }

    pub async fn tick(&self) -> Result<Countdown, RefereeError> {
        let mut referee = self.referee.lock().await;
        let now = self.clock.now();
        let countdown = referee.tick(now)?;
        self.publish(referee.snapshot(now));
        Ok(countdown)
    }

    pub async fn submit_frame(
        &self,
        landmarks: Option<LandmarkSet>,
    ) -> Result<(FrameVerdict, MatchSnapshot), RefereeError> {
        let mut referee = self.referee.lock().await;
        let now = self.clock.now();
        catch_up(&mut referee, now);
        let verdict = referee.submit_frame(landmarks.as_ref())?;
        Ok((verdict, self.publish(referee.snapshot(now))))
    }

    pub async fn advance(&self) -> Result<MatchSnapshot, RefereeError> {
        let mut referee = self.referee.lock().await;
        let now = self.clock.now();
        referee.advance(now)?;
        Ok(self.publish(referee.snapshot(now)))
    }

    pub async fn reset(&self) -> MatchSnapshot {
        let mut referee = self.referee.lock().await;
        referee.reset();
        self.publish(referee.snapshot(self.clock.now()))
    }

    // Notify subscribers only when the rendered state actually changed.
    fn publish(&self, snapshot: MatchSnapshot) -> MatchSnapshot {
        self.snapshot_tx.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot.clone();
            true
        });
        snapshot
    }
}

// Applies a countdown that elapsed between ticker runs.
fn catch_up(referee: &mut MatchController<BoxedMoves>, now: Instant) {
    if referee.phase() != Phase::Countdown {
        return;
    }
    match referee.tick(now) {
        Ok(Countdown::Elapsed) => debug!("countdown elapsed on request"),
        Ok(Countdown::Remaining { .. }) => {}
        Err(error) => debug!(%error, "countdown catch-up failed"),
    }
}
