use std::sync::Weak;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::domain::RefereeError;
use crate::use_cases::referee::Countdown;
use crate::use_cases::session::MatchSession;

/// Ticks the countdown at a fixed cadence so Playing begins without a client poll.
///
/// Exits once the session has been dropped.
pub async fn countdown_ticker(session: Weak<MatchSession>, tick_interval: Duration) {
    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        let Some(session) = session.upgrade() else {
            debug!("match session dropped; ticker exiting");
            break;
        };

        match session.tick().await {
            Ok(Countdown::Elapsed) => info!("countdown elapsed"),
            Ok(Countdown::Remaining { .. }) => {}
            // Nothing to tick outside Countdown.
            Err(RefereeError::Rejected { .. }) => {}
            Err(error) => debug!(%error, "countdown tick failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phase;
    use crate::use_cases::referee::RefereeSettings;
    use crate::use_cases::test_support::{ManualClock, ScriptedMoves};
    use std::sync::Arc;

    #[tokio::test]
    async fn when_deadline_passes_then_ticker_moves_match_to_playing() {
        let clock = ManualClock::new();
        let session = Arc::new(MatchSession::new(
            Box::new(ScriptedMoves::new(&[])),
            Arc::new(clock.clone()),
            RefereeSettings {
                countdown: Duration::from_secs(1),
            },
        ));
        let mut updates = session.subscribe();
        session.start(3).await.expect("expected start to be accepted");

        tokio::spawn(countdown_ticker(
            Arc::downgrade(&session),
            Duration::from_millis(100),
        ));
        clock.advance(Duration::from_secs(1));

        let snapshot = updates
            .wait_for(|snapshot| snapshot.phase == Phase::Playing)
            .await
            .expect("expected session to stay alive")
            .clone();
        assert_eq!(snapshot.countdown_remaining, None);
    }

    #[tokio::test]
    async fn when_session_is_dropped_then_ticker_exits() {
        let session = Arc::new(MatchSession::new(
            Box::new(ScriptedMoves::new(&[])),
            Arc::new(ManualClock::new()),
            RefereeSettings::default(),
        ));
        let handle = tokio::spawn(countdown_ticker(
            Arc::downgrade(&session),
            Duration::from_millis(100),
        ));

        drop(session);

        handle.await.expect("expected ticker to exit cleanly");
    }
}
