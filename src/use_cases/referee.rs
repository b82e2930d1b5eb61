// Match controller: the round life-cycle state machine.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::domain::{
    Action, Gesture, LandmarkSet, MatchSnapshot, MatchState, MatchWinner, Move, MoveSource,
    Outcome, Phase, RefereeError, RoundSummary, classify, resolve,
};

/// Countdown length used when no setting is supplied.
pub const DEFAULT_COUNTDOWN: Duration = Duration::from_secs(3);

/// Tunables fixed for the lifetime of a controller.
#[derive(Debug, Clone)]
pub struct RefereeSettings {
    /// Time between entering Countdown and the switch to Playing.
    pub countdown: Duration,
}

impl Default for RefereeSettings {
    fn default() -> Self {
        Self {
            countdown: DEFAULT_COUNTDOWN,
        }
    }
}

/// Result of a countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining { seconds: u32 },
    /// The deadline passed on this tick and the match is now Playing.
    Elapsed,
}

/// Result of submitting a frame while Playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameVerdict {
    /// No playable gesture; the phase stays Playing.
    Unrecognized,
    Resolved(RoundSummary),
}

impl FrameVerdict {
    pub fn gesture(&self) -> Gesture {
        match self {
            FrameVerdict::Unrecognized => Gesture::Unknown,
            FrameVerdict::Resolved(summary) => summary.player_move.into(),
        }
    }
}

/// Owns one match and applies collaborator events to it, one at a time.
///
/// Operations that are not valid for the current phase leave the state untouched and
/// return `RefereeError::Rejected`. Callers sharing a controller across tasks must
/// serialize access themselves.
pub struct MatchController<M> {
    moves: M,
    settings: RefereeSettings,
    state: MatchState,
}

impl<M> MatchController<M>
where
    M: MoveSource,
{
    pub fn new(moves: M, settings: RefereeSettings) -> Self {
        Self {
            moves,
            settings,
            state: MatchState::new(),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn player_score(&self) -> u32 {
        self.state.player_score
    }

    pub fn computer_score(&self) -> u32 {
        self.state.computer_score
    }

    pub fn round_number(&self) -> u32 {
        self.state.round_number
    }

    pub fn winning_score(&self) -> Option<u32> {
        self.state.winning_score
    }

    pub fn last_round(&self) -> Option<RoundSummary> {
        self.state.last_round
    }

    /// Whole seconds left in the countdown, rounded up; `None` outside Countdown.
    pub fn remaining_seconds(&self, now: Instant) -> Option<u32> {
        if self.state.phase != Phase::Countdown {
            return None;
        }
        let deadline = self.state.countdown_deadline?;
        Some(seconds_until(deadline, now))
    }

    /// Match winner; only defined once the match is over.
    pub fn winner(&self) -> Option<MatchWinner> {
        if self.state.phase != Phase::GameOver {
            return None;
        }
        self.state.leader_at_target()
    }

    pub fn snapshot(&self, now: Instant) -> MatchSnapshot {
        MatchSnapshot {
            phase: self.state.phase,
            player_score: self.state.player_score,
            computer_score: self.state.computer_score,
            round_number: self.state.round_number,
            winning_score: self.state.winning_score,
            countdown_remaining: self.remaining_seconds(now),
            last_round: self.state.last_round,
            winner: self.winner(),
        }
    }

    /// Begins a match from the menu and enters the first countdown.
    pub fn start(&mut self, winning_score: u32, now: Instant) -> Result<(), RefereeError> {
        self.expect_phase(Phase::Menu, Action::Start)?;
        if winning_score == 0 {
            return Err(RefereeError::InvalidWinningScore);
        }

        self.state.winning_score = Some(winning_score);
        info!(winning_score, "match started");
        self.enter_countdown(now);
        Ok(())
    }

    /// Advances the countdown clock to `now`.
    pub fn tick(&mut self, now: Instant) -> Result<Countdown, RefereeError> {
        self.expect_phase(Phase::Countdown, Action::Tick)?;

        match self.state.countdown_deadline {
            Some(deadline) if now < deadline => Ok(Countdown::Remaining {
                seconds: seconds_until(deadline, now),
            }),
            _ => {
                self.enter_playing();
                Ok(Countdown::Elapsed)
            }
        }
    }

    /// Applies a captured frame; `None` means no hand was detected.
    pub fn submit_frame(
        &mut self,
        landmarks: Option<&LandmarkSet>,
    ) -> Result<FrameVerdict, RefereeError> {
        self.expect_phase(Phase::Playing, Action::SubmitFrame)?;

        let gesture = landmarks.map_or(Gesture::Unknown, classify);
        let Ok(player_move) = Move::try_from(gesture) else {
            debug!(round = self.state.round_number, "gesture not recognized");
            return Ok(FrameVerdict::Unrecognized);
        };

        Ok(FrameVerdict::Resolved(self.resolve_round(player_move)))
    }

    /// Moves on from a resolved round.
    pub fn advance(&mut self, now: Instant) -> Result<Phase, RefereeError> {
        self.expect_phase(Phase::RoundResolved, Action::Advance)?;

        if self.state.leader_at_target().is_some() {
            self.enter_game_over();
        } else {
            self.enter_countdown(now);
        }
        Ok(self.state.phase)
    }

    /// Returns to the menu from any phase. The winning score must be chosen again.
    pub fn reset(&mut self) {
        info!(from = self.state.phase.as_str(), "match reset");
        self.state = MatchState::new();
    }

    fn expect_phase(&self, expected: Phase, action: Action) -> Result<(), RefereeError> {
        if self.state.phase == expected {
            return Ok(());
        }
        debug!(
            action = action.as_str(),
            phase = self.state.phase.as_str(),
            "transition rejected"
        );
        Err(RefereeError::Rejected {
            action,
            phase: self.state.phase,
        })
    }

    fn resolve_round(&mut self, player_move: Move) -> RoundSummary {
        let computer_move = self.moves.draw();
        let outcome = resolve(player_move, computer_move);
        match outcome {
            Outcome::PlayerWin => self.state.player_score += 1,
            Outcome::ComputerWin => self.state.computer_score += 1,
            Outcome::Tie => {}
        }

        let summary = RoundSummary {
            round: self.state.round_number,
            player_move,
            computer_move,
            outcome,
        };
        self.state.round_number += 1;
        self.state.last_round = Some(summary);

        info!(
            round = summary.round,
            player = player_move.as_str(),
            computer = computer_move.as_str(),
            ?outcome,
            player_score = self.state.player_score,
            computer_score = self.state.computer_score,
            "round resolved"
        );

        if self.state.leader_at_target().is_some() {
            self.enter_game_over();
        } else {
            self.state.phase = Phase::RoundResolved;
        }
        summary
    }

    fn enter_countdown(&mut self, now: Instant) {
        self.state.phase = Phase::Countdown;
        self.state.last_round = None;
        self.state.countdown_deadline = Some(now + self.settings.countdown);
        debug!(round = self.state.round_number, "countdown started");
    }

    fn enter_playing(&mut self) {
        self.state.phase = Phase::Playing;
        self.state.countdown_deadline = None;
        self.state.last_round = None;
        debug!(round = self.state.round_number, "waiting for move");
    }

    fn enter_game_over(&mut self) {
        self.state.phase = Phase::GameOver;
        self.state.countdown_deadline = None;
        info!(
            winner = ?self.state.leader_at_target(),
            player_score = self.state.player_score,
            computer_score = self.state.computer_score,
            "match over"
        );
    }
}

// Any time left, however small, counts as a whole second.
fn seconds_until(deadline: Instant, now: Instant) -> u32 {
    let left = deadline.saturating_duration_since(now);
    u32::try_from(left.as_nanos().div_ceil(1_000_000_000)).unwrap_or(u32::MAX)
}
