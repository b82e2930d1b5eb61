// Match state owned by the referee, plus the read-only snapshot handed to renderers.

use std::time::Instant;

use super::gesture::{MatchWinner, Move, Outcome};

/// Stage of the match life-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Menu,
    Countdown,
    Playing,
    RoundResolved,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Countdown => "countdown",
            Self::Playing => "playing",
            Self::RoundResolved => "round_resolved",
            Self::GameOver => "game_over",
        }
    }
}

/// Values of the most recent resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub phase: Phase,
    pub player_score: u32,
    pub computer_score: u32,
    pub round_number: u32,
    // Chosen per match by `start`; forgotten on reset.
    pub winning_score: Option<u32>,
    pub last_round: Option<RoundSummary>,
    pub countdown_deadline: Option<Instant>,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Menu,
            player_score: 0,
            computer_score: 0,
            round_number: 1,
            winning_score: None,
            last_round: None,
            countdown_deadline: None,
        }
    }

    /// Side holding a winning score, if any.
    pub fn leader_at_target(&self) -> Option<MatchWinner> {
        let target = self.winning_score?;
        if self.player_score >= target {
            Some(MatchWinner::Player)
        } else if self.computer_score >= target {
            Some(MatchWinner::Computer)
        } else {
            None
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of the match for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSnapshot {
    pub phase: Phase,
    pub player_score: u32,
    pub computer_score: u32,
    pub round_number: u32,
    pub winning_score: Option<u32>,
    pub countdown_remaining: Option<u32>,
    pub last_round: Option<RoundSummary>,
    pub winner: Option<MatchWinner>,
}
