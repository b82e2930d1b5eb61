// Wire protocol DTOs and conversions for the referee's HTTP and WebSocket API.

use crate::domain::{
    FingerStates, LandmarkError, LandmarkSet, MatchSnapshot, Point, RoundSummary,
};
use serde::{Deserialize, Serialize};

/// One landmark as sent by the browser-side detector; extra fields such as `z` are ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LandmarkDto {
    pub x: f32,
    pub y: f32,
}

impl From<LandmarkDto> for Point {
    fn from(dto: LandmarkDto) -> Self {
        Point::new(dto.x, dto.y)
    }
}

/// Builds a landmark set, rejecting sequences that are not exactly one hand.
pub fn landmark_set(landmarks: Vec<LandmarkDto>) -> Result<LandmarkSet, LandmarkError> {
    let points: Vec<Point> = landmarks.into_iter().map(Point::from).collect();
    LandmarkSet::try_from(points)
}

/// Payload for the stateless classification endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyRequest {
    pub landmarks: Vec<LandmarkDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub gesture: &'static str,
    pub fingers: FingerStatesDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct FingerStatesDto {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl From<FingerStates> for FingerStatesDto {
    fn from(fingers: FingerStates) -> Self {
        Self {
            thumb: fingers.thumb,
            index: fingers.index,
            middle: fingers.middle,
            ring: fingers.ring,
            pinky: fingers.pinky,
        }
    }
}

/// Payload for starting a match; the server default applies when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub winning_score: Option<u32>,
}

/// A captured frame; `null` landmarks mean no hand was detected.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameRequest {
    #[serde(default)]
    pub landmarks: Option<Vec<LandmarkDto>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameResponse {
    pub gesture: &'static str,
    // Present only when the frame resolved a round.
    pub round: Option<RoundView>,
    pub state: MatchView,
}

/// Rendered summary of a resolved round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    pub round: u32,
    pub player_move: &'static str,
    pub computer_move: &'static str,
    pub outcome: &'static str,
    pub message: &'static str,
}

impl From<RoundSummary> for RoundView {
    fn from(summary: RoundSummary) -> Self {
        Self {
            round: summary.round,
            player_move: summary.player_move.as_str(),
            computer_move: summary.computer_move.as_str(),
            outcome: summary.outcome.as_str(),
            message: summary.outcome.message(),
        }
    }
}

/// Match state sent to clients for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct MatchView {
    pub phase: &'static str,
    pub player_score: u32,
    pub computer_score: u32,
    pub round_number: u32,
    pub winning_score: Option<u32>,
    pub countdown_remaining: Option<u32>,
    pub last_round: Option<RoundView>,
    pub winner: Option<&'static str>,
    pub final_message: Option<&'static str>,
}

impl From<MatchSnapshot> for MatchView {
    fn from(snapshot: MatchSnapshot) -> Self {
        Self {
            phase: snapshot.phase.as_str(),
            player_score: snapshot.player_score,
            computer_score: snapshot.computer_score,
            round_number: snapshot.round_number,
            winning_score: snapshot.winning_score,
            countdown_remaining: snapshot.countdown_remaining,
            last_round: snapshot.last_round.map(RoundView::from),
            winner: snapshot.winner.map(|winner| winner.as_str()),
            final_message: snapshot.winner.map(|winner| winner.message()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
