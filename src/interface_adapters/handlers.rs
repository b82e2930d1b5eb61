use crate::domain::{LandmarkError, RefereeError, classify, finger_states};
use crate::interface_adapters::protocol::{
    ClassifyRequest, ClassifyResponse, ErrorResponse, FrameRequest, FrameResponse,
    HealthResponse, MatchView, RoundView, StartRequest, landmark_set,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::FrameVerdict;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, warn};

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Stateless gesture reading for a single frame.
pub async fn classify_frame(
    Json(payload): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let landmarks = landmark_set(payload.landmarks).map_err(map_landmark_error)?;
    let gesture = classify(&landmarks);
    debug!(gesture = gesture.as_str(), "frame classified");

    Ok(Json(ClassifyResponse {
        gesture: gesture.as_str(),
        fingers: finger_states(&landmarks).into(),
    }))
}

pub async fn get_match(State(state): State<Arc<AppState>>) -> Json<MatchView> {
    Json(state.session.snapshot().await.into())
}

pub async fn start_match(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<StartRequest>,
) -> Result<Json<MatchView>, ApiError> {
    let winning_score = payload
        .winning_score
        .unwrap_or(state.default_winning_score);

    let snapshot = state
        .session
        .start(winning_score)
        .await
        .map_err(map_referee_error)?;

    Ok(Json(snapshot.into()))
}

// Applies one captured frame to the running round.
pub async fn submit_frame(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FrameRequest>,
) -> Result<Json<FrameResponse>, ApiError> {
    let landmarks = payload
        .landmarks
        .map(landmark_set)
        .transpose()
        .map_err(map_landmark_error)?;

    let (verdict, snapshot) = state
        .session
        .submit_frame(landmarks)
        .await
        .map_err(map_referee_error)?;

    let round = match verdict {
        FrameVerdict::Resolved(summary) => Some(RoundView::from(summary)),
        FrameVerdict::Unrecognized => None,
    };

    Ok(Json(FrameResponse {
        gesture: verdict.gesture().as_str(),
        round,
        state: snapshot.into(),
    }))
}

pub async fn advance_match(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MatchView>, ApiError> {
    let snapshot = state.session.advance().await.map_err(map_referee_error)?;
    Ok(Json(snapshot.into()))
}

pub async fn reset_match(State(state): State<Arc<AppState>>) -> Json<MatchView> {
    Json(state.session.reset().await.into())
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: String) -> ApiError {
    (status, Json(ErrorResponse { message }))
}

fn map_referee_error(err: RefereeError) -> ApiError {
    match err {
        RefereeError::Rejected { .. } => error_response(StatusCode::CONFLICT, err.to_string()),
        RefereeError::InvalidWinningScore => {
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
    }
}

fn map_landmark_error(err: LandmarkError) -> ApiError {
    warn!(error = %err, "malformed landmark set");
    error_response(StatusCode::BAD_REQUEST, err.to_string())
}
