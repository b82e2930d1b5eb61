use crate::interface_adapters::handlers::{
    advance_match, classify_frame, get_match, health, reset_match, start_match, submit_frame,
};
use crate::interface_adapters::net::match_events_handler;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

// Build the HTTP router for the referee API.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/classify", post(classify_frame))
        .route("/match", get(get_match))
        .route("/match/start", post(start_match))
        .route("/match/frame", post(submit_frame))
        .route("/match/advance", post(advance_match))
        .route("/match/reset", post(reset_match))
        .route("/match/events", get(match_events_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::fixtures::hand;
    use crate::domain::{LandmarkSet, Move};
    use crate::use_cases::test_support::{ManualClock, ScriptedMoves};
    use crate::use_cases::{MatchSession, RefereeSettings};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    fn build_test_app(computer: &[Move]) -> (Router, ManualClock) {
        let clock = ManualClock::new();
        let session = MatchSession::new(
            Box::new(ScriptedMoves::new(computer)),
            Arc::new(clock.clone()),
            RefereeSettings::default(),
        );
        let state = Arc::new(AppState {
            session: Arc::new(session),
            default_winning_score: 3,
        });

        (app(state), clock)
    }

    fn landmarks_json(landmarks: &LandmarkSet) -> Value {
        Value::Array(
            landmarks
                .points()
                .iter()
                .map(|point| json!({ "x": point.x, "y": point.y, "z": 0.0 }))
                .collect(),
        )
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("expected request to build")
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .expect("expected request to build")
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        let payload: Value = serde_json::from_slice(&body).expect("expected json body");
        (status, payload)
    }

    #[tokio::test]
    async fn when_health_is_requested_then_returns_ok() {
        let (app, _) = build_test_app(&[]);

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("expected request to build");
        let (status, payload) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn when_classifying_scissors_landmarks_then_returns_scissors_and_finger_states() {
        let (app, _) = build_test_app(&[]);
        let landmarks = landmarks_json(&hand(false, true, true, false, false));

        let (status, payload) =
            send(&app, post_json("/classify", json!({ "landmarks": landmarks }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["gesture"], "Scissors");
        assert_eq!(payload["fingers"]["index"], true);
        assert_eq!(payload["fingers"]["ring"], false);
        assert_eq!(payload["fingers"]["thumb"], false);
    }

    #[tokio::test]
    async fn when_landmark_count_is_wrong_then_returns_400_and_error_message() {
        let (app, _) = build_test_app(&[]);
        let landmarks: Vec<Value> = (0..20).map(|_| json!({ "x": 0.5, "y": 0.5 })).collect();

        let (status, payload) =
            send(&app, post_json("/classify", json!({ "landmarks": landmarks }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["message"], "expected 21 landmarks, got 20");
    }

    #[tokio::test]
    async fn when_match_is_new_then_view_shows_menu() {
        let (app, _) = build_test_app(&[]);

        let request = Request::builder()
            .uri("/match")
            .body(Body::empty())
            .expect("expected request to build");
        let (status, payload) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["phase"], "menu");
        assert_eq!(payload["round_number"], 1);
        assert_eq!(payload["winning_score"], Value::Null);
    }

    #[tokio::test]
    async fn when_advance_is_sent_in_menu_then_returns_409_and_error_message() {
        let (app, _) = build_test_app(&[]);

        let (status, payload) = send(&app, post_empty("/match/advance")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(payload["message"], "advance is not allowed during menu");
    }

    #[tokio::test]
    async fn when_start_names_zero_winning_score_then_returns_400() {
        let (app, _) = build_test_app(&[]);

        let (status, payload) =
            send(&app, post_json("/match/start", json!({ "winning_score": 0 }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["message"], "winning_score must be positive");
    }

    #[tokio::test]
    async fn when_start_omits_winning_score_then_server_default_applies() {
        let (app, _) = build_test_app(&[]);

        let (status, payload) = send(&app, post_json("/match/start", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["phase"], "countdown");
        assert_eq!(payload["winning_score"], 3);
        assert_eq!(payload["countdown_remaining"], 3);
    }

    #[tokio::test]
    async fn when_frame_is_sent_during_countdown_then_returns_409() {
        let (app, _) = build_test_app(&[]);
        send(&app, post_json("/match/start", json!({}))).await;

        let (status, payload) =
            send(&app, post_json("/match/frame", json!({ "landmarks": null }))).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(payload["message"], "submit_frame is not allowed during countdown");
    }

    #[tokio::test]
    async fn when_match_is_played_to_the_end_then_views_follow_each_phase() {
        let (app, clock) = build_test_app(&[Move::Scissors, Move::Rock]);
        send(&app, post_json("/match/start", json!({ "winning_score": 2 }))).await;
        clock.advance(Duration::from_secs(3));

        // No hand in frame: nothing changes.
        let (status, payload) =
            send(&app, post_json("/match/frame", json!({ "landmarks": null }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["gesture"], "Unknown");
        assert_eq!(payload["round"], Value::Null);
        assert_eq!(payload["state"]["phase"], "playing");
        assert_eq!(payload["state"]["round_number"], 1);

        let rock = landmarks_json(&hand(false, false, false, false, false));
        let (status, payload) =
            send(&app, post_json("/match/frame", json!({ "landmarks": rock }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["gesture"], "Rock");
        assert_eq!(payload["round"]["computer_move"], "Scissors");
        assert_eq!(payload["round"]["outcome"], "player_win");
        assert_eq!(payload["state"]["phase"], "round_resolved");
        assert_eq!(payload["state"]["player_score"], 1);

        let (status, payload) = send(&app, post_empty("/match/advance")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["phase"], "countdown");
        assert_eq!(payload["last_round"], Value::Null);
        clock.advance(Duration::from_secs(3));

        let paper = landmarks_json(&hand(true, true, true, true, true));
        let (status, payload) =
            send(&app, post_json("/match/frame", json!({ "landmarks": paper }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["round"]["outcome"], "player_win");
        assert_eq!(payload["state"]["phase"], "game_over");
        assert_eq!(payload["state"]["winner"], "player");
        assert_eq!(
            payload["state"]["final_message"],
            "Congratulations, You Won the Game!"
        );

        let (status, payload) = send(&app, post_empty("/match/reset")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["phase"], "menu");
        assert_eq!(payload["player_score"], 0);
        assert_eq!(payload["round_number"], 1);
    }

    #[tokio::test]
    async fn when_start_route_is_called_with_get_then_returns_405() {
        let (app, _) = build_test_app(&[]);

        let request = Request::builder()
            .method("GET")
            .uri("/match/start")
            .body(Body::empty())
            .expect("expected request to build");
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
