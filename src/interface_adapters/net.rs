use crate::domain::MatchSnapshot;
use crate::interface_adapters::protocol::MatchView;
use crate::interface_adapters::state::AppState;

use axum::{
    extract::{
        State,
        ws::{Message, Utf8Bytes, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt, stream::SplitStream};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info};

#[derive(Debug)]
enum NetError {
    // Categorizes feed failures so the connection loop can log and stop.
    Ws(axum::Error),
    Serialization(serde_json::Error),
}

impl From<axum::Error> for NetError {
    fn from(e: axum::Error) -> Self {
        NetError::Ws(e)
    }
}

impl From<serde_json::Error> for NetError {
    fn from(e: serde_json::Error) -> Self {
        NetError::Serialization(e)
    }
}

// Upgrades to a WebSocket that pushes the match view on every change.
pub async fn match_events_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let updates = state.session.subscribe();
    ws.on_upgrade(move |socket| async move {
        info!("match feed connected");
        match stream_match_updates(socket, updates).await {
            Ok(()) => info!("match feed closed"),
            Err(NetError::Ws(e)) => debug!(error = %e, "match feed send failed"),
            Err(NetError::Serialization(e)) => error!(error = %e, "failed to serialize match view"),
        }
    })
}

/// Serializes a snapshot into the text frame sent to clients.
pub fn snapshot_text(snapshot: MatchSnapshot) -> Result<Utf8Bytes, serde_json::Error> {
    let txt = serde_json::to_string(&MatchView::from(snapshot))?;
    Ok(Utf8Bytes::from(txt))
}

async fn stream_match_updates(
    socket: WebSocket,
    mut updates: watch::Receiver<MatchSnapshot>,
) -> Result<(), NetError> {
    let (mut sender, mut receiver) = socket.split();

    loop {
        // Send the latest view first so new clients render immediately.
        let snapshot = updates.borrow_and_update().clone();
        sender.send(Message::Text(snapshot_text(snapshot)?)).await?;

        if !wait_for_change(&mut updates, &mut receiver).await {
            return Ok(());
        }
    }
}

// Returns false once either the client or the session has gone away.
async fn wait_for_change(
    updates: &mut watch::Receiver<MatchSnapshot>,
    receiver: &mut SplitStream<WebSocket>,
) -> bool {
    loop {
        tokio::select! {
            changed = updates.changed() => return changed.is_ok(),
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => return false,
                // The feed is one-way; client frames are ignored.
                Some(Ok(_)) => continue,
            },
        }
    }
}
