//! WebSocket connection handlers.
//!
//! A connection starts unregistered. It becomes joined when the client
//! sends `{"type":"join","userId":...}` and returns to unregistered on
//! close or transport error. Re-joining with a different id replaces
//! the prior registration without an explicit leave.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::domain::{ConnectionToken, UserId};
use crate::infrastructure::dto::websocket::{JoinMessage, MessageType};
use crate::usecase::ConnectError;

use super::super::push;
use super::super::state::AppState;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them
/// to the WebSocket sender.
///
/// This function handles the outbound event flow: broadcasts and unicasts
/// enqueued by the EventPusher (via the rx channel) are sent to this
/// client's WebSocket connection.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this client to receive events. The sender half
    // is handed to the EventPusher on join; until then nothing is pushed.
    let (tx, rx) = mpsc::unbounded_channel();
    let send_task = pusher_loop(rx, sender);

    // Identity this connection has joined as, with the registration token
    // used to resolve disconnects against concurrent re-registrations
    let mut session: Option<(UserId, ConnectionToken)> = None;

    while let Some(msg) = receiver.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                tracing::error!("WebSocket error: {}", e);
                break;
            }
        };

        match msg {
            Message::Text(text) => {
                handle_text_message(&state, &text, &tx, &mut session).await;
            }
            Message::Ping(_) => {
                tracing::debug!("Received ping");
                // Ping/pong is handled automatically by the WebSocket protocol
            }
            Message::Close(_) => {
                tracing::info!("Client requested close");
                break;
            }
            _ => {}
        }
    }

    send_task.abort();

    // Unregister asynchronously-detected disconnects. A stale close (this
    // connection was already replaced by a newer join for the same player)
    // is a no-op and must not broadcast anything.
    if let Some((user_id, token)) = session {
        if state
            .disconnect_player_usecase
            .execute(&user_id, token)
            .await
        {
            tracing::info!("Player '{}' disconnected and removed from registry", user_id);
            push::push_stats_update(&state).await;
        } else {
            tracing::debug!("Stale connection for player '{}' closed", user_id);
        }
    }
}

/// Handle one inbound text frame (only `join` messages are meaningful).
async fn handle_text_message(
    state: &Arc<AppState>,
    text: &str,
    tx: &mpsc::UnboundedSender<String>,
    session: &mut Option<(UserId, ConnectionToken)>,
) {
    let join = match serde_json::from_str::<JoinMessage>(text) {
        Ok(msg) if msg.r#type == MessageType::Join => msg,
        Ok(_) => {
            tracing::debug!("Ignoring non-join message");
            return;
        }
        Err(e) => {
            tracing::warn!("Failed to parse message as JSON: {}", e);
            return;
        }
    };

    let user_id: UserId = match join.user_id.parse() {
        Ok(id) => id,
        Err(_) => {
            tracing::warn!("Invalid userId in join message: '{}'", join.user_id);
            return;
        }
    };

    // Re-joining with a different id replaces the prior registration
    if let Some((current_id, token)) = *session {
        if current_id == user_id {
            tracing::debug!("Player '{}' re-sent join, ignoring", user_id);
            return;
        }
        if state
            .disconnect_player_usecase
            .execute(&current_id, token)
            .await
        {
            tracing::info!("Connection switched identity from '{}'", current_id);
            // The old player left; broadcast this even if the new join
            // below turns out to be invalid
            push::push_stats_update(state).await;
        }
        *session = None;
    }

    match state
        .connect_player_usecase
        .execute(user_id, tx.clone())
        .await
    {
        Ok(token) => {
            tracing::info!("Player '{}' joined", user_id);
            *session = Some((user_id, token));
            push::push_stats_update(state).await;
        }
        Err(ConnectError::PlayerNotFound(_)) => {
            tracing::warn!("Join rejected, unknown player '{}'", user_id);
        }
    }
}
