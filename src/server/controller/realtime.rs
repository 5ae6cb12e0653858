//! WebSocket endpoint for band room notifications.
//!
//! The token travels in the query string since browsers cannot set headers on a
//! WebSocket handshake. After the upgrade, the socket loop multiplexes client join and
//! leave messages with events from the [`RealtimeHub`](crate::server::service::realtime::RealtimeHub),
//! forwarding only events for rooms the socket joined and whose band the user still
//! belongs to.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;

use crate::{
    model::realtime::{ClientMessage, ServerMessage},
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::authenticate_token,
        service::realtime::{error_message, RealtimeService, Rooms},
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct RealtimeParams {
    #[serde(default)]
    pub token: Option<String>,
}

/// GET /api/realtime?token=<jwt> - Upgrade to the band room socket
///
/// The token is checked before the upgrade so an unauthenticated client gets a plain
/// 401 response instead of a socket.
///
/// # Returns
/// - `101 Switching Protocols` - Socket established
/// - `401 Unauthorized` - Missing, invalid or expired token
pub async fn connect(
    State(state): State<AppState>,
    Query(params): Query<RealtimeParams>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, AppError> {
    let token = params
        .token
        .filter(|t| !t.trim().is_empty())
        .ok_or(AuthError::MissingToken)?;

    let user = authenticate_token(&state.db, &state.jwt, token.trim()).await?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, user.id)))
}

async fn handle_socket(mut socket: WebSocket, state: AppState, user_id: i32) {
    tracing::info!("User {} connected to realtime", user_id);

    let mut events = state.realtime.subscribe();
    let mut rooms = Rooms::default();

    loop {
        tokio::select! {
            incoming = socket.recv() => {
                let Some(Ok(message)) = incoming else {
                    break;
                };

                let reply = match message {
                    Message::Text(text) => {
                        handle_client_message(&state, user_id, &mut rooms, text.as_str()).await
                    }
                    Message::Close(_) => break,
                    _ => continue,
                };

                if send(&mut socket, &reply).await.is_err() {
                    break;
                }
            }
            event = events.recv() => {
                match event {
                    Ok(event) if rooms.contains(event.band_id) => {
                        let admitted = RealtimeService::new(&state.db)
                            .admits(user_id, &mut rooms, event.band_id)
                            .await;

                        match admitted {
                            Ok(true) => {
                                if send(&mut socket, &event.into_message()).await.is_err() {
                                    break;
                                }
                            }
                            Ok(false) => {}
                            Err(e) => {
                                tracing::error!(
                                    "Failed to check room membership of user {}: {}",
                                    user_id,
                                    e
                                );
                            }
                        }
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "Realtime socket of user {} lagged, skipped {} events",
                            user_id,
                            skipped
                        );
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::info!(
        "User {} disconnected from realtime ({} rooms joined)",
        user_id,
        rooms.len()
    );
}

async fn handle_client_message(
    state: &AppState,
    user_id: i32,
    rooms: &mut Rooms,
    text: &str,
) -> ServerMessage {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(_) => return error_message(None, "Unrecognized message"),
    };

    match RealtimeService::new(&state.db)
        .handle(user_id, rooms, message)
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Failed to handle realtime message from {}: {}", user_id, e);
            error_message(None, "Internal server error")
        }
    }
}

async fn send(socket: &mut WebSocket, message: &ServerMessage) -> Result<(), axum::Error> {
    let text = match serde_json::to_string(message) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to serialize realtime message: {}", e);
            return Ok(());
        }
    };

    socket.send(Message::Text(text.into())).await
}
