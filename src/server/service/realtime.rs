//! Band rooms for realtime notifications.
//!
//! Every band has a room keyed by its id. Handlers publish [`BandEvent`]s to the
//! [`RealtimeHub`]; each connected socket subscribes to the hub and forwards only the
//! events of the rooms it joined.

use std::collections::HashSet;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::{
    model::realtime::{ClientMessage, RealtimeEvent, ServerMessage},
    server::{data::band_member::BandMemberRepository, error::AppError},
};

const CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct BandEvent {
    pub band_id: i32,
    pub event: RealtimeEvent,
    pub payload: serde_json::Value,
}

impl BandEvent {
    pub fn into_message(self) -> ServerMessage {
        ServerMessage {
            event: self.event,
            band_id: Some(self.band_id),
            payload: self.payload,
        }
    }
}

/// Fan-out point for band room events. Cheap to clone; all clones share one channel.
#[derive(Clone)]
pub struct RealtimeHub {
    sender: broadcast::Sender<BandEvent>,
}

impl Default for RealtimeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl RealtimeHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Pushes an event to everyone in the band's room.
    ///
    /// Publishing with nobody connected is not an error.
    pub fn publish<T: Serialize>(&self, band_id: i32, event: RealtimeEvent, payload: &T) {
        let payload = match serde_json::to_value(payload) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to serialize {:?} payload: {}", event, e);
                return;
            }
        };

        let _ = self.sender.send(BandEvent {
            band_id,
            event,
            payload,
        });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BandEvent> {
        self.sender.subscribe()
    }
}

/// Rooms joined by a single socket.
#[derive(Debug, Default)]
pub struct Rooms {
    joined: HashSet<i32>,
}

impl Rooms {
    pub fn contains(&self, band_id: i32) -> bool {
        self.joined.contains(&band_id)
    }

    pub fn len(&self) -> usize {
        self.joined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }
}

/// Handles join and leave requests from a connected user.
pub struct RealtimeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RealtimeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a client message to the socket's rooms and builds the reply.
    ///
    /// Joining requires membership of the band; a refused join is answered with an
    /// `error` event rather than closing the socket.
    pub async fn handle(
        &self,
        user_id: i32,
        rooms: &mut Rooms,
        message: ClientMessage,
    ) -> Result<ServerMessage, AppError> {
        match message {
            ClientMessage::JoinBand { band_id } => {
                let role = BandMemberRepository::new(self.db)
                    .get_role(band_id, user_id)
                    .await?;

                if role.is_none() {
                    tracing::debug!(
                        "User {} tried to join room of band {} without membership",
                        user_id,
                        band_id
                    );
                    return Ok(error_message(
                        Some(band_id),
                        "You are not a member of this band",
                    ));
                }

                rooms.joined.insert(band_id);
                tracing::debug!("User {} joined room of band {}", user_id, band_id);

                Ok(ServerMessage {
                    event: RealtimeEvent::JoinedBand,
                    band_id: Some(band_id),
                    payload: serde_json::Value::Null,
                })
            }
            ClientMessage::LeaveBand { band_id } => {
                rooms.joined.remove(&band_id);
                tracing::debug!("User {} left room of band {}", user_id, band_id);

                Ok(ServerMessage {
                    event: RealtimeEvent::LeftBand,
                    band_id: Some(band_id),
                    payload: serde_json::Value::Null,
                })
            }
        }
    }

    /// Whether an event of `band_id` may still be forwarded to this socket.
    ///
    /// Membership is re-checked on every event. A user removed from the band, or whose
    /// band was deleted, loses the room here.
    pub async fn admits(
        &self,
        user_id: i32,
        rooms: &mut Rooms,
        band_id: i32,
    ) -> Result<bool, AppError> {
        if !rooms.contains(band_id) {
            return Ok(false);
        }

        let role = BandMemberRepository::new(self.db)
            .get_role(band_id, user_id)
            .await?;

        if role.is_none() {
            rooms.joined.remove(&band_id);
            tracing::debug!(
                "User {} evicted from room of band {} after losing membership",
                user_id,
                band_id
            );
            return Ok(false);
        }

        Ok(true)
    }
}

pub fn error_message(band_id: Option<i32>, message: &str) -> ServerMessage {
    ServerMessage {
        event: RealtimeEvent::Error,
        band_id,
        payload: serde_json::json!({ "message": message }),
    }
}
