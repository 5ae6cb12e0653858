//! Messages exchanged over the realtime band-room socket.

use serde::{Deserialize, Serialize};

/// Message sent by a client over the socket.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientMessage {
    JoinBand {
        #[serde(rename = "bandId")]
        band_id: i32,
    },
    LeaveBand {
        #[serde(rename = "bandId")]
        band_id: i32,
    },
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RealtimeEvent {
    RehearsalCreated,
    RehearsalUpdated,
    RehearsalDeleted,
    AttendanceUpdated,
    RehearsalReminder,
    SetlistUpdated,
    MemberAdded,
    MemberRemoved,
    MemberUpdated,
    JoinedBand,
    LeftBand,
    Error,
}

/// Message pushed by the server: `{"event":..,"bandId":..,"payload":..}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerMessage {
    pub event: RealtimeEvent,
    pub band_id: Option<i32>,
    pub payload: serde_json::Value,
}
