//! WebSocket message DTOs.

use serde::{Deserialize, Serialize};

use super::http::{GameStatsDto, LeaderboardEntryDto};

/// Message type discriminator for WebSocket payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Inbound: a connection claims a player identity
    Join,
    /// Outbound: global stats changed
    StatsUpdate,
    /// Outbound: leaderboard changed
    LeaderboardUpdate,
    /// Outbound (unicast): the player crossed a click milestone
    Milestone,
}

/// Inbound `{"type":"join","userId":...}` message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinMessage {
    pub r#type: MessageType,
    pub user_id: String,
}

/// Outbound `stats_update` broadcast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsUpdateMessage {
    pub r#type: MessageType,
    pub data: GameStatsDto,
}

/// Outbound `leaderboard_update` broadcast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardUpdateMessage {
    pub r#type: MessageType,
    pub data: Vec<LeaderboardEntryDto>,
}

/// Outbound `milestone` unicast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneMessage {
    pub r#type: MessageType,
    pub clicks: u64,
}
