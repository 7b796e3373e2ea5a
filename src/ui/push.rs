//! Helpers that build, serialize and push WebSocket events.
//!
//! Mutation handlers call these after the state change has been applied
//! and every lock has been released, so slow or stalled connections can
//! never stall a click or purchase.

use crate::infrastructure::dto::http::{GameStatsDto, LeaderboardEntryDto};
use crate::infrastructure::dto::websocket::{
    LeaderboardUpdateMessage, MessageType, MilestoneMessage, StatsUpdateMessage,
};

use super::state::AppState;
use crate::domain::UserId;

/// Number of entries included in `leaderboard_update` broadcasts and
/// `GET /api/leaderboard` responses.
pub const LEADERBOARD_LIMIT: usize = 20;

/// Broadcast a `stats_update` event to every connected client.
pub async fn push_stats_update(state: &AppState) {
    let stats = state.get_stats_usecase.execute().await;
    let message = StatsUpdateMessage {
        r#type: MessageType::StatsUpdate,
        data: GameStatsDto::from(stats),
    };

    let json = serde_json::to_string(&message).unwrap();
    state.broadcast_updates_usecase.broadcast(&json).await;
}

/// Broadcast a `leaderboard_update` event to every connected client.
pub async fn push_leaderboard_update(state: &AppState) {
    let leaderboard = state.get_leaderboard_usecase.execute(LEADERBOARD_LIMIT).await;
    let message = LeaderboardUpdateMessage {
        r#type: MessageType::LeaderboardUpdate,
        data: leaderboard
            .into_iter()
            .map(LeaderboardEntryDto::from)
            .collect(),
    };

    let json = serde_json::to_string(&message).unwrap();
    state.broadcast_updates_usecase.broadcast(&json).await;
}

/// Send a `milestone` event to the clicking player only.
///
/// Silently does nothing if the player has no live connection.
pub async fn push_milestone(state: &AppState, user_id: &UserId, clicks: u64) {
    let message = MilestoneMessage {
        r#type: MessageType::Milestone,
        clicks,
    };

    let json = serde_json::to_string(&message).unwrap();
    if state
        .broadcast_updates_usecase
        .notify_player(user_id, &json)
        .await
    {
        tracing::info!("Sent milestone {} to player '{}'", clicks, user_id);
    }
}
