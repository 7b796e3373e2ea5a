//! HTTP API request/response DTOs.

use serde::{Deserialize, Serialize};

/// `POST /api/signup` request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub solana_address: String,
}

/// Player representation returned by signup and `GET /api/user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: String,
    pub name: String,
    pub solana_address: String,
    pub clicks: u64,
    pub tickets: u64,
    /// RFC 3339 timestamp (JST)
    pub created_at: String,
}

/// `GET /api/user` query parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<String>,
}

/// `POST /api/click` request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickRequest {
    pub user_id: Option<String>,
}

/// `POST /api/click` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickResponse {
    pub success: bool,
    pub clicks: u64,
}

/// `POST /api/tickets/purchase` request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub user_id: Option<String>,
    pub quantity: u32,
}

/// `POST /api/tickets/purchase` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub success: bool,
    pub tickets: u64,
}

/// Game statistics returned by `GET /api/stats` and pushed in
/// `stats_update` events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatsDto {
    pub global_clicks: u64,
    pub prize_pool: f64,
    /// Unix millis of the next lottery draw
    pub next_draw_time: i64,
    pub online_users: usize,
}

/// Leaderboard entry returned by `GET /api/leaderboard` and pushed in
/// `leaderboard_update` events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    pub id: String,
    pub name: String,
    pub clicks: u64,
    pub tickets: u64,
    pub rank: u32,
}
