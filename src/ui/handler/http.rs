//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};

use crate::domain::{PlayerName, TicketQuantity, UserId, WalletAddress};
use crate::infrastructure::dto::http::{
    ClickRequest, ClickResponse, GameStatsDto, LeaderboardEntryDto, PlayerDto, PurchaseRequest,
    PurchaseResponse, SignupRequest, UserQuery,
};

use super::super::error::ApiError;
use super::super::push::{self, LEADERBOARD_LIMIT};
use super::super::state::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /api/signup` — register a new player
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<PlayerDto>, ApiError> {
    // Validate request fields into domain models
    let name = PlayerName::new(request.name)?;
    let wallet_address = WalletAddress::new(request.solana_address)?;

    let player = state.signup_usecase.execute(name, wallet_address).await?;

    Ok(Json(PlayerDto::from(player)))
}

/// `GET /api/user?userId=ID` — fetch a player record
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<PlayerDto>, ApiError> {
    let user_id = parse_user_id(query.user_id)?;

    let player = state.get_player_usecase.execute(&user_id).await?;

    Ok(Json(PlayerDto::from(player)))
}

/// `POST /api/click` — increment the player's click counter
pub async fn click(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ClickRequest>,
) -> Result<Json<ClickResponse>, ApiError> {
    let user_id = parse_user_id(request.user_id)?;

    let outcome = state.click_usecase.execute(&user_id).await?;

    // Fan-out happens after the mutation, outside any store lock
    if let Some(milestone) = outcome.milestone {
        push::push_milestone(&state, &user_id, milestone).await;
    }
    push::push_stats_update(&state).await;
    push::push_leaderboard_update(&state).await;

    Ok(Json(ClickResponse {
        success: true,
        clicks: outcome.clicks,
    }))
}

/// `POST /api/tickets/purchase` — spend clicks on lottery tickets
pub async fn purchase_tickets(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, ApiError> {
    let quantity = TicketQuantity::new(request.quantity)?;
    let user_id = parse_user_id(request.user_id)?;

    let player = state
        .purchase_tickets_usecase
        .execute(&user_id, quantity)
        .await?;

    push::push_stats_update(&state).await;
    push::push_leaderboard_update(&state).await;

    Ok(Json(PurchaseResponse {
        success: true,
        tickets: player.tickets,
    }))
}

/// `GET /api/leaderboard` — current top players
pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<LeaderboardEntryDto>> {
    let leaderboard = state.get_leaderboard_usecase.execute(LEADERBOARD_LIMIT).await;

    Json(
        leaderboard
            .into_iter()
            .map(LeaderboardEntryDto::from)
            .collect(),
    )
}

/// `GET /api/stats` — current game statistics snapshot
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<GameStatsDto> {
    let stats = state.get_stats_usecase.execute().await;
    Json(GameStatsDto::from(stats))
}

/// Parse an optional user id string from a request.
///
/// A missing id is an authentication-style failure (401); a present but
/// malformed id can never match a registered player, so it surfaces as
/// not-found (404), matching the lookup semantics.
fn parse_user_id(user_id: Option<String>) -> Result<UserId, ApiError> {
    let raw = user_id.ok_or(ApiError::MissingUserId)?;
    raw.parse().map_err(|_| ApiError::NotFound)
}
