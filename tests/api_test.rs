//! Integration tests for the HTTP API endpoints.
//!
//! Tests drive Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic, routing, status
//! codes and the JSON wire format without needing a live network
//! connection.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use pochi::common::rng::FixedPrizeRng;
use pochi::common::time::FixedClock;
use pochi::infrastructure::pusher::WebSocketEventPusher;
use pochi::infrastructure::repository::{InMemoryGameStateStore, InMemoryPlayerStore};
use pochi::ui::{build_router, state::AppState};
use pochi::usecase::{
    BroadcastUpdatesUseCase, ClickUseCase, ConnectPlayerUseCase, DisconnectPlayerUseCase,
    GetLeaderboardUseCase, GetPlayerUseCase, GetStatsUseCase, PurchaseTicketsUseCase,
    SignupUseCase,
};

const TEST_EPOCH_MILLIS: i64 = 1_700_000_000_000;

fn make_test_router() -> Router {
    let clock = Arc::new(FixedClock::new(TEST_EPOCH_MILLIS));
    let players = Arc::new(InMemoryPlayerStore::new(clock.clone()));
    let game_state = Arc::new(InMemoryGameStateStore::new(clock.as_ref()));
    let pusher = Arc::new(WebSocketEventPusher::new());
    let prize_rng = Arc::new(FixedPrizeRng::new(0.05));

    let state = Arc::new(AppState {
        signup_usecase: Arc::new(SignupUseCase::new(players.clone())),
        get_player_usecase: Arc::new(GetPlayerUseCase::new(players.clone())),
        click_usecase: Arc::new(ClickUseCase::new(players.clone(), game_state.clone())),
        purchase_tickets_usecase: Arc::new(PurchaseTicketsUseCase::new(
            players.clone(),
            game_state.clone(),
            prize_rng,
        )),
        connect_player_usecase: Arc::new(ConnectPlayerUseCase::new(
            players.clone(),
            game_state.clone(),
            pusher.clone(),
        )),
        disconnect_player_usecase: Arc::new(DisconnectPlayerUseCase::new(
            game_state.clone(),
            pusher.clone(),
        )),
        get_stats_usecase: Arc::new(GetStatsUseCase::new(game_state.clone())),
        get_leaderboard_usecase: Arc::new(GetLeaderboardUseCase::new(players)),
        broadcast_updates_usecase: Arc::new(BroadcastUpdatesUseCase::new(pusher)),
    });

    build_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn signup(router: &Router, name: &str, wallet: &str) -> Value {
    let response = router
        .clone()
        .oneshot(post_json(
            "/api/signup",
            json!({"name": name, "solanaAddress": wallet}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

async fn click(router: &Router, user_id: &str) -> Value {
    let response = router
        .clone()
        .oneshot(post_json("/api/click", json!({"userId": user_id})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

#[tokio::test]
async fn test_health_check() {
    let router = make_test_router();

    let response = router
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_signup_returns_zero_initialized_player() {
    let router = make_test_router();

    let player = signup(&router, "alice", &"A".repeat(40)).await;

    assert_eq!(player["name"], "alice");
    assert_eq!(player["solanaAddress"], "A".repeat(40));
    assert_eq!(player["clicks"], 0);
    assert_eq!(player["tickets"], 0);
    assert!(player["id"].as_str().is_some());
    assert!(player["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn test_signup_duplicate_wallet_returns_409() {
    let router = make_test_router();
    let wallet = "B".repeat(40);
    signup(&router, "alice", &wallet).await;

    let response = router
        .oneshot(post_json(
            "/api/signup",
            json!({"name": "bob", "solanaAddress": wallet}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["message"], "Solana address already registered");
}

#[tokio::test]
async fn test_signup_invalid_input_returns_400() {
    let router = make_test_router();

    // Empty name
    let response = router
        .clone()
        .oneshot(post_json(
            "/api/signup",
            json!({"name": "", "solanaAddress": "C".repeat(40)}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Wallet address too short
    let response = router
        .oneshot(post_json(
            "/api/signup",
            json!({"name": "alice", "solanaAddress": "too-short"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user_requires_and_validates_id() {
    let router = make_test_router();

    // Missing userId
    let response = router
        .clone()
        .oneshot(Request::get("/api/user").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Unknown userId
    let response = router
        .clone()
        .oneshot(
            Request::get("/api/user?userId=00000000-0000-4000-8000-000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Known userId
    let player = signup(&router, "alice", &"D".repeat(40)).await;
    let id = player["id"].as_str().unwrap();
    let response = router
        .oneshot(
            Request::get(&format!("/api/user?userId={id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], id);
}

#[tokio::test]
async fn test_click_increments_player_and_global_stats() {
    // Scenario: player registers and clicks 10 times; stats show the
    // global counter incremented by 10 and the player record shows 10.
    let router = make_test_router();
    let player = signup(&router, "alice", &"E".repeat(40)).await;
    let id = player["id"].as_str().unwrap().to_string();

    let mut last = json!(null);
    for _ in 0..10 {
        last = click(&router, &id).await;
    }
    assert_eq!(last["success"], true);
    assert_eq!(last["clicks"], 10);

    let response = router
        .clone()
        .oneshot(Request::get("/api/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_to_json(response.into_body()).await;
    assert_eq!(stats["globalClicks"], 10);
    assert_eq!(stats["onlineUsers"], 0);
    assert_eq!(
        stats["nextDrawTime"],
        TEST_EPOCH_MILLIS + 24 * 60 * 60 * 1000
    );

    let response = router
        .oneshot(
            Request::get(&format!("/api/user?userId={id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let user = body_to_json(response.into_body()).await;
    assert_eq!(user["clicks"], 10);
}

#[tokio::test]
async fn test_click_error_statuses() {
    let router = make_test_router();

    // Missing userId
    let response = router
        .clone()
        .oneshot(post_json("/api/click", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Unknown userId
    let response = router
        .oneshot(post_json(
            "/api/click",
            json!({"userId": "00000000-0000-4000-8000-000000000000"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_purchase_insufficient_clicks_returns_402_and_changes_nothing() {
    // Scenario: player with 500 clicks requests 1 ticket (cost 1000).
    let router = make_test_router();
    let player = signup(&router, "bob", &"F".repeat(40)).await;
    let id = player["id"].as_str().unwrap().to_string();
    for _ in 0..500 {
        click(&router, &id).await;
    }

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/tickets/purchase",
            json!({"userId": id, "quantity": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);

    let response = router
        .oneshot(
            Request::get(&format!("/api/user?userId={id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let user = body_to_json(response.into_body()).await;
    assert_eq!(user["clicks"], 500);
    assert_eq!(user["tickets"], 0);
}

#[tokio::test]
async fn test_purchase_success_spends_clicks_and_grows_prize_pool() {
    // Scenario: player with 2000 clicks buys 2 tickets.
    let router = make_test_router();
    let player = signup(&router, "charlie", &"G".repeat(40)).await;
    let id = player["id"].as_str().unwrap().to_string();
    for _ in 0..2000 {
        click(&router, &id).await;
    }

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/tickets/purchase",
            json!({"userId": id, "quantity": 2}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["tickets"], 2);

    let response = router
        .clone()
        .oneshot(
            Request::get(&format!("/api/user?userId={id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let user = body_to_json(response.into_body()).await;
    assert_eq!(user["clicks"], 0);
    assert_eq!(user["tickets"], 2);

    // Prize pool grew from its initial 0.05 by an amount in [0.01, 0.11)
    let response = router
        .oneshot(Request::get("/api/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let stats = body_to_json(response.into_body()).await;
    let growth = stats["prizePool"].as_f64().unwrap() - 0.05;
    assert!((0.01..0.11).contains(&growth));
}

#[tokio::test]
async fn test_purchase_invalid_quantity_returns_400() {
    let router = make_test_router();
    let player = signup(&router, "dave", &"H".repeat(40)).await;
    let id = player["id"].as_str().unwrap().to_string();

    for quantity in [0, 101] {
        let response = router
            .clone()
            .oneshot(post_json(
                "/api/tickets/purchase",
                json!({"userId": id, "quantity": quantity}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_leaderboard_orders_players_and_breaks_ties_by_registration() {
    let router = make_test_router();

    // alice and charlie tie on 2 clicks; alice registered first
    let alice = signup(&router, "alice", &"I".repeat(40)).await;
    let bob = signup(&router, "bob", &"J".repeat(40)).await;
    let charlie = signup(&router, "charlie", &"K".repeat(40)).await;
    let alice_id = alice["id"].as_str().unwrap().to_string();
    let bob_id = bob["id"].as_str().unwrap().to_string();
    let charlie_id = charlie["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        click(&router, &alice_id).await;
        click(&router, &charlie_id).await;
    }
    for _ in 0..5 {
        click(&router, &bob_id).await;
    }

    let response = router
        .oneshot(Request::get("/api/leaderboard").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let leaderboard = body_to_json(response.into_body()).await;
    let entries = leaderboard.as_array().unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["name"], "bob");
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[1]["name"], "alice");
    assert_eq!(entries[1]["rank"], 2);
    assert_eq!(entries[2]["name"], "charlie");
    assert_eq!(entries[2]["rank"], 3);
}
