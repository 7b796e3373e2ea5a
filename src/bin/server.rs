//! Real-time multiplayer clicker game server.
//!
//! Players register, click, spend clicks on lottery tickets, and watch a
//! live leaderboard. State changes are pushed to all connected clients
//! over WebSocket.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;

use pochi::{
    common::{logger::setup_logger, rng::ThreadPrizeRng, time::SystemClock},
    infrastructure::{
        pusher::WebSocketEventPusher,
        repository::{InMemoryGameStateStore, InMemoryPlayerStore},
    },
    ui::{Server, state::AppState},
    usecase::{
        BroadcastUpdatesUseCase, ClickUseCase, ConnectPlayerUseCase, DisconnectPlayerUseCase,
        GetLeaderboardUseCase, GetPlayerUseCase, GetStatsUseCase, PurchaseTicketsUseCase,
        SignupUseCase,
    },
};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Real-time multiplayer clicker game server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Default log level (overridden by RUST_LOG)
    #[arg(short = 'l', long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Initialize dependencies in order:
    // 1. Clock + RNG
    // 2. Repositories (in-memory database)
    // 3. EventPusher (WebSocket implementation)
    // 4. UseCases
    // 5. AppState
    // 6. Server

    // 1. Clock and prize RNG
    let clock = Arc::new(SystemClock);
    let prize_rng = Arc::new(ThreadPrizeRng);

    // 2. Repositories (in-memory database)
    let players = Arc::new(InMemoryPlayerStore::new(clock.clone()));
    let game_state = Arc::new(InMemoryGameStateStore::new(clock.as_ref()));
    tracing::info!("In-memory game state initialized, next draw in 24h");

    // 3. EventPusher (WebSocket implementation)
    let pusher = Arc::new(WebSocketEventPusher::new());

    // 4. UseCases
    let signup_usecase = Arc::new(SignupUseCase::new(players.clone()));
    let get_player_usecase = Arc::new(GetPlayerUseCase::new(players.clone()));
    let click_usecase = Arc::new(ClickUseCase::new(players.clone(), game_state.clone()));
    let purchase_tickets_usecase = Arc::new(PurchaseTicketsUseCase::new(
        players.clone(),
        game_state.clone(),
        prize_rng,
    ));
    let connect_player_usecase = Arc::new(ConnectPlayerUseCase::new(
        players.clone(),
        game_state.clone(),
        pusher.clone(),
    ));
    let disconnect_player_usecase = Arc::new(DisconnectPlayerUseCase::new(
        game_state.clone(),
        pusher.clone(),
    ));
    let get_stats_usecase = Arc::new(GetStatsUseCase::new(game_state.clone()));
    let get_leaderboard_usecase = Arc::new(GetLeaderboardUseCase::new(players.clone()));
    let broadcast_updates_usecase = Arc::new(BroadcastUpdatesUseCase::new(pusher.clone()));

    // 5. AppState
    let app_state = Arc::new(AppState {
        signup_usecase,
        get_player_usecase,
        click_usecase,
        purchase_tickets_usecase,
        connect_player_usecase,
        disconnect_player_usecase,
        get_stats_usecase,
        get_leaderboard_usecase,
        broadcast_updates_usecase,
    });

    // 6. Create and run the server
    let server = Server::new(app_state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
