//! Server state shared across handlers.

use std::sync::Arc;

use crate::usecase::{
    BroadcastUpdatesUseCase, ClickUseCase, ConnectPlayerUseCase, DisconnectPlayerUseCase,
    GetLeaderboardUseCase, GetPlayerUseCase, GetStatsUseCase, PurchaseTicketsUseCase,
    SignupUseCase,
};

/// Shared application state
pub struct AppState {
    /// SignupUseCase（プレイヤー登録のユースケース）
    pub signup_usecase: Arc<SignupUseCase>,
    /// GetPlayerUseCase（プレイヤー取得のユースケース）
    pub get_player_usecase: Arc<GetPlayerUseCase>,
    /// ClickUseCase（クリックのユースケース）
    pub click_usecase: Arc<ClickUseCase>,
    /// PurchaseTicketsUseCase（チケット購入のユースケース）
    pub purchase_tickets_usecase: Arc<PurchaseTicketsUseCase>,
    /// ConnectPlayerUseCase（プレイヤー接続のユースケース）
    pub connect_player_usecase: Arc<ConnectPlayerUseCase>,
    /// DisconnectPlayerUseCase（プレイヤー切断のユースケース）
    pub disconnect_player_usecase: Arc<DisconnectPlayerUseCase>,
    /// GetStatsUseCase（ゲーム統計取得のユースケース）
    pub get_stats_usecase: Arc<GetStatsUseCase>,
    /// GetLeaderboardUseCase（リーダーボード取得のユースケース）
    pub get_leaderboard_usecase: Arc<GetLeaderboardUseCase>,
    /// BroadcastUpdatesUseCase（イベント配信のユースケース）
    pub broadcast_updates_usecase: Arc<BroadcastUpdatesUseCase>,
}
