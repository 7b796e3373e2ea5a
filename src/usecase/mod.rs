//! UseCase 層
//!
//! 1 つの受信操作（signup, click, purchase, join, leave, 参照系）につき
//! 1 つの UseCase を定義します。UseCase はドメイン層の trait のみに
//! 依存します。

mod broadcast_updates;
mod click;
mod connect_player;
mod disconnect_player;
mod error;
mod get_leaderboard;
mod get_player;
mod get_stats;
mod purchase_tickets;
mod signup;

pub use broadcast_updates::BroadcastUpdatesUseCase;
pub use click::{ClickOutcome, ClickUseCase};
pub use connect_player::ConnectPlayerUseCase;
pub use disconnect_player::DisconnectPlayerUseCase;
pub use error::ConnectError;
pub use get_leaderboard::GetLeaderboardUseCase;
pub use get_player::GetPlayerUseCase;
pub use get_stats::GetStatsUseCase;
pub use purchase_tickets::PurchaseTicketsUseCase;
pub use signup::SignupUseCase;
