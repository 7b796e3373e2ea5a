//! ドメイン層
//!
//! ゲームのエンティティ・値オブジェクト・純粋なゲームルールと、
//! データアクセス（Repository）/ 通知（EventPusher）のインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

pub mod entity;
pub mod error;
pub mod pusher;
pub mod repository;
pub mod rules;
pub mod value_object;

pub use entity::{GameStats, LeaderboardEntry, Player};
pub use error::{PushError, StoreError, ValidationError};
pub use pusher::{EventPusher, PusherChannel, Unregistration};
pub use repository::{GameStateStore, PlayerStore};
pub use rules::{MILESTONES, crossed_milestone, rank_players};
pub use value_object::{
    ConnectionToken, PlayerName, TICKET_COST_CLICKS, TicketQuantity, Timestamp, UserId,
    WalletAddress,
};
