//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::entity::{GameStats, Player};
use super::error::StoreError;
use super::value_object::{PlayerName, TicketQuantity, UserId, WalletAddress};

/// プレイヤーストアのインターフェース
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には
/// 依存しない。同一レコードへの全ての更新操作は直列化されて見えること
/// （並行インクリメントの両方が反映されること）を実装に要求します。
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// プレイヤーを新規作成
    ///
    /// ウォレットアドレスが既に登録されている場合（大文字小文字を
    /// 区別した完全一致）は `StoreError::DuplicateWallet` を返す。
    async fn create_player(
        &self,
        name: PlayerName,
        wallet_address: WalletAddress,
    ) -> Result<Player, StoreError>;

    /// ID でプレイヤーを取得
    async fn get_by_id(&self, id: &UserId) -> Result<Player, StoreError>;

    /// ウォレットアドレスでプレイヤーを取得
    async fn get_by_wallet(&self, address: &WalletAddress) -> Result<Player, StoreError>;

    /// クリック数をアトミックに +1 し、更新後のレコードを返す
    async fn increment_clicks(&self, id: &UserId) -> Result<Player, StoreError>;

    /// クリックを減算しチケットを加算する（all-or-nothing）
    ///
    /// `clicks >= quantity.cost_in_clicks()` をアトミックに検査し、
    /// 満たさない場合は一切更新せずに `StoreError::InsufficientClicks`
    /// を返す。
    async fn debit_clicks_credit_tickets(
        &self,
        id: &UserId,
        quantity: TicketQuantity,
    ) -> Result<Player, StoreError>;

    /// 全プレイヤーの一貫したスナップショットを登録順で取得
    ///
    /// 適用途中の更新を観測してはならない。
    async fn snapshot(&self) -> Vec<Player>;

    /// 登録済みプレイヤー数を取得
    async fn player_count(&self) -> usize;
}

/// グローバルなゲーム状態ストアのインターフェース
///
/// グローバルクリック数・賞金プール・オンライン集合は、プレイヤー
/// ストアとは独立した同期機構で保護されます（偽の競合の回避）。
#[async_trait]
pub trait GameStateStore: Send + Sync {
    /// グローバルクリック数を +1 し、更新後の値を返す
    ///
    /// 成功したクリック 1 回につきちょうど 1 回呼ばれ、並行して
    /// 呼ばれても二重計上・取りこぼしをしない。
    async fn record_global_click(&self) -> u64;

    /// 賞金プールに増分を加算し、更新後の値を返す
    ///
    /// プールを減少させたり負にしたりしてはならない。
    async fn grow_prize_pool(&self, increment: f64) -> f64;

    /// プレイヤーをオンライン集合に追加（冪等）
    async fn mark_online(&self, id: UserId);

    /// プレイヤーをオンライン集合から削除（冪等、未登録なら no-op）
    ///
    /// # Returns
    ///
    /// 実際に集合から削除した場合 `true`（既にオフラインなら `false`）
    async fn mark_offline(&self, id: &UserId) -> bool;

    /// 現在のゲーム統計のスナップショットを取得
    async fn stats_snapshot(&self) -> GameStats;
}
