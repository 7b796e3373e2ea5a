//! UseCase: チケット購入処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PurchaseTicketsUseCase::execute() メソッド
//! - クリックの減算・チケットの加算・賞金プールの成長
//!
//! ### なぜこのテストが必要か
//! - 購入の all-or-nothing 性の保証（残高不足時に一切更新しない）
//! - 成功時のみ賞金プールが [0.01, 0.11) の範囲で成長することの保証
//!
//! ### どのような状況を想定しているか
//! - 正常系: 残高十分での購入
//! - 異常系: 残高不足（プレイヤー・プールとも不変）
//! - 異常系: 存在しないプレイヤー

use std::sync::Arc;

use crate::common::rng::PrizeRng;
use crate::domain::{GameStateStore, Player, PlayerStore, StoreError, TicketQuantity, UserId};

/// チケット購入のユースケース
pub struct PurchaseTicketsUseCase {
    /// PlayerStore（データアクセス層の抽象化）
    players: Arc<dyn PlayerStore>,
    /// GameStateStore（グローバル状態の抽象化）
    game_state: Arc<dyn GameStateStore>,
    /// 賞金プール増分の乱数源（テストでは固定値を注入）
    prize_rng: Arc<dyn PrizeRng>,
}

impl PurchaseTicketsUseCase {
    /// 新しい PurchaseTicketsUseCase を作成
    pub fn new(
        players: Arc<dyn PlayerStore>,
        game_state: Arc<dyn GameStateStore>,
        prize_rng: Arc<dyn PrizeRng>,
    ) -> Self {
        Self {
            players,
            game_state,
            prize_rng,
        }
    }

    /// チケット購入を実行
    ///
    /// `quantity.cost_in_clicks()` 分のクリックをアトミックに減算して
    /// チケットを加算し、成功した場合のみ賞金プールを乱数分だけ
    /// 成長させます。失敗時は一切の状態を変更しません。
    ///
    /// # Arguments
    ///
    /// * `user_id` - 購入するプレイヤーの ID
    /// * `quantity` - 購入枚数（Domain Model、バリデーション済み）
    ///
    /// # Returns
    ///
    /// * `Ok(Player)` - 購入成功（更新後のレコード）
    /// * `Err(StoreError::InsufficientClicks)` - クリック残高不足
    /// * `Err(StoreError::PlayerNotFound)` - プレイヤーが存在しない
    pub async fn execute(
        &self,
        user_id: &UserId,
        quantity: TicketQuantity,
    ) -> Result<Player, StoreError> {
        let player = self
            .players
            .debit_clicks_credit_tickets(user_id, quantity)
            .await?;

        let increment = self.prize_rng.prize_increment();
        let pool = self.game_state.grow_prize_pool(increment).await;
        tracing::info!(
            "Player '{}' bought {} ticket(s), prize pool is now {:.4}",
            user_id,
            quantity.value(),
            pool
        );

        Ok(player)
    }
}
