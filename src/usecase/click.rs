//! UseCase: クリック処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ClickUseCase::execute() メソッド
//! - プレイヤーのクリック +1、グローバルカウンタ +1、マイルストーン判定
//!
//! ### なぜこのテストが必要か
//! - 成功したクリック 1 回につきグローバルカウンタがちょうど 1 増える
//!   ことを保証（二重計上・取りこぼしの防止）
//! - マイルストーンが一致時に 1 回だけ報告されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系: クリックとカウンタ増加
//! - 異常系: 存在しないプレイヤーのクリック（グローバルカウンタ不変）
//! - エッジケース: マイルストーン境界（9→10 で発火、10→11 で発火しない）

use std::sync::Arc;

use crate::domain::{GameStateStore, PlayerStore, StoreError, UserId, rules};

/// クリック処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    /// インクリメント後のプレイヤーのクリック数
    pub clicks: u64,
    /// ちょうど越えたマイルストーン（該当なしの場合 `None`）
    pub milestone: Option<u64>,
}

/// クリックのユースケース
pub struct ClickUseCase {
    /// PlayerStore（データアクセス層の抽象化）
    players: Arc<dyn PlayerStore>,
    /// GameStateStore（グローバル状態の抽象化）
    game_state: Arc<dyn GameStateStore>,
}

impl ClickUseCase {
    /// 新しい ClickUseCase を作成
    pub fn new(players: Arc<dyn PlayerStore>, game_state: Arc<dyn GameStateStore>) -> Self {
        Self {
            players,
            game_state,
        }
    }

    /// クリックを実行
    ///
    /// プレイヤーのクリック数をアトミックに +1 し、成功した場合のみ
    /// グローバルクリック数も +1 します。インクリメント後のカウントが
    /// マイルストーンにちょうど一致した場合、その値を結果に含めます。
    ///
    /// # Arguments
    ///
    /// * `user_id` - クリックしたプレイヤーの ID
    ///
    /// # Returns
    ///
    /// * `Ok(ClickOutcome)` - クリック成功
    /// * `Err(StoreError::PlayerNotFound)` - プレイヤーが存在しない
    pub async fn execute(&self, user_id: &UserId) -> Result<ClickOutcome, StoreError> {
        let player = self.players.increment_clicks(user_id).await?;
        self.game_state.record_global_click().await;

        Ok(ClickOutcome {
            clicks: player.clicks,
            milestone: rules::crossed_milestone(player.clicks),
        })
    }
}
