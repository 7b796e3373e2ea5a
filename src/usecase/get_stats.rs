//! UseCase: ゲーム統計取得処理

use std::sync::Arc;

use crate::domain::{GameStateStore, GameStats};

/// ゲーム統計取得のユースケース
pub struct GetStatsUseCase {
    /// GameStateStore（グローバル状態の抽象化）
    game_state: Arc<dyn GameStateStore>,
}

impl GetStatsUseCase {
    /// 新しい GetStatsUseCase を作成
    pub fn new(game_state: Arc<dyn GameStateStore>) -> Self {
        Self { game_state }
    }

    /// 現在のゲーム統計のスナップショットを取得（読み取り専用、更新なし）
    pub async fn execute(&self) -> GameStats {
        self.game_state.stats_snapshot().await
    }
}
