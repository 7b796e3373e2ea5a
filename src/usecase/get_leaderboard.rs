//! UseCase: リーダーボード取得処理

use std::sync::Arc;

use crate::domain::{LeaderboardEntry, PlayerStore, rules};

/// リーダーボード取得のユースケース
pub struct GetLeaderboardUseCase {
    /// PlayerStore（データアクセス層の抽象化）
    players: Arc<dyn PlayerStore>,
}

impl GetLeaderboardUseCase {
    /// 新しい GetLeaderboardUseCase を作成
    pub fn new(players: Arc<dyn PlayerStore>) -> Self {
        Self { players }
    }

    /// リーダーボードを取得（読み取り専用、更新なし）
    ///
    /// ストアの一貫したスナップショットをロック外でランク付けします。
    ///
    /// # Arguments
    ///
    /// * `limit` - 返すエントリ数の上限
    pub async fn execute(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let snapshot = self.players.snapshot().await;
        rules::rank_players(snapshot, limit)
    }
}
