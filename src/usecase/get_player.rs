//! UseCase: プレイヤー取得処理

use std::sync::Arc;

use crate::domain::{Player, PlayerStore, StoreError, UserId};

/// プレイヤー取得のユースケース
pub struct GetPlayerUseCase {
    /// PlayerStore（データアクセス層の抽象化）
    players: Arc<dyn PlayerStore>,
}

impl GetPlayerUseCase {
    /// 新しい GetPlayerUseCase を作成
    pub fn new(players: Arc<dyn PlayerStore>) -> Self {
        Self { players }
    }

    /// ID でプレイヤーを取得（読み取り専用、更新なし）
    pub async fn execute(&self, id: &UserId) -> Result<Player, StoreError> {
        self.players.get_by_id(id).await
    }
}
