//! UseCase: プレイヤー登録処理

use std::sync::Arc;

use crate::domain::{Player, PlayerName, PlayerStore, StoreError, WalletAddress};

/// プレイヤー登録のユースケース
pub struct SignupUseCase {
    /// PlayerStore（データアクセス層の抽象化）
    players: Arc<dyn PlayerStore>,
}

impl SignupUseCase {
    /// 新しい SignupUseCase を作成
    pub fn new(players: Arc<dyn PlayerStore>) -> Self {
        Self { players }
    }

    /// プレイヤー登録を実行
    ///
    /// # Arguments
    ///
    /// * `name` - 表示名（Domain Model、バリデーション済み）
    /// * `wallet_address` - ウォレットアドレス（Domain Model、バリデーション済み）
    ///
    /// # Returns
    ///
    /// * `Ok(Player)` - 登録成功（カウンタはゼロ初期化）
    /// * `Err(StoreError::DuplicateWallet)` - ウォレットアドレスが登録済み
    pub async fn execute(
        &self,
        name: PlayerName,
        wallet_address: WalletAddress,
    ) -> Result<Player, StoreError> {
        self.players.create_player(name, wallet_address).await
    }
}
