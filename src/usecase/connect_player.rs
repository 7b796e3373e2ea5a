//! UseCase: プレイヤー接続（join）処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectPlayerUseCase::execute() メソッド
//! - 接続の登録（last join wins）とオンライン集合への反映
//!
//! ### なぜこのテストが必要か
//! - 未登録プレイヤーの join を拒否することを保証
//! - 同一プレイヤーの再 join が古い接続を置き換えることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系: 登録済みプレイヤーの join
//! - 異常系: 未登録プレイヤーの join
//! - エッジケース: 同一プレイヤーの二重 join

use std::sync::Arc;

use crate::domain::{
    ConnectionToken, EventPusher, GameStateStore, PlayerStore, PusherChannel, UserId,
};

use super::error::ConnectError;

/// プレイヤー接続のユースケース
pub struct ConnectPlayerUseCase {
    /// PlayerStore（データアクセス層の抽象化）
    players: Arc<dyn PlayerStore>,
    /// GameStateStore（グローバル状態の抽象化）
    game_state: Arc<dyn GameStateStore>,
    /// EventPusher（接続レジストリ + イベント通知の抽象化）
    pusher: Arc<dyn EventPusher>,
}

impl ConnectPlayerUseCase {
    /// 新しい ConnectPlayerUseCase を作成
    pub fn new(
        players: Arc<dyn PlayerStore>,
        game_state: Arc<dyn GameStateStore>,
        pusher: Arc<dyn EventPusher>,
    ) -> Self {
        Self {
            players,
            game_state,
            pusher,
        }
    }

    /// プレイヤー接続を実行
    ///
    /// プレイヤーの存在を確認した上で接続を登録し（既存の接続は
    /// 置き換え）、オンライン集合に追加します。
    ///
    /// # Arguments
    ///
    /// * `user_id` - join したプレイヤーの ID
    /// * `sender` - クライアントへのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(ConnectionToken)` - この登録を識別するトークン
    ///   （切断時の照合に使用する）
    /// * `Err(ConnectError::PlayerNotFound)` - 未登録プレイヤー
    pub async fn execute(
        &self,
        user_id: UserId,
        sender: PusherChannel,
    ) -> Result<ConnectionToken, ConnectError> {
        // 1. プレイヤーの存在チェック
        self.players
            .get_by_id(&user_id)
            .await
            .map_err(|_| ConnectError::PlayerNotFound(user_id.to_string()))?;

        // 2. 接続レジストリに登録（last join wins）
        let token = self.pusher.register(user_id, sender).await;

        // 3. オンライン集合に追加
        self.game_state.mark_online(user_id).await;

        Ok(token)
    }
}
