//! UseCase: プレイヤー切断（leave）処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectPlayerUseCase::execute() メソッド
//! - トークン照合による切断と、stale な切断の無視
//!
//! ### なぜこのテストが必要か
//! - 切断処理は冪等であり、同一プレイヤーの新しい接続の登録と
//!   競合しても安全であることを保証する必要がある
//! - 置き換え済みの古い接続の切断が、新しい接続をオフライン扱いに
//!   しないことを保証（設計判断: last join wins）
//!
//! ### どのような状況を想定しているか
//! - 正常系: 現在の接続の切断
//! - エッジケース: 置き換え済み接続の stale な切断
//! - エッジケース: 未登録プレイヤーの切断（no-op）
//! - エッジケース: broadcast で evict された後の切断（オンライン集合の
//!   リークを残さない）

use std::sync::Arc;

use crate::domain::{ConnectionToken, EventPusher, GameStateStore, Unregistration, UserId};

/// プレイヤー切断のユースケース
pub struct DisconnectPlayerUseCase {
    /// GameStateStore（グローバル状態の抽象化）
    game_state: Arc<dyn GameStateStore>,
    /// EventPusher（接続レジストリ + イベント通知の抽象化）
    pusher: Arc<dyn EventPusher>,
}

impl DisconnectPlayerUseCase {
    /// 新しい DisconnectPlayerUseCase を作成
    pub fn new(game_state: Arc<dyn GameStateStore>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { game_state, pusher }
    }

    /// プレイヤー切断を実行
    ///
    /// トークンが現在の登録と一致する場合のみ接続を解除し、
    /// オンライン集合から削除します。置き換え済みの古い接続からの
    /// 切断（stale close）は何も変更しません。何度呼んでも安全です。
    ///
    /// レジストリに登録が存在しない場合（broadcast 時に死んだ接続と
    /// して evict された後など）もオフライン化します。生きている接続が
    /// 残っていれば必ずレジストリに登録があるため、このケースでの
    /// オフライン化は安全です。
    ///
    /// # Arguments
    ///
    /// * `user_id` - 切断したプレイヤーの ID
    /// * `token` - 接続登録時に発行されたトークン
    ///
    /// # Returns
    ///
    /// オンライン状態を変更した場合 `true`（呼び出し側はこのときのみ
    /// stats_update をブロードキャストする）
    pub async fn execute(&self, user_id: &UserId, token: ConnectionToken) -> bool {
        match self.pusher.unregister(user_id, token).await {
            Unregistration::Removed => {
                self.game_state.mark_offline(user_id).await;
                true
            }
            // 新しい接続がオンラインを維持している
            Unregistration::Replaced => false,
            // evict 済み等で登録なし。オンライン集合に残っていれば取り除く
            Unregistration::NotRegistered => self.game_state.mark_offline(user_id).await,
        }
    }
}
