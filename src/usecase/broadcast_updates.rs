//! UseCase: イベント配信処理
//!
//! 更新系 UseCase の完了後に、UI 層でシリアライズされた JSON を
//! 全接続（broadcast）または特定プレイヤー（notify_player）に
//! 配信します。配信はベストエフォートであり、失敗がリクエスト側に
//! 伝播することはありません。

use std::sync::Arc;

use crate::domain::{EventPusher, PushError, UserId};

/// イベント配信のユースケース
pub struct BroadcastUpdatesUseCase {
    /// EventPusher（接続レジストリ + イベント通知の抽象化）
    pusher: Arc<dyn EventPusher>,
}

impl BroadcastUpdatesUseCase {
    /// 新しい BroadcastUpdatesUseCase を作成
    pub fn new(pusher: Arc<dyn EventPusher>) -> Self {
        Self { pusher }
    }

    /// 登録中の全接続にメッセージをブロードキャストする
    ///
    /// # Arguments
    ///
    /// * `payload` - 配信するメッセージ（JSON、UI 層で生成されたもの）
    pub async fn broadcast(&self, payload: &str) {
        self.pusher.broadcast(payload).await;
    }

    /// 特定のプレイヤーにのみメッセージを送信する（ユニキャスト）
    ///
    /// 対象プレイヤーに接続がない場合は何もしません（エラーには
    /// しない）。マイルストーン通知に使用します。
    ///
    /// # Arguments
    ///
    /// * `user_id` - 送信先プレイヤーの ID
    /// * `payload` - 送信するメッセージ（JSON、UI 層で生成されたもの）
    ///
    /// # Returns
    ///
    /// 実際に送信された場合 `true`
    pub async fn notify_player(&self, user_id: &UserId, payload: &str) -> bool {
        match self.pusher.push_to(user_id, payload).await {
            Ok(()) => true,
            Err(PushError::ClientNotFound(_)) => {
                tracing::debug!("Player '{}' has no live connection, skipping", user_id);
                false
            }
            Err(PushError::PushFailed(e)) => {
                tracing::warn!("Failed to notify player '{}': {}", user_id, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pusher::MockEventPusher;

    #[tokio::test]
    async fn test_broadcast_delegates_to_pusher() {
        // テスト項目: broadcast が EventPusher にそのまま委譲される
        // given (前提条件):
        let mut pusher = MockEventPusher::new();
        pusher
            .expect_broadcast()
            .withf(|payload| payload == "{\"type\":\"stats_update\"}")
            .times(1)
            .returning(|_| ());
        let usecase = BroadcastUpdatesUseCase::new(Arc::new(pusher));

        // when (操作) / then (期待する結果): expectation が検証される
        usecase.broadcast("{\"type\":\"stats_update\"}").await;
    }

    #[tokio::test]
    async fn test_notify_player_success() {
        // テスト項目: 接続中のプレイヤーへのユニキャストが成功する
        // given (前提条件):
        let alice = UserId::generate();
        let mut pusher = MockEventPusher::new();
        pusher
            .expect_push_to()
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = BroadcastUpdatesUseCase::new(Arc::new(pusher));

        // when (操作):
        let delivered = usecase.notify_player(&alice, "{\"type\":\"milestone\"}").await;

        // then (期待する結果):
        assert!(delivered);
    }

    #[tokio::test]
    async fn test_notify_player_without_connection_is_silent() {
        // テスト項目: 接続のないプレイヤーへのユニキャストがエラーにならない
        // given (前提条件):
        let alice = UserId::generate();
        let mut pusher = MockEventPusher::new();
        pusher
            .expect_push_to()
            .times(1)
            .returning(|user_id, _| Err(PushError::ClientNotFound(user_id.to_string())));
        let usecase = BroadcastUpdatesUseCase::new(Arc::new(pusher));

        // when (操作):
        let delivered = usecase.notify_player(&alice, "{\"type\":\"milestone\"}").await;

        // then (期待する結果): false が返るだけでエラーにはならない
        assert!(!delivered);
    }
}
