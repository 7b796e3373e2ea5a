//! WebSocket を使った EventPusher 実装
//!
//! ## 責務
//!
//! - 接続レジストリ（UserId → WebSocket sender）の管理
//! - クライアントへのイベント送信（push_to, broadcast）
//! - 死んだ接続の遅延 evict
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`src/ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、イベント送信に
//! 使用します。送信は unbounded チャンネルへの push なのでブロックせず、
//! 遅い接続が新しいクリックを停滞させることはありません。
//!
//! 同一プレイヤーの 2 回目の register は古いハンドルを置き換えます
//! （last join wins）。unregister は登録時のトークンで照合されるため、
//! 置き換え済みの古い接続の切断処理が新しい登録を解除することは
//! ありません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionToken, EventPusher, PushError, PusherChannel, Unregistration, UserId,
};

/// 1 接続分の登録情報
struct RegisteredClient {
    token: ConnectionToken,
    sender: PusherChannel,
}

/// WebSocket を使った EventPusher 実装
pub struct WebSocketEventPusher {
    /// 接続中のクライアントの WebSocket sender
    ///
    /// Key: UserId
    /// Value: RegisteredClient（トークン + sender）
    clients: Mutex<HashMap<UserId, RegisteredClient>>,
}

impl WebSocketEventPusher {
    /// 新しい WebSocketEventPusher を作成
    pub fn new() -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for WebSocketEventPusher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPusher for WebSocketEventPusher {
    async fn register(&self, user_id: UserId, sender: PusherChannel) -> ConnectionToken {
        let token = ConnectionToken::generate();
        let mut clients = self.clients.lock().await;
        if clients
            .insert(user_id, RegisteredClient { token, sender })
            .is_some()
        {
            tracing::debug!("Replaced existing connection for player '{}'", user_id);
        } else {
            tracing::debug!("Player '{}' registered to EventPusher", user_id);
        }
        token
    }

    async fn unregister(&self, user_id: &UserId, token: ConnectionToken) -> Unregistration {
        let mut clients = self.clients.lock().await;
        match clients.get(user_id) {
            Some(client) if client.token == token => {
                clients.remove(user_id);
                tracing::debug!("Player '{}' unregistered from EventPusher", user_id);
                Unregistration::Removed
            }
            Some(_) => {
                // 既に新しい接続で置き換え済み（stale close）
                tracing::debug!("Ignoring stale unregister for player '{}'", user_id);
                Unregistration::Replaced
            }
            // 登録なし（broadcast 時に evict 済みの可能性がある）
            None => Unregistration::NotRegistered,
        }
    }

    async fn push_to(&self, user_id: &UserId, payload: &str) -> Result<(), PushError> {
        let clients = self.clients.lock().await;

        if let Some(client) = clients.get(user_id) {
            client
                .sender
                .send(payload.to_string())
                .map_err(|e| PushError::PushFailed(e.to_string()))?;
            tracing::debug!("Pushed event to player '{}'", user_id);
            Ok(())
        } else {
            Err(PushError::ClientNotFound(user_id.to_string()))
        }
    }

    async fn broadcast(&self, payload: &str) {
        let mut clients = self.clients.lock().await;

        // ブロードキャストでは一部の送信失敗を許容し、
        // 閉じられた接続はその場で evict する
        let mut dead: Vec<UserId> = Vec::new();
        for (user_id, client) in clients.iter() {
            if client.sender.send(payload.to_string()).is_err() {
                tracing::warn!("Connection for player '{}' is closed, evicting", user_id);
                dead.push(*user_id);
            } else {
                tracing::debug!("Broadcasted event to player '{}'", user_id);
            }
        }
        for user_id in dead {
            clients.remove(&user_id);
        }
    }

    async fn online_count(&self) -> usize {
        let clients = self.clients.lock().await;
        clients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - WebSocketEventPusher の登録・解除・送信機能
    // - last join wins の置き換えポリシーとトークン照合
    // - broadcast での死んだ接続の遅延 evict
    //
    // 【なぜこのテストが必要か】
    // - EventPusher は全てのリアルタイム通知が通る通信層の中核
    // - 古い接続の切断が新しい登録を壊さないことを保証する必要がある
    //
    // 【どのようなシナリオをテストするか】
    // 1. push_to の成功・失敗ケース
    // 2. broadcast の全員配送と部分失敗（evict）
    // 3. 同一プレイヤーの再登録と stale unregister
    // ========================================

    #[tokio::test]
    async fn test_push_to_success() {
        // テスト項目: 特定のプレイヤーにイベントを送信できる
        // given (前提条件):
        let pusher = WebSocketEventPusher::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let alice = UserId::generate();
        pusher.register(alice, tx).await;

        // when (操作):
        let result = pusher.push_to(&alice, "Hello").await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(rx.recv().await, Some("Hello".to_string()));
    }

    #[tokio::test]
    async fn test_push_to_client_not_found() {
        // テスト項目: 未登録のプレイヤーへの送信はエラーを返す
        // given (前提条件):
        let pusher = WebSocketEventPusher::new();
        let nobody = UserId::generate();

        // when (操作):
        let result = pusher.push_to(&nobody, "Hello").await;

        // then (期待する結果):
        assert!(matches!(result, Err(PushError::ClientNotFound(_))));
    }

    #[tokio::test]
    async fn test_broadcast_reaches_all_registered_clients() {
        // テスト項目: 登録中の全クライアントにブロードキャストされる
        // given (前提条件):
        let pusher = WebSocketEventPusher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        pusher.register(UserId::generate(), tx1).await;
        pusher.register(UserId::generate(), tx2).await;

        // when (操作):
        pusher.broadcast("stats").await;

        // then (期待する結果):
        assert_eq!(rx1.recv().await, Some("stats".to_string()));
        assert_eq!(rx2.recv().await, Some("stats".to_string()));
    }

    #[tokio::test]
    async fn test_broadcast_evicts_dead_connections() {
        // テスト項目: 受信側が閉じた接続はブロードキャスト時に evict される
        // given (前提条件): bob の受信側を drop しておく
        let pusher = WebSocketEventPusher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, rx2) = mpsc::unbounded_channel();
        pusher.register(UserId::generate(), tx1).await;
        pusher.register(UserId::generate(), tx2).await;
        drop(rx2);

        // when (操作):
        pusher.broadcast("stats").await;

        // then (期待する結果): 生きている接続には届き、死んだ接続は削除される
        assert_eq!(rx1.recv().await, Some("stats".to_string()));
        assert_eq!(pusher.online_count().await, 1);
    }

    #[tokio::test]
    async fn test_register_replaces_previous_connection() {
        // テスト項目: 同一プレイヤーの再登録で古い接続が置き換えられる（last join wins）
        // given (前提条件):
        let pusher = WebSocketEventPusher::new();
        let alice = UserId::generate();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        pusher.register(alice, tx1).await;
        pusher.register(alice, tx2).await;

        // when (操作):
        pusher.push_to(&alice, "Hello").await.unwrap();

        // then (期待する結果): 新しい接続にのみ届く
        assert_eq!(rx2.recv().await, Some("Hello".to_string()));
        assert_eq!(rx1.try_recv().ok(), None);
        assert_eq!(pusher.online_count().await, 1);
    }

    #[tokio::test]
    async fn test_stale_unregister_is_a_noop() {
        // テスト項目: 置き換え済みの古いトークンでの unregister が no-op になる
        // given (前提条件): alice が 2 回 join（古いトークンを保持）
        let pusher = WebSocketEventPusher::new();
        let alice = UserId::generate();
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        let stale_token = pusher.register(alice, tx1).await;
        let current_token = pusher.register(alice, tx2).await;

        // when (操作): 古い接続の切断処理
        let outcome = pusher.unregister(&alice, stale_token).await;

        // then (期待する結果): 解除されず、新しい接続は生きている
        assert_eq!(outcome, Unregistration::Replaced);
        assert_eq!(pusher.online_count().await, 1);
        pusher.push_to(&alice, "still here").await.unwrap();
        assert_eq!(rx2.recv().await, Some("still here".to_string()));

        // when (操作): 現在のトークンでの切断処理
        let outcome = pusher.unregister(&alice, current_token).await;

        // then (期待する結果): 解除される
        assert_eq!(outcome, Unregistration::Removed);
        assert_eq!(pusher.online_count().await, 0);
    }

    #[tokio::test]
    async fn test_unregister_never_registered_is_safe() {
        // テスト項目: 一度も登録されていないプレイヤーの unregister が安全に no-op になる
        // given (前提条件):
        let pusher = WebSocketEventPusher::new();

        // when (操作):
        let outcome = pusher
            .unregister(&UserId::generate(), ConnectionToken::generate())
            .await;

        // then (期待する結果):
        assert_eq!(outcome, Unregistration::NotRegistered);
    }

    #[tokio::test]
    async fn test_unregister_after_eviction_reports_not_registered() {
        // テスト項目: broadcast で evict された後の unregister が NotRegistered を返す
        // given (前提条件): alice の受信側を drop し、broadcast で evict させる
        let pusher = WebSocketEventPusher::new();
        let alice = UserId::generate();
        let (tx, rx) = mpsc::unbounded_channel();
        let token = pusher.register(alice, tx).await;
        drop(rx);
        pusher.broadcast("stats").await;
        assert_eq!(pusher.online_count().await, 0);

        // when (操作): 元の接続の切断処理
        let outcome = pusher.unregister(&alice, token).await;

        // then (期待する結果): 置き換えではなく「登録なし」として報告される
        assert_eq!(outcome, Unregistration::NotRegistered);
    }
}
