//! EventPusher trait 定義
//!
//! 接続レジストリとイベント通知（ブロードキャスト / ユニキャスト）の
//! インターフェース。具体的な実装（WebSocket）は Infrastructure 層が
//! 提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::PushError;
use super::value_object::{ConnectionToken, UserId};

/// クライアントへのメッセージ送信用チャンネル
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// unregister の結果
///
/// 呼び出し側（切断処理）は「置き換え済み」と「登録なし」を区別する
/// 必要があります。前者は新しい接続がオンラインを維持しているため
/// 何もしてはならず、後者は broadcast 時に evict 済みの可能性が
/// あるためオフライン化が必要です。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unregistration {
    /// トークンが現在の登録と一致し、接続を解除した
    Removed,
    /// 既に新しい接続で置き換え済み（stale close）
    Replaced,
    /// このプレイヤーの登録が存在しない（evict 済みなど）
    NotRegistered,
}

/// 接続レジストリ + イベント通知のインターフェース
///
/// register / unregister / push_to / broadcast は独立した接続から
/// 任意に並行呼び出しされても安全であること。
///
/// ## 接続の置き換えポリシー（last join wins）
///
/// 同一プレイヤーの 2 回目の register は古いハンドルを置き換えます。
/// unregister は登録時に発行された [`ConnectionToken`] で照合され、
/// 置き換え済みの古い接続からの切断は no-op になります。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPusher: Send + Sync {
    /// 接続を登録し、この登録を識別するトークンを返す
    ///
    /// 同じ `user_id` の既存の登録は置き換えられる。
    async fn register(&self, user_id: UserId, sender: PusherChannel) -> ConnectionToken;

    /// トークンが現在の登録と一致する場合のみ接続を解除する
    ///
    /// # Returns
    ///
    /// 解除した場合 [`Unregistration::Removed`]。トークンが古い場合は
    /// [`Unregistration::Replaced`]、登録自体が存在しない場合は
    /// [`Unregistration::NotRegistered`]
    async fn unregister(&self, user_id: &UserId, token: ConnectionToken) -> Unregistration;

    /// 特定のプレイヤーにのみメッセージを送信する（ユニキャスト）
    async fn push_to(&self, user_id: &UserId, payload: &str) -> Result<(), PushError>;

    /// 登録中の全接続にメッセージを送信する（ベストエフォート）
    ///
    /// 送信に失敗した接続はスキップされ、遅延 evict される。
    /// 一部の失敗が他の接続への配送を妨げることはない。
    async fn broadcast(&self, payload: &str);

    /// 現在登録されている接続数を取得
    async fn online_count(&self) -> usize;
}
