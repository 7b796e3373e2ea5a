//! ドメイン層のエラー型定義

use thiserror::Error;

/// 値オブジェクト構築時のバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// プレイヤー名の文字数が範囲外
    #[error("name must be 1-50 characters, got {0}")]
    InvalidName(usize),

    /// ウォレットアドレスの文字数が範囲外
    #[error("wallet address must be 32-44 characters, got {0}")]
    InvalidWalletAddress(usize),

    /// チケット購入数が範囲外
    #[error("quantity must be between 1 and 100, got {0}")]
    InvalidQuantity(u32),

    /// UserId が UUID としてパースできない
    #[error("invalid user id: '{0}'")]
    InvalidUserId(String),
}

/// プレイヤーストア操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// ウォレットアドレスが既に登録済み
    #[error("wallet address already registered: '{0}'")]
    DuplicateWallet(String),

    /// 指定されたプレイヤーが存在しない
    #[error("player not found: '{0}'")]
    PlayerNotFound(String),

    /// クリック残高がチケット購入コストに満たない
    #[error("not enough clicks: required {required}, available {available}")]
    InsufficientClicks { required: u64, available: u64 },
}

/// メッセージ送信（push）のエラー
///
/// 送信失敗はリクエスト側には伝播させず、接続の遅延 evict に使われます。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushError {
    /// 対象プレイヤーの接続が登録されていない
    #[error("no live connection for player '{0}'")]
    ClientNotFound(String),

    /// チャンネルへの送信に失敗（接続が閉じられている）
    #[error("failed to push message: {0}")]
    PushFailed(String),
}
