//! UseCase 層のエラー型定義

use thiserror::Error;

/// 接続（join）処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// join で指定されたプレイヤーが登録されていない
    #[error("cannot join: player not found: '{0}'")]
    PlayerNotFound(String),
}
