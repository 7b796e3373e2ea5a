//! 値オブジェクト定義
//!
//! 不変条件をコンストラクタで強制する値オブジェクト群。
//! 一度生成された値オブジェクトは常に有効であることが保証されます。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;

/// プレイヤー名の最小文字数
pub const PLAYER_NAME_MIN_CHARS: usize = 1;
/// プレイヤー名の最大文字数
pub const PLAYER_NAME_MAX_CHARS: usize = 50;
/// ウォレットアドレスの最小文字数
pub const WALLET_ADDRESS_MIN_CHARS: usize = 32;
/// ウォレットアドレスの最大文字数
pub const WALLET_ADDRESS_MAX_CHARS: usize = 44;
/// 一度に購入できるチケット数の最小値
pub const TICKET_QUANTITY_MIN: u32 = 1;
/// 一度に購入できるチケット数の最大値
pub const TICKET_QUANTITY_MAX: u32 = 100;
/// チケット 1 枚あたりのクリックコスト
pub const TICKET_COST_CLICKS: u64 = 1000;

/// プレイヤーの一意な識別子
///
/// 登録時に採番され、以後不変。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// 新しい UserId を採番
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// 内部の UUID を取得
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ValidationError::InvalidUserId(s.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 表示用のプレイヤー名（1〜50 文字）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    /// 新しい PlayerName を作成（文字数のバリデーション付き）
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let chars = value.chars().count();
        if !(PLAYER_NAME_MIN_CHARS..=PLAYER_NAME_MAX_CHARS).contains(&chars) {
            return Err(ValidationError::InvalidName(chars));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// 外部ウォレットアドレス（32〜44 文字、大文字小文字を区別）
///
/// 全レコードを通じて一意。登録後は不変。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// 新しい WalletAddress を作成（文字数のバリデーション付き）
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let chars = value.chars().count();
        if !(WALLET_ADDRESS_MIN_CHARS..=WALLET_ADDRESS_MAX_CHARS).contains(&chars) {
            return Err(ValidationError::InvalidWalletAddress(chars));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// チケット購入数（1〜100 枚）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketQuantity(u32);

impl TicketQuantity {
    /// 新しい TicketQuantity を作成（範囲のバリデーション付き）
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(TICKET_QUANTITY_MIN..=TICKET_QUANTITY_MAX).contains(&value) {
            return Err(ValidationError::InvalidQuantity(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// 購入に必要なクリック数
    pub fn cost_in_clicks(&self) -> u64 {
        u64::from(self.0) * TICKET_COST_CLICKS
    }
}

impl TryFrom<u32> for TicketQuantity {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unix タイムスタンプ（ミリ秒、JST）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 接続登録を識別するトークン
///
/// 同一プレイヤーが新しい接続で join し直した場合（last join wins）、
/// 古い接続の切断処理が新しい登録を誤って解除しないよう、
/// 登録ごとに採番されるトークンで照合します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionToken(Uuid);

impl ConnectionToken {
    /// 新しい ConnectionToken を採番
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}
