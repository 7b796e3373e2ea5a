//! エンティティ定義

use serde::Serialize;

use super::value_object::{PlayerName, Timestamp, UserId, WalletAddress};

/// プレイヤー（ゲームの参加者）
///
/// 登録時に一度だけ生成され、クリック・チケット購入によって
/// カウンタのみがインプレースで更新されます。プロセスの生存中に
/// 削除されることはありません。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    /// 一意な識別子（登録時に採番、不変）
    pub id: UserId,
    /// 表示名
    pub name: PlayerName,
    /// 外部ウォレットアドレス（全プレイヤーを通じて一意、不変）
    pub wallet_address: WalletAddress,
    /// 累計クリック数（チケット購入による減算を除き単調増加）
    pub clicks: u64,
    /// 保有チケット数（単調増加）
    pub tickets: u64,
    /// 登録時刻
    pub created_at: Timestamp,
}

impl Player {
    /// 新しいプレイヤーを作成（カウンタはゼロ初期化）
    pub fn new(
        id: UserId,
        name: PlayerName,
        wallet_address: WalletAddress,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            wallet_address,
            clicks: 0,
            tickets: 0,
            created_at,
        }
    }
}

/// ゲーム全体の統計スナップショット
#[derive(Debug, Clone, PartialEq)]
pub struct GameStats {
    /// 全プレイヤーの累計クリック数（単調増加）
    pub global_clicks: u64,
    /// 賞金プール（非負、単調増加）
    pub prize_pool: f64,
    /// 次回抽選時刻（プロセス起動時に 24 時間後で固定）
    pub next_draw_time: Timestamp,
    /// 現在オンラインのプレイヤー数
    pub online_users: usize,
}

/// リーダーボードの 1 エントリ（導出値、保存されない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub id: UserId,
    pub name: PlayerName,
    pub clicks: u64,
    pub tickets: u64,
    /// 1 始まりの連続した順位
    pub rank: u32,
}
