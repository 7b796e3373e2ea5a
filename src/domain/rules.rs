//! ゲームルールの純粋関数
//!
//! 副作用を持たない純粋関数としてビジネスロジックを実装し、
//! テストを容易にします。

use super::entity::{LeaderboardEntry, Player};

/// マイルストーンとなるクリック数の集合（固定）
pub const MILESTONES: [u64; 7] = [10, 50, 100, 500, 1000, 5000, 10000];

/// クリック後のカウントがマイルストーンを「越えた」かを判定する。
///
/// マイルストーンはカウントが値に**ちょうど一致した**ときのみ
/// 発火する単発通知であり、閾値状態ではありません。クリックは
/// 常に +1 なので、一致判定で取りこぼしは発生しません。
///
/// # Arguments
///
/// * `clicks` - インクリメント後のクリック数
///
/// # Returns
///
/// 一致したマイルストーン値（一致しない場合は `None`）
pub fn crossed_milestone(clicks: u64) -> Option<u64> {
    MILESTONES.contains(&clicks).then_some(clicks)
}

/// プレイヤーのスナップショットからリーダーボードを構築する。
///
/// クリック数の降順に並べ、同数の場合は登録順（先に登録した
/// プレイヤーが上位）で解決します。`limit` 件に切り詰めた後、
/// 1 始まりの連続した順位を割り当てます。
///
/// # Arguments
///
/// * `players` - 登録順に並んだプレイヤーのスナップショット
/// * `limit` - 返すエントリ数の上限
pub fn rank_players(mut players: Vec<Player>, limit: usize) -> Vec<LeaderboardEntry> {
    // sort_by は stable なので、同数タイは入力（登録順）のまま保たれる
    players.sort_by(|a, b| b.clicks.cmp(&a.clicks));
    players.truncate(limit);

    players
        .into_iter()
        .enumerate()
        .map(|(index, player)| LeaderboardEntry {
            id: player.id,
            name: player.name,
            clicks: player.clicks,
            tickets: player.tickets,
            rank: index as u32 + 1,
        })
        .collect()
}
