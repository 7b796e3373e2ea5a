//! Conversion logic between domain entities and DTOs.

use crate::common::time::timestamp_to_jst_rfc3339;
use crate::domain::entity::{GameStats, LeaderboardEntry, Player};
use crate::infrastructure::dto::http::{GameStatsDto, LeaderboardEntryDto, PlayerDto};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Player> for PlayerDto {
    fn from(player: Player) -> Self {
        Self {
            id: player.id.to_string(),
            name: player.name.into_string(),
            solana_address: player.wallet_address.into_string(),
            clicks: player.clicks,
            tickets: player.tickets,
            created_at: timestamp_to_jst_rfc3339(player.created_at.value()),
        }
    }
}

impl From<GameStats> for GameStatsDto {
    fn from(stats: GameStats) -> Self {
        Self {
            global_clicks: stats.global_clicks,
            prize_pool: stats.prize_pool,
            next_draw_time: stats.next_draw_time.value(),
            online_users: stats.online_users,
        }
    }
}

impl From<LeaderboardEntry> for LeaderboardEntryDto {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.into_string(),
            clicks: entry.clicks,
            tickets: entry.tickets,
            rank: entry.rank,
        }
    }
}
