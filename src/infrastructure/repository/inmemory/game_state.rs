//! InMemory GameStateStore 実装
//!
//! グローバルクリック数・賞金プール・次回抽選時刻・オンライン集合を
//! 保持します。プレイヤーテーブルとは独立した Mutex で保護されるため、
//! グローバルカウンタの更新がプレイヤー操作と偽に競合することは
//! ありません。

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::common::time::Clock;
use crate::domain::{GameStateStore, GameStats, Timestamp, UserId};

/// 賞金プールの初期値（SOL）
pub const INITIAL_PRIZE_POOL: f64 = 0.05;

/// プロセス起動から次回抽選までの時間（ミリ秒）
pub const DRAW_INTERVAL_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// グローバルなゲーム状態（Mutex の内側）
struct GlobalState {
    global_clicks: u64,
    prize_pool: f64,
    next_draw_time: Timestamp,
    online_users: HashSet<UserId>,
}

/// インメモリ GameStateStore 実装
pub struct InMemoryGameStateStore {
    state: Mutex<GlobalState>,
}

impl InMemoryGameStateStore {
    /// 新しい InMemoryGameStateStore を作成
    ///
    /// 次回抽選時刻は現在時刻の 24 時間後に固定されます。
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            state: Mutex::new(GlobalState {
                global_clicks: 0,
                prize_pool: INITIAL_PRIZE_POOL,
                next_draw_time: Timestamp::new(clock.now_jst_millis() + DRAW_INTERVAL_MILLIS),
                online_users: HashSet::new(),
            }),
        }
    }
}

#[async_trait]
impl GameStateStore for InMemoryGameStateStore {
    async fn record_global_click(&self) -> u64 {
        let mut state = self.state.lock().await;
        state.global_clicks += 1;
        state.global_clicks
    }

    async fn grow_prize_pool(&self, increment: f64) -> f64 {
        let mut state = self.state.lock().await;
        // プールは単調増加。負の増分は不変条件違反なので無視する
        if increment > 0.0 {
            state.prize_pool += increment;
        } else {
            tracing::warn!("Ignoring non-positive prize pool increment: {}", increment);
        }
        state.prize_pool
    }

    async fn mark_online(&self, id: UserId) {
        let mut state = self.state.lock().await;
        state.online_users.insert(id);
    }

    async fn mark_offline(&self, id: &UserId) -> bool {
        let mut state = self.state.lock().await;
        state.online_users.remove(id)
    }

    async fn stats_snapshot(&self) -> GameStats {
        let state = self.state.lock().await;
        GameStats {
            global_clicks: state.global_clicks,
            prize_pool: state.prize_pool,
            next_draw_time: state.next_draw_time,
            online_users: state.online_users.len(),
        }
    }
}
