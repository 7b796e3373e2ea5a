//! InMemory PlayerStore 実装
//!
//! ドメイン層が定義する PlayerStore trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ## 同時実行性
//!
//! テーブル全体を 1 つの `tokio::sync::Mutex` で保護します。更新操作の
//! ロック保持時間は O(1)（ウォレット索引の参照とカウンタ更新のみ）で、
//! 同一レコードへの並行更新は Mutex により直列化されるため lost update
//! は発生しません。スナップショットはロック中にクローンを取り、
//! ソートなどの加工はロック外（[`crate::domain::rules`]）で行います。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::common::time::Clock;
use crate::domain::{
    Player, PlayerName, PlayerStore, StoreError, TicketQuantity, Timestamp, UserId, WalletAddress,
};

/// プレイヤーテーブル（Mutex の内側）
#[derive(Default)]
struct PlayerTable {
    /// UserId → Player 本体
    players: HashMap<UserId, Player>,
    /// ウォレットアドレス → UserId の一意索引
    wallet_index: HashMap<String, UserId>,
    /// 登録順（リーダーボードのタイブレークに使用）
    insertion_order: Vec<UserId>,
}

/// インメモリ PlayerStore 実装
pub struct InMemoryPlayerStore {
    table: Mutex<PlayerTable>,
    clock: Arc<dyn Clock>,
}

impl InMemoryPlayerStore {
    /// 新しい InMemoryPlayerStore を作成
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Mutex::new(PlayerTable::default()),
            clock,
        }
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn create_player(
        &self,
        name: PlayerName,
        wallet_address: WalletAddress,
    ) -> Result<Player, StoreError> {
        let mut table = self.table.lock().await;

        if table.wallet_index.contains_key(wallet_address.as_str()) {
            return Err(StoreError::DuplicateWallet(
                wallet_address.as_str().to_string(),
            ));
        }

        let id = UserId::generate();
        let created_at = Timestamp::new(self.clock.now_jst_millis());
        let player = Player::new(id, name, wallet_address, created_at);

        table
            .wallet_index
            .insert(player.wallet_address.as_str().to_string(), id);
        table.insertion_order.push(id);
        table.players.insert(id, player.clone());

        tracing::info!("Player '{}' registered", id);
        Ok(player)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Player, StoreError> {
        let table = self.table.lock().await;
        table
            .players
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::PlayerNotFound(id.to_string()))
    }

    async fn get_by_wallet(&self, address: &WalletAddress) -> Result<Player, StoreError> {
        let table = self.table.lock().await;
        let id = table
            .wallet_index
            .get(address.as_str())
            .ok_or_else(|| StoreError::PlayerNotFound(address.as_str().to_string()))?;
        table
            .players
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::PlayerNotFound(id.to_string()))
    }

    async fn increment_clicks(&self, id: &UserId) -> Result<Player, StoreError> {
        let mut table = self.table.lock().await;
        let player = table
            .players
            .get_mut(id)
            .ok_or_else(|| StoreError::PlayerNotFound(id.to_string()))?;

        player.clicks += 1;
        Ok(player.clone())
    }

    async fn debit_clicks_credit_tickets(
        &self,
        id: &UserId,
        quantity: TicketQuantity,
    ) -> Result<Player, StoreError> {
        let mut table = self.table.lock().await;
        let player = table
            .players
            .get_mut(id)
            .ok_or_else(|| StoreError::PlayerNotFound(id.to_string()))?;

        let cost = quantity.cost_in_clicks();
        if player.clicks < cost {
            return Err(StoreError::InsufficientClicks {
                required: cost,
                available: player.clicks,
            });
        }

        player.clicks -= cost;
        player.tickets += u64::from(quantity.value());
        Ok(player.clone())
    }

    async fn snapshot(&self) -> Vec<Player> {
        let table = self.table.lock().await;
        table
            .insertion_order
            .iter()
            .filter_map(|id| table.players.get(id))
            .cloned()
            .collect()
    }

    async fn player_count(&self) -> usize {
        let table = self.table.lock().await;
        table.players.len()
    }
}
