//! InMemory Repository 実装
//!
//! HashMap をインメモリ DB として使用します。全ての状態は揮発性で、
//! プロセス再起動時に失われます。永続化は行いません。

pub mod game_state;
pub mod player;

pub use game_state::InMemoryGameStateStore;
pub use player::InMemoryPlayerStore;
