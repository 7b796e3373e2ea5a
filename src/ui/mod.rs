//! Clicker game server implementation (HTTP + WebSocket).

mod error;
mod handler;
mod push;
mod server;
mod signal;
pub mod state;

pub use server::{Server, build_router};
