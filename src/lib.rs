//! Real-time multiplayer clicker game library.
//!
//! This library provides the game-state service for a clicker game:
//! an in-memory store of player state, the economy rules (clicks,
//! lottery tickets, prize pool), and a WebSocket broadcast engine that
//! pushes state changes to all connected clients.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// shared library
pub mod common;
