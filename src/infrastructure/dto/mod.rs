//! Data Transfer Objects (DTOs) for the clicker game.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket message DTOs
//! - `http`: HTTP API request/response DTOs
//!
//! Field names follow the original JSON wire format (camelCase).

pub mod conversion;
pub mod http;
pub mod websocket;
