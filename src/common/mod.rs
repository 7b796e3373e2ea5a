//! Shared utilities for the clicker game application.

pub mod logger;
pub mod rng;
pub mod time;
