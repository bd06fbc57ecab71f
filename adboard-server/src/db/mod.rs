//! Database layer - connection pool, provisioning, and repository
//!
//! # Design Principles
//!
//! - Bounded connection pool, created once at startup
//! - One pooled connection per request, released on every exit path
//! - Single-statement writes - rely on DB constraints and statement atomicity

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
