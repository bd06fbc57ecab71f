//! adboard-server: HTTP CRUD service for advertisements
//!
//! Exposes create/read/update/delete over a single advertisement
//! entity backed by one PostgreSQL table.

pub mod db;
pub mod http;
pub mod models;
