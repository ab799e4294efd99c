//! Spark Todo persistence layer
//!
//! Local single-user storage for the Spark Todo desktop application: SQLite
//! schema and migrations, first-run defaults, and CRUD over task groups,
//! tasks and settings. The embedding application (window management, bridge
//! layer, notification dialogs) calls into this crate with plain data and
//! gets plain data or typed errors back.

pub mod config;
pub mod database;
pub mod error;
pub mod services;
