//! Database module: the todo row model, its schema and the SQLite storage.
//!
//! Layout:
//! - `models.rs`: Rust struct mirroring a `todo` row
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: `TodoStorage`, eager CRUD over a pooled connection

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::TodoRecord;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, TodoStorage};
