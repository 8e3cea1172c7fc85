//! SQL DDL for initializing the todo storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, never reused after delete
/// - `name` required and non-empty; duplicates are allowed
/// - `completed` BOOLEAN (stored as INTEGER 0/1), defaults to 0
/// - `created_at` RFC3339 insertion time, internal only
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS todo (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) > 0),
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);
"#;
