use chrono::{DateTime, Utc};

/// A stored `todo` row. Not serializable on purpose; see `types::todo::TodoView`
/// for the wire shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRecord {
    pub id: i64,
    pub name: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
