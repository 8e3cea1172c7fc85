use serde::Serialize;

use crate::db::TodoRecord;

/// Wire representation of a todo: exactly `id`, `name` and `completed`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TodoView {
    pub id: i64,
    pub name: String,
    pub completed: bool,
}

impl From<TodoRecord> for TodoView {
    fn from(r: TodoRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            completed: r.completed,
        }
    }
}

impl TodoView {
    pub fn from_records(records: Vec<TodoRecord>) -> Vec<TodoView> {
        records.into_iter().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn record(id: i64, name: &str) -> TodoRecord {
        TodoRecord {
            id,
            name: name.to_string(),
            completed: id % 2 == 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn projection_drops_internal_fields() {
        let value = serde_json::to_value(TodoView::from(record(3, "x"))).unwrap();
        assert_eq!(value, json!({"id": 3, "name": "x", "completed": false}));
    }

    #[test]
    fn list_projection_keeps_order() {
        let views = TodoView::from_records(vec![record(2, "b"), record(1, "a")]);
        let ids: Vec<i64> = views.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(views[0].completed);
    }
}
