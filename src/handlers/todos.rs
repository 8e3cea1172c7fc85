use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
};
use tracing::info;

use crate::middleware::{BaseUrl, TodoId, TodoPayload};
use crate::router::{API_PREFIX, TodoState};
use crate::types::TodoView;
use crate::TodoError;

fn collection_path() -> String {
    format!("{API_PREFIX}/todos")
}

fn item_path(id: i64) -> String {
    format!("{API_PREFIX}/todos/{id}")
}

/// GET /api/v1/todos
pub async fn list_todos(State(state): State<TodoState>) -> Result<Json<Vec<TodoView>>, TodoError> {
    let records = state.storage.list().await?;
    Ok(Json(TodoView::from_records(records)))
}

/// POST /api/v1/todos -> 201 with `Location` of the new item.
pub async fn create_todo(
    State(state): State<TodoState>,
    base: BaseUrl,
    TodoPayload(input): TodoPayload,
) -> Result<impl IntoResponse, TodoError> {
    let record = state.storage.create(&input.name, input.completed).await?;
    info!(id = record.id, completed = record.completed, "todo created");

    let location = base.location(&item_path(record.id));
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(TodoView::from(record)),
    ))
}

/// GET /api/v1/todos/{id}
pub async fn get_todo(
    State(state): State<TodoState>,
    TodoId(id): TodoId,
) -> Result<Json<TodoView>, TodoError> {
    let record = state.storage.get(id).await?;
    Ok(Json(record.into()))
}

/// PUT /api/v1/todos/{id} -> replaces `name` and `completed`.
pub async fn update_todo(
    State(state): State<TodoState>,
    TodoId(id): TodoId,
    TodoPayload(input): TodoPayload,
) -> Result<Json<TodoView>, TodoError> {
    let record = state
        .storage
        .update(id, &input.name, input.completed)
        .await?;
    info!(id, completed = record.completed, "todo updated");
    Ok(Json(record.into()))
}

/// DELETE /api/v1/todos/{id} -> 204 whether or not the item existed.
pub async fn delete_todo(
    State(state): State<TodoState>,
    TodoId(id): TodoId,
    base: BaseUrl,
) -> Result<impl IntoResponse, TodoError> {
    let removed = state.storage.delete(id).await?;
    info!(id, removed, "todo deleted");

    let location = base.location(&collection_path());
    Ok((StatusCode::NO_CONTENT, [(LOCATION, location)]))
}
