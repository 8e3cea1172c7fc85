use axum::{
    Router,
    routing::get,
};

use crate::db::TodoStorage;
use crate::handlers::{pages, todos};
use crate::middleware::debug_errors::expose_error_detail;

pub const API_PREFIX: &str = "/api/v1";

#[derive(Clone)]
pub struct TodoState {
    pub storage: TodoStorage,
    pub debug: bool,
}

impl TodoState {
    pub fn new(storage: TodoStorage, debug: bool) -> Self {
        Self { storage, debug }
    }
}

pub fn todo_router(state: TodoState) -> Router {
    let debug = state.debug;

    let api = Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/{id}",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        );

    let router = Router::new()
        .route("/", get(pages::index))
        .route("/favicon.ico", get(pages::favicon))
        .nest(API_PREFIX, api)
        .with_state(state);

    if debug {
        router.layer(axum::middleware::map_response(expose_error_detail))
    } else {
        router
    }
}
