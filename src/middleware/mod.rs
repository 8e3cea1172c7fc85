pub mod base_url;
pub mod debug_errors;
pub mod todo_id;
pub mod todo_request;

pub use base_url::BaseUrl;
pub use todo_id::TodoId;
pub use todo_request::{TodoInput, TodoPayload};
