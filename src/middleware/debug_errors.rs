use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::error::{ApiErrorBody, ApiErrorResponse, ErrorDetail};

/// Debug-mode response mapper: rewrites internal error bodies to include the
/// underlying error text attached by `TodoError::into_response`.
pub async fn expose_error_detail(response: Response) -> Response {
    let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };
    let status = response.status();
    let body = ApiErrorResponse {
        error: ApiErrorBody::internal(Some(detail)),
    };
    (status, Json(body)).into_response()
}
