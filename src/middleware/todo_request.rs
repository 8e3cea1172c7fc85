use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::TodoError;

/// Validated body of a create or update request.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoInput {
    pub name: String,
    pub completed: bool,
}

/// A body field as it arrived, before validation.
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Null,
    Bool(bool),
    Text(String),
    /// Numbers, arrays and objects. Never valid for any todo field.
    Other,
}

impl From<Value> for FieldValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::String(s) => FieldValue::Text(s),
            _ => FieldValue::Other,
        }
    }
}

type Fields = HashMap<String, FieldValue>;

impl TodoInput {
    fn from_fields(fields: &Fields) -> Result<Self, TodoError> {
        let name = match fields.get("name") {
            None | Some(FieldValue::Null) => {
                return Err(TodoError::validation("name", "is required"));
            }
            Some(FieldValue::Text(s)) if s.is_empty() => {
                return Err(TodoError::validation("name", "must not be empty"));
            }
            Some(FieldValue::Text(s)) => s.clone(),
            Some(_) => return Err(TodoError::validation("name", "must be a string")),
        };

        let completed = match fields.get("completed") {
            None | Some(FieldValue::Null) => false,
            Some(FieldValue::Bool(b)) => *b,
            Some(FieldValue::Text(s)) => parse_bool(s).ok_or_else(|| {
                TodoError::validation("completed", format!("`{s}` is not a boolean"))
            })?,
            Some(FieldValue::Other) => {
                return Err(TodoError::validation("completed", "must be a boolean"));
            }
        };

        Ok(Self { name, completed })
    }
}

/// Case-insensitive boolean tokens as sent by forms and loose JSON clients.
///
/// Only strings go through here: the JSON string `"1"` is `true`, while the
/// JSON number `1` is rejected, since numbers are never booleans on the wire.
pub fn parse_bool(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

enum BodyKind {
    Json,
    Form,
}

fn body_kind(content_type: Option<&str>) -> Option<BodyKind> {
    let essence = content_type?.split(';').next()?.trim().to_ascii_lowercase();
    if essence == "application/json" || essence.ends_with("+json") {
        Some(BodyKind::Json)
    } else if essence == "application/x-www-form-urlencoded" {
        Some(BodyKind::Form)
    } else {
        None
    }
}

/// Decode a JSON or form-encoded body and validate it. Unknown fields are ignored.
pub fn decode_body(content_type: Option<&str>, body: &[u8]) -> Result<TodoInput, TodoError> {
    let fields: Fields = match body_kind(content_type) {
        Some(BodyKind::Json) => {
            let value: Value = serde_json::from_slice(body).map_err(|e| {
                TodoError::validation("body", format!("is not valid JSON: {e}"))
            })?;
            let Value::Object(map) = value else {
                return Err(TodoError::validation("body", "must be a JSON object"));
            };
            map.into_iter().map(|(k, v)| (k, v.into())).collect()
        }
        Some(BodyKind::Form) => {
            // Last value wins for a repeated key, matching serde_json objects.
            url::form_urlencoded::parse(body)
                .map(|(k, v)| (k.into_owned(), FieldValue::Text(v.into_owned())))
                .collect()
        }
        None if body.is_empty() => Fields::new(),
        None => {
            return Err(TodoError::UnsupportedMediaType(
                content_type.unwrap_or("<none>").to_string(),
            ));
        }
    };

    TodoInput::from_fields(&fields)
}

/// Extractor yielding a validated [`TodoInput`].
pub struct TodoPayload(pub TodoInput);

impl<S> FromRequest<S> for TodoPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = match Bytes::from_request(req, state).await {
            Ok(b) => b,
            Err(rejection) => return Err(rejection.into_response()),
        };

        decode_body(content_type.as_deref(), &body)
            .map(TodoPayload)
            .map_err(IntoResponse::into_response)
    }
}
