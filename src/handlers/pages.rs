use axum::{
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse},
};

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const FAVICON: &[u8] = include_bytes!("../../static/favicon.ico");

/// GET / -> static HTML shell that drives the API from the browser.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn favicon() -> impl IntoResponse {
    ([(CONTENT_TYPE, "image/vnd.microsoft.icon")], FAVICON)
}
