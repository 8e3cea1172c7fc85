use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use headers::{HeaderMapExt, Host};
use std::convert::Infallible;
use url::Url;

/// Absolute base URL of the inbound request (`http://{Host}/`), used to build
/// `Location` headers. `None` when the request carries no usable `Host`.
#[derive(Debug, Clone)]
pub struct BaseUrl(pub Option<Url>);

impl BaseUrl {
    pub fn from_host(host: &Host) -> Option<Url> {
        let authority = match host.port() {
            Some(port) => format!("{}:{}", host.hostname(), port),
            None => host.hostname().to_string(),
        };
        Url::parse(&format!("http://{authority}/")).ok()
    }

    /// Resolve a path relative to the base. Falls back to an absolute path.
    pub fn location(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        self.0
            .as_ref()
            .and_then(|base| base.join(path).ok())
            .map(String::from)
            .unwrap_or_else(|| format!("/{path}"))
    }
}

impl<S> FromRequestParts<S> for BaseUrl
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let base = parts
            .headers
            .typed_get::<Host>()
            .and_then(|host| Self::from_host(&host));
        Ok(Self(base))
    }
}
