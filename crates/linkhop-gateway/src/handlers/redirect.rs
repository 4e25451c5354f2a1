use crate::error::{AppError, Operation, Result};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use url::Url;

/// A `302 Found` pointing at a stored long URL.
#[derive(Debug)]
pub struct Found {
    location: HeaderValue,
}

impl Found {
    /// Builds the redirect. Plain ASCII URLs are sent verbatim; anything else
    /// is sent in its normalised form (punycode host, percent-encoded path).
    pub fn new(long_url: &str) -> Result<Self> {
        if long_url.is_ascii() {
            if let Ok(location) = HeaderValue::from_str(long_url) {
                return Ok(Self { location });
            }
        }

        Url::parse(long_url)
            .ok()
            .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
            .map(|location| Self { location })
            .ok_or_else(|| AppError::Internal {
                operation: Operation::Resolve,
                cause: format!("stored URL cannot be used as a Location header: {long_url}"),
            })
    }

    pub fn location(&self) -> &HeaderValue {
        &self.location
    }
}

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(LOCATION, self.location)]).into_response()
    }
}

pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Found> {
    let long_url = state.redirector().resolve(&slug).await?;
    Found::new(&long_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_url_is_used_verbatim() {
        let found = Found::new("https://example.com/a/b?q=1").unwrap();
        assert_eq!(found.location(), "https://example.com/a/b?q=1");
    }

    #[test]
    fn non_ascii_url_is_normalised() {
        let found = Found::new("https://bücher.example/straße").unwrap();
        assert_eq!(
            found.location(),
            "https://xn--bcher-kva.example/stra%C3%9Fe"
        );
    }

    #[test]
    fn unusable_url_is_an_internal_error() {
        let err = Found::new("not a url\u{7f}").unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn responds_with_302() {
        let response = Found::new("https://example.com").unwrap().into_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "https://example.com");
    }
}
