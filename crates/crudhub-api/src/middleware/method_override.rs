//! HTML forms can only submit GET and POST. A POST carrying a `_method`
//! field of `PUT` or `DELETE` is rewritten to that method before
//! routing, so edit and delete forms reach their real routes.

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

/// Form field naming the intended method.
pub const OVERRIDE_FIELD: &str = "_method";

/// Largest form body buffered while looking for the override field.
pub const MAX_FORM_BYTES: usize = 64 * 1024;

/// Rewrite `POST` + `_method` into the requested method.
pub async fn method_override(request: Request, next: Next) -> Response {
    if request.method() != Method::POST || !is_urlencoded(request.headers()) {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_FORM_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, path = %parts.uri.path(), "Rejected oversized form body");
            return (StatusCode::PAYLOAD_TOO_LARGE, "Form body too large").into_response();
        }
    };

    if let Some(method) = overridden_method(&bytes) {
        debug!(from = %parts.method, to = %method, path = %parts.uri.path(), "Method override");
        parts.method = method;
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

/// The method named by the first `_method` field, if it is one we honor.
fn overridden_method(body: &[u8]) -> Option<Method> {
    let (_, value) = url::form_urlencoded::parse(body).find(|(key, _)| key == OVERRIDE_FIELD)?;
    match value.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::routing::any;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    fn echo_app() -> Router {
        let inner = Router::new().route(
            "/target",
            any(|method: Method, body: String| async move { format!("{method} {body}") }),
        );
        Router::new()
            .fallback_service(inner)
            .layer(axum::middleware::from_fn(method_override))
    }

    async fn send(method: Method, content_type: Option<&str>, body: &str) -> String {
        let mut builder = Request::builder().method(method).uri("/target");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let response = echo_app()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    const FORM: &str = "application/x-www-form-urlencoded";

    #[test]
    fn test_overridden_method_parsing() {
        assert_eq!(overridden_method(b"_method=PUT&title=a"), Some(Method::PUT));
        assert_eq!(overridden_method(b"title=a&_method=delete"), Some(Method::DELETE));
        assert_eq!(overridden_method(b"_method=GET"), None);
        assert_eq!(overridden_method(b"_method=PATCH"), None);
        assert_eq!(overridden_method(b"title=a"), None);
    }

    #[tokio::test]
    async fn test_post_with_override_is_rewritten_and_body_preserved() {
        let echoed = send(Method::POST, Some(FORM), "_method=PUT&title=X").await;
        assert_eq!(echoed, "PUT _method=PUT&title=X");
    }

    #[tokio::test]
    async fn test_non_form_post_is_untouched() {
        let echoed = send(Method::POST, Some("application/json"), "_method=PUT").await;
        assert_eq!(echoed, "POST _method=PUT");
    }

    #[tokio::test]
    async fn test_get_is_untouched() {
        let echoed = send(Method::GET, None, "").await;
        assert_eq!(echoed, "GET ");
    }
}
