//! HTML form method override.
//!
//! Browsers only submit forms with GET and POST. A form posting to
//! `/listings/1?_method=PUT` is treated as `PUT /listings/1`.

use axum::extract::Request;
use axum::http::Method;

/// Query parameter naming the intended method.
pub const METHOD_PARAM: &str = "_method";

/// Rewrites a `POST` carrying `_method=PUT|PATCH|DELETE` in its query string.
///
/// Other methods and other override values pass through unchanged. This has
/// to run before routing, so it wraps the router as a service rather than
/// being added with `Router::layer`.
pub fn override_method(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }

    let Some(query) = req.uri().query() else {
        return req;
    };

    let target = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == METHOD_PARAM)
        .and_then(|(_, value)| match value.to_ascii_uppercase().as_str() {
            "PUT" => Some(Method::PUT),
            "PATCH" => Some(Method::PATCH),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        });

    if let Some(method) = target {
        tracing::debug!(uri = %req.uri(), %method, "Overriding form method");
        *req.method_mut() = method;
    }

    req
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(method: Method, uri: &str) -> Request {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_post_is_overridden() {
        let req = override_method(request(Method::POST, "/listings/1?_method=PUT"));
        assert_eq!(req.method(), Method::PUT);

        let req = override_method(request(Method::POST, "/listing/1?_method=delete"));
        assert_eq!(req.method(), Method::DELETE);
    }

    #[test]
    fn test_path_is_untouched() {
        let req = override_method(request(Method::POST, "/listings/1/reviews/2?_method=DELETE"));
        assert_eq!(req.uri().path(), "/listings/1/reviews/2");
    }

    #[test]
    fn test_only_post_is_overridden() {
        let req = override_method(request(Method::GET, "/listings/1?_method=DELETE"));
        assert_eq!(req.method(), Method::GET);
    }

    #[test]
    fn test_unknown_override_is_ignored() {
        let req = override_method(request(Method::POST, "/listings?_method=TRACE"));
        assert_eq!(req.method(), Method::POST);

        let req = override_method(request(Method::POST, "/listings"));
        assert_eq!(req.method(), Method::POST);
    }
}
