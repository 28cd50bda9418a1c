//! HTTP response building module
//!
//! Provides builders for the status codes the server emits, decoupled from
//! path resolution and file loading. CORS and cache-control headers are NOT
//! set here; [`crate::http::cors::finalize`] stamps them on every response
//! at the last moment before transmission.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 OK response for a regular file
///
/// `Content-Length` always reflects the full file size; a HEAD request
/// gets the same headers with an empty body.
pub fn build_file_response(data: &[u8], content_type: &str, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build generic HTML response (directory listings)
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build OPTIONS response
///
/// A blanket preflight acknowledgment: 200 with an empty body, independent
/// of whether the requested path exists. The CORS headers themselves are
/// added by the finalizer like on every other response.
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 301 redirect response (directory path missing its trailing slash)
pub fn build_redirect_response(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Location", location)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 403 Forbidden response
pub fn build_403_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(403)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("403 Forbidden")))
        .unwrap_or_else(|e| {
            log_build_error("403", &e);
            Response::new(Full::new(Bytes::from("403 Forbidden")))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_response_is_200_with_empty_body() {
        let response = build_options_response();
        assert_eq!(response.status(), 200);
        // Full<Bytes> with no data reports an exact size of zero
        use hyper::body::Body as _;
        assert_eq!(response.body().size_hint().exact(), Some(0));
    }

    #[test]
    fn test_file_response_head_keeps_content_length() {
        let data = b"payload bytes";
        let response = build_file_response(data, "application/octet-stream", true);
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("content-length").unwrap(),
            &data.len().to_string()
        );
        use hyper::body::Body as _;
        assert_eq!(response.body().size_hint().exact(), Some(0));
    }

    #[test]
    fn test_redirect_sets_location() {
        let response = build_redirect_response("/logs/");
        assert_eq!(response.status(), 301);
        assert_eq!(response.headers().get("location").unwrap(), "/logs/");
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(build_403_response().status(), 403);
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_405_response().status(), 405);
        assert_eq!(build_500_response().status(), 500);
    }
}
