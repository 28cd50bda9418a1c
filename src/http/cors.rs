//! Response finalization middleware
//!
//! Every response the handlers produce is passed through [`finalize`]
//! right before it is handed back to the connection, so the CORS and
//! cache-control headers end up on success and error responses alike.

use hyper::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL,
};
use hyper::Response;

/// Any origin may read responses from this server.
pub const ALLOW_ORIGIN: &str = "*";

/// Methods advertised to cross-origin callers.
pub const ALLOW_METHODS: &str = "GET, OPTIONS";

/// Clients must not cache anything; log files change underneath them.
pub const NO_CACHE: &str = "no-store, no-cache, must-revalidate";

/// Insert the CORS and cache-control headers into a finished response.
///
/// `insert` overwrites, so headers set earlier by a builder cannot
/// shadow the mandated values.
pub fn finalize<B>(mut response: Response<B>) -> Response<B> {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;
    use hyper::body::Bytes;

    fn header_value<'a>(response: &'a Response<Full<Bytes>>, name: &str) -> Option<&'a str> {
        response.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_finalize_adds_all_three_headers() {
        let response = finalize(Response::new(Full::new(Bytes::from("ok"))));
        assert_eq!(header_value(&response, "access-control-allow-origin"), Some("*"));
        assert_eq!(
            header_value(&response, "access-control-allow-methods"),
            Some("GET, OPTIONS")
        );
        assert_eq!(
            header_value(&response, "cache-control"),
            Some("no-store, no-cache, must-revalidate")
        );
    }

    #[test]
    fn test_finalize_applies_to_error_responses() {
        let response = Response::builder()
            .status(404)
            .body(Full::new(Bytes::from("404 Not Found")))
            .unwrap();
        let response = finalize(response);
        assert_eq!(response.status(), 404);
        assert_eq!(header_value(&response, "access-control-allow-origin"), Some("*"));
    }

    #[test]
    fn test_finalize_overwrites_existing_cache_control() {
        let response = Response::builder()
            .status(200)
            .header("Cache-Control", "public, max-age=3600")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let response = finalize(response);
        assert_eq!(
            header_value(&response, "cache-control"),
            Some("no-store, no-cache, must-revalidate")
        );
    }
}
