//! Static file serving module
//!
//! Resolves request paths against the server root and loads file contents
//! or directory listings. All filesystem access is read-only.

use crate::handler::listing::{self, ListingEntry};
use crate::handler::router::RequestContext;
use crate::http::{self, mime, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use percent_encoding::percent_decode_str;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Index files served in place of a directory listing, in preference order.
const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Outcome of mapping a request path onto the filesystem
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A regular file to serve (also an index file inside a directory)
    File(PathBuf),
    /// A directory without an index file; generate a listing
    Listing(PathBuf),
    /// A directory requested without its trailing slash
    Redirect(String),
    NotFound,
    Forbidden,
}

/// Serve a GET/HEAD request below `root`
pub async fn serve(ctx: &RequestContext<'_>, root: &Path) -> Response<Full<Bytes>> {
    match resolve_path(root, ctx.path) {
        Resolved::File(path) => serve_file(ctx, &path).await,
        Resolved::Listing(dir) => serve_listing(ctx, &dir).await,
        Resolved::Redirect(location) => http::build_redirect_response(&location),
        Resolved::NotFound => http::build_404_response(),
        Resolved::Forbidden => http::build_403_response(),
    }
}

/// Map a raw request path onto the filesystem under `root`.
///
/// `root` must be canonical. The candidate path is canonicalized as well,
/// so symlinks are resolved before the containment check; anything ending
/// up outside the root reports `NotFound`, never the real location.
pub fn resolve_path(root: &Path, request_path: &str) -> Resolved {
    let Ok(decoded) = percent_decode_str(request_path).decode_utf8() else {
        return Resolved::NotFound;
    };

    let candidate = root.join(decoded.trim_start_matches('/'));
    let canonical = match candidate.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            return match e.kind() {
                ErrorKind::PermissionDenied => Resolved::Forbidden,
                _ => Resolved::NotFound,
            }
        }
    };

    if !canonical.starts_with(root) {
        return Resolved::NotFound;
    }

    if canonical.is_dir() {
        // Relative links inside a listing only work with a trailing slash.
        if !request_path.ends_with('/') {
            return Resolved::Redirect(format!("{request_path}/"));
        }
        for index in INDEX_FILES {
            let index_path = canonical.join(index);
            if index_path.is_file() {
                return Resolved::File(index_path);
            }
        }
        return Resolved::Listing(canonical);
    }

    Resolved::File(canonical)
}

/// Load a file and build the 200 response for it
async fn serve_file(ctx: &RequestContext<'_>, path: &Path) -> Response<Full<Bytes>> {
    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => return io_error_response(path, &e),
    };

    let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));
    response::build_file_response(&content, content_type, ctx.is_head)
}

/// Enumerate a directory and build the listing response for it
async fn serve_listing(ctx: &RequestContext<'_>, dir: &Path) -> Response<Full<Bytes>> {
    let mut read_dir = match fs::read_dir(dir).await {
        Ok(rd) => rd,
        Err(e) => return io_error_response(dir, &e),
    };

    let mut entries = Vec::new();
    loop {
        match read_dir.next_entry().await {
            Ok(Some(entry)) => {
                let name = entry.file_name().to_string_lossy().into_owned();
                let is_dir = entry.file_type().await.is_ok_and(|t| t.is_dir());
                entries.push(ListingEntry { name, is_dir });
            }
            Ok(None) => break,
            Err(e) => return io_error_response(dir, &e),
        }
    }

    let display_path = percent_decode_str(ctx.path).decode_utf8_lossy();
    let html = listing::render(&display_path, entries);
    response::build_html_response(html, ctx.is_head)
}

/// Map a filesystem error onto the matching status response
fn io_error_response(path: &Path, err: &std::io::Error) -> Response<Full<Bytes>> {
    match err.kind() {
        ErrorKind::NotFound => http::build_404_response(),
        ErrorKind::PermissionDenied => {
            logger::log_warning(&format!("Access denied for '{}'", path.display()));
            http::build_403_response()
        }
        _ => {
            logger::log_error(&format!("Failed to read '{}': {err}", path.display()));
            http::build_500_response()
        }
    }
}
