//! Request dispatch module
//!
//! Entry point for HTTP request processing: method gate, static file
//! dispatch, access logging and response finalization.

use crate::config::ServerContext;
use crate::handler::static_files;
use crate::http::{self, cors};
use crate::logger;
use crate::logger::AccessLogEntry;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling.
///
/// Every response leaves through [`cors::finalize`] at the single return
/// point, so the mandated headers are present on every status code.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    ctx: Arc<ServerContext>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let access_log = ctx.config.logging.access_log;

    let request_ctx = RequestContext {
        path: uri.path(),
        is_head: *method == Method::HEAD,
        access_log,
    };

    let response = respond(method, &request_ctx, &ctx.root_dir).await;

    if access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.http_version = logger::version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
            .unwrap_or(usize::MAX);
        entry.referer = req
            .headers()
            .get("referer")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        logger::log_access(&entry, &ctx.config.logging.access_log_format);
    }

    Ok(cors::finalize(response))
}

/// Dispatch on the request method.
///
/// GET/HEAD go to the filesystem; OPTIONS is acknowledged blanketly for
/// any path, existing or not; everything else is refused.
async fn respond(
    method: &Method,
    ctx: &RequestContext<'_>,
    root: &Path,
) -> Response<Full<Bytes>> {
    match *method {
        Method::GET | Method::HEAD => static_files::serve(ctx, root).await,
        Method::OPTIONS => http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    }
}
