// Connection handling module
// Accepts a TCP connection and serves HTTP/1.1 on it in its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::ServerContext;
use crate::handler;
use crate::logger;

/// Accept a connection and hand it off to a spawned task.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    ctx: &Arc<ServerContext>,
) {
    if ctx.config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    handle_connection(stream, Arc::clone(ctx), peer_addr);
}

/// Serve a single connection until the peer closes it.
///
/// Requests are independent and stateless, so each connection runs in a
/// plain spawned task with keep-alive enabled and no timeout. A malformed
/// request line is answered by hyper's default 400 handling; the error
/// surfaces here and is logged.
fn handle_connection(
    stream: tokio::net::TcpStream,
    ctx: Arc<ServerContext>,
    peer_addr: std::net::SocketAddr,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let ctx = Arc::clone(&ctx);
                async move { handler::handle_request(req, ctx, peer_addr).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
