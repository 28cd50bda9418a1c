// Server loop module
// Accepts connections until a shutdown notification arrives

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::ServerContext;
use crate::logger;

/// Run the accept loop until `shutdown` fires.
///
/// On shutdown the loop stops accepting and returns; connections already
/// handed to their tasks finish on their own (best-effort, unobserved).
#[allow(clippy::ignored_unit_patterns)]
pub async fn run(
    listener: TcpListener,
    ctx: Arc<ServerContext>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &ctx);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    Ok(())
}
