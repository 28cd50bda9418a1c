//! Logger module
//!
//! Stdout/stderr logging for the server: startup banner, access log lines,
//! connection and error reporting. The server never writes files, so there
//! is no file-backed log target.

mod format;

pub use format::AccessLogEntry;

use hyper::Version;
use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, root_dir: &Path) {
    println!("======================================");
    println!("Starting HTTP server on http://{addr}");
    println!("Serving files from: {}", root_dir.display());
    println!();
    println!("Open your browser and navigate to:");
    println!("  http://localhost:{}/log-viewer.html", addr.port());
    println!();
    println!("Press Ctrl+C to stop the server");
    println!("======================================\n");
}

pub fn log_shutdown() {
    println!("\nServer stopped.");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}

/// Short version label for access log lines
pub const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2.0",
        _ => "1.1",
    }
}
