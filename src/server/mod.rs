// Server module entry point
// Provides listener setup, the accept loop and per-connection handling

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword and cannot be a module name, so the file is mapped
// to `server_loop` explicitly.
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used functions
pub use listener::create_listener;
