//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the request handlers: MIME lookup,
//! response builders and the header finalization middleware.

pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_403_response, build_404_response, build_405_response, build_500_response,
    build_options_response, build_redirect_response,
};
