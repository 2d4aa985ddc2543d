//! HTTP surface of the gateway.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, access log, response headers)
//!     → handlers.rs (validate place/node, default until, query upstream)
//!     → error.rs (map failures to the wire error envelope)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod server;

pub use error::GatewayError;
pub use server::{AppState, HttpServer};
