//! Sleepytime gateway library.
//!
//! A small read-only HTTP gateway in front of a remote time-series data
//! source. Requests name a place and a node; the gateway validates the pair
//! against a static registry loaded at startup, fills in a missing
//! end-of-range bound with the current instant, and relays the query to the
//! upstream source.

pub mod clock;
pub mod config;
pub mod http;
pub mod upstream;

pub use config::{Settings, SettingsError};
pub use http::HttpServer;
pub use upstream::{HttpUpstream, Upstream, UpstreamError};
