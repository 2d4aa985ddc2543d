//! Upstream data source client.
//!
//! # Data Flow
//! ```text
//! handler (validated place/node, time range)
//!     → Upstream::fetch(node, since, until)
//!     → single GET to the configured URL with query parameters
//!     → body relayed verbatim, or transport error surfaced
//! ```
//!
//! # Design Decisions
//! - One request per fetch: no retries, no response caching
//! - The upstream's status code is not inspected; its body is the answer
//! - A bounded client timeout keeps a stalled upstream from pinning a
//!   request slot forever

pub mod client;

pub use client::{HttpUpstream, Upstream, UpstreamError};
