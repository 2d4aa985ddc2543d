//! UTC timestamp helpers.
//!
//! All time-range bounds on the wire are ISO-8601 UTC strings with
//! millisecond precision (`YYYY-MM-DDTHH:mm:ss.sssZ`). The gateway never
//! parses the bounds a caller supplies; it only produces new ones when a
//! request omits `until`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format an instant as `YYYY-MM-DDTHH:mm:ss.sssZ`.
pub fn iso_millis(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The current instant as `YYYY-MM-DDTHH:mm:ss.sssZ`.
///
/// Evaluated at the call site on every invocation; callers that default an
/// omitted `until` must call this per request, never cache the result.
pub fn now_iso_millis() -> String {
    iso_millis(Utc::now())
}
