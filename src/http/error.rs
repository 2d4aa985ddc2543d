//! Request-level errors and their wire representation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Recoverable, user-facing failures of a data query.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0} is not a valid place")]
    UnknownPlace(String),

    #[error("{0} is not a valid node")]
    UnknownNode(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Wire envelope for failed queries: `{"error": true, "reason": "..."}`.
#[derive(Serialize)]
struct ErrorEnvelope {
    error: bool,
    reason: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::UnknownPlace(_) | GatewayError::UnknownNode(_) => {
                StatusCode::BAD_REQUEST
            }
            // Upstream failures keep a 200 status: existing clients only
            // inspect the body, and the envelope carries the reason.
            GatewayError::Upstream(_) => StatusCode::OK,
        };

        let envelope = ErrorEnvelope {
            error: true,
            reason: self.to_string(),
        };

        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_place_names_the_offending_value() {
        let err = GatewayError::UnknownPlace("attic".into());
        assert_eq!(err.to_string(), "attic is not a valid place");
    }

    #[test]
    fn unknown_node_names_the_offending_value() {
        let err = GatewayError::UnknownNode("sensor9".into());
        assert_eq!(err.to_string(), "sensor9 is not a valid node");
    }

    #[test]
    fn envelope_shape_matches_the_wire_format() {
        let envelope = ErrorEnvelope {
            error: true,
            reason: "attic is not a valid place".into(),
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": true,
                "reason": "attic is not a valid place"
            })
        );
    }
}
