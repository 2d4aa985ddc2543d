//! Route handlers.
//!
//! # Responsibilities
//! - Serve the settings snapshot
//! - Validate place/node pairs before any upstream I/O
//! - Default an omitted `until` to the current instant, per request
//! - Relay the upstream body verbatim
//!
//! # Design Decisions
//! - Both range endpoints share one query path: the open-ended variant
//!   computes `until` and calls straight into it, rather than rewriting
//!   the request path and going back through the router
//! - Validation short-circuits synchronously; the upstream is only
//!   contacted for a registered place/node pair

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::clock;
use crate::http::error::GatewayError;
use crate::http::server::AppState;

/// `GET /`: the full settings snapshot.
pub async fn settings_snapshot(State(state): State<AppState>) -> Response {
    Json(state.settings.as_ref().clone()).into_response()
}

/// `GET /places/{place}/{node}/since/{since}`: open-ended range.
///
/// `until` becomes the instant this request is handled.
pub async fn query_open_ended(
    State(state): State<AppState>,
    Path((place, node, since)): Path<(String, String, String)>,
) -> Result<Response, GatewayError> {
    let until = clock::now_iso_millis();
    run_query(&state, &place, &node, &since, &until).await
}

/// `GET /places/{place}/{node}/since/{since}/until/{until}`: the
/// canonical query.
pub async fn query_range(
    State(state): State<AppState>,
    Path((place, node, since, until)): Path<(String, String, String, String)>,
) -> Result<Response, GatewayError> {
    run_query(&state, &place, &node, &since, &until).await
}

/// Shared query path: validate, then fetch and relay.
///
/// `since` and `until` are passed through untouched; in particular
/// `since > until` is not rejected here.
async fn run_query(
    state: &AppState,
    place: &str,
    node: &str,
    since: &str,
    until: &str,
) -> Result<Response, GatewayError> {
    let registered = state
        .settings
        .place(place)
        .ok_or_else(|| GatewayError::UnknownPlace(place.to_string()))?;

    if !registered.nodes.contains_key(node) {
        return Err(GatewayError::UnknownNode(node.to_string()));
    }

    let body = state.upstream.fetch(node, since, until).await?;
    Ok((StatusCode::OK, body).into_response())
}
