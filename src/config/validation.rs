//! Settings validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty place or node names, which no request could ever name
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: Settings → Result<(), Vec<ValidationError>>
//! - Runs before the settings are accepted into the system
//! - An empty registry is valid; every lookup simply misses
//! - Names are otherwise unrestricted: path segments arrive
//!   percent-decoded, so any non-empty string is reachable

use thiserror::Error;

use crate::config::schema::Settings;

/// A single semantic problem in the settings file.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("empty place name")]
    EmptyPlaceName,

    #[error("empty node name under place {place:?}")]
    EmptyNodeName { place: String },
}

/// Validate settings, collecting every problem found.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (place_name, place) in &settings.places {
        if place_name.is_empty() {
            errors.push(ValidationError::EmptyPlaceName);
        }

        for node_name in place.nodes.keys() {
            if node_name.is_empty() {
                errors.push(ValidationError::EmptyNodeName {
                    place: place_name.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
