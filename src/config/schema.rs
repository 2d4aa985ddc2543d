//! Settings schema definitions.
//!
//! The registry maps place names to places, and each place maps node names
//! to nodes. Node payloads are opaque to the gateway; only their existence
//! matters for request validation. Unknown fields are preserved so the
//! configuration snapshot endpoint returns the file faithfully.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root settings for the gateway: the place/node registry.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Registered places by name.
    pub places: HashMap<String, Place>,
}

/// A named location containing data-reporting nodes.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Place {
    /// Registered nodes by name.
    #[serde(default)]
    pub nodes: HashMap<String, Node>,

    /// Any further per-place fields, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Opaque per-node payload. The gateway checks existence only.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(transparent)]
pub struct Node(pub serde_json::Value);

impl Settings {
    /// Look up a place by name. Absence is an expected state.
    pub fn place(&self, name: &str) -> Option<&Place> {
        self.places.get(name)
    }

    /// Look up a node under a specific place. Only that place's node
    /// registry is consulted; the same node name under another place does
    /// not count.
    pub fn node(&self, place: &str, name: &str) -> Option<&Node> {
        self.places.get(place).and_then(|p| p.nodes.get(name))
    }
}
