//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (JSON)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//!     → cloned into each worker at startup
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once loaded; there is no reload path
//! - A missing or malformed file is fatal before any listener binds
//! - Absence of a place or node is an expected lookup result, not an error
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports every problem, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_settings, SettingsError};
pub use schema::{Node, Place, Settings};
pub use validation::{validate_settings, ValidationError};
