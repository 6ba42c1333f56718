//! The shared library for Mergington, the extracurricular activity sign-up service.
//!
//! This library holds the types that cross the HTTP boundary, the error taxonomy
//! of the activity registry, participant identifiers and logging setup.

pub mod data;
pub mod errors;
pub mod id;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
