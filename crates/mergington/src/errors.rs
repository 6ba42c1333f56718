//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Rejections produced by the activity registry.
///
/// A rejected operation never modifies the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound(String),
    #[error("Student is already signed up for this activity")]
    AlreadyEnrolled { activity: String, participant: String },
    #[error("Student is not signed up for this activity")]
    NotEnrolled { activity: String, participant: String },
    #[error("Email must not be empty")]
    EmptyParticipant,
}

/// Problems with the hard-coded catalog, detected when the registry is seeded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Activity {0} is defined more than once")]
    DuplicateActivity(String),
    #[error("Participant {participant} is listed twice in {activity}")]
    DuplicateParticipant { activity: String, participant: String },
    #[error("Activity {0} must allow at least one participant")]
    ZeroCapacity(String),
}
