use chrono::{DateTime, Utc};

use mergington::data::Activity;
use mergington::errors::CatalogError;
use mergington::id::ActivityName;

use crate::catalog;
use crate::services::ActivityServiceInMemory;

/// Shared application state passed to all route handlers.
///
/// Built once at startup and handed to the router behind an `Arc`.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// State seeded from the school's activity catalog.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_catalog(catalog::seed())
    }

    pub fn with_catalog(
        catalog: impl IntoIterator<Item = (ActivityName, Activity)>,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            activities: ActivityServiceInMemory::new(catalog)?,
            started_at: Utc::now(),
        })
    }
}
