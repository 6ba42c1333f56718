//! Backend services for activity and enrollment management.
//!
//! This module provides the service layer abstraction for the activity
//! registry and its in-memory implementation.

pub mod activities;

pub use activities::*;
