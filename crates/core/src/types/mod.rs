//! Core types for Punchcard.
//!
//! This module provides type-safe wrappers for the loyalty domain concepts.

pub mod id;
pub mod points;
pub mod timestamp;

pub use id::{CheckinId, CustomerId, CustomerIdError, number_to_string};
pub use points::{POINTS_PER_CHECKIN, Points};
pub use timestamp::{iso_millis, to_iso_millis};
