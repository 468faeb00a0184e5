//! Punchcard Core - Shared domain types.
//!
//! This crate provides the types used by the Punchcard loyalty service:
//! - `server` - HTTP API for check-ins and point balances
//! - `integration-tests` - End-to-end tests against a running server
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for customer IDs, check-in IDs, points, and timestamps

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
