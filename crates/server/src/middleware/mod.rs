//! HTTP middleware for the server.
//!
//! CORS and request tracing come from `tower-http` and are wired up in
//! [`crate::app`]; this module holds the middleware written in-house.

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
