//! Domain models for the loyalty service.
//!
//! Field names on the wire follow the public API (`nome`, `clienteId`,
//! `data`, `pontos`); Rust field names stay in English.

pub mod checkin;
pub mod customer;

pub use checkin::CheckinEvent;
pub use customer::Customer;
