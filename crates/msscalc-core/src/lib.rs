//! msscalc-core
//!
//! Pure domain types and unit conversion for the metabolic syndrome
//! severity calculator. No I/O; this is the shared vocabulary of the
//! engine, the reference collaborators and the API.

pub mod error;
pub mod models;
pub mod numeric;
pub mod units;
