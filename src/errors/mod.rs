//! Parse diagnostics.
//!
//! - Error structures with source position information
//! - One variant per kind of syntax problem
//! - Human-readable names and suggestions for each diagnostic

pub mod errors;
