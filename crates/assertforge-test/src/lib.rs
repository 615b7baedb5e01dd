//! Shared test fixtures for AssertForge crates.
//!
//! This crate provides probe constraints, sample values and a seeded value
//! generator for testing. It depends only on `assertforge-core`.
//!
//! - [`probe`] - Constraints that count their evaluations
//! - [`values`] - Fixed sample values, including oversized ones
//! - [`generator`] - Reproducible random actual values
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! assertforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use assertforge_test::probe::ProbeConstraint;
//! use assertforge_test::generator::ValueGenerator;
//! ```

pub mod generator;
pub mod probe;
pub mod values;

// Re-export commonly used types at crate root for convenience
pub use generator::ValueGenerator;
pub use probe::{CountingConstraint, ProbeConstraint};
pub use values::{long_string, nested_sequence, sample_values};
