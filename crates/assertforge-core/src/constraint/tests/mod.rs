//! Tests for constraints.

mod combinator;
mod comparison;
