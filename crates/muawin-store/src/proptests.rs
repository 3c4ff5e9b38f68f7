//! Property-based tests for the store contract, run against both backends.
