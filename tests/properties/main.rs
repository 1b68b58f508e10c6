//! Property-based test suite entry point.

mod filter_tests;
mod normalize_tests;
