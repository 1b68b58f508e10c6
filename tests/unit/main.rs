//! Unit test suite entry point.

mod catalog_pipeline_tests;
mod config_tests;
