//! Unit tests for single components.

mod error_tests;
mod options_tests;
