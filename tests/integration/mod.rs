//! Integration tests for estate-hub
//!
//! These tests exercise the public API and the HTTP app end to end,
//! without mocking.

pub mod api_tests;
pub mod config_tests;
pub mod listing_tests;
pub mod permission_tests;
