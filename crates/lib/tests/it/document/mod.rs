//! Document integration tests
//!
//! Path parsing edge cases live next to the parser; these tests drive the
//! accessor, scopes, merge engine and codec through the public API.

mod path_tests;
mod scope_tests;
