//! Test suite for the content engine
//!
//! Organized into logical groups: editor operation tests, renderer tests,
//! property-based invariant tests, and end-to-end scenarios.

#[cfg(test)]
mod editor_tests;
