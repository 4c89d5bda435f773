//! Tests for authentication service

#[cfg(test)]
mod selector_tests;
