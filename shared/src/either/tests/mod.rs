//! Tests for the Either type and its collectors

mod non_empty_tests;
