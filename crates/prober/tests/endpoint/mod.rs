/// Endpoint classifier tests
pub mod classify_tests;
