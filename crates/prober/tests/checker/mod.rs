/// Checker and probe dispatch tests
pub mod http_tests;
