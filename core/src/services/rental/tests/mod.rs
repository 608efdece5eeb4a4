//! Unit tests for the rental transaction engine

mod service_tests;
