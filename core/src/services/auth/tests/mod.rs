//! Unit tests for the authentication service

mod service_tests;
