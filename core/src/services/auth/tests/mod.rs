//! Tests for the authentication services.

mod service_tests;
