//! HTTP-level integration tests

mod admin_test;
mod auth_test;
mod conversations_test;
