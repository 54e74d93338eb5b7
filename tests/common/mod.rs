//! Common test utilities and helpers
//!
//! Shared between the integration test binaries: a recording stand-in for
//! the `git` client and a minimal HTTP server serving canned project pages.
#![allow(dead_code)]

pub mod mock_services;
pub mod test_server;
