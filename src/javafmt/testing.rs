//! Testing support
//!
//! Shared helpers for unit and integration tests. Production code must not
//! depend on anything in here.

pub mod factories;
