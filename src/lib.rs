//! Pasteboard bootstrap
//!
//! Configuration loading, tracing setup and host clipboard wiring for the
//! pasteboard adapter crates.

pub mod bootstrap;
