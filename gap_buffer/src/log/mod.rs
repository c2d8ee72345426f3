// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup for the gap buffer and the `gbd` binary.
//!
//! The buffer itself only emits `tracing` events (gated by
//! [`DEBUG_GAP_BUFFER`](crate::DEBUG_GAP_BUFFER)). Nothing is printed until a
//! subscriber is installed, which is what [`TracingConfig`] is for.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
