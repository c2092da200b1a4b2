// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # CTRNN Execution Engine
//!
//! Owns the runtime node arrays of one network instance and orchestrates
//! feed/step/read/reset/reconfigure across them. Single-threaded and
//! suspension-free: every operation runs to completion on the caller's
//! thread, and `step()` performs no allocation, making it safe for a
//! real-time control-rate caller as long as topology size is bounded at
//! configuration time.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod engine;
pub mod error;

pub use engine::Ctrnn;
pub use error::{EngineError, Result};
