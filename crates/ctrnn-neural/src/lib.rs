// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # CTRNN Neural Computation
//!
//! The numeric core of the CTRNN engine, in one place:
//! - **Params**: normalized-domain to physical-domain parameter mapping
//!   and the transfer functions
//! - **Node**: the leaky integrator neuron with its two-phase update
//!
//! Everything here is pure computation over per-node state. Network-level
//! orchestration (feed/step/read ordering) lives in `ctrnn-engine`;
//! decoded configuration records live in `ctrnn-genome`.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod node;
pub mod params;

pub use error::{NeuralError, Result};
pub use node::{LeakyIntegrator, NodeParameters};
