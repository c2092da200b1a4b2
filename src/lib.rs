// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # CTRNN - Continuous-Time Recurrent Neural Network Engine
//!
//! A small, fixed-topology network of leaky-integrator neurons whose
//! continuous dynamics are advanced by discrete forward-Euler stepping,
//! producing a vector of bounded control signals from a vector of external
//! inputs. Designed for embedding inside a host application as a
//! signal/parameter generator driven once per control tick.
//!
//! ## Components
//!
//! - **`neural`**: parameter mapping and leaky integrator dynamics
//! - **`genome`**: decoded network descriptions and the preset library
//! - **`engine`**: the synchronous two-phase execution engine
//!
//! ## Quick Start
//!
//! ```rust
//! use ctrnn::prelude::*;
//!
//! // One input node, one hidden node, built by the host's decoder.
//! let mut genome = NetworkGenome::new(1, 1)?;
//! genome.input_nodes[0].weights = vec![0.55];
//! genome.hidden_nodes[0].weights = vec![0.55, 0.5];
//!
//! let mut engine = Ctrnn::new();
//! engine.initialise(&genome, 0.1)?;
//!
//! engine.feed_inputs(&[1.0])?;
//! engine.step()?;
//! let outputs = engine.read_outputs(1)?;
//! assert_eq!(outputs.len(), 1);
//! # Ok::<(), ctrnn::engine::EngineError>(())
//! ```
//!
//! ## Boundary contract
//!
//! The engine consumes only already-decoded numeric configuration records
//! ([`genome::NetworkGenome`], serde-derived so any serde front end can act
//! as the decoder) and emits only numeric vectors. There is no wire
//! protocol, no CLI, and no background work: every operation runs to
//! completion on the caller's thread.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use ctrnn_engine as engine;
pub use ctrnn_genome as genome;
pub use ctrnn_neural as neural;

pub mod prelude {
    pub use crate::engine::{Ctrnn, EngineError};
    pub use crate::genome::{GenomeError, GenomeLibrary, NetworkGenome, NodeGene};
    pub use crate::neural::{LeakyIntegrator, NeuralError, NodeParameters};
}
