// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # CTRNN Genome (Genotype Layer)
//!
//! Already-decoded, normalized-domain descriptions of CTRNN instances:
//! - **Types**: per-node gene records and whole-network genomes
//! - **Library**: an indexed, tagged preset set the host selects from
//!
//! The genome is the unit consumed to (re)build an engine. Decoding from
//! any external structured format is the host's concern; the types derive
//! serde so any serde front end can act as the decoder, and validation of
//! the declared topology against the supplied records happens here, before
//! anything downstream mutates state.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod library;
pub mod types;

pub use error::{GenomeError, Result, Section};
pub use library::GenomeLibrary;
pub use types::{NetworkGenome, NodeGene};
