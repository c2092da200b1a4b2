// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for engine operations

use std::collections::TryReserveError;
use thiserror::Error;

use ctrnn_genome::GenomeError;
use ctrnn_neural::NeuralError;

/// Errors raised by the execution engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Operation requires an initialised engine
    #[error("engine not initialised")]
    NotInitialised,

    /// `feed_inputs` vector length differs from the input node count
    #[error("input vector length mismatch: expected {expected}, got {actual}")]
    InputLengthMismatch { expected: usize, actual: usize },

    /// Output read requested beyond the hidden layer size
    #[error("requested {requested} outputs, network has {available} hidden nodes")]
    OutputCountExceeded { requested: usize, available: usize },

    /// Genome rejected before any engine state was touched
    #[error(transparent)]
    Genome(#[from] GenomeError),

    /// Node-level failure
    #[error(transparent)]
    Neural(#[from] NeuralError),

    /// Engine storage could not be allocated
    #[error("storage allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Result type for engine operations
pub type Result<T> = core::result::Result<T, EngineError>;
