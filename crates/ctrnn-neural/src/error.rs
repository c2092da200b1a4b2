// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for neural computation

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors raised by per-node operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NeuralError {
    /// Supplied input vector does not match the node's fan-in
    #[error("input length mismatch: expected {expected}, got {actual}")]
    InputLengthMismatch { expected: usize, actual: usize },

    /// Input slot index beyond the node's fan-in
    #[error("input index {index} out of range for node with {num_inputs} inputs")]
    InputIndexOutOfRange { index: usize, num_inputs: usize },

    /// Node storage could not be allocated
    #[error("storage allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Result type for neural operations
pub type Result<T> = core::result::Result<T, NeuralError>;
