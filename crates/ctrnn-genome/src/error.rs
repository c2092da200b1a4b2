// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for genome operations

use core::fmt;
use std::collections::TryReserveError;
use thiserror::Error;

/// Which node section of a genome an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Input,
    Hidden,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Input => write!(f, "input"),
            Section::Hidden => write!(f, "hidden"),
        }
    }
}

/// Errors raised by genome validation and the preset library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenomeError {
    /// Declared node count does not match the supplied records
    #[error("topology mismatch in {section} section: declared {declared} nodes, got {actual}")]
    TopologyMismatch {
        section: Section,
        declared: usize,
        actual: usize,
    },

    /// A node's weight vector does not match the network fan-in
    #[error("{section} node {node}: expected {expected} weights, got {actual}")]
    WeightCountMismatch {
        section: Section,
        node: usize,
        expected: usize,
        actual: usize,
    },

    /// Library operation before `initialise`
    #[error("genome library not initialised")]
    NotInitialised,

    /// Slot index beyond the library's allocated size
    #[error("genome index {index} out of range for library of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Tag already assigned to a different slot
    #[error("duplicate genome tag '{0}'")]
    DuplicateTag(String),

    /// Genome storage could not be allocated
    #[error("storage allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Result type for genome operations
pub type Result<T> = core::result::Result<T, GenomeError>;
