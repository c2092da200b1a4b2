// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Genome Record Types
//!
//! A genome is the already-decoded, normalized-domain description of one
//! network instance: per-node parameter genes plus the declared topology.
//! All scalars and weights are nominally in [0, 1]; the mapping layer in
//! `ctrnn-neural` extrapolates rather than rejects out-of-range values, so
//! no range check is performed here.
//!
//! Topology contract (full connectivity with self-loops in the hidden
//! layer):
//! - every input gene carries exactly 1 weight
//! - every hidden gene carries exactly `num_input_nodes + num_hidden_nodes`
//!   weights, one per input node and one per hidden node including itself

use serde::{Deserialize, Serialize};

use crate::error::{GenomeError, Result, Section};

/// Normalized-domain parameters for one node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeGene {
    pub gain: f64,
    pub bias: f64,
    pub time_constant: f64,
    pub sine_coefficient: f64,
    pub frequency_multiplier: f64,
    /// Normalized connection weights; length 1 for input genes, full
    /// fan-in for hidden genes.
    #[serde(default)]
    pub weights: Vec<f64>,
}

/// Decoded description of one network instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkGenome {
    /// Identifying label used by preset libraries.
    #[serde(default)]
    pub tag: Option<String>,
    pub num_input_nodes: usize,
    pub num_hidden_nodes: usize,
    #[serde(default)]
    pub input_nodes: Vec<NodeGene>,
    #[serde(default)]
    pub hidden_nodes: Vec<NodeGene>,
}

impl NetworkGenome {
    /// Allocate a genome with default (zeroed, weightless) gene slots.
    ///
    /// The caller must size and fill each gene's weight vector before the
    /// genome passes [`Self::validate`].
    pub fn new(num_input_nodes: usize, num_hidden_nodes: usize) -> Result<Self> {
        let mut input_nodes = Vec::new();
        input_nodes.try_reserve_exact(num_input_nodes)?;
        input_nodes.resize(num_input_nodes, NodeGene::default());
        let mut hidden_nodes = Vec::new();
        hidden_nodes.try_reserve_exact(num_hidden_nodes)?;
        hidden_nodes.resize(num_hidden_nodes, NodeGene::default());
        Ok(Self {
            tag: None,
            num_input_nodes,
            num_hidden_nodes,
            input_nodes,
            hidden_nodes,
        })
    }

    /// Attach an identifying tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Fan-in of every hidden node: one slot per input node and per hidden
    /// node, including the node itself.
    #[inline]
    pub fn hidden_fan_in(&self) -> usize {
        self.num_input_nodes + self.num_hidden_nodes
    }

    /// Check the declared topology against the supplied records.
    ///
    /// Runs before any consumer mutates state: a genome that fails here
    /// leaves the previous engine or library contents intact.
    pub fn validate(&self) -> Result<()> {
        if self.input_nodes.len() != self.num_input_nodes {
            return Err(GenomeError::TopologyMismatch {
                section: Section::Input,
                declared: self.num_input_nodes,
                actual: self.input_nodes.len(),
            });
        }
        if self.hidden_nodes.len() != self.num_hidden_nodes {
            return Err(GenomeError::TopologyMismatch {
                section: Section::Hidden,
                declared: self.num_hidden_nodes,
                actual: self.hidden_nodes.len(),
            });
        }
        for (node, gene) in self.input_nodes.iter().enumerate() {
            if gene.weights.len() != 1 {
                return Err(GenomeError::WeightCountMismatch {
                    section: Section::Input,
                    node,
                    expected: 1,
                    actual: gene.weights.len(),
                });
            }
        }
        let fan_in = self.hidden_fan_in();
        for (node, gene) in self.hidden_nodes.iter().enumerate() {
            if gene.weights.len() != fan_in {
                return Err(GenomeError::WeightCountMismatch {
                    section: Section::Hidden,
                    node,
                    expected: fan_in,
                    actual: gene.weights.len(),
                });
            }
        }
        Ok(())
    }
}
