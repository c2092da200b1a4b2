// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # CTRNN Engine
//!
//! Two-layer topology: an array of input nodes (fan-in 1, fed externally)
//! and an array of hidden nodes fully connected to every input node and
//! every hidden node including themselves. The first `count` hidden nodes
//! double as the network's outputs; there is no separate output storage.
//!
//! ## Tick Ordering
//!
//! ```text
//! step():
//!   1. compute_output() on every input node (externally fed values)
//!   2. snapshot the committed output of every node
//!   3. per hidden node: load the snapshot as inputs, compute_output()
//!   4. commit() every input node, then every hidden node
//! ```
//!
//! The snapshot is taken before any commit, so hidden nodes read each
//! peer's previous-tick committed output, never a value staged earlier in
//! the same call. Collapsing the compute/commit split into one pass would
//! make results depend on array iteration order.

use tracing::debug;

use ctrnn_genome::{NetworkGenome, NodeGene};
use ctrnn_neural::{params, LeakyIntegrator, NodeParameters};

use crate::error::{EngineError, Result};

/// Map one normalized gene into physical-domain node parameters.
fn map_gene(gene: &NodeGene) -> Result<NodeParameters> {
    let mut weights = Vec::new();
    weights.try_reserve_exact(gene.weights.len())?;
    weights.extend(gene.weights.iter().map(|w| params::map_weight(*w)));
    Ok(NodeParameters {
        gain: params::map_gain(gene.gain),
        bias: params::map_bias(gene.bias),
        time_constant: params::map_time_constant(gene.time_constant),
        sine_coefficient: params::map_sine_coefficient(gene.sine_coefficient),
        frequency_multiplier: params::map_frequency_multiplier(gene.frequency_multiplier),
        weights,
    })
}

/// One CTRNN instance.
///
/// The engine exclusively owns its node storage; reinitialising or
/// destroying invalidates it wholesale. Exclusive single-threaded access
/// is assumed - any cross-thread use is the embedding application's
/// synchronization problem.
#[derive(Debug, Default)]
pub struct Ctrnn {
    input_nodes: Vec<LeakyIntegrator>,
    hidden_nodes: Vec<LeakyIntegrator>,
    /// Committed output of every node, refreshed each step before the
    /// hidden pass. Hidden fan-in order: [input nodes..., hidden nodes...].
    snapshot: Vec<f64>,
    active_tag: Option<String>,
    initialised: bool,
}

impl Ctrnn {
    /// Create an uninitialised engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the node arrays from a genome.
    ///
    /// The genome is validated first and the new arrays are fully built
    /// before the previous ones are replaced, so a failed reinitialise
    /// leaves the running network intact. Replacement drops the prior
    /// storage in the same assignment.
    pub fn initialise(&mut self, genome: &NetworkGenome, time_step: f64) -> Result<()> {
        genome.validate()?;

        let num_inputs = genome.num_input_nodes;
        let num_hidden = genome.num_hidden_nodes;

        let mut input_nodes = Vec::new();
        input_nodes.try_reserve_exact(num_inputs)?;
        for gene in &genome.input_nodes {
            input_nodes.push(LeakyIntegrator::new(map_gene(gene)?, time_step)?);
        }

        let mut hidden_nodes = Vec::new();
        hidden_nodes.try_reserve_exact(num_hidden)?;
        for gene in &genome.hidden_nodes {
            hidden_nodes.push(LeakyIntegrator::new(map_gene(gene)?, time_step)?);
        }

        let mut snapshot = Vec::new();
        snapshot.try_reserve_exact(num_inputs + num_hidden)?;
        snapshot.resize(num_inputs + num_hidden, 0.0);

        let reinitialised = self.initialised;
        self.input_nodes = input_nodes;
        self.hidden_nodes = hidden_nodes;
        self.snapshot = snapshot;
        self.active_tag = genome.tag.clone();
        self.initialised = true;
        debug!(
            num_inputs,
            num_hidden,
            time_step,
            reinitialised,
            tag = self.active_tag.as_deref(),
            "engine initialised"
        );
        Ok(())
    }

    /// Set each input node's sole input slot. No integration occurs here.
    pub fn feed_inputs(&mut self, values: &[f64]) -> Result<()> {
        if !self.initialised {
            return Err(EngineError::NotInitialised);
        }
        if values.len() != self.input_nodes.len() {
            return Err(EngineError::InputLengthMismatch {
                expected: self.input_nodes.len(),
                actual: values.len(),
            });
        }
        for (node, value) in self.input_nodes.iter_mut().zip(values) {
            node.set_input(0, *value)?;
        }
        Ok(())
    }

    /// Advance the network one tick.
    pub fn step(&mut self) -> Result<()> {
        if !self.initialised {
            return Err(EngineError::NotInitialised);
        }
        for node in &mut self.input_nodes {
            node.compute_output();
        }
        // Snapshot committed outputs before any node commits: the hidden
        // pass must see previous-tick values only.
        let num_inputs = self.input_nodes.len();
        for (slot, node) in self.snapshot[..num_inputs].iter_mut().zip(&self.input_nodes) {
            *slot = node.output();
        }
        for (slot, node) in self.snapshot[num_inputs..].iter_mut().zip(&self.hidden_nodes) {
            *slot = node.output();
        }
        for node in &mut self.hidden_nodes {
            node.load_inputs(&self.snapshot)?;
            node.compute_output();
        }
        for node in &mut self.input_nodes {
            node.commit();
        }
        for node in &mut self.hidden_nodes {
            node.commit();
        }
        Ok(())
    }

    /// Committed outputs of the first `count` hidden nodes.
    ///
    /// The count is supplied per read and validated here against the
    /// hidden layer size, not at configuration time.
    pub fn read_outputs(&self, count: usize) -> Result<Vec<f64>> {
        if !self.initialised {
            return Err(EngineError::NotInitialised);
        }
        if count > self.hidden_nodes.len() {
            return Err(EngineError::OutputCountExceeded {
                requested: count,
                available: self.hidden_nodes.len(),
            });
        }
        let mut outputs = Vec::new();
        outputs.try_reserve_exact(count)?;
        outputs.extend(self.hidden_nodes[..count].iter().map(|node| node.output()));
        Ok(outputs)
    }

    /// Write the first `outputs.len()` hidden outputs into a caller buffer.
    ///
    /// Allocation-free variant of [`Self::read_outputs`] for control-rate
    /// callers.
    pub fn read_outputs_into(&self, outputs: &mut [f64]) -> Result<()> {
        if !self.initialised {
            return Err(EngineError::NotInitialised);
        }
        if outputs.len() > self.hidden_nodes.len() {
            return Err(EngineError::OutputCountExceeded {
                requested: outputs.len(),
                available: self.hidden_nodes.len(),
            });
        }
        for (slot, node) in outputs.iter_mut().zip(&self.hidden_nodes) {
            *slot = node.output();
        }
        Ok(())
    }

    /// Return every node to the quiescent state. Topology and parameters
    /// are untouched.
    pub fn reset(&mut self) {
        for node in self.input_nodes.iter_mut().chain(self.hidden_nodes.iter_mut()) {
            node.reset();
        }
    }

    /// Change the integration step of every node, effective from the next
    /// tick.
    pub fn change_time_step(&mut self, time_step: f64) {
        for node in self.input_nodes.iter_mut().chain(self.hidden_nodes.iter_mut()) {
            node.set_time_step(time_step);
        }
        debug!(time_step, "time step changed");
    }

    /// Release all node storage. Safe to call on an uninitialised engine.
    pub fn destroy(&mut self) {
        if self.initialised {
            debug!(tag = self.active_tag.as_deref(), "engine destroyed");
        }
        self.input_nodes = Vec::new();
        self.hidden_nodes = Vec::new();
        self.snapshot = Vec::new();
        self.active_tag = None;
        self.initialised = false;
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    pub fn num_input_nodes(&self) -> usize {
        self.input_nodes.len()
    }

    pub fn num_hidden_nodes(&self) -> usize {
        self.hidden_nodes.len()
    }

    /// Tag of the genome the engine was last initialised from.
    pub fn active_tag(&self) -> Option<&str> {
        self.active_tag.as_deref()
    }

    /// Runtime input nodes, in genome order.
    pub fn input_nodes(&self) -> &[LeakyIntegrator] {
        &self.input_nodes
    }

    /// Runtime hidden nodes, in genome order.
    pub fn hidden_nodes(&self) -> &[LeakyIntegrator] {
        &self.hidden_nodes
    }
}
