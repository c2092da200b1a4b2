// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Leaky Integrator Neuron
//!
//! First-order ODE neuron whose activation decays toward zero absent
//! input, advanced by forward-Euler steps.
//!
//! ## Model Dynamics
//!
//! ```text
//! ẏ = (Σ inputs[i] × weights[i] − y) / τ
//! y(t + dt) = y(t) + ẏ × dt
//! pending = f(g × (y − b), sc, freq)      (blended transfer)
//! ```
//!
//! ## Two-Phase Update
//!
//! `compute_output` stages the new transfer value in `pending_output`
//! without touching `output`; `commit` publishes it. A network calls
//! `compute_output` on every node before committing any of them, which is
//! what makes the update synchronous: no node ever observes a same-tick
//! value from a peer.

use ndarray::Array1;

use crate::error::{NeuralError, Result};
use crate::params;

/// Physical-domain parameters for one leaky integrator.
///
/// Produced by mapping a normalized gene through [`crate::params`]; the
/// weight vector length fixes the node's fan-in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeParameters {
    pub gain: f64,
    pub bias: f64,
    pub time_constant: f64,
    pub sine_coefficient: f64,
    pub frequency_multiplier: f64,
    pub weights: Vec<f64>,
}

/// One leaky integrator neuron.
#[derive(Debug, Clone)]
pub struct LeakyIntegrator {
    time_step: f64,
    gain: f64,
    bias: f64,
    time_constant: f64,
    sine_coefficient: f64,
    frequency_multiplier: f64,
    /// Integrated activation (y).
    activation: f64,
    inputs: Array1<f64>,
    weights: Array1<f64>,
    /// Output staged by `compute_output`, not yet visible to peers.
    pending_output: f64,
    /// Committed output from the previous tick.
    output: f64,
}

impl LeakyIntegrator {
    /// Build a node from physical-domain parameters.
    ///
    /// Allocates an input slot per weight. A freshly built node exposes
    /// `output = 1.0` so an unstepped network presents a nonzero signal to
    /// downstream consumers.
    pub fn new(parameters: NodeParameters, time_step: f64) -> Result<Self> {
        let num_inputs = parameters.weights.len();
        let mut inputs = Vec::new();
        inputs.try_reserve_exact(num_inputs)?;
        inputs.resize(num_inputs, 0.0);
        Ok(Self {
            time_step,
            gain: parameters.gain,
            bias: parameters.bias,
            time_constant: parameters.time_constant,
            sine_coefficient: parameters.sine_coefficient,
            frequency_multiplier: parameters.frequency_multiplier,
            activation: 0.0,
            inputs: Array1::from(inputs),
            weights: Array1::from(parameters.weights),
            pending_output: 0.0,
            output: 1.0,
        })
    }

    /// Number of input slots (equals the number of weights).
    #[inline]
    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Write one input slot.
    pub fn set_input(&mut self, index: usize, value: f64) -> Result<()> {
        let num_inputs = self.weights.len();
        match self.inputs.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(NeuralError::InputIndexOutOfRange { index, num_inputs }),
        }
    }

    /// Overwrite every input slot from a same-length slice.
    pub fn load_inputs(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.inputs.len() {
            return Err(NeuralError::InputLengthMismatch {
                expected: self.inputs.len(),
                actual: values.len(),
            });
        }
        for (slot, value) in self.inputs.iter_mut().zip(values) {
            *slot = *value;
        }
        Ok(())
    }

    /// Phase 1: advance the ODE by one step and stage the transfer output.
    ///
    /// `output` is untouched; peers keep reading the previous tick's
    /// committed value until [`Self::commit`] runs.
    #[inline]
    pub fn compute_output(&mut self) {
        let y_dot = (self.inputs.dot(&self.weights) - self.activation) / self.time_constant;
        self.activation += y_dot * self.time_step;
        self.pending_output = params::blended_transfer(
            self.gain * (self.activation - self.bias),
            self.sine_coefficient,
            self.frequency_multiplier,
        );
    }

    /// Phase 2: publish the staged output.
    #[inline]
    pub fn commit(&mut self) {
        self.output = self.pending_output;
    }

    /// Committed output from the last completed tick.
    #[inline]
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Current integrated activation (pre-transfer).
    #[inline]
    pub fn activation(&self) -> f64 {
        self.activation
    }

    /// Return the node to the quiescent state without deallocating.
    pub fn reset(&mut self) {
        self.activation = 0.0;
        self.output = 0.0;
        self.pending_output = 0.0;
    }

    /// Update the integration step used from the next `compute_output` on.
    pub fn set_time_step(&mut self, time_step: f64) {
        self.time_step = time_step;
    }

    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }
}
