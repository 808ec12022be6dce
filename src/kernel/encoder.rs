//! AdaptiveEncoder: real-valued vectors to sparse codes and back.
//!
//! A bank of nodes, each with a center and a width, competes for every input.
//! The winners form the sparse code; each node also carries a weight vector
//! used to rebuild the input from the code. Learning moves the winners toward
//! what they saw and nudges the weights to shrink the reconstruction error.
//!
//! # The Cycle
//!
//! ```rust
//! use adaptive_sdr::config::{EncodeParams, InitConfig, LearnParams};
//! use adaptive_sdr::kernel::{seeded_source, AdaptiveEncoder};
//!
//! let mut rng = seeded_source(42, "init");
//! let mut enc = AdaptiveEncoder::create(&InitConfig::new(16, 3), &mut rng).unwrap();
//!
//! let (encode, learn) = (EncodeParams::default(), LearnParams::default());
//! let input = [0.2, 0.7, 0.4];
//! let mut sdr = Vec::new();
//! let mut recon = Vec::new();
//!
//! for _ in 0..10 {
//!     enc.encode(&input, &mut sdr, &encode);
//!     enc.decode(&sdr, &mut recon);
//!     enc.learn(&input, &recon, &learn);
//! }
//! assert_eq!(sdr.len(), 16);
//! assert_eq!(recon.len(), 3);
//! ```
//!
//! Calls must be sequenced encode → decode → learn: `learn` reads the outputs
//! left behind by the last `encode` and the reconstruction built from them.

use super::competition::select_threshold;
use super::node::{Node, Recon};
use super::response::{boost_function, radial_response, sigmoid};
use super::uniform::UniformSource;
use crate::config::{EncodeParams, InitConfig, LearnParams};
use crate::error::Result;

/// Output level above which a node counts as active in diagnostics.
const ACTIVE_LEVEL: f32 = 0.5;

/// Self-organizing encoder with boosting and linear reconstruction.
#[derive(Clone, Debug, PartialEq)]
pub struct AdaptiveEncoder {
    sdr_size: usize,
    input_size: usize,
    nodes: Vec<Node>,
    recons: Vec<Recon>,
}

impl AdaptiveEncoder {
    /// Build a node bank with parameters drawn uniformly from `config`'s ranges.
    pub fn create<R: UniformSource + ?Sized>(config: &InitConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut nodes = Vec::with_capacity(config.sdr_size);
        for _ in 0..config.sdr_size {
            let center: Vec<f32> = (0..config.input_size)
                .map(|_| rng.uniform(config.center.min, config.center.max))
                .collect();
            let width = rng.uniform(config.width.min, config.width.max);
            nodes.push(Node::new(center, width));
        }

        let recons = (0..config.sdr_size)
            .map(|_| Recon {
                weights: (0..config.input_size)
                    .map(|_| rng.uniform(config.weight.min, config.weight.max))
                    .collect(),
            })
            .collect();

        tracing::debug!(
            sdr_size = config.sdr_size,
            input_size = config.input_size,
            "created adaptive encoder"
        );

        Ok(Self {
            sdr_size: config.sdr_size,
            input_size: config.input_size,
            nodes,
            recons,
        })
    }

    /// Discard all learned state and draw a fresh node bank.
    ///
    /// On error the current state is left untouched.
    pub fn reinitialize<R: UniformSource + ?Sized>(
        &mut self,
        config: &InitConfig,
        rng: &mut R,
    ) -> Result<()> {
        *self = Self::create(config, rng)?;
        Ok(())
    }

    // --- Accessors ---

    pub fn sdr_size(&self) -> usize {
        self.sdr_size
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn recons(&self) -> &[Recon] {
        &self.recons
    }

    /// Number of nodes whose last output exceeds `threshold`.
    pub fn active_count(&self, threshold: f32) -> usize {
        self.nodes.iter().filter(|n| n.output > threshold).count()
    }

    pub fn mean_duty_cycle(&self) -> f32 {
        self.nodes.iter().map(|n| n.duty_cycle).sum::<f32>() / self.sdr_size as f32
    }

    // --- Core methods ---

    /// Encode `input` into `sdr` (resized to `sdr_size`), values in [0, 1].
    ///
    /// # Panics
    /// Panics if `input.len() != input_size` or `output_intensity <= 0`.
    pub fn encode(&mut self, input: &[f32], sdr: &mut Vec<f32>, params: &EncodeParams) {
        assert_eq!(
            input.len(),
            self.input_size,
            "Expected input_size={}, got {}",
            self.input_size,
            input.len()
        );
        assert!(
            params.output_intensity > 0.0,
            "output_intensity must be positive, got {}",
            params.output_intensity
        );

        for node in &mut self.nodes {
            node.sum = radial_response(node.distance_sq(input), node.width);
            node.activation = node.sum * (1.0 + node.boost);
        }

        let activations: Vec<f32> = self.nodes.iter().map(|n| n.activation).collect();
        let theta = select_threshold(
            &activations,
            params.local_activity,
            params.output_intensity,
        );

        let decay = params.duty_cycle_decay;
        for node in &mut self.nodes {
            node.output = sigmoid(params.output_intensity * (node.activation - theta));
            node.duty_cycle = ((1.0 - decay) * node.duty_cycle + decay * node.output).clamp(0.0, 1.0);
        }

        sdr.clear();
        sdr.extend(self.nodes.iter().map(|n| n.output));

        tracing::trace!(
            theta,
            active = self.active_count(ACTIVE_LEVEL),
            "encoded input"
        );
    }

    /// Adapt centers, widths, weights, and boosts toward `input`.
    ///
    /// Every update is scaled by the node's output from the last `encode`,
    /// so silent nodes barely move.
    ///
    /// # Panics
    /// Panics if `input` or `recon` is not `input_size` long.
    pub fn learn(&mut self, input: &[f32], recon: &[f32], params: &LearnParams) {
        assert_eq!(
            input.len(),
            self.input_size,
            "Expected input_size={}, got {}",
            self.input_size,
            input.len()
        );
        assert_eq!(
            recon.len(),
            self.input_size,
            "Expected recon len={}, got {}",
            self.input_size,
            recon.len()
        );

        for (node, rec) in self.nodes.iter_mut().zip(self.recons.iter_mut()) {
            let rate = node.output;
            let dist = node.distance_sq(input).sqrt();

            let center_rate = params.center_alpha * rate;
            for (c, &x) in node.center.iter_mut().zip(input) {
                *c += center_rate * (x - *c);
            }

            let target_width = params.width_scalar * dist;
            node.width += params.width_alpha * rate * (target_width - node.width);
            node.width = node.width.max(params.min_width);

            let recon_rate = params.recon_alpha * rate;
            for ((w, &x), &r) in rec.weights.iter_mut().zip(input).zip(recon) {
                *w += recon_rate * (x - r);
            }

            node.boost =
                params.boost_intensity * boost_function(node.duty_cycle, params.boost_threshold);
        }
    }

    /// Rebuild an input estimate from a code: `recon = Σ sdr[i] · weights[i]`.
    ///
    /// # Panics
    /// Panics if `sdr.len() != sdr_size`.
    pub fn decode(&self, sdr: &[f32], recon: &mut Vec<f32>) {
        assert_eq!(
            sdr.len(),
            self.sdr_size,
            "Expected sdr_size={}, got {}",
            self.sdr_size,
            sdr.len()
        );

        recon.clear();
        recon.resize(self.input_size, 0.0);

        for (&s, rec) in sdr.iter().zip(&self.recons) {
            if s == 0.0 {
                continue;
            }
            for (r, &w) in recon.iter_mut().zip(&rec.weights) {
                *r += s * w;
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
