//! Convenience wrapper that owns an [`AdaptiveEncoder`], its parameters, and
//! the scratch buffers for one encode → decode → learn cycle.
//!
//! For full control, use [`kernel`](crate::kernel) directly.

use super::tracker::ErrorTracker;
use crate::config::{EncodeParams, InitConfig, LearnParams};
use crate::error::{EncoderError, Result};
use crate::kernel::{reconstruction_error, AdaptiveEncoder, UniformSource};

/// Owns an encoder together with everything needed to run its cycle.
///
/// # Example
///
/// ```rust
/// use adaptive_sdr::config::{EncodeParams, InitConfig, LearnParams};
/// use adaptive_sdr::highlevel::Autoencoder;
/// use adaptive_sdr::kernel::seeded_source;
///
/// let mut rng = seeded_source(1, "demo");
/// let mut ae = Autoencoder::new(
///     &InitConfig::new(16, 2),
///     EncodeParams::default(),
///     LearnParams::default(),
///     &mut rng,
/// )
/// .unwrap();
///
/// let error = ae.step(&[0.3, 0.6]).unwrap();
/// assert!(error.is_finite());
/// assert_eq!(ae.code().len(), 16);
/// ```
#[derive(Clone, Debug)]
pub struct Autoencoder {
    encoder: AdaptiveEncoder,
    encode_params: EncodeParams,
    learn_params: LearnParams,
    sdr: Vec<f32>,
    recon: Vec<f32>,
    tracker: ErrorTracker,
    steps: usize,
}

impl Autoencoder {
    /// Validate all parameters and build a fresh encoder.
    pub fn new<R: UniformSource + ?Sized>(
        init: &InitConfig,
        encode_params: EncodeParams,
        learn_params: LearnParams,
        rng: &mut R,
    ) -> Result<Self> {
        let encoder = AdaptiveEncoder::create(init, rng)?;
        Self::from_encoder(encoder, encode_params, learn_params)
    }

    /// Wrap an existing encoder after validating both parameter sets.
    pub fn from_encoder(
        encoder: AdaptiveEncoder,
        encode_params: EncodeParams,
        learn_params: LearnParams,
    ) -> Result<Self> {
        encode_params.validate()?;
        learn_params.validate()?;
        Ok(Self {
            sdr: Vec::with_capacity(encoder.sdr_size()),
            recon: Vec::with_capacity(encoder.input_size()),
            encoder,
            encode_params,
            learn_params,
            tracker: ErrorTracker::default(),
            steps: 0,
        })
    }

    /// Smooth reconstruction error with `alpha` instead of the default 0.01.
    ///
    /// # Panics
    /// Panics unless `0 < alpha <= 1`.
    pub fn with_tracker_alpha(mut self, alpha: f32) -> Self {
        self.tracker = ErrorTracker::new(alpha);
        self
    }

    pub fn encoder(&self) -> &AdaptiveEncoder {
        &self.encoder
    }

    pub fn into_encoder(self) -> AdaptiveEncoder {
        self.encoder
    }

    pub fn encode_params(&self) -> &EncodeParams {
        &self.encode_params
    }

    pub fn learn_params(&self) -> &LearnParams {
        &self.learn_params
    }

    /// Code produced by the last `step` or `infer`.
    pub fn code(&self) -> &[f32] {
        &self.sdr
    }

    /// Reconstruction produced by the last `step` or `infer`.
    pub fn reconstruction(&self) -> &[f32] {
        &self.recon
    }

    pub fn tracker(&self) -> &ErrorTracker {
        &self.tracker
    }

    /// Number of learning steps taken.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Run one encode → decode → learn cycle.
    ///
    /// Returns the reconstruction error measured before learning.
    pub fn step(&mut self, input: &[f32]) -> Result<f32> {
        let error = self.infer(input)?;
        self.encoder.learn(input, &self.recon, &self.learn_params);
        self.tracker.observe(error);
        self.steps += 1;

        tracing::trace!(
            step = self.steps,
            error,
            mean_error = self.tracker.mean(),
            "autoencoder step"
        );

        Ok(error)
    }

    /// Encode and decode without learning, returning the reconstruction error.
    ///
    /// Duty cycles still advance, since encoding always updates them.
    pub fn infer(&mut self, input: &[f32]) -> Result<f32> {
        self.check_input(input)?;
        self.encoder.encode(input, &mut self.sdr, &self.encode_params);
        self.encoder.decode(&self.sdr, &mut self.recon);
        Ok(reconstruction_error(input, &self.recon))
    }

    /// Run `step` over every input in order, returning each error.
    pub fn train(&mut self, inputs: &[Vec<f32>]) -> Result<Vec<f32>> {
        inputs.iter().map(|x| self.step(x)).collect()
    }

    /// Replace the encoder with a freshly drawn one and clear statistics.
    pub fn reset<R: UniformSource + ?Sized>(&mut self, init: &InitConfig, rng: &mut R) -> Result<()> {
        self.encoder.reinitialize(init, rng)?;
        self.sdr.clear();
        self.recon.clear();
        self.tracker.reset();
        self.steps = 0;
        Ok(())
    }

    fn check_input(&self, input: &[f32]) -> Result<()> {
        if input.len() != self.encoder.input_size() {
            return Err(EncoderError::DimensionMismatch {
                expected: self.encoder.input_size(),
                got: input.len(),
            });
        }
        Ok(())
    }
}
