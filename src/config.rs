//! Parameter sets for initialization, encoding, and learning.
//!
//! Every knob of the encoder lives in one of three plain structs so that a
//! whole configuration can be kept in a JSON file and validated up front:
//!
//! ```rust
//! use adaptive_sdr::config::{EncodeParams, LearnParams};
//!
//! let encode = EncodeParams::from_json(r#"{"local_activity": 2.0}"#).unwrap();
//! assert_eq!(encode.local_activity, 2.0);
//! assert_eq!(encode.output_intensity, EncodeParams::default().output_intensity);
//!
//! let learn = LearnParams::default();
//! learn.validate().unwrap();
//! ```

use crate::error::{EncoderError, Result};
use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` range used to draw initial parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitRange {
    pub min: f32,
    pub max: f32,
}

impl InitRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Degenerate range that always yields `value`.
    pub const fn fixed(value: f32) -> Self {
        Self::new(value, value)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &'static str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(EncoderError::invalid(name, "Bounds must be finite"));
        }
        if self.min > self.max {
            return Err(EncoderError::invalid(
                name,
                format!("min {} exceeds max {}", self.min, self.max),
            ));
        }
        if !((self.max - self.min) * 2.0).is_finite() {
            return Err(EncoderError::invalid(name, "Range span overflows f32"));
        }
        Ok(())
    }
}

/// Shape of the node bank and ranges for its initial random parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitConfig {
    /// Number of nodes, i.e. length of the produced code.
    pub sdr_size: usize,
    /// Length of every input vector.
    pub input_size: usize,
    /// Range for each center component.
    pub center: InitRange,
    /// Range for each node's receptive field width.
    pub width: InitRange,
    /// Range for each reconstruction weight.
    pub weight: InitRange,
}

impl InitConfig {
    /// Default ranges for the given shape.
    pub fn new(sdr_size: usize, input_size: usize) -> Self {
        Self {
            sdr_size,
            input_size,
            ..Default::default()
        }
    }

    pub fn with_center(mut self, min: f32, max: f32) -> Self {
        self.center = InitRange::new(min, max);
        self
    }

    pub fn with_width(mut self, min: f32, max: f32) -> Self {
        self.width = InitRange::new(min, max);
        self
    }

    pub fn with_weight(mut self, min: f32, max: f32) -> Self {
        self.weight = InitRange::new(min, max);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sdr_size == 0 {
            return Err(EncoderError::invalid("sdr_size", "Must be greater than 0"));
        }
        if self.input_size == 0 {
            return Err(EncoderError::invalid("input_size", "Must be greater than 0"));
        }
        self.center.validate("center")?;
        self.width.validate("width")?;
        self.weight.validate("weight")
    }
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            sdr_size: 0,
            input_size: 0,
            center: InitRange::new(0.0, 1.0),
            width: InitRange::new(0.5, 1.0),
            weight: InitRange::new(-0.1, 0.1),
        }
    }
}

/// Parameters of a single `encode` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeParams {
    /// Target number of simultaneously active nodes (may be fractional).
    pub local_activity: f32,
    /// Sharpness of the activation → output sigmoid.
    pub output_intensity: f32,
    /// Smoothing rate of the duty cycle EMA, in (0, 1).
    pub duty_cycle_decay: f32,
}

impl EncodeParams {
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.local_activity >= 0.0) {
            return Err(EncoderError::invalid("local_activity", "Must be non-negative"));
        }
        if !(self.output_intensity > 0.0) || !self.output_intensity.is_finite() {
            return Err(EncoderError::invalid(
                "output_intensity",
                "Must be finite and greater than 0",
            ));
        }
        if !(self.duty_cycle_decay > 0.0 && self.duty_cycle_decay < 1.0) {
            return Err(EncoderError::invalid(
                "duty_cycle_decay",
                "Must be in range (0, 1)",
            ));
        }
        Ok(())
    }
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            local_activity: 4.0,
            output_intensity: 8.0,
            duty_cycle_decay: 0.01,
        }
    }
}

/// Parameters of a single `learn` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnParams {
    /// Rate at which centers move toward the input.
    pub center_alpha: f32,
    /// Rate at which widths relax toward their target.
    pub width_alpha: f32,
    /// Target width as a multiple of the node's distance to the input.
    pub width_scalar: f32,
    /// Floor applied to every width after learning.
    pub min_width: f32,
    /// Rate at which reconstruction weights follow the residual.
    pub recon_alpha: f32,
    /// Duty cycle below which a node starts receiving boost.
    pub boost_threshold: f32,
    /// Scale of the boost added to a starved node's activation.
    pub boost_intensity: f32,
}

impl LearnParams {
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("center_alpha", self.center_alpha),
            ("width_alpha", self.width_alpha),
            ("recon_alpha", self.recon_alpha),
            ("width_scalar", self.width_scalar),
            ("boost_threshold", self.boost_threshold),
            ("boost_intensity", self.boost_intensity),
        ];
        for (name, value) in rates {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(EncoderError::invalid(name, "Must be finite and non-negative"));
            }
        }
        if !(self.min_width > 0.0) || !self.min_width.is_finite() {
            return Err(EncoderError::invalid(
                "min_width",
                "Must be finite and greater than 0",
            ));
        }
        Ok(())
    }
}

impl Default for LearnParams {
    fn default() -> Self {
        Self {
            center_alpha: 0.05,
            width_alpha: 0.01,
            width_scalar: 1.0,
            min_width: 0.05,
            recon_alpha: 0.05,
            boost_threshold: 0.1,
            boost_intensity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        InitConfig::new(16, 4).validate().expect("init defaults");
        EncodeParams::default().validate().expect("encode defaults");
        LearnParams::default().validate().expect("learn defaults");
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let err = InitConfig::new(0, 4).validate().unwrap_err();
        assert!(matches!(
            err,
            EncoderError::InvalidParameter { name: "sdr_size", .. }
        ));

        let err = InitConfig::new(4, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            EncoderError::InvalidParameter { name: "input_size", .. }
        ));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = InitConfig::new(4, 2)
            .with_width(1.0, 0.5)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EncoderError::InvalidParameter { name: "width", .. }));
    }

    #[test]
    fn test_overflowing_span_rejected() {
        let err = InitConfig::new(2, 2)
            .with_center(-f32::MAX, f32::MAX)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EncoderError::InvalidParameter { name: "center", .. }));

        InitConfig::new(2, 2)
            .with_weight(-1e30, 1e30)
            .validate()
            .expect("wide but representable span");
    }

    #[test]
    fn test_encode_params_bounds() {
        let mut params = EncodeParams::default();
        params.duty_cycle_decay = 1.0;
        assert!(params.validate().is_err());

        params.duty_cycle_decay = 0.5;
        params.output_intensity = 0.0;
        assert!(params.validate().is_err());

        params.output_intensity = 1.0;
        params.local_activity = 0.0;
        assert!(params.validate().is_ok(), "zero activity is allowed");
    }

    #[test]
    fn test_learn_params_rejects_zero_min_width() {
        let params = LearnParams {
            min_width: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_init_config_from_json() {
        let config = InitConfig::from_json(
            r#"{"sdr_size": 32, "input_size": 3, "width": {"min": 0.2, "max": 0.2}}"#,
        )
        .expect("valid config");

        assert_eq!(config.sdr_size, 32);
        assert_eq!(config.input_size, 3);
        assert_eq!(config.width, InitRange::fixed(0.2));
        assert_eq!(config.center, InitConfig::default().center);
    }

    #[test]
    fn test_from_json_reports_parse_error() {
        let err = LearnParams::from_json("{not json").unwrap_err();
        assert!(matches!(err, EncoderError::JsonParse(_)));
    }
}
