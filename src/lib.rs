//! # adaptive-sdr: Self-Organizing Sparse Encoding
//!
//! A competitive-learning encoder that turns real-valued vectors into sparse
//! distributed representations (SDRs), rebuilds approximate inputs from those
//! codes, and keeps adapting its prototypes to the data it sees.
//!
//! ## Quick Start
//!
//! ```rust
//! use adaptive_sdr::config::{EncodeParams, InitConfig, LearnParams};
//! use adaptive_sdr::highlevel::Autoencoder;
//! use adaptive_sdr::kernel::seeded_source;
//!
//! let mut rng = seeded_source(42, "init");
//! let mut ae = Autoencoder::new(
//!     &InitConfig::new(32, 2),
//!     EncodeParams::default(),
//!     LearnParams::default(),
//!     &mut rng,
//! )?;
//!
//! for _ in 0..100 {
//!     ae.step(&[0.25, 0.75])?;
//! }
//! println!("mean error: {:.4}", ae.tracker().mean());
//! # Ok::<(), adaptive_sdr::EncoderError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Nodes**: prototypes with a center and a receptive field width
//! - **Competition**: a soft k-winners rule keeps about `local_activity` nodes on
//! - **Duty cycle**: smoothed activity of each node
//! - **Boosting**: starved nodes get a bonus on their next activation
//! - **Reconstruction**: a linear decoder from code back to input space
//!
//! ## Layers
//!
//! - [`kernel`] — the encoder and its numeric helpers
//! - [`config`] — validated, serde-friendly parameter sets
//! - [`highlevel`] — [`Autoencoder`] wrapper running the full cycle

pub mod config;
pub mod error;
pub mod highlevel;
pub mod kernel;

// Re-exports for convenience
pub use config::{EncodeParams, InitConfig, InitRange, LearnParams};
pub use error::{EncoderError, Result};
pub use highlevel::{Autoencoder, ErrorTracker};
pub use kernel::{sigmoid, AdaptiveEncoder, Node, Recon, UniformSource};
