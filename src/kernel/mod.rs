//! Kernel layer — the adaptive encoder and its numeric building blocks.
//!
//! - Node bank state ([`Node`], [`Recon`])
//! - Injected randomness for initialization ([`UniformSource`])
//! - Receptive-field kernel, boost curve, and logistic ([`response`])
//! - Soft k-winners threshold search ([`competition`])
//! - The encode / decode / learn cycle ([`AdaptiveEncoder`])
//!
//! This layer has no dependencies on [`highlevel`](crate::highlevel).
//!
//! # Example
//!
//! ```rust
//! use adaptive_sdr::config::{EncodeParams, InitConfig};
//! use adaptive_sdr::kernel::{seeded_source, AdaptiveEncoder};
//!
//! let mut rng = seeded_source(7, "example");
//! let mut enc = AdaptiveEncoder::create(&InitConfig::new(8, 2), &mut rng).unwrap();
//!
//! let mut sdr = Vec::new();
//! enc.encode(&[0.5, 0.5], &mut sdr, &EncodeParams::default());
//! assert!(sdr.iter().all(|&v| (0.0..=1.0).contains(&v)));
//! ```

pub mod competition;
pub mod encoder;
pub mod node;
pub mod response;
pub mod uniform;

pub use encoder::AdaptiveEncoder;
pub use node::{Node, Recon};
pub use response::{boost_function, radial_response, reconstruction_error, sigmoid};
pub use uniform::{seeded_source, UniformSource};
