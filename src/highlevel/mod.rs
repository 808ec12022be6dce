//! High-level convenience layer.
//!
//! [`Autoencoder`] bundles an [`AdaptiveEncoder`](crate::kernel::AdaptiveEncoder)
//! with its parameters and buffers. [`ErrorTracker`] keeps running statistics
//! of reconstruction error.

pub mod autoencoder;
pub mod tracker;

pub use autoencoder::Autoencoder;
pub use tracker::ErrorTracker;
