//! Constant and Clustered Input: watching the encoder settle.
//!
//! 1. Feed a single fixed point and watch reconstruction error fall
//! 2. Switch to three alternating clusters and see nodes specialize
//! 3. Report how evenly duty cycles end up spread across the bank
//!
//! Set `RUST_LOG=adaptive_sdr=trace` to see per-step events.
//!
//! Run: cargo run --example constant_input --release

use adaptive_sdr::config::{EncodeParams, InitConfig, LearnParams};
use adaptive_sdr::highlevel::Autoencoder;
use adaptive_sdr::kernel::seeded_source;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> adaptive_sdr::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let init = InitConfig::new(32, 2)
        .with_center(0.0, 1.0)
        .with_width(0.3, 0.6)
        .with_weight(0.0, 0.5);
    let encode = EncodeParams {
        local_activity: 3.0,
        ..Default::default()
    };
    let learn = LearnParams {
        center_alpha: 0.1,
        recon_alpha: 0.1,
        ..Default::default()
    };

    let mut rng = seeded_source(2024, "demo");
    let mut ae = Autoencoder::new(&init, encode, learn, &mut rng)?;

    // =========================================================================
    // Phase 1: one fixed point
    // =========================================================================

    let point = [0.5, 0.5];
    for i in 0..1000 {
        let error = ae.step(&point)?;
        if i % 200 == 0 {
            info!(step = i, error, "constant input");
        }
    }
    info!(
        mean_error = ae.tracker().mean(),
        active = ae.encoder().active_count(0.5),
        "constant phase finished"
    );

    // =========================================================================
    // Phase 2: three clusters
    // =========================================================================

    let clusters = [[0.1, 0.9], [0.9, 0.9], [0.5, 0.1]];
    for i in 0..3000 {
        let x = clusters[i % clusters.len()];
        ae.step(&x)?;
    }

    for x in clusters {
        let error = ae.infer(&x)?;
        let winners: Vec<usize> = ae
            .code()
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > 0.5)
            .map(|(i, _)| i)
            .collect();
        info!(input = ?x, error, winners = ?winners, "cluster code");
    }

    // =========================================================================
    // Phase 3: usage
    // =========================================================================

    let duty: Vec<f32> = ae.encoder().nodes().iter().map(|n| n.duty_cycle).collect();
    let min = duty.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = duty.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let boosted = ae.encoder().nodes().iter().filter(|n| n.boost > 0.0).count();
    info!(
        mean = ae.encoder().mean_duty_cycle(),
        min,
        max,
        boosted,
        "duty cycle spread"
    );

    Ok(())
}
