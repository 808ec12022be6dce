//! Soft k-winners competition.
//!
//! Each node's output is `sigmoid(intensity · (activation - θ))` with a single
//! shared threshold θ. θ is found by bisection so that the outputs sum to the
//! requested activity:
//!
//! ```text
//! Σ sigmoid(intensity · (a_i - θ)) ≈ clamp(local_activity, 0, n)
//! ```
//!
//! The total is strictly decreasing in θ, so bisection always brackets the
//! answer. Because the bracket and iteration count are fixed, the θ returned
//! for a larger target is never above the θ for a smaller one, which keeps the
//! number of strongly active nodes monotone in `local_activity`.

use super::response::sigmoid;

/// Distance (in units of `1 / intensity`) beyond which the sigmoid is saturated.
const SATURATION: f32 = 20.0;

/// Bisection steps; the bracket shrinks by 2^-40.
const ITERATIONS: usize = 40;

/// Largest bracket half-width; keeps `lo + hi` finite.
const MAX_MARGIN: f32 = f32::MAX / 4.0;

/// Find the shared threshold θ for `activations`.
///
/// # Panics
/// Panics if `activations` is empty.
pub fn select_threshold(activations: &[f32], local_activity: f32, intensity: f32) -> f32 {
    assert!(!activations.is_empty(), "No activations to compete");

    let n = activations.len() as f32;
    let target = local_activity.clamp(0.0, n);

    let (min_a, max_a) = activations
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &a| {
            (lo.min(a), hi.max(a))
        });

    // Tiny intensities would push the bracket to infinity.
    let margin = (SATURATION / intensity).min(MAX_MARGIN);
    let mut lo = min_a - margin;
    let mut hi = max_a + margin;

    for _ in 0..ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if expected_active(activations, mid, intensity) > target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    0.5 * (lo + hi)
}

/// Sum of sigmoid outputs for threshold `theta`.
pub fn expected_active(activations: &[f32], theta: f32, intensity: f32) -> f32 {
    activations
        .iter()
        .map(|&a| sigmoid(intensity * (a - theta)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs(activations: &[f32], local_activity: f32, intensity: f32) -> Vec<f32> {
        let theta = select_threshold(activations, local_activity, intensity);
        activations
            .iter()
            .map(|&a| sigmoid(intensity * (a - theta)))
            .collect()
    }

    #[test]
    #[should_panic(expected = "No activations")]
    fn test_empty() {
        select_threshold(&[], 1.0, 8.0);
    }

    #[test]
    fn test_tiny_intensity_stays_finite() {
        let acts = [0.9, 0.5, 0.1, 0.0];
        let theta = select_threshold(&acts, 1.0, 1e-39);
        assert!(theta.is_finite(), "theta {}", theta);
        let out = outputs(&acts, 1.0, 1e-39);
        assert!(
            out.iter().all(|&o| (0.0..=1.0).contains(&o)),
            "outputs: {:?}",
            out
        );
    }

    #[test]
    fn test_total_matches_target() {
        let acts = [0.9, 0.8, 0.3, 0.2, 0.1, 0.05];
        for target in [1.0f32, 2.0, 3.5] {
            let total: f32 = outputs(&acts, target, 8.0).iter().sum();
            assert!(
                (total - target).abs() < 1e-3,
                "target {} produced total {}",
                target,
                total
            );
        }
    }

    #[test]
    fn test_strongest_nodes_win() {
        let acts = [0.1, 0.95, 0.2, 0.9, 0.15];
        let out = outputs(&acts, 2.0, 40.0);
        assert!(out[1] > 0.8 && out[3] > 0.8, "winners: {:?}", out);
        assert!(out[0] < 0.2 && out[2] < 0.2 && out[4] < 0.2, "losers: {:?}", out);
    }

    #[test]
    fn test_threshold_monotone_in_activity() {
        let acts = [0.7, 0.6, 0.55, 0.4, 0.3, 0.25, 0.1];
        let mut prev = f32::INFINITY;
        for i in 0..=70 {
            let target = i as f32 / 10.0;
            let theta = select_threshold(&acts, target, 12.0);
            assert!(theta <= prev, "theta rose at target {}", target);
            prev = theta;
        }
    }

    #[test]
    fn test_zero_activity_silences_everything() {
        let acts = [1.0, 1.0, 1.0];
        let out = outputs(&acts, 0.0, 8.0);
        assert!(out.iter().all(|&o| o < 1e-6), "outputs: {:?}", out);
    }

    #[test]
    fn test_activity_above_size_saturates() {
        let acts = [0.0, 0.5, 1.0];
        let out = outputs(&acts, 10.0, 8.0);
        assert!(out.iter().all(|&o| o > 0.999), "outputs: {:?}", out);
    }
}
