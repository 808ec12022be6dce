//! Pure numeric helpers shared by encoding and learning.

/// Logistic function `1 / (1 + e^-x)`.
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Radial receptive-field response `exp(-d² / (2·width²))`, in [0, 1].
///
/// A width too small to square without underflow behaves as a delta:
/// 1 at the center, 0 everywhere else.
#[inline]
pub fn radial_response(dist_sq: f32, width: f32) -> f32 {
    let spread = 2.0 * width * width;
    if !(spread > f32::MIN_POSITIVE) {
        return if dist_sq <= 0.0 { 1.0 } else { 0.0 };
    }
    (-dist_sq / spread).exp().clamp(0.0, 1.0)
}

/// Fraction by which `duty_cycle` falls short of `threshold`, in [0, 1].
///
/// Zero for nodes at or above the threshold and for a non-positive threshold.
#[inline]
pub fn boost_function(duty_cycle: f32, threshold: f32) -> f32 {
    if !(threshold > 0.0) {
        return 0.0;
    }
    ((threshold - duty_cycle).max(0.0) / threshold).min(1.0)
}

/// Euclidean norm of `input - recon`.
pub fn reconstruction_error(input: &[f32], recon: &[f32]) -> f32 {
    assert_eq!(
        input.len(),
        recon.len(),
        "Expected recon len={}, got {}",
        input.len(),
        recon.len()
    );
    input
        .iter()
        .zip(recon)
        .map(|(x, r)| (x - r) * (x - r))
        .sum::<f32>()
        .sqrt()
}
