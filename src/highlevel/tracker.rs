//! Running statistics of reconstruction error.

/// Exponential moving average and variance of a stream of errors.
///
/// During warm-up (the first `1 / alpha` observations) a simple running
/// average is used instead, so early estimates are not dragged toward zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorTracker {
    alpha: f32,
    n: usize,
    ema: f32,
    var_ema: f32,
    last: f32,
}

impl ErrorTracker {
    /// # Panics
    /// Panics unless `0 < alpha <= 1`.
    pub fn new(alpha: f32) -> Self {
        assert!(
            alpha > 0.0 && alpha <= 1.0,
            "alpha must be in (0, 1], got {}",
            alpha
        );
        Self {
            alpha,
            n: 0,
            ema: 0.0,
            var_ema: 0.0,
            last: 0.0,
        }
    }

    pub fn observe(&mut self, error: f32) {
        self.n += 1;
        self.last = error;
        if self.n == 1 {
            self.ema = error;
            self.var_ema = 0.0;
            return;
        }
        let mut alpha = self.alpha;
        if self.n as f32 <= 1.0 / alpha {
            alpha = 1.0 / self.n as f32;
        }
        let delta = error - self.ema;
        self.ema += alpha * delta;
        self.var_ema = (1.0 - alpha) * self.var_ema + alpha * delta * delta;
    }

    pub fn count(&self) -> usize {
        self.n
    }

    pub fn mean(&self) -> f32 {
        self.ema
    }

    pub fn std_dev(&self) -> f32 {
        self.var_ema.max(0.0).sqrt()
    }

    pub fn last(&self) -> f32 {
        self.last
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.alpha);
    }
}

impl Default for ErrorTracker {
    fn default() -> Self {
        Self::new(0.01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warmup_is_simple_average() {
        let mut t = ErrorTracker::new(0.1);
        for e in [1.0, 2.0, 3.0] {
            t.observe(e);
        }
        assert_eq!(t.count(), 3);
        assert!((t.mean() - 2.0).abs() < 1e-6, "mean {}", t.mean());
        assert_eq!(t.last(), 3.0);
    }

    #[test]
    fn test_constant_stream_has_no_spread() {
        let mut t = ErrorTracker::new(0.05);
        for _ in 0..200 {
            t.observe(0.25);
        }
        assert!((t.mean() - 0.25).abs() < 1e-6);
        assert!(t.std_dev() < 1e-6);
    }

    #[test]
    fn test_first_observation_sets_mean_without_spread() {
        let mut t = ErrorTracker::new(0.05);
        t.observe(0.8);
        assert_eq!(t.mean(), 0.8);
        assert_eq!(t.std_dev(), 0.0);
    }

    #[test]
    fn test_follows_shift_after_warmup() {
        let mut t = ErrorTracker::new(0.1);
        for _ in 0..50 {
            t.observe(1.0);
        }
        for _ in 0..100 {
            t.observe(0.0);
        }
        assert!(t.mean() < 0.01, "mean {}", t.mean());
    }

    #[test]
    fn test_reset() {
        let mut t = ErrorTracker::new(0.2);
        t.observe(5.0);
        t.reset();
        assert_eq!(t, ErrorTracker::new(0.2));
    }
}
