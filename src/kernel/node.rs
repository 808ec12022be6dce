//! Node and reconstruction state held by an [`AdaptiveEncoder`].
//!
//! [`AdaptiveEncoder`]: crate::kernel::AdaptiveEncoder

/// One prototype unit, i.e. one position of the sparse code.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Prototype location in input space.
    pub center: Vec<f32>,
    /// Spread of the receptive field.
    pub width: f32,
    /// Raw radial response to the last input, in [0, 1].
    pub sum: f32,
    /// Boosted response that took part in the competition.
    pub activation: f32,
    /// Final code value in [0, 1].
    pub output: f32,
    /// Smoothed fraction of time this node has been active.
    pub duty_cycle: f32,
    /// Activation bonus set by the last `learn` for starved nodes.
    pub boost: f32,
}

impl Node {
    pub(crate) fn new(center: Vec<f32>, width: f32) -> Self {
        Self {
            center,
            width,
            sum: 0.0,
            activation: 0.0,
            output: 0.0,
            duty_cycle: 1.0,
            boost: 0.0,
        }
    }

    /// Squared Euclidean distance from the center to `input`.
    #[inline]
    pub fn distance_sq(&self, input: &[f32]) -> f32 {
        self.center
            .iter()
            .zip(input)
            .map(|(c, x)| (x - c) * (x - c))
            .sum()
    }
}

/// Reconstruction weights of one node.
#[derive(Clone, Debug, PartialEq)]
pub struct Recon {
    pub weights: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_fully_active() {
        let node = Node::new(vec![0.0; 3], 0.5);
        assert_eq!(node.duty_cycle, 1.0);
        assert_eq!(node.output, 0.0);
        assert_eq!(node.boost, 0.0);
    }

    #[test]
    fn test_distance_sq() {
        let node = Node::new(vec![1.0, 2.0], 1.0);
        assert!((node.distance_sq(&[4.0, 6.0]) - 25.0).abs() < 1e-6);
    }
}
