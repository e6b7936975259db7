//! Speed-dependent timing of a step.
//!
//! Slower commands keep the same angular excursion per step, so every phase is held longer
//! to keep joint speed bounded and footing stable.
use crate::robot::config::DelayPolicy;

impl DelayPolicy {
    /// Multiplier for the phase holds of a step whose reference magnitude is `magnitude`.
    pub fn scale(&self, magnitude: f32) -> f32 {
        let magnitude = magnitude.abs();
        self.tiers
            .iter()
            .find(|tier| magnitude >= tier.threshold)
            .map_or(self.fallback, |tier| tier.multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive() {
        let policy = DelayPolicy::default();
        assert_eq!(policy.scale(1.0), 1.0);
        assert_eq!(policy.scale(0.8), 1.0);
        assert_eq!(policy.scale(0.79999), 1.3);
        assert_eq!(policy.scale(0.5), 1.3);
        assert_eq!(policy.scale(0.3), 1.5);
        assert_eq!(policy.scale(0.29), 1.8);
        assert_eq!(policy.scale(0.0), 1.8);
    }

    #[test]
    fn uses_absolute_magnitude() {
        let policy = DelayPolicy::default();
        assert_eq!(policy.scale(-0.8), 1.0);
        assert_eq!(policy.scale(-0.5), 1.3);
        assert_eq!(policy.scale(-0.2), 1.8);
    }
}
