use crate::robot::leg::TripodSet;

/// Which tripod swings during one step, and which one stays planted and propels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripodAssignment {
    pub active: TripodSet,
    pub stance: TripodSet,
}

/// The one bit of gait state carried from step to step.
///
/// It starts with tripod A as the last swung set, so the first step swings tripod B. Every
/// call to [`TripodAlternator::next`] flips it; it only resets when the alternator is
/// rebuilt.
#[derive(Debug, Clone)]
pub struct TripodAlternator {
    last_active: TripodSet,
}

impl TripodAlternator {
    pub const fn new() -> Self {
        Self {
            last_active: TripodSet::A,
        }
    }

    pub fn next(&mut self) -> TripodAssignment {
        let active = self.last_active.other();
        self.last_active = active;
        TripodAssignment {
            active,
            stance: active.other(),
        }
    }

    /// Set that swung during the most recent step.
    pub fn last_active(&self) -> TripodSet {
        self.last_active
    }
}

impl Default for TripodAlternator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_swings_tripod_b() {
        let mut alternator = TripodAlternator::new();
        assert_eq!(
            alternator.next(),
            TripodAssignment {
                active: TripodSet::B,
                stance: TripodSet::A,
            }
        );
    }

    #[test]
    fn strictly_alternates() {
        let mut alternator = TripodAlternator::new();
        let mut previous = alternator.next();
        for _ in 0..5 {
            let current = alternator.next();
            assert_eq!(current.active, previous.stance);
            assert_eq!(current.stance, previous.active);
            assert_eq!(alternator.last_active(), current.active);
            previous = current;
        }
    }
}
