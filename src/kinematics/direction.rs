//! Splits a (velocity, direction) command into a motion magnitude per body side.
//!
//! The policy is an ordered table of rules checked top-down, first match wins. A command
//! where no rule applies means "stand still".
use crate::robot::{commands::Command, config::GaitConfig, leg::Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionCase {
    /// Straight forward or backward.
    Translate,
    /// Walking while veering, velocity dominates.
    VelocityBlend,
    /// Turning while walking, direction dominates.
    DirectionBlend,
    /// Turning in place.
    Rotate,
}

/// Per-side magnitudes of one step, plus the component that sets its timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub case: MotionCase,
    pub left: f32,
    pub right: f32,
    pub reference: f32,
}

impl Resolution {
    pub fn side(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionResolver {
    primary: f32,
    secondary: f32,
    blend_limit: f32,
}

struct Rule {
    case: MotionCase,
    applies: fn(&DirectionResolver, f32, f32) -> bool,
    resolve: fn(&DirectionResolver, f32, f32) -> (f32, f32, f32),
}

/// Checked in order; `(velocity, direction)` in, `(left, right, reference)` out.
const RULES: [Rule; 4] = [
    Rule {
        case: MotionCase::Translate,
        applies: |r, v, d| v.abs() >= r.primary && d.abs() < r.secondary,
        resolve: |_, v, _| (v, v, v),
    },
    Rule {
        case: MotionCase::VelocityBlend,
        applies: |r, v, d| {
            v.abs() >= r.primary && d.abs() >= r.secondary && v.abs() > d.abs()
        },
        resolve: |r, v, d| {
            // only the positive side of the blend term is bounded
            if d < 0.0 {
                (v + (2.0 * d).min(r.blend_limit), v, v)
            } else {
                (v, v - (2.0 * d).min(r.blend_limit), v)
            }
        },
    },
    Rule {
        case: MotionCase::DirectionBlend,
        applies: |r, v, d| {
            d.abs() >= r.primary && v.abs() >= r.secondary && d.abs() > v.abs()
        },
        resolve: |_, v, d| {
            if v < 0.0 {
                (d, -d + v, d)
            } else {
                (d, -d - v, d)
            }
        },
    },
    Rule {
        case: MotionCase::Rotate,
        applies: |r, v, d| d.abs() >= r.primary && v.abs() < r.secondary,
        resolve: |_, _, d| (d, -d, d),
    },
];

impl DirectionResolver {
    pub fn new(config: &GaitConfig) -> Self {
        Self {
            primary: config.primary_cutoff,
            secondary: config.secondary_cutoff,
            blend_limit: config.blend_limit,
        }
    }

    /// `None` when neither component clears its cutoff, or when both are present with equal
    /// magnitude (no rule dominates).
    pub fn resolve(&self, command: Command) -> Option<Resolution> {
        let Command {
            velocity,
            direction,
        } = command;
        RULES
            .iter()
            .find(|rule| (rule.applies)(self, velocity, direction))
            .map(|rule| {
                let (left, right, reference) = (rule.resolve)(self, velocity, direction);
                Resolution {
                    case: rule.case,
                    left,
                    right,
                    reference,
                }
            })
    }
}

impl Default for DirectionResolver {
    fn default() -> Self {
        Self::new(&GaitConfig::default())
    }
}
