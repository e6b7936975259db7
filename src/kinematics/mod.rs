//! Tripod gait algorithms for the hexapod.
//!
//! - [`direction`] splits a (velocity, direction) command into per-side magnitudes.
//! - [`delay`] picks the timing multiplier for a step from its reference magnitude.
//! - [`tripod`] holds the alternation between the two tripod leg sets.
//! - [`gait_engine`] sequences the lift, swing and settle phases and the initial stance.
//!
//! Used by the motion task to turn queued commands into leg targets.
pub mod delay;
pub mod direction;
pub mod gait_engine;
pub mod tripod;
