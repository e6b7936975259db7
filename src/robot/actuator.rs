//! The actuation boundary of the gait engine.
//!
//! The gait core only decides joint targets. Turning a target into physical motion (inverse
//! kinematics, servo pulses, bus traffic) belongs to an implementation of [`LegActuator`].
//! Calls are synchronous: when one returns `Ok`, the target has been handed to the hardware.
//! Errors are passed straight back to whoever drives the gait; the engine never retries and
//! never attempts to finish a partially executed step.
use super::joint::JointAngles;
use super::leg::Leg;

pub trait LegActuator {
    type Error: core::fmt::Debug;

    /// Move `leg` by `delta` from its current position.
    fn set_position_relative(&mut self, leg: Leg, delta: JointAngles) -> Result<(), Self::Error>;

    /// Move `leg` to `target`.
    fn set_position_absolute(&mut self, leg: Leg, target: JointAngles)
        -> Result<(), Self::Error>;
}

impl<T: LegActuator + ?Sized> LegActuator for &mut T {
    type Error = T::Error;

    fn set_position_relative(&mut self, leg: Leg, delta: JointAngles) -> Result<(), Self::Error> {
        (**self).set_position_relative(leg, delta)
    }

    fn set_position_absolute(
        &mut self,
        leg: Leg,
        target: JointAngles,
    ) -> Result<(), Self::Error> {
        (**self).set_position_absolute(leg, target)
    }
}
