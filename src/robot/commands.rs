//! Command types for gait control and inter-task communication.
//!
//! [`Command`] is the (velocity, direction) pair consumed by one gait step; [`MotionCommand`]
//! is what other tasks queue for the motion task.

/// A walking command. Both components are conventionally in `[-1, 1]`: positive velocity
/// walks forward, positive direction turns right.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Command {
    pub velocity: f32,
    pub direction: f32,
}

impl Command {
    pub const STOP: Command = Command::new(0.0, 0.0);

    pub const fn new(velocity: f32, direction: f32) -> Self {
        Self {
            velocity,
            direction,
        }
    }

    pub const fn forward(velocity: f32) -> Self {
        Self::new(velocity, 0.0)
    }

    /// Turn in place.
    pub const fn rotate(direction: f32) -> Self {
        Self::new(0.0, direction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionCommand {
    /// Bring all legs to the neutral standing stance.
    Stand,
    /// One tripod step.
    Step(Command),
    /// `steps` consecutive tripod steps with the same command.
    Walk { command: Command, steps: u8 },
}
