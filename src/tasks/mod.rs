//! Control-loop glue for running the gait on a robot.
//!
//! - [`motion_task`]: Owns the gait engine and executes queued motion commands.
//!
//! Other tasks (radio link, sensors, a shell) only ever send [`crate::robot::commands::MotionCommand`]s
//! through an embassy channel, so the engine and its alternation bit have a single owner.
pub mod motion_task;
