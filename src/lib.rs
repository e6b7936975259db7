//! Library root for the tripod gait controller of a six-legged walking robot.
//!
//! Re-exports all main modules: [`kinematics`], [`robot`], and [`tasks`].
//! Used by firmware binaries and by the integration tests.
#![no_std]

pub mod kinematics;
pub mod robot;
pub mod tasks;

#[cfg(test)]
mod testing;

pub use kinematics::gait_engine::GaitEngine;
pub use robot::commands::{Command, MotionCommand};

pub const MOTIONCMD_CHANNEL_SIZE: usize = 4;
