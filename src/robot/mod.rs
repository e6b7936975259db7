//! Core robot types and configuration.
//!
//! This module defines the hardware-facing types of the hexapod, including:
//! - [`actuator`]: The [`actuator::LegActuator`] boundary the gait engine drives.
//! - [`commands`]: Walking commands and the motion commands queued between tasks.
//! - [`config`]: Geometry and timing constants of the tripod gait.
//! - [`leg`]: Leg, side and tripod set enumerations and indexing helpers.
//! - [`joint`]: Joint enumeration and per-leg joint angles.
//! - [`servo`]: PWM hobby servo legs implementing the actuator.
pub mod actuator;
pub mod commands;
pub mod config;
pub mod joint;
pub mod leg;
pub mod servo;
