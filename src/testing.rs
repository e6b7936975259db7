//! Recording collaborators shared by the unit tests.
use crate::kinematics::gait_engine::LegTarget;
use crate::robot::{actuator::LegActuator, joint::JointAngles, leg::Leg};
use embedded_hal::delay::DelayNs;
use heapless::Vec;

#[derive(Debug, PartialEq)]
pub struct Unplugged;

/// Logs every target it receives. Fails with [`Unplugged`] once `fail_after` calls went
/// through.
#[derive(Debug, Default)]
pub struct RecordingLegs {
    pub calls: Vec<LegTarget, 64>,
    pub fail_after: Option<usize>,
}

impl RecordingLegs {
    fn record(&mut self, target: LegTarget) -> Result<(), Unplugged> {
        if self.fail_after == Some(self.calls.len()) {
            return Err(Unplugged);
        }
        self.calls.push(target).map_err(|_| Unplugged)
    }

    pub fn relative(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, LegTarget::Relative { .. }))
            .count()
    }

    pub fn absolute(&self) -> usize {
        self.calls.len() - self.relative()
    }
}

impl LegActuator for RecordingLegs {
    type Error = Unplugged;

    fn set_position_relative(&mut self, leg: Leg, delta: JointAngles) -> Result<(), Unplugged> {
        self.record(LegTarget::Relative { leg, delta })
    }

    fn set_position_absolute(&mut self, leg: Leg, target: JointAngles) -> Result<(), Unplugged> {
        self.record(LegTarget::Absolute { leg, target })
    }
}

/// Adds up requested delays instead of waiting.
#[derive(Debug, Default)]
pub struct ClockDelay {
    pub elapsed_ns: u64,
}

impl ClockDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for ClockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_ns += us as u64 * 1_000;
    }
}
