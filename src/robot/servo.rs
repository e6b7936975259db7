use crate::robot::{
    actuator::LegActuator,
    joint::{Joint, JointAngles},
    leg::{Leg, Side},
};
use core::fmt::Display;
use embedded_hal::pwm::{Error as _, ErrorKind, SetDutyCycle};
use fugit::HertzU32;
use log::{error, trace};
use micromath::F32Ext;

// --- Servo Configuration ---
const SERVO_MIN_PULSE_US: f32 = 544.0;
const SERVO_MAX_PULSE_US: f32 = 2400.0;
const SERVO_ANGLE_RANGE: f32 = 180.0;
/// Servo angle of a joint sitting at its neutral pose
const SERVO_CENTER: f32 = 90.0;
pub const SERVO_FREQUENCY: HertzU32 = HertzU32::from_raw(50);

#[derive(Debug)]
pub struct Servo<PWM> {
    pwm: PWM,
    duty: Option<u16>,
    frequency: HertzU32,
}

impl<PWM> Servo<PWM>
where
    PWM: SetDutyCycle,
{
    pub fn new(pwm: PWM, frequency: HertzU32) -> Self {
        Self {
            pwm,
            duty: None,
            frequency,
        }
    }

    /// Sets the servo angle in degrees.
    ///
    /// # Arguments
    /// * `angle` - A value between 0 and 180 degrees. Values outside this range are clamped.
    ///
    /// # Returns
    /// * `Ok(())` on success, or when the duty cycle is already the requested one
    /// * `Err(_)` if the PWM driver fails to update the duty cycle
    pub fn set_angle(&mut self, angle: f32) -> Result<(), PWM::Error> {
        let duty = self.angle_to_duty(angle);

        //Avoid setting the same duty again
        if self.duty == Some(duty) {
            return Ok(());
        }
        self.pwm.set_duty_cycle(duty)?;
        self.duty = Some(duty);
        Ok(())
    }

    /// Last duty cycle written to the PWM channel.
    pub fn duty(&self) -> Option<u16> {
        self.duty
    }

    fn angle_to_duty(&self, angle: f32) -> u16 {
        let angle = angle.clamp(0.0, SERVO_ANGLE_RANGE);
        let pulse_width_range = SERVO_MAX_PULSE_US - SERVO_MIN_PULSE_US;
        let pulse_us = SERVO_MIN_PULSE_US + (angle / SERVO_ANGLE_RANGE) * pulse_width_range;

        // THE WIDTH OF THE PULSE DRIVES THE ANGLE, NOT FREQ
        let period_us = 1_000_000.0 / self.frequency.raw() as f32;
        let max_duty = self.pwm.max_duty_cycle() as f32;
        (pulse_us / period_us * max_duty).round().clamp(0.0, max_duty) as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServoError {
    pub leg: Leg,
    pub joint: Joint,
    pub kind: ErrorKind,
}

impl Display for ServoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} servo write failed: {:?}", self.leg, self.joint, self.kind)
    }
}

/// Six legs of three hobby servos each, driven as a [`LegActuator`].
///
/// Joint angles are offsets from the neutral pose, which sits at the middle of the servo
/// range. Right-side coxa servos are mounted mirrored, so their offset is applied negated.
/// The last commanded angle of every joint is tracked to resolve relative moves; on creation
/// every leg is assumed to be at neutral.
pub struct ServoLegs<PWM> {
    servos: [[Servo<PWM>; 3]; 6],
    pose: [JointAngles; 6],
}

impl<PWM> ServoLegs<PWM>
where
    PWM: SetDutyCycle,
{
    /// `pwms` is indexed by [`Leg`] then [`Joint`] (coxa, femur, tibia).
    pub fn new(pwms: [[PWM; 3]; 6], frequency: HertzU32) -> Self {
        Self {
            servos: pwms.map(|joints| joints.map(|pwm| Servo::new(pwm, frequency))),
            pose: [JointAngles::ZERO; 6],
        }
    }

    pub fn pose(&self, leg: Leg) -> JointAngles {
        self.pose[leg]
    }

    pub fn servo(&self, leg: Leg, joint: Joint) -> &Servo<PWM> {
        &self.servos[leg][joint as usize]
    }

    fn write_pose(&mut self, leg: Leg, pose: JointAngles) -> Result<(), ServoError> {
        for joint in Joint::ALL {
            let angle = servo_angle(leg, joint, pose[joint]);
            trace!("[SERVO] {leg} {joint} -> {angle}");
            self.servos[leg][joint as usize]
                .set_angle(angle)
                .map_err(|e| {
                    let err = ServoError {
                        leg,
                        joint,
                        kind: e.kind(),
                    };
                    error!("[SERVO] {err}");
                    err
                })?;
            // joints already written stay tracked if a later one fails
            self.pose[leg][joint] = pose[joint];
        }
        Ok(())
    }
}

impl<PWM> LegActuator for ServoLegs<PWM>
where
    PWM: SetDutyCycle,
{
    type Error = ServoError;

    fn set_position_relative(&mut self, leg: Leg, delta: JointAngles) -> Result<(), ServoError> {
        self.write_pose(leg, self.pose[leg] + delta)
    }

    fn set_position_absolute(&mut self, leg: Leg, target: JointAngles) -> Result<(), ServoError> {
        self.write_pose(leg, target)
    }
}

fn servo_angle(leg: Leg, joint: Joint, offset: f32) -> f32 {
    match (joint, leg.side()) {
        (Joint::Coxa, Side::Right) => SERVO_CENTER - offset,
        _ => SERVO_CENTER + offset,
    }
}
