//! Joint enumeration and the per-leg joint target.
//!
//! Defines the [`Joint`] enum for identifying each joint (coxa, femur, tibia) and
//! [`JointAngles`], the value handed to the actuation layer for one leg.
use core::fmt::Display;
use core::ops::{Add, Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    Coxa = 0,
    Femur = 1,
    Tibia = 2,
}

impl Joint {
    pub const ALL: [Joint; 3] = [Joint::Coxa, Joint::Femur, Joint::Tibia];
}

impl Display for Joint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Joint::Coxa => f.write_str("coxa"),
            Joint::Femur => f.write_str("femur"),
            Joint::Tibia => f.write_str("tibia"),
        }
    }
}

/// Angles in degrees, measured from the neutral pose of each joint. Used both as an
/// absolute target and as a delta for relative moves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JointAngles {
    pub coxa: f32,
    pub femur: f32,
    pub tibia: f32,
}

impl JointAngles {
    pub const ZERO: JointAngles = JointAngles::new(0.0, 0.0, 0.0);

    pub const fn new(coxa: f32, femur: f32, tibia: f32) -> Self {
        Self { coxa, femur, tibia }
    }

    /// A delta that only moves the tibia.
    pub const fn tibia_only(tibia: f32) -> Self {
        Self::new(0.0, 0.0, tibia)
    }
}

impl Add for JointAngles {
    type Output = JointAngles;

    fn add(self, rhs: JointAngles) -> JointAngles {
        JointAngles::new(
            self.coxa + rhs.coxa,
            self.femur + rhs.femur,
            self.tibia + rhs.tibia,
        )
    }
}

impl Index<Joint> for JointAngles {
    type Output = f32;

    fn index(&self, joint: Joint) -> &f32 {
        match joint {
            Joint::Coxa => &self.coxa,
            Joint::Femur => &self.femur,
            Joint::Tibia => &self.tibia,
        }
    }
}

impl IndexMut<Joint> for JointAngles {
    fn index_mut(&mut self, joint: Joint) -> &mut f32 {
        match joint {
            Joint::Coxa => &mut self.coxa,
            Joint::Femur => &mut self.femur,
            Joint::Tibia => &mut self.tibia,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_delta_adds_per_joint() {
        let pose = JointAngles::new(10.0, -5.0, 2.0) + JointAngles::tibia_only(15.0);
        assert_eq!(pose, JointAngles::new(10.0, -5.0, 17.0));
    }

    #[test]
    fn index_by_joint() {
        let mut pose = JointAngles::ZERO;
        pose[Joint::Tibia] = 30.0;
        assert_eq!(pose[Joint::Tibia], 30.0);
        assert_eq!(pose[Joint::Coxa], 0.0);
    }
}
