//! Leg identifiers, body sides and the two tripod sets.
//!
//! Side and body position are explicit lookups on [`Leg`], so nothing depends on how the
//! identifiers are numbered.
use core::fmt::Display;
use core::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leg {
    FrontLeft = 0,
    FrontRight = 1,
    MiddleLeft = 2,
    MiddleRight = 3,
    RearLeft = 4,
    RearRight = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPosition {
    Front,
    Middle,
    Rear,
}

/// One of the two fixed leg triples of the tripod gait. Each set holds one leg per body
/// position and spans both sides, so a planted set always forms a support triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripodSet {
    /// Front left, middle right, rear left.
    A,
    /// Front right, middle left, rear right.
    B,
}

impl Leg {
    pub const ALL: [Leg; 6] = [
        Leg::FrontLeft,
        Leg::FrontRight,
        Leg::MiddleLeft,
        Leg::MiddleRight,
        Leg::RearLeft,
        Leg::RearRight,
    ];

    pub const fn side(self) -> Side {
        match self {
            Leg::FrontLeft | Leg::MiddleLeft | Leg::RearLeft => Side::Left,
            Leg::FrontRight | Leg::MiddleRight | Leg::RearRight => Side::Right,
        }
    }

    pub const fn position(self) -> BodyPosition {
        match self {
            Leg::FrontLeft | Leg::FrontRight => BodyPosition::Front,
            Leg::MiddleLeft | Leg::MiddleRight => BodyPosition::Middle,
            Leg::RearLeft | Leg::RearRight => BodyPosition::Rear,
        }
    }

    pub const fn tripod(self) -> TripodSet {
        match self {
            Leg::FrontLeft | Leg::MiddleRight | Leg::RearLeft => TripodSet::A,
            Leg::FrontRight | Leg::MiddleLeft | Leg::RearRight => TripodSet::B,
        }
    }
}

impl TripodSet {
    pub const fn legs(self) -> [Leg; 3] {
        match self {
            TripodSet::A => [Leg::FrontLeft, Leg::MiddleRight, Leg::RearLeft],
            TripodSet::B => [Leg::FrontRight, Leg::MiddleLeft, Leg::RearRight],
        }
    }

    pub const fn other(self) -> TripodSet {
        match self {
            TripodSet::A => TripodSet::B,
            TripodSet::B => TripodSet::A,
        }
    }

    pub fn contains(self, leg: Leg) -> bool {
        leg.tripod() == self
    }
}

impl Display for Leg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Leg::FrontLeft => f.write_str("Front left"),
            Leg::FrontRight => f.write_str("Front right"),
            Leg::MiddleLeft => f.write_str("Middle left"),
            Leg::MiddleRight => f.write_str("Middle right"),
            Leg::RearLeft => f.write_str("Rear left"),
            Leg::RearRight => f.write_str("Rear right"),
        }
    }
}

impl Display for TripodSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TripodSet::A => f.write_str("tripod A"),
            TripodSet::B => f.write_str("tripod B"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidLegId(pub usize);

impl TryFrom<usize> for Leg {
    type Error = InvalidLegId;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Leg::ALL.get(value).copied().ok_or(InvalidLegId(value))
    }
}

impl<T> Index<Leg> for [T; 6] {
    type Output = T;

    fn index(&self, leg: Leg) -> &Self::Output {
        &self[leg as usize]
    }
}

impl<T> IndexMut<Leg> for [T; 6] {
    fn index_mut(&mut self, leg: Leg) -> &mut Self::Output {
        &mut self[leg as usize]
    }
}
