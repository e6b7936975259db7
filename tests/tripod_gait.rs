use std::cell::RefCell;

use embedded_hal::delay::DelayNs;
use tripod_gait::robot::actuator::LegActuator;
use tripod_gait::robot::config::{GaitConfig, COXA_FORWARD, TIBIA_LOWERED, TIBIA_RAISED};
use tripod_gait::robot::joint::JointAngles;
use tripod_gait::robot::leg::{Leg, TripodSet};
use tripod_gait::{Command, GaitEngine};

type Shared<'a> = &'a RefCell<Log>;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Call {
    Relative(Leg, JointAngles),
    Absolute(Leg, JointAngles),
    Hold(u32),
}

/// Actuator and clock share one log so the ordering of moves and holds is visible.
#[derive(Debug, Default)]
struct Log(Vec<Call>);

struct Legs<'a>(Shared<'a>);
struct Clock<'a>(Shared<'a>);

impl LegActuator for Legs<'_> {
    type Error = std::convert::Infallible;

    fn set_position_relative(&mut self, leg: Leg, delta: JointAngles) -> Result<(), Self::Error> {
        self.0.borrow_mut().0.push(Call::Relative(leg, delta));
        Ok(())
    }

    fn set_position_absolute(&mut self, leg: Leg, target: JointAngles) -> Result<(), Self::Error> {
        self.0.borrow_mut().0.push(Call::Absolute(leg, target));
        Ok(())
    }
}

impl DelayNs for Clock<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().0.push(Call::Hold(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.0.borrow_mut().0.push(Call::Hold(us));
    }
}

impl Log {
    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.iter().filter(|c| pred(c)).count()
    }

    fn held_us(&self) -> u64 {
        self.0
            .iter()
            .map(|c| match c {
                Call::Hold(us) => *us as u64,
                _ => 0,
            })
            .sum()
    }

    /// Legs lifted by relative moves, in order.
    fn lifted(&self) -> Vec<Leg> {
        self.0
            .iter()
            .filter_map(|c| match c {
                Call::Relative(leg, _) => Some(*leg),
                _ => None,
            })
            .collect()
    }
}

fn is_relative(c: &Call) -> bool {
    matches!(c, Call::Relative(..))
}

fn is_absolute(c: &Call) -> bool {
    matches!(c, Call::Absolute(..))
}

#[test]
fn initialize_then_half_speed_step() {
    let log = RefCell::new(Log::default());
    let mut gait = GaitEngine::new(Legs(&log), Clock(&log));

    gait.initialize().unwrap();
    log.borrow_mut().0.clear();

    gait.step(0.5, 0.0).unwrap();
    let log = log.borrow();
    assert_eq!(log.count(is_relative), 3);
    assert_eq!(log.count(is_absolute), 9);
    assert_eq!(log.held_us(), 520_000);

    // lift, hold, swing (6), hold, settle (3), hold
    let holds: Vec<usize> = log
        .0
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, Call::Hold(_)))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(holds, [3, 10, 14]);
}

#[test]
fn degenerate_command_does_nothing() {
    let log = RefCell::new(Log::default());
    let mut gait = GaitEngine::new(Legs(&log), Clock(&log));
    gait.step(0.0, 0.0).unwrap();
    gait.step(0.05, 0.19).unwrap();
    assert!(log.borrow().0.is_empty());
}

#[test]
fn two_steps_lift_every_leg_once() {
    let log = RefCell::new(Log::default());
    let mut gait = GaitEngine::new(Legs(&log), Clock(&log));
    gait.step(0.9, 0.0).unwrap();
    gait.step(0.9, 0.0).unwrap();

    let lifted = log.borrow().lifted();
    assert_eq!(lifted.len(), 6);
    assert_eq!(&lifted[..3], TripodSet::B.legs());
    assert_eq!(&lifted[3..], TripodSet::A.legs());
    for leg in Leg::ALL {
        assert_eq!(lifted.iter().filter(|l| **l == leg).count(), 1);
    }
}

#[test]
fn initialize_does_not_consume_an_alternation() {
    let log = RefCell::new(Log::default());
    let mut gait = GaitEngine::new(Legs(&log), Clock(&log));
    gait.step(0.9, 0.0).unwrap();
    gait.initialize().unwrap();
    log.borrow_mut().0.clear();

    gait.step(0.9, 0.0).unwrap();
    assert_eq!(log.borrow().lifted(), TripodSet::A.legs());
}

#[test]
fn veering_left_shortens_left_stance_sweep() {
    let log = RefCell::new(Log::default());
    let mut gait = GaitEngine::new(Legs(&log), Clock(&log));
    gait.step(0.8, -0.3).unwrap();

    // first step: tripod A is planted, front left on the inner side, middle right outside
    let stance_coxa = |leg: Leg| {
        log.borrow()
            .0
            .iter()
            .find_map(|c| match c {
                Call::Absolute(l, t) if *l == leg && t.tibia == TIBIA_LOWERED => Some(t.coxa),
                _ => None,
            })
            .unwrap()
    };
    assert!((stance_coxa(Leg::FrontLeft) - COXA_FORWARD * 0.2).abs() < 1e-4);
    assert!((stance_coxa(Leg::MiddleRight) - COXA_FORWARD * 0.8).abs() < 1e-4);

    let raised = log
        .borrow()
        .count(|c| matches!(c, Call::Absolute(_, t) if t.tibia == TIBIA_RAISED));
    assert_eq!(raised, 3);
    // full speed
    assert_eq!(log.borrow().held_us(), 400_000);
}

#[test]
fn slower_base_delay_scales_every_hold() {
    let log = RefCell::new(Log::default());
    let config = GaitConfig {
        base_delay: embassy_time::Duration::from_millis(100),
        ..GaitConfig::default()
    };
    let mut gait = GaitEngine::with_config(Legs(&log), Clock(&log), config).unwrap();
    gait.walk(Command::forward(0.1), 1).unwrap();
    assert!(log.borrow().0.is_empty());

    gait.walk(Command::rotate(0.25), 2).unwrap();
    // 2 steps x 5 units x 100 ms x 1.8
    assert_eq!(log.borrow().held_us(), 1_800_000);
}
