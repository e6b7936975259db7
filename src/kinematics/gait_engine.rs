use crate::kinematics::{
    direction::{DirectionResolver, Resolution},
    tripod::{TripodAlternator, TripodAssignment},
};
use crate::robot::{
    actuator::LegActuator,
    commands::{Command, MotionCommand},
    config::*,
    joint::JointAngles,
    leg::{Leg, TripodSet},
};
use embassy_time::{Duration, Timer};
use embedded_hal::delay::DelayNs;
use heapless::Vec;
use log::{debug, info, trace};

/// Phases in the longest plan (the initial stance, three per tripod).
pub const MAX_PHASES: usize = 6;

/// One joint target handed to the actuation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegTarget {
    Relative { leg: Leg, delta: JointAngles },
    Absolute { leg: Leg, target: JointAngles },
}

impl LegTarget {
    pub fn leg(&self) -> Leg {
        match *self {
            LegTarget::Relative { leg, .. } | LegTarget::Absolute { leg, .. } => leg,
        }
    }
}

/// Targets issued together, then held for `hold` so the motion can physically finish.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub targets: Vec<LegTarget, 6>,
    pub hold: Duration,
}

impl Phase {
    fn new(targets: impl IntoIterator<Item = LegTarget>, hold: Duration) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            hold,
        }
    }
}

/// An ordered list of phases. Phase N+1 assumes phase N has completed, so a platform that
/// plays the plan itself must keep both the order and the holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GaitPlan {
    phases: Vec<Phase, MAX_PHASES>,
}

impl GaitPlan {
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn total_hold(&self) -> Duration {
        self.phases
            .iter()
            .fold(Duration::from_ticks(0), |acc, phase| acc + phase.hold)
    }
}

impl FromIterator<Phase> for GaitPlan {
    fn from_iter<I: IntoIterator<Item = Phase>>(iter: I) -> Self {
        Self {
            phases: iter.into_iter().collect(),
        }
    }
}

/// Tripod gait generator driving six legs through an actuation collaborator.
///
/// Calls block for the whole sequence: a step is lift, swing and settle with timed holds in
/// between, and it always runs to completion unless the actuator reports an error, in which
/// case the error is returned as is and the step is abandoned. The engine owns the tripod
/// alternation bit, so only the single control loop holding the engine may step it.
pub struct GaitEngine<A, D> {
    actuator: A,
    delay: D,
    config: GaitConfig,
    resolver: DirectionResolver,
    tripod: TripodAlternator,
}

impl<A, D> GaitEngine<A, D>
where
    A: LegActuator,
    D: DelayNs,
{
    pub fn new(actuator: A, delay: D) -> Self {
        let config = GaitConfig::default();
        Self {
            actuator,
            delay,
            resolver: DirectionResolver::new(&config),
            config,
            tripod: TripodAlternator::new(),
        }
    }

    pub fn with_config(actuator: A, delay: D, config: GaitConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            actuator,
            delay,
            resolver: DirectionResolver::new(&config),
            config,
            tripod: TripodAlternator::new(),
        })
    }

    pub fn config(&self) -> &GaitConfig {
        &self.config
    }

    pub fn tripod(&self) -> &TripodAlternator {
        &self.tripod
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Give back the collaborators.
    pub fn release(self) -> (A, D) {
        (self.actuator, self.delay)
    }

    /// True when `command` resolves to no motion, i.e. stepping it would do nothing.
    pub fn is_still(&self, command: Command) -> bool {
        self.resolver.resolve(command).is_none()
    }

    /// Neutral standing stance, tripod A first then tripod B. Each set is lifted, centred
    /// while raised, then lowered; coxas go to neutral and the alternation bit is untouched.
    pub fn plan_initialize(&self) -> GaitPlan {
        let c = &self.config;
        let raised = JointAngles::new(c.coxa_neutral, c.femur_neutral, c.tibia_raised);
        let lowered = JointAngles::new(c.coxa_neutral, c.femur_neutral, c.tibia_lowered);

        [TripodSet::A, TripodSet::B]
            .into_iter()
            .flat_map(|set| {
                let legs = set.legs();
                [
                    Phase::new(
                        legs.map(|leg| LegTarget::Relative {
                            leg,
                            delta: JointAngles::tibia_only(c.tibia_step),
                        }),
                        c.hold(LIFT_FACTOR, 1.0),
                    ),
                    Phase::new(
                        legs.map(|leg| LegTarget::Absolute {
                            leg,
                            target: raised,
                        }),
                        c.hold(SWING_FACTOR, 1.0),
                    ),
                    Phase::new(
                        legs.map(|leg| LegTarget::Absolute {
                            leg,
                            target: lowered,
                        }),
                        c.hold(SETTLE_FACTOR, 1.0),
                    ),
                ]
            })
            .collect()
    }

    /// Resolve `command` into the lift, swing and settle phases of one step and advance the
    /// tripod alternation. Returns `None`, with no state change, for a stand-still command.
    pub fn plan_step(&mut self, command: Command) -> Option<GaitPlan> {
        let resolution = self.resolver.resolve(command)?;
        let multiplier = self.config.delay_policy.scale(resolution.reference);
        let TripodAssignment { active, stance } = self.tripod.next();
        debug!(
            "[GAIT] {:?} left {} right {} x{} swinging {}",
            resolution.case, resolution.left, resolution.right, multiplier, active
        );

        let c = &self.config;
        let swing = |leg: Leg, tibia: f32| LegTarget::Absolute {
            leg,
            target: JointAngles::new(swing_coxa(c, &resolution, leg), c.femur_neutral, tibia),
        };
        let propel = |leg: Leg| LegTarget::Absolute {
            leg,
            target: JointAngles::new(
                stance_coxa(c, resolution.side(leg.side())),
                c.femur_neutral,
                c.tibia_lowered,
            ),
        };

        let lift = Phase::new(
            active.legs().map(|leg| LegTarget::Relative {
                leg,
                delta: JointAngles::tibia_only(c.tibia_step),
            }),
            c.hold(LIFT_FACTOR, multiplier),
        );
        let sweep = Phase::new(
            active
                .legs()
                .map(|leg| swing(leg, c.tibia_raised))
                .into_iter()
                .chain(stance.legs().map(propel)),
            c.hold(SWING_FACTOR, multiplier),
        );
        let settle = Phase::new(
            active.legs().map(|leg| swing(leg, c.tibia_lowered)),
            c.hold(SETTLE_FACTOR, multiplier),
        );
        Some([lift, sweep, settle].into_iter().collect())
    }

    fn issue(&mut self, phase: &Phase) -> Result<(), A::Error> {
        for target in &phase.targets {
            trace!("[GAIT] {target:?}");
            match *target {
                LegTarget::Relative { leg, delta } => {
                    self.actuator.set_position_relative(leg, delta)?
                }
                LegTarget::Absolute { leg, target } => {
                    self.actuator.set_position_absolute(leg, target)?
                }
            }
        }
        Ok(())
    }

    /// Play `plan`: each phase's targets in order, then its hold on the blocking delay.
    pub fn run(&mut self, plan: &GaitPlan) -> Result<(), A::Error> {
        for phase in plan.phases() {
            self.issue(phase)?;
            let micros = u32::try_from(phase.hold.as_micros()).unwrap_or(u32::MAX);
            self.delay.delay_us(micros);
        }
        Ok(())
    }

    /// Same as [`run`](Self::run), but holds on an embassy [`Timer`] so other tasks keep
    /// running while the legs move.
    pub async fn play(&mut self, plan: &GaitPlan) -> Result<(), A::Error> {
        for phase in plan.phases() {
            self.issue(phase)?;
            Timer::after(phase.hold).await;
        }
        Ok(())
    }

    /// Bring all legs to the neutral stance. Call once before the first step.
    pub fn initialize(&mut self) -> Result<(), A::Error> {
        let plan = self.plan_initialize();
        self.run(&plan)?;
        info!("[GAIT] neutral stance reached");
        Ok(())
    }

    /// One blocking tripod step. A stand-still command issues nothing and returns at once.
    pub fn step(&mut self, velocity: f32, direction: f32) -> Result<(), A::Error> {
        match self.plan_step(Command::new(velocity, direction)) {
            Some(plan) => self.run(&plan),
            None => {
                trace!("[GAIT] no motion for v {velocity} d {direction}");
                Ok(())
            }
        }
    }

    /// `steps` tripod steps with the same command.
    pub fn walk(&mut self, command: Command, steps: u8) -> Result<(), A::Error> {
        for _ in 0..steps {
            self.step(command.velocity, command.direction)?;
        }
        Ok(())
    }

    pub fn execute(&mut self, command: MotionCommand) -> Result<(), A::Error> {
        match command {
            MotionCommand::Stand => self.initialize(),
            MotionCommand::Step(command) => self.step(command.velocity, command.direction),
            MotionCommand::Walk { command, steps } => self.walk(command, steps),
        }
    }

    /// Non-blocking [`execute`](Self::execute) for async control loops.
    pub async fn execute_async(&mut self, command: MotionCommand) -> Result<(), A::Error> {
        let (command, steps) = match command {
            MotionCommand::Stand => {
                let plan = self.plan_initialize();
                self.play(&plan).await?;
                info!("[GAIT] neutral stance reached");
                return Ok(());
            }
            MotionCommand::Step(command) => (command, 1),
            MotionCommand::Walk { command, steps } => (command, steps),
        };
        for _ in 0..steps {
            if let Some(plan) = self.plan_step(command) {
                self.play(&plan).await?;
            }
        }
        Ok(())
    }
}

/// Swinging legs go to the extreme they will push away from once planted.
fn swing_coxa(config: &GaitConfig, resolution: &Resolution, leg: Leg) -> f32 {
    if resolution.side(leg.side()) > 0.0 {
        config.coxa_reverse
    } else {
        config.coxa_forward
    }
}

/// Planted legs sweep toward the extreme in proportion to their side's magnitude. Forward
/// and reverse extremes are scaled independently, so the geometry need not be symmetric.
fn stance_coxa(config: &GaitConfig, magnitude: f32) -> f32 {
    let neutral = config.coxa_neutral;
    if magnitude >= 0.0 {
        neutral + (config.coxa_forward - neutral) * magnitude
    } else {
        neutral + (config.coxa_reverse - neutral) * -magnitude
    }
}
