use core::fmt::Display;
use embassy_time::Duration;
use micromath::F32Ext;

// COXA (yaw), degrees from neutral
pub const COXA_FORWARD: f32 = 25.0;
pub const COXA_REVERSE: f32 = -25.0;
pub const COXA_NEUTRAL: f32 = 0.0;

// FEMUR is held at neutral by the tripod gait
pub const FEMUR_NEUTRAL: f32 = 0.0;

// TIBIA (lift), degrees from neutral
pub const TIBIA_RAISED: f32 = 30.0;
pub const TIBIA_LOWERED: f32 = 0.0;
pub const TIBIA_STEP: f32 = 15.0;

/// Base hold of one gait phase unit
pub const BASE_DELAY: Duration = Duration::from_millis(80);

/// Command components below these magnitudes count as absent
pub const PRIMARY_CUTOFF: f32 = 0.2;
pub const SECONDARY_CUTOFF: f32 = 0.2;

/// Largest adjustment a turn component can apply to one side during a velocity-led blend
pub const BLEND_LIMIT: f32 = 1.0;

/// Phase lengths in base delay units
pub const LIFT_FACTOR: f32 = 2.0;
pub const SWING_FACTOR: f32 = 2.0;
pub const SETTLE_FACTOR: f32 = 1.0;

/// One row of the delay policy: magnitudes at or above `threshold` use `multiplier`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayTier {
    pub threshold: f32,
    pub multiplier: f32,
}

impl DelayTier {
    pub const fn new(threshold: f32, multiplier: f32) -> Self {
        Self {
            threshold,
            multiplier,
        }
    }
}

/// Ordered speed-to-timing table. Rows are checked top-down against the absolute magnitude,
/// first match wins; `fallback` applies below the last threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayPolicy {
    pub tiers: [DelayTier; 3],
    pub fallback: f32,
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self {
            tiers: [
                DelayTier::new(0.8, 1.0),
                DelayTier::new(0.5, 1.3),
                DelayTier::new(0.3, 1.5),
            ],
            fallback: 1.8,
        }
    }
}

/// Geometry and timing constants of the gait. Defaults match the reference hexapod; any
/// field can be overridden for other hardware and checked with [`GaitConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaitConfig {
    pub coxa_forward: f32,
    pub coxa_reverse: f32,
    pub coxa_neutral: f32,
    pub femur_neutral: f32,
    pub tibia_raised: f32,
    pub tibia_lowered: f32,
    pub tibia_step: f32,
    pub base_delay: Duration,
    pub primary_cutoff: f32,
    pub secondary_cutoff: f32,
    pub blend_limit: f32,
    pub delay_policy: DelayPolicy,
}

impl Default for GaitConfig {
    fn default() -> Self {
        Self {
            coxa_forward: COXA_FORWARD,
            coxa_reverse: COXA_REVERSE,
            coxa_neutral: COXA_NEUTRAL,
            femur_neutral: FEMUR_NEUTRAL,
            tibia_raised: TIBIA_RAISED,
            tibia_lowered: TIBIA_LOWERED,
            tibia_step: TIBIA_STEP,
            base_delay: BASE_DELAY,
            primary_cutoff: PRIMARY_CUTOFF,
            secondary_cutoff: SECONDARY_CUTOFF,
            blend_limit: BLEND_LIMIT,
            delay_policy: DelayPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    ZeroBaseDelay,
    CutoffOutOfRange(f32),
    TiersNotDescending,
    NonPositiveMultiplier(f32),
    TibiaNotRaised,
    NonPositiveBlendLimit(f32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroBaseDelay => f.write_str("base delay must be positive"),
            ConfigError::CutoffOutOfRange(c) => write!(f, "cutoff {c} is outside [0, 1]"),
            ConfigError::TiersNotDescending => {
                f.write_str("delay tiers must have strictly descending thresholds")
            }
            ConfigError::NonPositiveMultiplier(m) => {
                write!(f, "delay multiplier {m} must be positive")
            }
            ConfigError::TibiaNotRaised => {
                f.write_str("raised tibia level must be above the lowered level")
            }
            ConfigError::NonPositiveBlendLimit(l) => write!(f, "blend limit {l} must be positive"),
        }
    }
}

impl GaitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_delay.as_micros() == 0 {
            return Err(ConfigError::ZeroBaseDelay);
        }
        for cutoff in [self.primary_cutoff, self.secondary_cutoff] {
            if !(0.0..=1.0).contains(&cutoff) {
                return Err(ConfigError::CutoffOutOfRange(cutoff));
            }
        }
        let tiers = &self.delay_policy.tiers;
        if tiers.windows(2).any(|w| w[0].threshold <= w[1].threshold) {
            return Err(ConfigError::TiersNotDescending);
        }
        let multipliers = tiers.iter().map(|t| t.multiplier);
        for m in multipliers.chain([self.delay_policy.fallback]) {
            if m <= 0.0 {
                return Err(ConfigError::NonPositiveMultiplier(m));
            }
        }
        if self.tibia_raised <= self.tibia_lowered {
            return Err(ConfigError::TibiaNotRaised);
        }
        if self.blend_limit <= 0.0 {
            return Err(ConfigError::NonPositiveBlendLimit(self.blend_limit));
        }
        Ok(())
    }

    /// Hold time of a phase lasting `factor` base units, stretched by `multiplier`.
    pub fn hold(&self, factor: f32, multiplier: f32) -> Duration {
        let micros = self.base_delay.as_micros() as f32 * factor * multiplier;
        Duration::from_micros(micros.round() as u64)
    }
}
