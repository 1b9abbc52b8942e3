//! Fluent builder for constructing a [`Session`].

use qr_core::{Arena, SessionConfig, SessionRng, Vec2};
use qr_field::{HeatField, HeatTuning, SectorAllocator, SectorTuning};
use qr_motion::MotionTuning;
use qr_steer::SteeringTuning;

use crate::{PopulationPolicy, RefillPolicy, Session, SimError, SimResult};

/// Fluent builder for [`Session`].
///
/// # Required inputs
///
/// - [`Arena`] — validated bounds
/// - [`SessionConfig`] — seed, cap step, frame clamp
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                      |
/// |---------------------|------------------------------|
/// | `.steering(t)`      | `SteeringTuning::default()`  |
/// | `.motion(t)`        | `MotionTuning::default()`    |
/// | `.heat(t)`          | `HeatTuning::default()`      |
/// | `.sectors(t)`       | `SectorTuning::default()`    |
/// | `.refill_policy(p)` | `RefillPolicy::ClearThenRefill` |
/// | `.evader_half(v)`   | `(14, 14)`                   |
///
/// # Example
///
/// ```rust,ignore
/// let arena = Arena::new(800.0, 600.0)?;
/// let mut session = SessionBuilder::new(arena, SessionConfig::default())
///     .refill_policy(RefillPolicy::ClearThenRefill)
///     .build()?;
/// ```
pub struct SessionBuilder {
    arena: Arena,
    config: SessionConfig,
    steering: SteeringTuning,
    motion: MotionTuning,
    heat: HeatTuning,
    sectors: SectorTuning,
    refill: RefillPolicy,
    evader_half: Vec2,
}

impl SessionBuilder {
    pub fn new(arena: Arena, config: SessionConfig) -> Self {
        Self {
            arena,
            config,
            steering: SteeringTuning::default(),
            motion: MotionTuning::default(),
            heat: HeatTuning::default(),
            sectors: SectorTuning::default(),
            refill: RefillPolicy::default(),
            evader_half: Vec2::new(14.0, 14.0),
        }
    }

    pub fn steering(mut self, tuning: SteeringTuning) -> Self {
        self.steering = tuning;
        self
    }

    pub fn motion(mut self, tuning: MotionTuning) -> Self {
        self.motion = tuning;
        self
    }

    pub fn heat(mut self, tuning: HeatTuning) -> Self {
        self.heat = tuning;
        self
    }

    pub fn sectors(mut self, tuning: SectorTuning) -> Self {
        self.sectors = tuning;
        self
    }

    pub fn refill_policy(mut self, policy: RefillPolicy) -> Self {
        self.refill = policy;
        self
    }

    pub fn evader_half(mut self, half: Vec2) -> Self {
        self.evader_half = half;
        self
    }

    /// Validate configuration and build the session.
    ///
    /// The active set starts empty; the first [`Session::tick`] spawns the
    /// initial wave (it needs the pursuer rect for overlap-free placement).
    pub fn build(self) -> SimResult<Session> {
        if !(self.config.cap_step_secs > 0.0) {
            return Err(SimError::Config(format!(
                "cap_step_secs must be positive, got {}",
                self.config.cap_step_secs
            )));
        }
        if !(self.config.max_frame_secs > 0.0) {
            return Err(SimError::Config(format!(
                "max_frame_secs must be positive, got {}",
                self.config.max_frame_secs
            )));
        }
        if !(self.evader_half.x > 0.0 && self.evader_half.y > 0.0) {
            return Err(SimError::Config(format!(
                "evader half-extent must be positive, got {}",
                self.evader_half
            )));
        }
        if self.evader_half.x * 2.0 >= self.arena.width()
            || self.evader_half.y * 2.0 >= self.arena.height()
        {
            return Err(SimError::Config(format!(
                "evader {} does not fit in a {}×{} arena",
                self.evader_half,
                self.arena.width(),
                self.arena.height()
            )));
        }

        let heat = HeatField::new(&self.arena, self.heat)?;
        let clock = self.config.make_clock();
        let rng = SessionRng::new(self.config.seed);
        let population = PopulationPolicy::new(self.config.cap_step_secs);

        Ok(Session {
            arena: self.arena,
            clock,
            steering: self.steering,
            motion: self.motion,
            heat,
            sectors: SectorAllocator::new(self.sectors),
            population,
            refill: self.refill,
            evaders: Vec::new(),
            evader_half: self.evader_half,
            rng,
            next_id: 0,
            config: self.config,
        })
    }
}
