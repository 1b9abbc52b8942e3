//! The `Session` struct and its tick loop.

use qr_core::{Arena, EvaderId, Rect, SessionClock, SessionConfig, SessionRng, Vec2};
use qr_field::{HeatField, SectorAllocator};
use qr_motion::{speed_cap, Integrator, MotionTuning};
use qr_steer::{compose, PursuerSnapshot, SteerContext, SteeringTuning};

use crate::population::spawn_center;
use crate::{Evader, PopulationPolicy, RefillPolicy, SessionObserver};

/// One pursuit-evasion session: the active evader set plus all
/// session-scoped shared state (clock, heat field, sector ring, population
/// policy).
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].  Drive with
/// [`tick`][Session::tick]; detect captures externally and report them with
/// [`remove_captured`][Session::remove_captured] between ticks.
pub struct Session {
    /// Session configuration (seed, cap step, frame clamp).
    pub config: SessionConfig,

    /// Arena bounds.  Change via [`resize_arena`][Session::resize_arena].
    pub arena: Arena,

    /// Clamped-dt session clock.
    pub clock: SessionClock,

    /// Steering constants shared by every agent.
    pub steering: SteeringTuning,

    /// Motion constants shared by every agent.
    pub motion: MotionTuning,

    /// Decaying record of recent pursuer positions.
    pub heat: HeatField,

    /// Stable per-agent ring homes.
    pub sectors: SectorAllocator,

    /// Time-based agent cap.
    pub population: PopulationPolicy,

    /// The selected refill policy — fixed for the session.
    pub refill: RefillPolicy,

    /// Active evaders in fixed iteration order.  Index order is the
    /// steering pass order; separation and dispersion are order-dependent
    /// by contract.
    pub evaders: Vec<Evader>,

    /// Half-extent given to every spawned evader.
    pub evader_half: Vec2,

    pub(crate) rng: SessionRng,
    pub(crate) next_id: u32,
}

impl Session {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the session by one frame.
    ///
    /// `dt_raw` is the caller's elapsed real time; it is clamped before any
    /// state advances.  `pursuer` is this frame's read-only pursuer view.
    pub fn tick<O: SessionObserver>(
        &mut self,
        dt_raw: f32,
        pursuer: &PursuerSnapshot,
        observer: &mut O,
    ) {
        let dt = self.clock.advance(dt_raw);
        observer.on_tick_start(self.clock.elapsed_secs());

        self.refill(pursuer, observer);

        // The single shared-state write of the tick: decay + pursuer stamp,
        // strictly before any agent samples the field.
        self.heat.tick(dt, pursuer.rect.center);

        self.advance_agents(dt, pursuer);

        observer.on_tick_end(self.clock.elapsed_secs(), &self.evaders);
    }

    /// Remove captured agents (deferred mark-then-compact).
    ///
    /// Call between ticks, never from observer callbacks.  Returns how many
    /// agents were removed.
    pub fn remove_captured(&mut self, captured: &[EvaderId]) -> usize {
        let before = self.evaders.len();
        self.evaders.retain(|e| !captured.contains(&e.id));
        before - self.evaders.len()
    }

    /// Full session restart: clears agents, zeroes the clock (cap back to
    /// 1), resets heat and sector state, and restores the RNG stream so an
    /// identical input sequence replays identically.  The next tick reseeds
    /// the active set.
    pub fn reset(&mut self) {
        self.evaders.clear();
        self.clock.reset();
        self.heat.reset();
        self.sectors.reset();
        self.rng = SessionRng::new(self.config.seed);
        self.next_id = 0;
    }

    /// Swap in new arena bounds (e.g. window resize).  The heat grid is
    /// rebuilt — and therefore zeroed — when dimensions actually changed.
    pub fn resize_arena(&mut self, arena: Arena) {
        self.arena = arena;
        self.heat.rebuild_if_resized(&self.arena);
        for ev in &mut self.evaders {
            ev.body.rect.center = self
                .arena
                .clamp_center(ev.body.rect.center, ev.body.rect.half);
        }
    }

    /// The active evaders, in iteration order.
    #[inline]
    pub fn evaders(&self) -> &[Evader] {
        &self.evaders
    }

    /// Current population cap — for the HUD.
    #[inline]
    pub fn cap(&self) -> usize {
        self.population.cap(self.clock.elapsed_secs())
    }

    /// Elapsed (clamped) session seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.clock.elapsed_secs()
    }

    // ── Population refill ─────────────────────────────────────────────────

    fn refill<O: SessionObserver>(&mut self, pursuer: &PursuerSnapshot, observer: &mut O) {
        let cap = self.population.cap(self.clock.elapsed_secs());
        let should_fill = match self.refill {
            RefillPolicy::ContinuousTopUp => self.evaders.len() < cap,
            // Session start counts as a cleared set: the first wave spawns
            // on the first tick.
            RefillPolicy::ClearThenRefill => self.evaders.is_empty(),
        };
        if !should_fill {
            return;
        }

        let mut spawned = 0;
        while self.evaders.len() < cap {
            let id = EvaderId(self.next_id);
            self.next_id += 1;
            let center = spawn_center(&self.arena, self.evader_half, &pursuer.rect, &mut self.rng);
            self.evaders
                .push(Evader::spawn(id, self.config.seed, center, self.evader_half));
            spawned += 1;
        }

        // First population this session: hand out sector homes in list
        // order.  Later waves are a no-op here.
        if !self.sectors.is_assigned() {
            let ids: Vec<EvaderId> = self.evaders.iter().map(|e| e.id).collect();
            self.sectors.assign_once(&ids);
        }

        if spawned > 0 {
            observer.on_wave_spawned(spawned, cap);
        }
    }

    // ── Agent pass ────────────────────────────────────────────────────────

    fn advance_agents(&mut self, dt: f32, pursuer: &PursuerSnapshot) {
        // Explicit field borrows so the borrow checker sees disjoint access:
        // the context reads shared state, the loop mutates agents.
        let arena = &self.arena;
        let heat = &self.heat;
        let sectors = &self.sectors;
        let steering = &self.steering;
        let motion = &self.motion;
        let evaders = &mut self.evaders;
        let elapsed = self.clock.elapsed_secs();

        let ctx = SteerContext::new(arena, pursuer, heat, sectors, elapsed, steering);

        // This-tick rect snapshot, updated in place after each agent moves:
        // later agents in the pass read earlier agents' new positions.
        let mut rects: Vec<Rect> = evaders.iter().map(|e| e.body.rect).collect();

        for i in 0..evaders.len() {
            let ev = &mut evaders[i];
            let pos = ev.body.rect.center;

            ev.state.update(dt, pos, &ctx, &mut ev.rng);
            let dir = compose(ev.id, i, &rects, &mut ev.state, &ctx, &mut ev.rng);

            let pursuer_dist = pos.distance(pursuer.rect.center);
            let cap = speed_cap(motion, ev.state.burst.is_active(), pursuer_dist);
            Integrator::step(&mut ev.body, dir, cap, dt, motion, arena);

            rects[i] = ev.body.rect;
        }
    }
}
