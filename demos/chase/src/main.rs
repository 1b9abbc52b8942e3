//! chase — headless demo for the quarry pursuit-evasion engine.
//!
//! A scripted pursuer chases the nearest evader at fixed speed while the
//! session spawns escalating waves.  Runs a fixed-dt loop, detects captures
//! by rect overlap, and prints periodic snapshots plus a run summary.
//! Swap the scripted pursuer for mouse/keyboard input and the prints for a
//! renderer to turn this into a playable build.

use std::time::Instant;

use anyhow::Result;

use qr_core::{Arena, EvaderId, Rect, SessionConfig, Vec2};
use qr_sim::{Evader, RefillPolicy, SessionBuilder, SessionObserver};
use qr_steer::PursuerSnapshot;

// ── Constants ─────────────────────────────────────────────────────────────────

const ARENA_W: f32 = 960.0;
const ARENA_H: f32 = 640.0;
const SEED: u64 = 42;

const DT: f32 = 1.0 / 60.0;
const RUN_SECS: f32 = 120.0;
const SNAPSHOT_EVERY_SECS: f32 = 5.0;

const PURSUER_HALF: f32 = 16.0;
const PURSUER_SPEED: f32 = 240.0;

// ── Scripted pursuer ──────────────────────────────────────────────────────────

/// Chases the nearest evader in a straight line at fixed speed.
struct ScriptedPursuer {
    snapshot: PursuerSnapshot,
}

impl ScriptedPursuer {
    fn new(arena: &Arena) -> Self {
        Self {
            snapshot: PursuerSnapshot::new(
                Rect::new(arena.center(), Vec2::new(PURSUER_HALF, PURSUER_HALF)),
                Vec2::ZERO,
                PURSUER_SPEED,
            ),
        }
    }

    fn step(&mut self, evaders: &[Evader], arena: &Arena, dt: f32) {
        let here = self.snapshot.rect.center;
        let target = evaders
            .iter()
            .map(|e| e.rect().center)
            .min_by(|a, b| {
                here.distance(*a)
                    .partial_cmp(&here.distance(*b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        let Some(target) = target else {
            self.snapshot.intent = Vec2::ZERO;
            return;
        };

        self.snapshot.intent = (target - here).normalized();
        let next = here + self.snapshot.intent * (PURSUER_SPEED * dt);
        self.snapshot.rect.center = arena.clamp_center(next, self.snapshot.rect.half);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct WaveLog {
    waves: usize,
    largest_wave: usize,
}

impl SessionObserver for WaveLog {
    fn on_wave_spawned(&mut self, spawned: usize, cap: usize) {
        self.waves += 1;
        self.largest_wave = self.largest_wave.max(spawned);
        println!("  >> wave {}: spawned {spawned} (cap {cap})", self.waves);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== chase — quarry pursuit-evasion demo ===");
    println!("Arena: {ARENA_W}x{ARENA_H}  |  Run: {RUN_SECS}s  |  Seed: {SEED}");
    println!();

    let arena = Arena::new(ARENA_W, ARENA_H)?;
    let config = SessionConfig {
        seed: SEED,
        ..SessionConfig::default()
    };
    let mut session = SessionBuilder::new(arena, config)
        .refill_policy(RefillPolicy::ClearThenRefill)
        .build()?;

    let mut pursuer = ScriptedPursuer::new(&session.arena);
    let mut log = WaveLog::default();

    let mut captures = 0usize;
    let mut captured_ids: Vec<EvaderId> = Vec::new();
    let mut next_snapshot = SNAPSHOT_EVERY_SECS;

    let steps = (RUN_SECS / DT).round() as u64;
    let t0 = Instant::now();

    for _ in 0..steps {
        pursuer.step(session.evaders(), &session.arena, DT);
        session.tick(DT, &pursuer.snapshot, &mut log);

        // Capture pass: overlap check between ticks, removal deferred to
        // remove_captured so the steering pass never sees a mid-tick gap.
        captured_ids.clear();
        captured_ids.extend(
            session
                .evaders()
                .iter()
                .filter(|e| e.rect().overlaps(&pursuer.snapshot.rect))
                .map(|e| e.id),
        );
        captures += session.remove_captured(&captured_ids);

        if session.elapsed_secs() >= next_snapshot {
            next_snapshot += SNAPSHOT_EVERY_SECS;
            print_snapshot(&session, &pursuer.snapshot, captures);
        }
    }

    let elapsed = t0.elapsed();
    println!();
    println!("=== run summary ===");
    println!("Simulated {:.0}s in {:.2?} ({} ticks)", RUN_SECS, elapsed, steps);
    println!(
        "Captures: {captures}  |  Waves: {}  |  Largest wave: {}",
        log.waves, log.largest_wave
    );
    println!(
        "Final: {} evader(s) alive, cap {}",
        session.evaders().len(),
        session.cap()
    );

    Ok(())
}

fn print_snapshot(session: &qr_sim::Session, pursuer: &PursuerSnapshot, captures: usize) {
    let p = pursuer.rect.center;
    print!(
        "[t={:6.1}s] cap {} | alive {} | captures {} | pursuer ({:4.0},{:4.0}) |",
        session.elapsed_secs(),
        session.cap(),
        session.evaders().len(),
        captures,
        p.x,
        p.y
    );
    for ev in session.evaders() {
        let c = ev.rect().center;
        print!(" #{}:({:4.0},{:4.0})", ev.id.0, c.x, c.y);
    }
    println!();
}
