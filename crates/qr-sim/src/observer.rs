//! Session observer trait for progress reporting and game-loop hooks.

use crate::Evader;

/// Callbacks invoked by [`Session::tick`][crate::Session::tick] at key
/// points.  All methods have default no-op implementations so implementors
/// only override what they care about.
///
/// # Example — wave logger
///
/// ```rust,ignore
/// struct WaveLogger;
///
/// impl SessionObserver for WaveLogger {
///     fn on_wave_spawned(&mut self, spawned: usize, cap: usize) {
///         println!("wave: spawned {spawned}, cap {cap}");
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called at the start of each tick, after the clock advanced.
    fn on_tick_start(&mut self, _elapsed_secs: f32) {}

    /// Called whenever the population controller spawned agents this tick.
    ///
    /// Under `ClearThenRefill` this fires exactly once per wave — the
    /// surrounding game loop's health/resource refill belongs here.
    fn on_wave_spawned(&mut self, _spawned: usize, _cap: usize) {}

    /// Called at the end of each tick with read access to the full set.
    fn on_tick_end(&mut self, _elapsed_secs: f32, _evaders: &[Evader]) {}
}

/// A [`SessionObserver`] that does nothing.  Use when you need to call
/// `tick` but don't want callbacks.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
