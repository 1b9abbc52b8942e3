//! Decaying spatial record of where the pursuer has recently been.
//!
//! # Model
//!
//! A fixed-size grid over the arena holds one non-negative scalar per cell.
//! Every tick, each cell multiplies toward zero by `decay_per_sec^dt`, then
//! the cell containing the pursuer receives `deposit_per_sec * dt`.  Evaders
//! sample the field (and finite-difference it) to steer away from "hot"
//! lanes the pursuer has swept through — an O(cells)-per-tick approximation
//! of trajectory memory with O(1) queries.
//!
//! Expressing decay and deposit as per-second rates keeps the field's
//! steady-state magnitude independent of frame rate.

use qr_core::{Arena, Vec2};

use crate::{FieldError, FieldResult};

// ── HeatTuning ────────────────────────────────────────────────────────────────

/// Heat field constants.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatTuning {
    /// Side length of one grid cell, in arena units.
    pub cell_size: f32,
    /// Fraction of a cell's value surviving one second of decay, in (0, 1).
    pub decay_per_sec: f32,
    /// Heat deposited per second into the pursuer's current cell.
    pub deposit_per_sec: f32,
}

impl Default for HeatTuning {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            decay_per_sec: 0.2,
            deposit_per_sec: 60.0,
        }
    }
}

impl HeatTuning {
    fn validate(&self) -> FieldResult<()> {
        if !(self.cell_size > 0.0) {
            return Err(FieldError::Config(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if !(self.decay_per_sec > 0.0 && self.decay_per_sec < 1.0) {
            return Err(FieldError::Config(format!(
                "decay_per_sec must be in (0, 1), got {}",
                self.decay_per_sec
            )));
        }
        Ok(())
    }
}

// ── HeatField ─────────────────────────────────────────────────────────────────

/// Grid of decaying pursuer-presence scalars covering the arena.
///
/// Invariant: every cell value is non-negative at all times (decay is
/// multiplicative by a positive factor, deposits are positive).
pub struct HeatField {
    tuning: HeatTuning,
    cols: usize,
    rows: usize,
    /// Arena dimensions the grid was built for; a mismatch triggers rebuild.
    built_for: (f32, f32),
    /// Row-major cell values, length `cols * rows`.
    cells: Vec<f32>,
}

impl HeatField {
    /// Build a field covering `arena`.  Cell counts round up so the grid
    /// always covers the full arena.
    pub fn new(arena: &Arena, tuning: HeatTuning) -> FieldResult<Self> {
        tuning.validate()?;
        let cols = (arena.width() / tuning.cell_size).ceil().max(1.0) as usize;
        let rows = (arena.height() / tuning.cell_size).ceil().max(1.0) as usize;
        Ok(Self {
            tuning,
            cols,
            rows,
            built_for: (arena.width(), arena.height()),
            cells: vec![0.0; cols * rows],
        })
    }

    /// Decay every cell, then stamp the pursuer's current cell.
    ///
    /// Must run before any agent samples the field this tick.
    pub fn tick(&mut self, dt: f32, pursuer_pos: Vec2) {
        if dt <= 0.0 {
            return;
        }
        let keep = self.tuning.decay_per_sec.powf(dt);
        for cell in &mut self.cells {
            *cell *= keep;
        }
        let idx = self.cell_index(pursuer_pos);
        self.cells[idx] += self.tuning.deposit_per_sec * dt;
    }

    /// Heat at an arbitrary point.  Points outside the arena clamp to the
    /// nearest cell; an untouched field samples as 0.
    pub fn sample(&self, pos: Vec2) -> f32 {
        self.cells[self.cell_index(pos)]
    }

    /// Rebuild (and zero) the grid if the arena dimensions changed.
    pub fn rebuild_if_resized(&mut self, arena: &Arena) {
        if self.built_for == (arena.width(), arena.height()) {
            return;
        }
        self.cols = (arena.width() / self.tuning.cell_size).ceil().max(1.0) as usize;
        self.rows = (arena.height() / self.tuning.cell_size).ceil().max(1.0) as usize;
        self.built_for = (arena.width(), arena.height());
        self.cells = vec![0.0; self.cols * self.rows];
    }

    /// Zero all cells without reallocating (session restart).
    pub fn reset(&mut self) {
        self.cells.fill(0.0);
    }

    /// Total heat currently stored — useful for observability and tests.
    pub fn total(&self) -> f32 {
        self.cells.iter().sum()
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    fn cell_index(&self, pos: Vec2) -> usize {
        let col = ((pos.x / self.tuning.cell_size) as isize).clamp(0, self.cols as isize - 1);
        let row = ((pos.y / self.tuning.cell_size) as isize).clamp(0, self.rows as isize - 1);
        row as usize * self.cols + col as usize
    }
}
