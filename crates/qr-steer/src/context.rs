//! Read-only simulation state passed to the steering pipeline.

use qr_core::Arena;
use qr_field::{HeatField, SectorAllocator};

use crate::{PursuerSnapshot, SteeringTuning};

/// A read-only snapshot of the shared tick state, built once per tick by the
/// session and borrowed by every agent's behavior update and steering
/// composition.
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's agent pass.  The session
/// performs the heat field's decay + stamp write *before* constructing this
/// context, so every agent reads the same post-write field values.
pub struct SteerContext<'a> {
    /// Arena bounds.
    pub arena: &'a Arena,

    /// This tick's pursuer snapshot.
    pub pursuer: &'a PursuerSnapshot,

    /// Heat field, already decayed and stamped for this tick.
    pub heat: &'a HeatField,

    /// Sector ring assignments.
    pub sectors: &'a SectorAllocator,

    /// Elapsed session seconds (drives sector ring rotation).
    pub session_time: f32,

    /// Steering constants.
    pub tuning: &'a SteeringTuning,
}

impl<'a> SteerContext<'a> {
    #[inline]
    pub fn new(
        arena: &'a Arena,
        pursuer: &'a PursuerSnapshot,
        heat: &'a HeatField,
        sectors: &'a SectorAllocator,
        session_time: f32,
        tuning: &'a SteeringTuning,
    ) -> Self {
        Self { arena, pursuer, heat, sectors, session_time, tuning }
    }
}
