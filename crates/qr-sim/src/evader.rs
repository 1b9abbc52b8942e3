//! One evading agent.

use qr_core::{EvaderId, EvaderRng, Rect, Vec2};
use qr_motion::Kinematics;
use qr_steer::BehaviorState;

/// An active evader: identity, kinematics, behavior state, and its own
/// deterministic RNG stream.
///
/// Value-owned by the session's active collection; removal from that
/// collection is the end of the agent's life.  `BehaviorState` is built at
/// construction and shares the agent's lifetime — there is no lazily
/// initialized field anywhere on this struct.
pub struct Evader {
    pub id: EvaderId,
    pub body: Kinematics,
    pub state: BehaviorState,
    /// Per-agent RNG, seeded from the session seed and `id` so spawning new
    /// agents never perturbs existing agents' streams.
    pub(crate) rng: EvaderRng,
}

impl Evader {
    pub(crate) fn spawn(id: EvaderId, session_seed: u64, center: Vec2, half: Vec2) -> Self {
        let mut rng = EvaderRng::new(session_seed, id);
        let state = BehaviorState::new(&mut rng);
        Self {
            id,
            body: Kinematics::at(center, half),
            state,
            rng,
        }
    }

    /// Current bounding rectangle — what the caller renders and capture-tests.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.body.rect
    }
}
