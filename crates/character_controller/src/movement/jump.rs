//! Jump state machine
//!
//! ```text
//! Idle ──press && grounded──▶ Pending ──next tick (impulse)──▶ Active
//!  ▲                            │                               │
//!  │        release             │                  regain ground│
//!  ├────────────────────────────┘                  (gravity on) │
//!  │                                                            ▼
//!  └──────────────────────── next tick ─────────────────────  Landing
//! ```

use bevy::prelude::*;

use super::body::{is_falling, CharacterBody};

/// Jump phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum JumpPhase {
    /// On the ground, no jump in flight
    #[default]
    Idle,
    /// Button pressed while grounded, impulse goes out next tick
    Pending,
    /// Impulse applied, airborne
    Active {
        /// Ground contact was lost at least once since liftoff
        left_ground: bool,
    },
    /// Ground regained this tick, becomes Idle on the next one
    Landing,
}

/// Jump transitions reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTransition {
    Started,
    Ended,
}

impl JumpPhase {
    /// No jump in flight (gravity may be switched off while grounded).
    pub fn is_settled(&self) -> bool {
        matches!(self, JumpPhase::Idle | JumpPhase::Landing)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, JumpPhase::Active { .. })
    }

    /// Jump button pressed. Only arms from a settled phase while grounded.
    pub fn press(&mut self, grounded: bool) -> bool {
        if grounded && self.is_settled() {
            *self = JumpPhase::Pending;
            return true;
        }
        false
    }

    /// Jump button released. Cancels a jump that has not lifted off yet.
    pub fn release(&mut self) -> bool {
        if *self == JumpPhase::Pending {
            *self = JumpPhase::Idle;
            return true;
        }
        false
    }
}

/// Advances the phase by one tick.
///
/// `lift_off` is true when the phase was already `Pending` before this tick's
/// input was resolved, so a press is never launched on the tick it arrives.
/// Landing is only accepted while the body's gravity is on.
pub fn advance_jump(
    phase: &mut JumpPhase,
    body: &mut impl CharacterBody,
    grounded: bool,
    jump_impulse: f32,
    lift_off: bool,
) -> Option<JumpTransition> {
    match *phase {
        JumpPhase::Pending if lift_off => {
            body.zero_vertical_velocity();
            body.apply_impulse(Vec3::Y * jump_impulse);
            *phase = JumpPhase::Active { left_ground: false };
            Some(JumpTransition::Started)
        }
        JumpPhase::Active { left_ground } => {
            if !grounded {
                *phase = JumpPhase::Active { left_ground: true };
                None
            } else if body.gravity_enabled() && (left_ground || is_falling(body)) {
                *phase = JumpPhase::Landing;
                Some(JumpTransition::Ended)
            } else {
                None
            }
        }
        JumpPhase::Landing => {
            *phase = JumpPhase::Idle;
            None
        }
        JumpPhase::Idle | JumpPhase::Pending => None,
    }
}
