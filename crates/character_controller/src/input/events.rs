//! Controller input events (host → controller)
//!
//! Пишутся host input dispatcher'ом (keyboard/gamepad/network — не важно).
//! Каждое событие адресовано конкретному контроллеру через `entity`.

use bevy::prelude::{Entity, Event, Vec2};

/// Move stick / WASD.
///
/// # Coordinate System
/// - `x`: -1.0 (left) → +1.0 (right)
/// - `y`: -1.0 (backward) → +1.0 (forward, maps to world -Z)
///
/// Backward input is clamped to `max_backward` when applied.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MoveInput {
    pub entity: Entity,
    pub value: Vec2,
}

/// Run button state (press and release both sent)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunInput {
    pub entity: Entity,
    pub pressed: bool,
}

/// Attack mode toggle (edge)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAttackMode {
    pub entity: Entity,
}

/// Attack button (edge)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackPressed {
    pub entity: Entity,
}

/// Jump button state. Release before liftoff cancels the jump.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpInput {
    pub entity: Entity,
    pub pressed: bool,
}

/// Look stick / mouse delta. Normalized when applied.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct RotateCameraInput {
    pub entity: Entity,
    pub value: Vec2,
}
