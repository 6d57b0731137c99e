//! Controller компоненты: настройки, состояние ввода, ссылки на внешние entity

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::AttackCooldown;
use crate::movement::JumpPhase;

/// Character controller tunables.
///
/// Set once when the controller is initialized. Defaults match the values the
/// playground scene was tuned with.
///
/// # Config file
/// Every field is optional in a RON/JSON document, missing ones fall back to
/// the defaults (`#[serde(default)]`). Run the result through
/// [`CharacterController::sanitized`] before inserting it.
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct CharacterController {
    /// Base locomotion speed (m/s)
    pub move_speed: f32,
    /// Speed multiplier while running
    pub run_multiplier: f32,
    /// Max magnitude of backward input (forward axis is clamped to [-max_backward, 1])
    pub max_backward: f32,
    /// Full attack cooldown (seconds), also the length of the hit window
    pub attack_cooldown: f32,
    /// Upward impulse applied at liftoff
    pub jump_impulse: f32,
    /// Camera yaw/pitch sensitivity (rad/s at full input)
    pub camera_rotate_speed: f32,
    /// Slerp factor toward the move direction. 1.0 = instant snap
    pub turn_smoothing: f32,
    /// Camera pitch limit (radians, symmetric)
    pub max_camera_pitch: f32,
    /// Ground ray starts this far above the feet
    pub probe_offset: f32,
    /// Ground ray reach below the feet
    pub probe_distance: f32,
}

impl Default for CharacterController {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            run_multiplier: 2.0,
            max_backward: 0.3,
            attack_cooldown: 0.5,
            jump_impulse: 1.0,
            camera_rotate_speed: 1.0,
            turn_smoothing: 1.0,
            max_camera_pitch: 80f32.to_radians(),
            probe_offset: 0.1,
            probe_distance: 0.1,
        }
    }
}

impl CharacterController {
    /// Clamps tunables into the ranges the controller logic assumes.
    pub fn sanitized(mut self) -> Self {
        self.move_speed = self.move_speed.max(0.0);
        self.run_multiplier = self.run_multiplier.max(0.0);
        self.max_backward = self.max_backward.abs().clamp(0.1, 1.0);
        self.attack_cooldown = self.attack_cooldown.max(0.0);
        self.jump_impulse = self.jump_impulse.max(0.0);
        self.turn_smoothing = self.turn_smoothing.clamp(0.0, 1.0);
        self.max_camera_pitch = self.max_camera_pitch.clamp(0.0, 89f32.to_radians());
        self.probe_offset = self.probe_offset.max(0.0);
        self.probe_distance = self.probe_distance.max(0.0);
        self
    }

    /// Total length of the ground ray (offset above the feet + reach below).
    pub fn probe_length(&self) -> f32 {
        self.probe_offset + self.probe_distance
    }
}

/// Shared per-controller state: latest input plus the jump and attack state
/// machines.
///
/// Grounded is NOT stored here, it is re-probed every tick.
///
/// Инвариант: `0 ≤ cooldown.remaining ≤ cooldown.duration`
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct MovementState {
    /// x = strafe (right +), y = forward (+). Clamped on write
    pub move_input: Vec2,
    /// Normalized camera look input (x = yaw, y = pitch)
    pub rotation_input: Vec2,
    pub run_pressed: bool,
    /// Latest jump button state not yet resolved by the movement tick
    pub jump_request: Option<bool>,
    pub jump: JumpPhase,
    pub attack_mode: bool,
    pub cooldown: AttackCooldown,
}

impl MovementState {
    pub fn set_move_input(&mut self, input: Vec2, max_backward: f32) {
        // Clamp здесь, а не в тике: run-проверка всегда видит clamped ввод
        self.move_input = Vec2::new(
            input.x.clamp(-1.0, 1.0),
            input.y.min(1.0).max(-max_backward.abs().min(1.0)),
        );
    }

    pub fn set_rotation_input(&mut self, input: Vec2) {
        self.rotation_input = input.normalize_or_zero();
    }

    pub fn set_running(&mut self, pressed: bool) {
        self.run_pressed = pressed;
    }

    /// Latches the jump button. Resolved against the ground check on the next
    /// movement tick.
    pub fn request_jump(&mut self, pressed: bool) {
        self.jump_request = Some(pressed);
    }

    /// Flips attack mode and returns the new value. Cooldown is left alone.
    pub fn toggle_attack_mode(&mut self) -> bool {
        self.attack_mode = !self.attack_mode;
        self.attack_mode
    }

    /// Starts the cooldown if an attack is allowed right now.
    ///
    /// Returns `false` (and changes nothing) outside attack mode or while the
    /// cooldown is still running.
    pub fn try_start_attack(&mut self, cooldown: f32) -> bool {
        if !self.attack_mode || !self.cooldown.is_ready() {
            return false;
        }

        self.cooldown.start(cooldown);
        true
    }
}

/// Explicit handles to the entities the controller drives besides its own body.
///
/// Either handle may be missing; the matching behaviour is then skipped with a
/// diagnostic.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct ControllerLinks {
    /// Transform that the third-person camera follows (yaw/pitch pivot)
    pub camera_follow: Option<Entity>,
    /// Collider entity carrying [`crate::components::HitCollider`]
    pub hit_collider: Option<Entity>,
}
