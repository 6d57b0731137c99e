//! Test doubles для body/ground (без Rapier)

use bevy::prelude::*;

use super::body::CharacterBody;
use super::ground::GroundProbe;

/// Infinite horizontal plane at `height`
pub struct FlatGround {
    pub height: f32,
}

impl GroundProbe for FlatGround {
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> bool {
        let distance = origin.y - self.height;
        (0.0..=max_distance).contains(&distance)
    }
}

/// In-memory body that records what the controller asked for.
#[derive(Debug, Clone)]
pub struct MockBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub gravity: bool,
    pub impulses: Vec<Vec3>,
    /// Velocity at the moment of each impulse (to check the zeroing order)
    pub velocity_before_impulse: Vec<Vec3>,
}

impl Default for MockBody {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            gravity: true,
            impulses: Vec::new(),
            velocity_before_impulse: Vec::new(),
        }
    }
}

impl CharacterBody for MockBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    fn vertical_velocity(&self) -> f32 {
        self.velocity.y
    }

    fn zero_vertical_velocity(&mut self) {
        self.velocity.y = 0.0;
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity_before_impulse.push(self.velocity);
        self.impulses.push(impulse);
        // mass = 1
        self.velocity += impulse;
    }

    fn gravity_enabled(&self) -> bool {
        self.gravity
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity = enabled;
    }
}
