//! Physics body seam
//!
//! Контроллер не владеет телом: он только вызывает несколько операций.
//! Rapier-реализация — `RapierBody`, в тестах — mock.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Operations the controller performs on its physics body.
pub trait CharacterBody {
    fn position(&self) -> Vec3;

    /// Kinematic displacement (teleport by `delta`), not a force.
    fn translate(&mut self, delta: Vec3);

    fn vertical_velocity(&self) -> f32;

    fn zero_vertical_velocity(&mut self);

    fn apply_impulse(&mut self, impulse: Vec3);

    fn gravity_enabled(&self) -> bool;

    fn set_gravity_enabled(&mut self, enabled: bool);
}

/// Dynamic Rapier body: `Transform` + `Velocity` + `ExternalImpulse` + `GravityScale`.
///
/// Gravity on/off maps to a gravity scale of 1/0.
pub struct RapierBody<'a> {
    pub transform: &'a mut Transform,
    pub velocity: &'a mut Velocity,
    pub impulse: &'a mut ExternalImpulse,
    pub gravity: &'a mut GravityScale,
}

impl CharacterBody for RapierBody<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn translate(&mut self, delta: Vec3) {
        self.transform.translation += delta;
    }

    fn vertical_velocity(&self) -> f32 {
        self.velocity.linvel.y
    }

    fn zero_vertical_velocity(&mut self) {
        self.velocity.linvel.y = 0.0;
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        // Rapier сбрасывает ExternalImpulse после шага — накапливаем
        self.impulse.impulse += impulse;
    }

    fn gravity_enabled(&self) -> bool {
        self.gravity.0 > 0.0
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        if self.gravity_enabled() != enabled {
            self.gravity.0 = if enabled { 1.0 } else { 0.0 };
        }
    }
}

/// Body is "falling" when it moves downward.
pub fn is_falling(body: &impl CharacterBody) -> bool {
    body.vertical_velocity() < 0.0
}

/// Spawn helper: dynamic capsule character with its pivot at the feet.
///
/// Создаёт:
/// - body entity (RigidBody::Dynamic, Velocity, ExternalImpulse, GravityScale, locked rotation)
/// - child capsule collider, поднятый так чтобы низ капсулы был на pivot
///
/// Returns the body entity. The controller itself is attached later by
/// [`crate::initialize_controller`].
pub fn spawn_character_body(commands: &mut Commands, position: Vec3) -> Entity {
    const HALF_HEIGHT: f32 = 0.5;
    const RADIUS: f32 = 0.4;

    commands
        .spawn((
            Transform::from_translation(position),
            RigidBody::Dynamic,
            Velocity::default(),
            ExternalImpulse::default(),
            GravityScale(1.0),
            LockedAxes::ROTATION_LOCKED,
        ))
        .with_children(|body| {
            body.spawn((
                Transform::from_xyz(0.0, HALF_HEIGHT + RADIUS, 0.0),
                Collider::capsule_y(HALF_HEIGHT, RADIUS),
            ));
        })
        .id()
}
