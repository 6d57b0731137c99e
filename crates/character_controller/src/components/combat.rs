//! Combat компоненты: hit collider и цели для него

use bevy::prelude::*;

/// Melee hit volume (hand/weapon sensor) owned by a controller.
///
/// The controller only arms and disarms it. Overlap detection is Rapier's job:
/// while disarmed the entity also carries `ColliderDisabled`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HitCollider {
    /// Controller entity that swings this collider
    pub owner: Entity,
    /// true only during the active attack window
    pub armed: bool,
}

impl HitCollider {
    pub fn new(owner: Entity) -> Self {
        Self {
            owner,
            armed: false,
        }
    }
}

/// Marker: entity can be hit by a [`HitCollider`] (enemies, dummies)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Damageable;
