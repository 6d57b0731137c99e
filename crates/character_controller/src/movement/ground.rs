//! Ground check: короткий raycast вниз от ступней
//!
//! Не кэшируется — один запрос на тик.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::CharacterController;

/// Downward geometric query used by the ground check.
pub trait GroundProbe {
    /// true if a ray from `origin` straight down hits something within `max_distance`.
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> bool;
}

/// Grounded = surface within `probe_distance` below the feet.
///
/// The ray starts `probe_offset` above the feet so a body slightly embedded in
/// the floor still reports contact.
pub fn is_grounded(
    probe: &impl GroundProbe,
    feet: Vec3,
    controller: &CharacterController,
) -> bool {
    let origin = feet + Vec3::Y * controller.probe_offset;
    probe.cast_down(origin, controller.probe_length())
}

/// Ray cast through the Rapier query pipeline, ignoring the body's own
/// colliders and every sensor (hit colliders included).
pub struct RapierGroundProbe<'a, 'w> {
    pub context: &'a RapierContext<'w>,
    pub body: Entity,
}

impl GroundProbe for RapierGroundProbe<'_, '_> {
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> bool {
        let filter = QueryFilter::default()
            .exclude_rigid_body(self.body)
            .exclude_sensors();

        self.context
            .cast_ray(origin, Vec3::NEG_Y, max_distance, true, filter)
            .is_some()
    }
}
