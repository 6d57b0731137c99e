//! Movement systems (ECS обёртка над `step_movement` / rotation)
//!
//! # Порядок в тике (FixedUpdate, chained)
//! 1. update_movement — ground check, jump, displacement, gravity
//! 2. update_body_rotation — разворот по направлению движения
//! 3. rotate_camera_follow — yaw/pitch camera pivot

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::body::RapierBody;
use super::events::{CameraRotated, JumpingChanged, LocomotionReport};
use super::ground::RapierGroundProbe;
use super::jump::JumpTransition;
use super::locomotion::step_movement;
use super::rotation::{rotate_camera, update_rotation};
use crate::components::{CharacterController, ControllerLinks, MovementState};
use crate::logger::{log, log_warning};

/// System: per-tick locomotion + jump state machine for every controller.
///
/// Ground check идёт через Rapier query pipeline. Без Rapier context тик
/// пропускается (diagnostic в лог), контроллеры не трогаются.
pub fn update_movement(
    rapier_context: ReadRapierContext,
    time: Res<Time>,
    mut controllers: Query<(
        Entity,
        &CharacterController,
        &mut MovementState,
        &mut Transform,
        &mut Velocity,
        &mut ExternalImpulse,
        &mut GravityScale,
    )>,
    mut jump_events: EventWriter<JumpingChanged>,
    mut reports: EventWriter<LocomotionReport>,
) {
    if controllers.is_empty() {
        return;
    }

    let Ok(context) = rapier_context.single() else {
        log_warning("update_movement: Rapier context not found, movement tick skipped");
        return;
    };

    let delta = time.delta_secs();

    for (entity, controller, mut state, mut transform, mut velocity, mut impulse, mut gravity) in
        controllers.iter_mut()
    {
        let probe = RapierGroundProbe {
            context: &context,
            body: entity,
        };
        let mut body = RapierBody {
            transform: &mut *transform,
            velocity: &mut *velocity,
            impulse: &mut *impulse,
            gravity: &mut *gravity,
        };

        let tick = step_movement(&mut *state, controller, &mut body, &probe, delta);

        if let Some(transition) = tick.jump {
            let jumping = transition == JumpTransition::Started;
            log(&format!("Controller {:?}: jumping = {}", entity, jumping));
            jump_events.write(JumpingChanged { entity, jumping });
        }

        reports.write(LocomotionReport {
            entity,
            input_magnitude: tick.locomotion.input_magnitude,
            is_running: tick.locomotion.is_running,
            grounded: tick.grounded,
        });
    }
}

/// System: face the move direction (snap by default).
pub fn update_body_rotation(
    mut controllers: Query<(&CharacterController, &MovementState, &mut Transform)>,
) {
    for (controller, state, mut transform) in controllers.iter_mut() {
        update_rotation(state, controller, &mut transform);
    }
}

/// System: accumulate look input into each controller's camera-follow pivot.
///
/// Контроллер без camera_follow просто пропускается; висячий handle — warning.
pub fn rotate_camera_follow(
    time: Res<Time>,
    controllers: Query<(Entity, &CharacterController, &MovementState, &ControllerLinks)>,
    mut cameras: Query<&mut Transform, Without<CharacterController>>,
    mut rotated_events: EventWriter<CameraRotated>,
) {
    let delta = time.delta_secs();

    for (entity, controller, state, links) in controllers.iter() {
        let Some(camera_entity) = links.camera_follow else {
            continue;
        };

        let Ok(mut camera) = cameras.get_mut(camera_entity) else {
            log_warning(&format!(
                "Controller {:?}: camera_follow {:?} has no Transform, rotation skipped",
                entity, camera_entity
            ));
            continue;
        };

        if let Some(rotation_delta) = rotate_camera(state, controller, &mut camera, delta) {
            rotated_events.write(CameraRotated {
                entity,
                delta: rotation_delta,
            });
        }
    }
}

/// System: one-shot diagnostic for controllers spawned without a usable
/// physics body or links. Such controllers are skipped by `update_movement`.
pub fn report_incomplete_controllers(
    added: Query<
        (
            Entity,
            Has<Transform>,
            Has<Velocity>,
            Has<ExternalImpulse>,
            Has<GravityScale>,
            Has<ControllerLinks>,
        ),
        Added<CharacterController>,
    >,
) {
    for (entity, transform, velocity, impulse, gravity, links) in added.iter() {
        if !(transform && velocity && impulse && gravity) {
            log_warning(&format!(
                "Controller {:?}: physics body incomplete (Transform: {}, Velocity: {}, ExternalImpulse: {}, GravityScale: {}), movement disabled",
                entity, transform, velocity, impulse, gravity
            ));
        }
        if !links {
            log_warning(&format!(
                "Controller {:?}: ControllerLinks missing, camera and hit collider disabled",
                entity
            ));
        }
    }
}
