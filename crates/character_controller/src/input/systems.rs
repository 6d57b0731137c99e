//! Controller input system (ECS)
//!
//! Input events → setters на MovementState. Физику здесь не трогаем:
//! jump только latch'ится и резолвится в update_movement (нужен ground check).
//!
//! Исключение — атака: она не зависит от физики, поэтому cooldown, событие и
//! hit collider обрабатываются сразу.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::events::*;
use crate::combat::{set_hit_collider_armed, AttackModeChanged, AttackStarted, AttackWindow};
use crate::components::{CharacterController, ControllerLinks, HitCollider, MovementState};
use crate::logger::{log, log_warning};

/// All input event readers of the controller.
#[derive(SystemParam)]
pub struct ControllerInputEvents<'w, 's> {
    pub moves: EventReader<'w, 's, MoveInput>,
    pub runs: EventReader<'w, 's, RunInput>,
    pub attack_mode_toggles: EventReader<'w, 's, ToggleAttackMode>,
    pub attacks: EventReader<'w, 's, AttackPressed>,
    pub jumps: EventReader<'w, 's, JumpInput>,
    pub camera_rotations: EventReader<'w, 's, RotateCameraInput>,
}

fn unknown_controller(kind: &str, entity: Entity) {
    log_warning(&format!(
        "{} input for {:?} ignored: entity has no CharacterController",
        kind, entity
    ));
}

/// System: apply this tick's input events to the addressed controllers.
///
/// # Порядок
/// Toggle attack mode обрабатывается до attack press, так что
/// "включить режим + ударить" в одном кадре работает.
pub fn read_controller_input(
    mut commands: Commands,
    mut input: ControllerInputEvents,
    mut controllers: Query<(
        &CharacterController,
        &mut MovementState,
        Option<&ControllerLinks>,
        Has<AttackWindow>,
    )>,
    mut hit_colliders: Query<&mut HitCollider>,
    mut mode_events: EventWriter<AttackModeChanged>,
    mut attack_events: EventWriter<AttackStarted>,
) {
    for event in input.moves.read() {
        match controllers.get_mut(event.entity) {
            Ok((controller, mut state, _, _)) => {
                state.set_move_input(event.value, controller.max_backward)
            }
            Err(_) => unknown_controller("Move", event.entity),
        }
    }

    for event in input.runs.read() {
        match controllers.get_mut(event.entity) {
            Ok((_, mut state, _, _)) => state.set_running(event.pressed),
            Err(_) => unknown_controller("Run", event.entity),
        }
    }

    for event in input.camera_rotations.read() {
        match controllers.get_mut(event.entity) {
            Ok((_, mut state, _, _)) => state.set_rotation_input(event.value),
            Err(_) => unknown_controller("RotateCamera", event.entity),
        }
    }

    for event in input.jumps.read() {
        match controllers.get_mut(event.entity) {
            Ok((_, mut state, _, _)) => state.request_jump(event.pressed),
            Err(_) => unknown_controller("Jump", event.entity),
        }
    }

    for event in input.attack_mode_toggles.read() {
        let Ok((_, mut state, _, _)) = controllers.get_mut(event.entity) else {
            unknown_controller("ToggleAttackMode", event.entity);
            continue;
        };

        let enabled = state.toggle_attack_mode();
        log(&format!("Controller {:?}: attack mode = {}", event.entity, enabled));
        mode_events.write(AttackModeChanged {
            entity: event.entity,
            enabled,
        });
    }

    for event in input.attacks.read() {
        let Ok((controller, mut state, links, window_open)) = controllers.get_mut(event.entity)
        else {
            unknown_controller("Attack", event.entity);
            continue;
        };

        // Невалидная атака — тихий no-op: ни события, ни collider
        if window_open || !state.try_start_attack(controller.attack_cooldown) {
            continue;
        }

        attack_events.write(AttackStarted {
            entity: event.entity,
        });

        match links.and_then(|links| links.hit_collider) {
            Some(collider) => {
                set_hit_collider_armed(&mut commands, &mut hit_colliders, collider, true);
            }
            None => log_warning(&format!(
                "Controller {:?}: no hit collider linked, attack has no hit window",
                event.entity
            )),
        }

        commands.entity(event.entity).insert(AttackWindow::default());
    }
}
