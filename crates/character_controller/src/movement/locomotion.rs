//! Locomotion: move input → kinematic displacement, run, gravity toggle
//!
//! `step_movement` — per-tick entry point (ground check → jump input →
//! displacement → jump phase → gravity). Чистая функция над trait'ами,
//! ECS обёртка в `movement::systems`.

use bevy::prelude::*;

use super::body::CharacterBody;
use super::ground::{is_grounded, GroundProbe};
use super::jump::{advance_jump, JumpPhase, JumpTransition};
use crate::components::{CharacterController, MovementState};

/// Side-channel output for animation blending (not stored).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionOutput {
    /// |x| + |y| of the clamped move input
    pub input_magnitude: f32,
    /// Run held AND grounded
    pub is_running: bool,
}

/// Everything one movement tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementTick {
    pub locomotion: LocomotionOutput,
    pub grounded: bool,
    pub jump: Option<JumpTransition>,
    pub gravity_enabled: bool,
}

/// Strafe on +X, forward input on -Z (Bevy forward).
pub fn move_direction(input: Vec2) -> Vec3 {
    Vec3::new(input.x, 0.0, -input.y)
}

/// Gravity is off only while grounded with no jump in flight.
pub fn gravity_enabled(grounded: bool, jump: JumpPhase) -> bool {
    !(grounded && jump.is_settled())
}

/// Applies this tick's displacement to the body.
pub fn apply_locomotion(
    state: &MovementState,
    controller: &CharacterController,
    body: &mut impl CharacterBody,
    grounded: bool,
    delta: f32,
) -> LocomotionOutput {
    let is_running = state.run_pressed && grounded;
    let speed = if is_running {
        controller.move_speed * controller.run_multiplier
    } else {
        controller.move_speed
    };

    let displacement = move_direction(state.move_input) * delta * speed;
    if displacement != Vec3::ZERO {
        body.translate(displacement);
    }

    LocomotionOutput {
        input_magnitude: state.move_input.x.abs() + state.move_input.y.abs(),
        is_running,
    }
}

/// One movement tick for one controller.
pub fn step_movement(
    state: &mut MovementState,
    controller: &CharacterController,
    body: &mut impl CharacterBody,
    probe: &impl GroundProbe,
    delta: f32,
) -> MovementTick {
    let grounded = is_grounded(probe, body.position(), controller);

    // Pending с прошлого тика → liftoff в этом; новый press ждёт следующего
    let lift_off = state.jump == JumpPhase::Pending;
    if let Some(pressed) = state.jump_request.take() {
        if pressed {
            state.jump.press(grounded);
        } else {
            state.jump.release();
        }
    }

    let locomotion = apply_locomotion(state, controller, body, grounded, delta);
    let jump = advance_jump(
        &mut state.jump,
        body,
        grounded,
        controller.jump_impulse,
        lift_off,
    );

    let gravity = gravity_enabled(grounded, state.jump);
    body.set_gravity_enabled(gravity);

    MovementTick {
        locomotion,
        grounded,
        jump,
        gravity_enabled: gravity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::test_support::{FlatGround, MockBody};

    const DT: f32 = 0.1;

    fn controller(move_speed: f32) -> CharacterController {
        CharacterController {
            move_speed,
            ..default()
        }
    }

    #[test]
    fn test_walk_displacement() {
        let ground = FlatGround { height: 0.0 };
        let controller = controller(2.0);
        let mut state = MovementState::default();
        state.set_move_input(Vec2::new(1.0, 0.0), controller.max_backward);
        let mut body = MockBody::default();

        let tick = step_movement(&mut state, &controller, &mut body, &ground, DT);

        assert!((body.position.x - 0.2).abs() < 1e-6, "x = {}", body.position.x);
        assert_eq!(body.position.y, 0.0);
        assert_eq!(body.position.z, 0.0);
        assert!(!tick.locomotion.is_running);
        assert_eq!(tick.locomotion.input_magnitude, 1.0);
    }

    #[test]
    fn test_forward_input_moves_along_negative_z() {
        let ground = FlatGround { height: 0.0 };
        let controller = controller(1.0);
        let mut state = MovementState::default();
        state.set_move_input(Vec2::new(0.0, 1.0), controller.max_backward);
        let mut body = MockBody::default();

        step_movement(&mut state, &controller, &mut body, &ground, DT);

        assert!((body.position.z + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_run_requires_ground() {
        let ground = FlatGround { height: 0.0 };
        let controller = controller(2.0);
        let mut state = MovementState::default();
        state.set_move_input(Vec2::new(1.0, 0.0), controller.max_backward);
        state.set_running(true);

        let mut grounded_body = MockBody::default();
        let tick = step_movement(&mut state, &controller, &mut grounded_body, &ground, DT);
        assert!(tick.locomotion.is_running);
        assert!((grounded_body.position.x - 0.4).abs() < 1e-6);

        let mut airborne_body = MockBody {
            position: Vec3::new(0.0, 3.0, 0.0),
            ..Default::default()
        };
        let tick = step_movement(&mut state, &controller, &mut airborne_body, &ground, DT);
        assert!(!tick.locomotion.is_running);
        assert!((airborne_body.position.x - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_backward_input_is_clamped_before_displacement() {
        let ground = FlatGround { height: 0.0 };
        let controller = controller(1.0);
        let mut state = MovementState::default();
        state.set_move_input(Vec2::new(0.0, -1.0), controller.max_backward);
        let mut body = MockBody::default();

        let tick = step_movement(&mut state, &controller, &mut body, &ground, 1.0);

        assert!((body.position.z - 0.3).abs() < 1e-6);
        assert!((tick.locomotion.input_magnitude - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_gravity_rule() {
        assert!(!gravity_enabled(true, JumpPhase::Idle));
        assert!(!gravity_enabled(true, JumpPhase::Landing));
        assert!(gravity_enabled(true, JumpPhase::Pending));
        assert!(gravity_enabled(true, JumpPhase::Active { left_ground: false }));
        assert!(gravity_enabled(false, JumpPhase::Idle));
        assert!(gravity_enabled(false, JumpPhase::Active { left_ground: true }));
    }

    #[test]
    fn test_grounded_idle_disables_gravity() {
        let ground = FlatGround { height: 0.0 };
        let controller = CharacterController::default();
        let mut state = MovementState::default();
        let mut body = MockBody::default();

        let tick = step_movement(&mut state, &controller, &mut body, &ground, DT);

        assert!(tick.grounded);
        assert!(!tick.gravity_enabled);
        assert!(!body.gravity);
    }

    #[test]
    fn test_jump_while_airborne_never_pends() {
        let ground = FlatGround { height: 0.0 };
        let controller = CharacterController::default();
        let mut state = MovementState::default();
        let mut body = MockBody {
            position: Vec3::new(0.0, 1.0, 0.0),
            ..Default::default()
        };

        state.request_jump(true);
        let tick = step_movement(&mut state, &controller, &mut body, &ground, DT);

        assert_eq!(state.jump, JumpPhase::Idle);
        assert_eq!(state.jump_request, None);
        assert!(tick.gravity_enabled);
    }

    #[test]
    fn test_full_jump_cycle() {
        let ground = FlatGround { height: 0.0 };
        let controller = CharacterController {
            jump_impulse: 5.0,
            ..default()
        };
        let mut state = MovementState::default();
        let mut body = MockBody {
            gravity: false,
            ..Default::default()
        };
        let mut started = 0;
        let mut ended = 0;
        let mut count = |tick: &MovementTick| match tick.jump {
            Some(JumpTransition::Started) => started += 1,
            Some(JumpTransition::Ended) => ended += 1,
            None => {}
        };

        // Tick 1: press → Pending, гравитация включается
        state.request_jump(true);
        let tick = step_movement(&mut state, &controller, &mut body, &ground, DT);
        count(&tick);
        assert_eq!(state.jump, JumpPhase::Pending);
        assert!(body.gravity);
        assert!(body.impulses.is_empty());

        // Tick 2: liftoff
        let tick = step_movement(&mut state, &controller, &mut body, &ground, DT);
        count(&tick);
        assert_eq!(body.impulses, vec![Vec3::Y * 5.0]);
        assert!(state.jump.is_active());

        // Tick 3: в воздухе
        body.position.y = 1.0;
        let tick = step_movement(&mut state, &controller, &mut body, &ground, DT);
        count(&tick);
        assert!(body.gravity);

        // Tick 4: приземлились
        body.position.y = 0.0;
        body.velocity.y = -2.0;
        let tick = step_movement(&mut state, &controller, &mut body, &ground, DT);
        count(&tick);
        assert_eq!(state.jump, JumpPhase::Landing);
        assert!(!body.gravity);

        // Tick 5: Idle
        step_movement(&mut state, &controller, &mut body, &ground, DT);
        assert_eq!(state.jump, JumpPhase::Idle);

        assert_eq!(started, 1);
        assert_eq!(ended, 1);
        assert_eq!(body.impulses.len(), 1);
    }

    #[test]
    fn test_release_before_liftoff_cancels_jump() {
        let ground = FlatGround { height: 0.0 };
        let controller = CharacterController::default();
        let mut state = MovementState::default();
        let mut body = MockBody::default();

        state.request_jump(true);
        step_movement(&mut state, &controller, &mut body, &ground, DT);
        assert_eq!(state.jump, JumpPhase::Pending);

        state.request_jump(false);
        let tick = step_movement(&mut state, &controller, &mut body, &ground, DT);

        assert_eq!(tick.jump, None);
        assert_eq!(state.jump, JumpPhase::Idle);
        assert!(body.impulses.is_empty());
        assert!(!body.gravity);
    }
}
