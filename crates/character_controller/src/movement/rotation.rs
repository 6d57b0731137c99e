//! Body facing + camera-follow yaw/pitch

use bevy::prelude::*;

use super::locomotion::move_direction;
use crate::components::{CharacterController, MovementState};

/// Rotation that points the body's forward (-Z) along the horizontal move
/// direction. `None` for zero input.
pub fn facing_rotation(move_input: Vec2) -> Option<Quat> {
    let direction = move_direction(move_input);
    if direction.length_squared() <= f32::EPSILON {
        return None;
    }

    // R_y(yaw) * -Z = (-sin yaw, 0, -cos yaw)
    let yaw = f32::atan2(-direction.x, -direction.z);
    Some(Quat::from_rotation_y(yaw))
}

/// Turns the body toward the move direction.
///
/// With the default `turn_smoothing` of 1.0 this is an instant snap. Smaller
/// values slerp part of the way each tick. Returns false when there is no move
/// input.
pub fn update_rotation(
    state: &MovementState,
    controller: &CharacterController,
    transform: &mut Transform,
) -> bool {
    let Some(target) = facing_rotation(state.move_input) else {
        return false;
    };

    if controller.turn_smoothing >= 1.0 {
        transform.rotation = target;
    } else {
        transform.rotation = transform
            .rotation
            .slerp(target, controller.turn_smoothing.max(0.0));
    }
    true
}

/// Accumulates look input into the camera-follow transform.
///
/// Yaw comes from `rotation_input.x` (right turns right), pitch from
/// `rotation_input.y` (up looks up), clamped to `max_camera_pitch`. Roll is
/// re-zeroed on every call so it can never drift in.
///
/// Returns the applied delta as `(pitch, yaw, 0)` when anything rotated.
pub fn rotate_camera(
    state: &MovementState,
    controller: &CharacterController,
    camera: &mut Transform,
    delta: f32,
) -> Option<Vec3> {
    let step = state.rotation_input * delta * controller.camera_rotate_speed;
    let (yaw, pitch, _roll) = camera.rotation.to_euler(EulerRot::YXZ);

    let new_yaw = yaw - step.x;
    // min/max вместо clamp: конфиг мог прийти без sanitized(), clamp паникует
    let max_pitch = controller.max_camera_pitch.abs();
    let new_pitch = (pitch + step.y).min(max_pitch).max(-max_pitch);
    camera.rotation = Quat::from_euler(EulerRot::YXZ, new_yaw, new_pitch, 0.0);

    let applied = Vec3::new(new_pitch - pitch, new_yaw - yaw, 0.0);
    if applied.abs_diff_eq(Vec3::ZERO, 1e-6) {
        None
    } else {
        Some(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(transform: &Transform) -> Vec3 {
        transform.rotation * Vec3::NEG_Z
    }

    #[test]
    fn test_snap_to_move_direction() {
        let mut state = MovementState::default();
        state.set_move_input(Vec2::new(1.0, 0.0), 0.3);
        let mut transform = Transform::default();

        assert!(update_rotation(&state, &CharacterController::default(), &mut transform));
        assert!((forward(&transform) - Vec3::X).length() < 1e-5);

        state.set_move_input(Vec2::new(0.0, 1.0), 0.3);
        update_rotation(&state, &CharacterController::default(), &mut transform);
        assert!((forward(&transform) - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_zero_input_keeps_rotation() {
        let state = MovementState::default();
        let mut transform = Transform::from_rotation(Quat::from_rotation_y(1.0));

        assert!(!update_rotation(&state, &CharacterController::default(), &mut transform));
        assert_eq!(transform.rotation, Quat::from_rotation_y(1.0));
    }

    #[test]
    fn test_smoothing_turns_part_way() {
        let mut state = MovementState::default();
        state.set_move_input(Vec2::new(1.0, 0.0), 0.3);
        let controller = CharacterController {
            turn_smoothing: 0.5,
            ..default()
        };
        let mut transform = Transform::default();

        update_rotation(&state, &controller, &mut transform);

        // Половина от 90° поворота направо
        let expected = Quat::from_rotation_y(-std::f32::consts::FRAC_PI_4);
        assert!(transform.rotation.angle_between(expected) < 1e-4);
    }

    #[test]
    fn test_camera_accumulates_yaw_and_pitch() {
        let mut state = MovementState::default();
        state.set_rotation_input(Vec2::new(0.0, 1.0));
        let controller = CharacterController::default();
        let mut camera = Transform::default();

        let applied = rotate_camera(&state, &controller, &mut camera, 0.5);

        let (yaw, pitch, roll) = camera.rotation.to_euler(EulerRot::YXZ);
        assert!(yaw.abs() < 1e-5);
        assert!((pitch - 0.5).abs() < 1e-5);
        assert!(roll.abs() < 1e-5);
        let applied = applied.expect("camera should rotate");
        assert!((applied.x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_camera_roll_is_rezeroed() {
        let state = MovementState::default();
        let controller = CharacterController::default();
        let mut camera = Transform::from_rotation(Quat::from_euler(EulerRot::YXZ, 0.3, 0.2, 0.4));

        rotate_camera(&state, &controller, &mut camera, 0.1);

        let (yaw, pitch, roll) = camera.rotation.to_euler(EulerRot::YXZ);
        assert!((yaw - 0.3).abs() < 1e-4);
        assert!((pitch - 0.2).abs() < 1e-4);
        assert!(roll.abs() < 1e-5);
    }

    #[test]
    fn test_camera_pitch_is_clamped() {
        let mut state = MovementState::default();
        state.set_rotation_input(Vec2::new(0.0, 1.0));
        let controller = CharacterController::default();
        let mut camera = Transform::default();

        for _ in 0..100 {
            rotate_camera(&state, &controller, &mut camera, 0.1);
        }

        let (_, pitch, _) = camera.rotation.to_euler(EulerRot::YXZ);
        assert!(pitch <= controller.max_camera_pitch + 1e-4);
        // Упёрлись в лимит — дальше ничего не применяется
        assert_eq!(rotate_camera(&state, &controller, &mut camera, 0.1), None);
    }

    #[test]
    fn test_camera_with_negative_pitch_limit_does_not_panic() {
        let mut state = MovementState::default();
        state.set_rotation_input(Vec2::new(0.0, 1.0));
        let controller = CharacterController {
            max_camera_pitch: -0.5,
            ..default()
        };
        let mut camera = Transform::default();

        for _ in 0..20 {
            rotate_camera(&state, &controller, &mut camera, 0.1);
        }

        let (_, pitch, _) = camera.rotation.to_euler(EulerRot::YXZ);
        assert!((pitch - 0.5).abs() < 1e-4, "pitch = {}", pitch);
    }
}
