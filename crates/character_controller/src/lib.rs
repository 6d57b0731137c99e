//! Third-person character controller
//!
//! Host-driven controller на Bevy 0.16 + Rapier:
//! - Locomotion: move/run → kinematic displacement, gravity toggle по ground contact
//! - Jump state machine: Idle → Pending → Active → Landing
//! - Attack mode: cooldown + hit collider window, EnemyHit notifications
//! - Camera-follow yaw/pitch
//!
//! Своего game loop нет: всё крутится в FixedUpdate хоста.
//!
//! # Setup
//!
//! ```ignore
//! app.add_plugins(CharacterControllerPlugin);
//!
//! let body = spawn_character_body(&mut commands, Vec3::ZERO);
//! initialize_controller(
//!     &mut commands,
//!     body,
//!     CharacterController::default(),
//!     Some(camera_pivot),
//!     Some(hand_collider),
//! );
//! ```

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

// Публичные модули
pub mod combat;
pub mod components;
pub mod input;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use combat::{
    AttackCooldown, AttackModeChanged, AttackStarted, AttackWindow, EnemyHit, WindowPoll,
};
pub use components::*;
pub use input::{
    AttackPressed, JumpInput, MoveInput, RotateCameraInput, RunInput, ToggleAttackMode,
};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use movement::{
    spawn_character_body, step_movement, CameraRotated, CharacterBody, GroundProbe,
    JumpPhase, JumpingChanged, LocomotionReport, MovementTick,
};

/// Controller systems set (FixedUpdate)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControllerSet;

/// Главный plugin контроллера
///
/// Регистрирует события и системы в FixedUpdate.
///
/// Порядок выполнения (chain):
/// 1. tick_attack_windows — опрос открытых окон атаки (новое окно ждёт следующего тика)
/// 2. read_controller_input — input events → MovementState, старт атаки
/// 3. update_movement — ground check, jump, displacement, gravity
/// 4. update_body_rotation — разворот по направлению движения
/// 5. rotate_camera_follow — camera pivot yaw/pitch
/// 6. detect_enemy_hits — Rapier CollisionEvent → EnemyHit
///
/// Всё до Rapier physics step.
pub struct CharacterControllerPlugin;

impl Plugin for CharacterControllerPlugin {
    fn build(&self, app: &mut App) {
        // Input events
        app.add_event::<MoveInput>()
            .add_event::<RunInput>()
            .add_event::<ToggleAttackMode>()
            .add_event::<AttackPressed>()
            .add_event::<JumpInput>()
            .add_event::<RotateCameraInput>();

        // Output events
        app.add_event::<AttackModeChanged>()
            .add_event::<AttackStarted>()
            .add_event::<EnemyHit>()
            .add_event::<JumpingChanged>()
            .add_event::<CameraRotated>()
            .add_event::<LocomotionReport>();

        // Регистрируется и RapierPhysicsPlugin'ом, add_event идемпотентен
        app.add_event::<CollisionEvent>();

        app.add_systems(
            FixedUpdate,
            (
                movement::report_incomplete_controllers,
                combat::tick_attack_windows,
                input::read_controller_input,
                movement::update_movement,
                movement::update_body_rotation,
                movement::rotate_camera_follow,
                combat::detect_enemy_hits,
            )
                .chain() // Последовательное выполнение
                .in_set(ControllerSet)
                .before(bevy_rapier3d::plugin::PhysicsSet::SyncBackend),
        );
    }
}

/// Attaches a controller to an existing physics body.
///
/// - body получает CharacterController + MovementState + ControllerLinks
/// - hit collider (если есть) помечается HitCollider, выключается
///   (`ColliderDisabled`) и получает `ActiveEvents::COLLISION_EVENTS`
///
/// Must happen before the controller's first tick. Missing handles are
/// allowed: the camera or hit window is then skipped with a diagnostic.
pub fn initialize_controller(
    commands: &mut Commands,
    body: Entity,
    controller: CharacterController,
    camera_follow: Option<Entity>,
    hit_collider: Option<Entity>,
) {
    commands.entity(body).insert((
        controller.sanitized(),
        MovementState::default(),
        ControllerLinks {
            camera_follow,
            hit_collider,
        },
    ));

    if let Some(collider) = hit_collider {
        commands.entity(collider).insert((
            HitCollider::new(body),
            ColliderDisabled,
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
        ));
    }

    log_info(&format!(
        "Controller {:?} initialized (camera_follow: {:?}, hit_collider: {:?})",
        body, camera_follow, hit_collider
    ));
}

/// Создаёт minimal Bevy App для headless прогона контроллера
///
/// MinimalPlugins + TransformPlugin + Rapier (fixed schedule) + controller.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((MinimalPlugins, bevy::transform::TransformPlugin))
        .insert_resource(Time::<Fixed>::from_hz(60.0)) // 60Hz FixedUpdate
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        .add_plugins(CharacterControllerPlugin);

    app
}
