//! Headless прогон контроллера
//!
//! Rapier ground plane + один контроллер + scripted input:
//! идём вперёд, бежим, прыгаем, включаем attack mode и бьём манекен.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;
use character_controller::*;

/// Scripted input: (tick, action)
fn scripted_input(tick: u32, body: Entity, world: &mut World) {
    match tick {
        10 => {
            world.send_event(MoveInput {
                entity: body,
                value: Vec2::new(0.0, 1.0),
            });
        }
        60 => {
            world.send_event(RunInput {
                entity: body,
                pressed: true,
            });
        }
        120 => {
            world.send_event(JumpInput {
                entity: body,
                pressed: true,
            });
        }
        125 => {
            world.send_event(JumpInput {
                entity: body,
                pressed: false,
            });
        }
        200 => {
            world.send_event(ToggleAttackMode { entity: body });
            world.send_event(AttackPressed { entity: body });
        }
        260 => {
            world.send_event(RotateCameraInput {
                entity: body,
                value: Vec2::new(1.0, 0.0),
            });
        }
        _ => {}
    }
}

fn spawn_scene(mut commands: Commands) {
    // Пол
    commands.spawn((
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(50.0, 0.5, 50.0),
    ));

    // Манекен впереди по маршруту
    commands.spawn((
        Name::new("Training Dummy"),
        Damageable,
        Transform::from_xyz(0.0, 1.0, -6.0),
        RigidBody::Fixed,
        Collider::cuboid(0.4, 1.0, 0.4),
    ));

    let body = spawn_character_body(&mut commands, Vec3::ZERO);

    let camera_pivot = commands
        .spawn((Name::new("Camera Follow"), Transform::from_xyz(0.0, 1.6, 0.0)))
        .id();

    let hand = commands
        .spawn((
            Name::new("Hand"),
            Transform::from_xyz(0.3, 1.0, -0.6),
            Collider::ball(0.3),
            ChildOf(body),
        ))
        .id();

    initialize_controller(
        &mut commands,
        body,
        CharacterController {
            move_speed: 2.0,
            jump_impulse: 5.0,
            ..default()
        },
        Some(camera_pivot),
        Some(hand),
    );
}

fn print_controller_events(
    mut jumps: EventReader<JumpingChanged>,
    mut attacks: EventReader<AttackStarted>,
    mut hits: EventReader<EnemyHit>,
    mut cameras: EventReader<CameraRotated>,
) {
    for event in jumps.read() {
        println!("  jumping changed: {}", event.jumping);
    }
    for event in attacks.read() {
        println!("  attack started by {:?}", event.entity);
    }
    for event in hits.read() {
        println!("  {:?} hit {:?}", event.attacker, event.target);
    }
    if let Some(event) = cameras.read().last() {
        println!("  camera rotated by {:?}", event.delta);
    }
}

fn main() {
    println!("Starting headless character controller run");

    let mut app = create_headless_app();
    // Ровно один fixed tick на update — прогон детерминирован
    let tick = Duration::from_secs_f64(1.0 / 60.0);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(tick))
        .add_systems(Startup, spawn_scene)
        .add_systems(Update, print_controller_events);

    // Startup
    app.update();

    let body = {
        let world = app.world_mut();
        let mut query = world.query_filtered::<Entity, With<CharacterController>>();
        query.iter(world).next()
    };
    let Some(body) = body else {
        log_error("Controller entity was not spawned");
        return;
    };

    for tick in 0..400u32 {
        scripted_input(tick, body, app.world_mut());
        app.update();

        if tick % 50 == 0 {
            if let Some(transform) = app.world().get::<Transform>(body) {
                println!("Tick {}: position {:?}", tick, transform.translation);
            }
        }
    }

    println!("Run complete!");
}
