//! Combat systems: attack window ticking, hit collider arming, hit detection

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::attack::{AttackWindow, WindowPoll};
use super::events::EnemyHit;
use crate::components::{ControllerLinks, Damageable, HitCollider, MovementState};
use crate::logger::{log, log_info, log_warning};

/// Arms or disarms a hit collider.
///
/// `HitCollider.armed` меняется сразу, `ColliderDisabled` — через Commands.
/// Returns false (with a diagnostic) when `collider` is not a [`HitCollider`].
pub fn set_hit_collider_armed(
    commands: &mut Commands,
    hit_colliders: &mut Query<&mut HitCollider>,
    collider: Entity,
    armed: bool,
) -> bool {
    let Ok(mut hit_collider) = hit_colliders.get_mut(collider) else {
        log_warning(&format!(
            "Hit collider {:?} not found, arm={} skipped",
            collider, armed
        ));
        return false;
    };

    hit_collider.armed = armed;
    if armed {
        commands.entity(collider).remove::<ColliderDisabled>();
    } else {
        commands.entity(collider).insert(ColliderDisabled);
    }
    true
}

/// System: resume every open [`AttackWindow`] once per tick.
///
/// Когда cooldown доходит до нуля — hit collider выключается (ровно один раз),
/// задача удаляется.
pub fn tick_attack_windows(
    mut commands: Commands,
    time: Res<Time>,
    mut windows: Query<(
        Entity,
        &mut MovementState,
        &mut AttackWindow,
        Option<&ControllerLinks>,
    )>,
    mut hit_colliders: Query<&mut HitCollider>,
) {
    let delta = time.delta_secs();

    for (entity, mut state, mut window, links) in windows.iter_mut() {
        if window.resume(&mut state.cooldown, delta) == WindowPoll::Open {
            continue;
        }

        if let Some(collider) = links.and_then(|links| links.hit_collider) {
            set_hit_collider_armed(&mut commands, &mut hit_colliders, collider, false);
        }
        commands.entity(entity).remove::<AttackWindow>();

        log(&format!(
            "Controller {:?}: attack window closed after {} ticks",
            entity, window.ticks
        ));
    }
}

/// Damageable entity behind a collider: the collider itself or, for colliders
/// spawned as children of a body, its parent.
fn damageable_target(
    collider: Entity,
    targets: &Query<Option<&Name>, With<Damageable>>,
    parents: &Query<&ChildOf>,
) -> Option<Entity> {
    if targets.contains(collider) {
        return Some(collider);
    }
    let parent = parents.get(collider).ok()?.parent();
    targets.contains(parent).then_some(parent)
}

/// System: Rapier collision start between an armed [`HitCollider`] and a
/// [`Damageable`] → [`EnemyHit`].
///
/// Цель — сам collider или его parent body. Свой owner не бьём.
/// Имя цели (если есть `Name`) уходит в лог.
pub fn detect_enemy_hits(
    mut collision_events: EventReader<CollisionEvent>,
    hit_colliders: Query<&HitCollider>,
    targets: Query<Option<&Name>, With<Damageable>>,
    parents: Query<&ChildOf>,
    mut hit_events: EventWriter<EnemyHit>,
) {
    for event in collision_events.read() {
        let (first, second) = match event {
            CollisionEvent::Started(first, second, _) => (*first, *second),
            CollisionEvent::Stopped(..) => continue,
        };

        for (collider, other) in [(first, second), (second, first)] {
            let Ok(hit_collider) = hit_colliders.get(collider) else {
                continue;
            };
            if !hit_collider.armed {
                continue;
            }
            let Some(target) = damageable_target(other, &targets, &parents) else {
                continue;
            };
            if target == hit_collider.owner {
                continue;
            }

            match targets.get(target) {
                Ok(Some(name)) => log_info(&format!("Enemy hit: {}", name)),
                _ => log_info(&format!("Enemy hit: {:?}", target)),
            }

            hit_events.write(EnemyHit {
                attacker: hit_collider.owner,
                target,
            });
        }
    }
}
