//! Combat events (controller → listeners)

use bevy::prelude::*;

/// Event: attack mode toggled
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackModeChanged {
    pub entity: Entity,
    pub enabled: bool,
}

/// Event: attack accepted (cooldown started, hit collider armed)
///
/// Не пишется если атака отклонена (не в attack mode или cooldown > 0).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackStarted {
    pub entity: Entity,
}

/// Event: armed hit collider touched a damageable entity
///
/// Damage resolution — не наша ответственность, только уведомление.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyHit {
    /// Controller entity that owns the hit collider
    pub attacker: Entity,
    pub target: Entity,
}
