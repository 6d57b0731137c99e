//! Combat module: attack mode, cooldown, hit window
//!
//! Ответственность контроллера:
//! - attack mode toggle + cooldown gating
//! - AttackWindow: hit collider armed только пока идёт cooldown
//! - EnemyHit: уведомление о попадании
//!
//! НЕ наша ответственность: overlap detection (Rapier), damage resolution
//! (другие системы игры слушают EnemyHit).

pub mod attack;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use attack::{AttackCooldown, AttackWindow, WindowPoll};
pub use events::*;
pub use systems::*;
