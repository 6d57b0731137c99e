//! ECS Components контроллера
//!
//! Организация по доменам:
//! - controller: настройки, MovementState, ссылки на camera/hit collider
//! - combat: HitCollider, Damageable

pub mod combat;
pub mod controller;

// Re-exports для удобного импорта
pub use combat::*;
pub use controller::*;
