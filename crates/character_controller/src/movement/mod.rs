//! Movement domain — locomotion, jump, ground check, rotation
//!
//! Содержит:
//! - CharacterBody / GroundProbe (seam к физике, Rapier-реализации)
//! - JumpPhase (jump state machine)
//! - step_movement (per-tick entry point)
//! - facing / camera-follow rotation
//! - JumpingChanged, CameraRotated, LocomotionReport (events)
//!
//! Архитектура:
//! - Чистая логика работает над trait'ами (тестируется без App)
//! - `systems` связывает её с Rapier компонентами и Bevy events

pub mod body;
pub mod events;
pub mod ground;
pub mod jump;
pub mod locomotion;
pub mod rotation;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export основных типов
pub use body::{is_falling, spawn_character_body, CharacterBody, RapierBody};
pub use events::*;
pub use ground::{is_grounded, GroundProbe, RapierGroundProbe};
pub use jump::{advance_jump, JumpPhase, JumpTransition};
pub use locomotion::{
    apply_locomotion, gravity_enabled, move_direction, step_movement, LocomotionOutput,
    MovementTick,
};
pub use rotation::{facing_rotation, rotate_camera, update_rotation};
pub use systems::*;
