//! Controller input module
//!
//! # Архитектура
//!
//! ```text
//! Host input dispatcher (keyboard/gamepad)
//!     ↓
//! MoveInput / RunInput / JumpInput / ... (ECS events) - events.rs
//!     ↓
//! read_controller_input (ECS system) - systems.rs
//!     ↓
//! MovementState (setters) + AttackModeChanged / AttackStarted
//! ```

pub mod events;
pub mod systems;

// Re-exports для external use
pub use events::*;
pub use systems::*;
