//! Movement events (controller → listeners)

use bevy::prelude::*;

/// Event: jump started (`true`, at liftoff) or ended (`false`, on landing)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct JumpingChanged {
    pub entity: Entity,
    pub jumping: bool,
}

/// Event: camera-follow transform rotated this tick
///
/// `delta` = (pitch, yaw, 0) in radians, as applied after clamping.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CameraRotated {
    pub entity: Entity,
    pub delta: Vec3,
}

/// Event: per-tick locomotion summary (для animation blending)
///
/// Пишется каждый тик для каждого контроллера, в state не хранится.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LocomotionReport {
    pub entity: Entity,
    pub input_magnitude: f32,
    pub is_running: bool,
    pub grounded: bool,
}
