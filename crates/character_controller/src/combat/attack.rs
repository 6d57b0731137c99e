//! Attack cooldown + hit window (resumable per-tick task)
//!
//! Архитектура:
//! - `AttackCooldown` живёт в MovementState (clamped countdown)
//! - `AttackWindow` — component-задача, добавляется при атаке и
//!   опрашивается раз в тик пока cooldown не дойдёт до нуля
//! - Отмены нет: окно всегда доживает до конца

use bevy::prelude::*;

/// Time-decayed attack cooldown.
///
/// Инвариант: `0 ≤ remaining ≤ duration`. `remaining == 0` → можно атаковать.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct AttackCooldown {
    /// Duration of the last started cooldown (seconds)
    pub duration: f32,
    /// Time left (seconds)
    pub remaining: f32,
}

impl AttackCooldown {
    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Restart the countdown at full `duration`.
    pub fn start(&mut self, duration: f32) {
        self.duration = duration.max(0.0);
        self.remaining = self.duration;
    }

    /// Decrement by `delta`, clamped to [0, duration].
    pub fn tick(&mut self, delta: f32) {
        self.remaining = (self.remaining - delta).clamp(0.0, self.duration);
    }
}

/// Result of resuming an [`AttackWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPoll {
    /// Cooldown still running, hit collider stays armed
    Open,
    /// Cooldown reached zero, disarm the collider and drop the task
    Closed,
}

/// Active attack window.
///
/// Added to the controller when an attack starts, removed when the cooldown
/// it drives reaches zero. The first resume happens on the tick after the
/// attack was triggered.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AttackWindow {
    /// Number of ticks this window has been resumed
    pub ticks: u32,
}

impl AttackWindow {
    /// Advance the window by one tick.
    pub fn resume(&mut self, cooldown: &mut AttackCooldown, delta: f32) -> WindowPoll {
        self.ticks += 1;
        cooldown.tick(delta);

        if cooldown.is_ready() {
            WindowPoll::Closed
        } else {
            WindowPoll::Open
        }
    }
}
