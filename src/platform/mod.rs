//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (frame pacing)
//! - Input events (held keys, pointer, discrete key presses)

pub mod clock;
pub mod script;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::time::Duration;

use glam::Vec2;

use crate::sim::{Key, PressedKeys};

pub use clock::ManualClock;
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SleepClock;
pub use script::{InputScript, ScriptFrame, ScriptedInput};

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed / input exhausted
    Quit,
    KeyDown(Key),
}

/// Source of player input, polled once per frame
pub trait InputSource {
    /// Drain events queued since the last poll
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Keys currently held
    fn pressed_keys(&self) -> PressedKeys;
    /// Pointer position in field coordinates
    fn pointer_position(&self) -> Vec2;
}

/// Paces the frame loop
pub trait FrameClock {
    /// Wait out the rest of the frame budget; returns time since last tick
    fn tick(&mut self, target_fps: u32) -> Duration;
}
