//! Scripted input for headless runs and tests
//!
//! A script is a list of entries, each held for `repeat` frames. When the
//! script runs out the source reports `Quit`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{InputEvent, InputSource};
use crate::sim::{Key, PressedKeys};

/// Demo match opener bundled with the binary
pub const DEMO_SCRIPT: &str = include_str!("../../demos/kickoff.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptFrame {
    /// Keys held for the whole entry
    #[serde(default)]
    pub hold: Vec<Key>,
    /// Pointer position (field coordinates)
    #[serde(default)]
    pub pointer: [f32; 2],
    /// Press the release key on the first frame of the entry
    #[serde(default)]
    pub release: bool,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

fn default_repeat() -> u32 {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputScript {
    pub frames: Vec<ScriptFrame>,
}

impl InputScript {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total number of frames the script covers
    pub fn len_frames(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat)).sum()
    }
}

/// Replays an `InputScript` one frame per poll
#[derive(Debug)]
pub struct ScriptedInput {
    script: InputScript,
    entry: usize,
    frame_in_entry: u32,
    pressed: PressedKeys,
    pointer: Vec2,
}

impl ScriptedInput {
    pub fn new(script: InputScript) -> Self {
        Self {
            script,
            entry: 0,
            frame_in_entry: 0,
            pressed: PressedKeys::new(),
            pointer: Vec2::ZERO,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.entry >= self.script.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        while let Some(frame) = self.script.frames.get(self.entry) {
            if self.frame_in_entry < frame.repeat {
                break;
            }
            self.entry += 1;
            self.frame_in_entry = 0;
        }

        let Some(frame) = self.script.frames.get(self.entry) else {
            self.pressed.clear();
            return vec![InputEvent::Quit];
        };

        self.pressed = frame.hold.iter().copied().collect();
        self.pointer = Vec2::from(frame.pointer);

        let mut events = Vec::new();
        if self.frame_in_entry == 0 {
            events.extend(frame.hold.iter().map(|&key| InputEvent::KeyDown(key)));
            if frame.release {
                events.push(InputEvent::KeyDown(Key::Space));
            }
        }
        self.frame_in_entry += 1;
        events
    }

    fn pressed_keys(&self) -> PressedKeys {
        self.pressed.clone()
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }
}
