//! Kickabout - a two-player arcade football game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (players, ball, possession, goals)
//! - `game`: Frame orchestrator tying input, simulation and rendering together
//! - `renderer`: Immediate-mode shape rendering (CPU batch + WebGPU upload)
//! - `platform`: Input sources and frame clocks for native/browser
//! - `tuning`: Data-driven physics constants

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{FrameStatus, Game};
pub use tuning::Tuning;

/// RGBA color with components in 0..=1
pub type Color = [f32; 4];

/// Game configuration constants
pub mod consts {
    use super::Color;

    /// Window title
    pub const WINDOW_TITLE: &str = "Detailed Football Game";
    /// Target frame rate. One simulation tick per frame.
    pub const TARGET_FPS: u32 = 60;
    /// Nominal tick length, used by the browser accumulator only
    pub const SIM_DT: f32 = 1.0 / TARGET_FPS as f32;
    /// Maximum ticks per browser frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Field dimensions (pixels, origin top-left, +y down)
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player box
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;

    pub const BALL_RADIUS: f32 = 15.0;

    /// Goal regions: thin bars at mid-height near each side line
    pub const GOAL_WIDTH: f32 = 150.0;
    pub const GOAL_HEIGHT: f32 = 10.0;
    pub const GOAL_X_LEFT: f32 = 20.0;
    pub const GOAL_X_RIGHT: f32 = FIELD_WIDTH - GOAL_WIDTH - 20.0;
    pub const GOAL_Y: f32 = FIELD_HEIGHT / 2.0 - GOAL_HEIGHT / 2.0;

    /// Kickoff positions (top-left of the player box)
    pub const PLAYER1_START: (f32, f32) = (FIELD_WIDTH / 4.0, FIELD_HEIGHT / 2.0 - PLAYER_HEIGHT / 2.0);
    pub const PLAYER2_START: (f32, f32) = (
        FIELD_WIDTH * 3.0 / 4.0 - PLAYER_WIDTH,
        FIELD_HEIGHT / 2.0 - PLAYER_HEIGHT / 2.0,
    );
    /// Ball spawn (center)
    pub const BALL_START: (f32, f32) = (FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);

    pub const PLAYER1_COLOR: Color = [0.0, 0.0, 1.0, 1.0];
    pub const PLAYER2_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BALL_COLOR: Color = [1.0, 165.0 / 255.0, 0.0, 1.0];
}
