//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame, no wall-clock scaling)
//! - Stable evaluation order (player 1 before player 2)
//! - No rendering or platform dependencies

pub mod ball;
pub mod controls;
pub mod geom;
pub mod player;
pub mod rules;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallState};
pub use controls::{Key, KeyBindings, PressedKeys};
pub use geom::{Rect, unit_toward};
pub use player::{Player, PlayerId};
pub use rules::{Goal, GoalRegions, check_possession, reset_round};
pub use state::{GameEvent, MatchState};
pub use tick::{TickInput, tick};
