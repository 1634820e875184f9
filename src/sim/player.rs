//! Player entity: keyboard-driven box with a one-shot jump

use glam::Vec2;

use super::controls::{KeyBindings, PressedKeys};
use super::geom::Rect;
use crate::Color;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Possession priority order
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub rect: Rect,
    pub color: Color,
    pub bindings: KeyBindings,
    pub score: u32,
    /// Airborne: integrating `vel_y` under gravity until landing
    pub jumping: bool,
    pub vel_y: f32,
    /// Kickoff position (top-left)
    pub start: (f32, f32),
}

impl Player {
    pub fn new(id: PlayerId, start: (f32, f32), color: Color, bindings: KeyBindings) -> Self {
        Self {
            id,
            rect: Rect::new(start.0, start.1, PLAYER_WIDTH, PLAYER_HEIGHT),
            color,
            bindings,
            score: 0,
            jumping: false,
            vel_y: 0.0,
            start,
        }
    }

    /// Player 1: blue, WASD, left half
    pub fn player_one() -> Self {
        Self::new(PlayerId::One, PLAYER1_START, PLAYER1_COLOR, KeyBindings::WASD)
    }

    /// Player 2: red, arrow keys, right half
    pub fn player_two() -> Self {
        Self::new(PlayerId::Two, PLAYER2_START, PLAYER2_COLOR, KeyBindings::ARROWS)
    }

    /// Top edge of the box when standing on the ground line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        FIELD_HEIGHT - self.rect.h
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.rect.y >= self.ground_y()
    }

    /// Ball anchor while carried: centered on top of the box
    pub fn carry_point(&self, ball_radius: f32) -> Vec2 {
        Vec2::new(self.rect.center_x(), self.rect.y - ball_radius)
    }

    /// Apply one tick of movement from the held keys.
    ///
    /// The descend key displaces the box even while airborne, on top of
    /// gravity. Holding the jump key does not re-trigger until landing.
    pub fn update(&mut self, keys: &PressedKeys, tuning: &Tuning) {
        let b = self.bindings;

        if keys.is_pressed(b.left) {
            self.rect.x -= tuning.player_speed;
        }
        if keys.is_pressed(b.right) {
            self.rect.x += tuning.player_speed;
        }
        if keys.is_pressed(b.up) && !self.jumping {
            self.jumping = true;
            self.vel_y = -tuning.jump_impulse;
        }
        if keys.is_pressed(b.down) {
            self.rect.y += tuning.player_speed;
        }

        // Unsupported players (e.g. at kickoff) fall from rest
        if !self.jumping && !self.is_grounded() {
            self.jumping = true;
            self.vel_y = 0.0;
        }

        if self.jumping {
            self.rect.y += self.vel_y;
            self.vel_y += tuning.gravity;
            if self.rect.y >= self.ground_y() {
                self.land();
            }
        }

        self.rect.clamp_inside(FIELD_WIDTH, FIELD_HEIGHT);
    }

    fn land(&mut self) {
        self.rect.y = self.ground_y();
        self.jumping = false;
        self.vel_y = 0.0;
    }

    /// Back to kickoff position, standing still
    pub fn reset_position(&mut self) {
        self.rect.set_top_left(self.start);
        self.jumping = false;
        self.vel_y = 0.0;
    }
}
