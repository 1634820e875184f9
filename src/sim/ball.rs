//! Ball entity: free flight under gravity, or carried by a player

use glam::Vec2;

use super::geom::{Rect, unit_toward};
use super::player::{Player, PlayerId};
use crate::consts::*;
use crate::tuning::Tuning;

/// Ball state - free-moving or carried
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallState {
    /// Flying/rolling with its own velocity
    Free { vel: Vec2 },
    /// Carried on top of a player's box; velocity is implicitly zero
    Held { by: PlayerId },
}

#[derive(Debug, Clone)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    /// Fresh ball at the spawn point, at rest
    pub fn new() -> Self {
        Self {
            pos: Vec2::from(BALL_START),
            radius: BALL_RADIUS,
            state: BallState::Free { vel: Vec2::ZERO },
        }
    }

    pub fn holder(&self) -> Option<PlayerId> {
        match self.state {
            BallState::Held { by } => Some(by),
            BallState::Free { .. } => None,
        }
    }

    pub fn is_held(&self) -> bool {
        self.holder().is_some()
    }

    pub fn velocity(&self) -> Vec2 {
        match self.state {
            BallState::Free { vel } => vel,
            BallState::Held { .. } => Vec2::ZERO,
        }
    }

    /// Bounding square used for possession tests
    pub fn bounds(&self) -> Rect {
        Rect::square_around(self.pos, self.radius)
    }

    /// Advance one tick.
    ///
    /// Free: gravity, integrate, then damped bounce off the ground (position
    /// clamped) and side walls (velocity only, position may overshoot).
    /// Held: snap on top of the holder.
    pub fn update(&mut self, players: &[Player; 2], tuning: &Tuning) {
        match self.state {
            BallState::Free { mut vel } => {
                vel.y += tuning.gravity;
                self.pos += vel;

                if self.pos.y + self.radius > FIELD_HEIGHT {
                    self.pos.y = FIELD_HEIGHT - self.radius;
                    vel.y *= -tuning.bounce_damping;
                }
                if self.pos.x - self.radius < 0.0 || self.pos.x + self.radius > FIELD_WIDTH {
                    vel.x *= -tuning.bounce_damping;
                }

                self.state = BallState::Free { vel };
            }
            BallState::Held { by } => {
                self.pos = players[by.index()].carry_point(self.radius);
            }
        }
    }

    /// Attach to a player. Velocity is discarded.
    pub fn capture(&mut self, by: PlayerId) {
        log::debug!("{} captured the ball at {:?}", by.label(), self.pos);
        self.state = BallState::Held { by };
    }

    /// Detach and throw toward `target`. Aiming at the ball's own center
    /// releases it at rest.
    pub fn release(&mut self, target: Vec2, tuning: &Tuning) {
        let vel = unit_toward(self.pos, target)
            .map(|dir| dir * tuning.launch_speed)
            .unwrap_or(Vec2::ZERO);
        log::debug!("Ball released from {:?} with velocity {:?}", self.pos, vel);
        self.state = BallState::Free { vel };
    }

    /// Aim line from the ball toward `target`, fixed length.
    /// Only shown while held; `None` if the target is the ball center.
    pub fn aim_preview(&self, target: Vec2, length: f32) -> Option<(Vec2, Vec2)> {
        if !self.is_held() {
            return None;
        }
        let dir = unit_toward(self.pos, target)?;
        Some((self.pos, self.pos + dir * length))
    }

    /// Back to the spawn point, at rest, not held
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> [Player; 2] {
        [Player::player_one(), Player::player_two()]
    }

    fn free_ball(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            radius: BALL_RADIUS,
            state: BallState::Free { vel },
        }
    }

    #[test]
    fn test_free_fall_applies_gravity() {
        let tuning = Tuning::default();
        let mut ball = Ball::new();
        ball.update(&players(), &tuning);
        assert!((ball.velocity().y - 0.3).abs() < 1e-6);
        assert!((ball.pos.y - (BALL_START.1 + 0.3)).abs() < 1e-4);
    }

    #[test]
    fn test_ground_bounce() {
        let tuning = Tuning::default();
        let mut ball = free_ball(Vec2::new(500.0, FIELD_HEIGHT - BALL_RADIUS - 2.0), Vec2::new(0.0, 8.0));
        let v = 8.0 + tuning.gravity;
        ball.update(&players(), &tuning);
        assert_eq!(ball.pos.y, FIELD_HEIGHT - BALL_RADIUS);
        assert!((ball.velocity().y - (-0.5 * v)).abs() < 1e-5);
    }

    #[test]
    fn test_wall_bounce_flips_without_repositioning() {
        let tuning = Tuning::default();
        let mut ball = free_ball(Vec2::new(18.0, 300.0), Vec2::new(-6.0, 0.0));
        ball.update(&players(), &tuning);
        // Overshoot is kept
        assert!((ball.pos.x - 12.0).abs() < 1e-5);
        assert!((ball.velocity().x - 3.0).abs() < 1e-5);

        let mut ball = free_ball(Vec2::new(980.0, 300.0), Vec2::new(10.0, 0.0));
        ball.update(&players(), &tuning);
        assert!((ball.pos.x - 990.0).abs() < 1e-5);
        assert!((ball.velocity().x + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_held_ball_follows_holder() {
        let tuning = Tuning::default();
        let mut ps = players();
        let mut ball = Ball::new();
        ball.capture(PlayerId::Two);
        ps[1].rect.x = 420.0;
        ball.update(&ps, &tuning);
        assert_eq!(ball.pos, Vec2::new(445.0, ps[1].rect.y - BALL_RADIUS));
        assert_eq!(ball.velocity(), Vec2::ZERO);
        assert_eq!(ball.holder(), Some(PlayerId::Two));
    }

    #[test]
    fn test_capture_discards_velocity() {
        let mut ball = free_ball(Vec2::new(100.0, 100.0), Vec2::new(4.0, -3.0));
        ball.capture(PlayerId::One);
        assert_eq!(ball.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_release_toward_target() {
        let tuning = Tuning::default();
        let mut ball = Ball::new();
        ball.capture(PlayerId::One);
        ball.pos = Vec2::new(100.0, 100.0);
        ball.release(Vec2::new(130.0, 140.0), &tuning);

        assert!(!ball.is_held());
        let vel = ball.velocity();
        assert!((vel.length() - tuning.launch_speed).abs() < 1e-4);
        assert!((vel.normalize() - Vec2::new(0.6, 0.8)).length() < 1e-5);
    }

    #[test]
    fn test_release_at_own_center_is_at_rest() {
        let tuning = Tuning::default();
        let mut ball = Ball::new();
        ball.capture(PlayerId::One);
        let here = ball.pos;
        ball.release(here, &tuning);
        assert!(!ball.is_held());
        assert_eq!(ball.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_aim_preview() {
        let mut ball = Ball::new();
        let target = ball.pos + Vec2::new(10.0, 0.0);
        assert!(ball.aim_preview(target, 150.0).is_none());

        ball.capture(PlayerId::One);
        let (start, end) = ball.aim_preview(target, 150.0).unwrap();
        assert_eq!(start, ball.pos);
        assert!((end - (ball.pos + Vec2::new(150.0, 0.0))).length() < 1e-4);

        assert!(ball.aim_preview(ball.pos, 150.0).is_none());
    }

    #[test]
    fn test_reset() {
        let mut ball = free_ball(Vec2::new(3.0, 4.0), Vec2::new(1.0, 1.0));
        ball.capture(PlayerId::Two);
        ball.reset();
        assert_eq!(ball.pos, Vec2::new(500.0, 300.0));
        assert_eq!(ball.velocity(), Vec2::ZERO);
        assert!(!ball.is_held());
    }
}
