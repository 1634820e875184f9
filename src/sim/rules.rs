//! Possession and scoring rules

use super::ball::Ball;
use super::geom::Rect;
use super::player::{Player, PlayerId};
use crate::consts::*;

/// Which goal the ball entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Left,
    Right,
}

impl Goal {
    /// A goal is awarded to the player attacking that side
    pub fn scorer(self) -> PlayerId {
        match self {
            Goal::Left => PlayerId::Two,
            Goal::Right => PlayerId::One,
        }
    }
}

/// The two static goal rectangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalRegions {
    pub left: Rect,
    pub right: Rect,
}

impl Default for GoalRegions {
    fn default() -> Self {
        Self {
            left: Rect::new(GOAL_X_LEFT, GOAL_Y, GOAL_WIDTH, GOAL_HEIGHT),
            right: Rect::new(GOAL_X_RIGHT, GOAL_Y, GOAL_WIDTH, GOAL_HEIGHT),
        }
    }
}

impl GoalRegions {
    /// Test the ball center (not the full circle).
    ///
    /// The center must lie strictly inside a goal's vertical span, and past
    /// the far edge of the left goal or the near edge of the right goal.
    pub fn check(&self, ball: &Ball) -> Option<Goal> {
        let p = ball.pos;
        let in_band = |r: &Rect| r.y < p.y && p.y < r.bottom();

        if in_band(&self.left) && p.x < self.left.right() {
            return Some(Goal::Left);
        }
        if in_band(&self.right) && p.x > self.right.x {
            return Some(Goal::Right);
        }
        None
    }
}

/// Give a loose ball to the first player whose box overlaps its bounding
/// square. Player 1 wins ties.
pub fn check_possession(ball: &mut Ball, players: &[Player; 2]) -> Option<PlayerId> {
    if ball.is_held() {
        return None;
    }
    let bounds = ball.bounds();
    let taker = PlayerId::ALL
        .into_iter()
        .find(|id| players[id.index()].rect.intersects(&bounds))?;
    ball.capture(taker);
    Some(taker)
}

/// Players back to kickoff, ball to the centre spot at rest
pub fn reset_round(players: &mut [Player; 2], ball: &mut Ball) {
    for player in players.iter_mut() {
        player.reset_position();
    }
    ball.reset();
}
