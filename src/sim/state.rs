//! Match state and simulation events
//!
//! Everything the simulation mutates lives in `MatchState`; the orchestrator
//! owns exactly one and passes it by reference into `tick`.

use super::ball::Ball;
use super::player::{Player, PlayerId};
use super::rules::{Goal, GoalRegions};

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Captured(PlayerId),
    Released(PlayerId),
    Goal { goal: Goal, scorer: PlayerId },
}

#[derive(Debug, Clone)]
pub struct MatchState {
    /// Indexed by `PlayerId::index`
    pub players: [Player; 2],
    pub ball: Ball,
    pub goals: GoalRegions,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Kickoff: both players at their start positions, ball on the centre spot
    pub fn new() -> Self {
        Self {
            players: [Player::player_one(), Player::player_two()],
            ball: Ball::new(),
            goals: GoalRegions::default(),
            time_ticks: 0,
        }
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// (player 1, player 2)
    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].score, self.players[1].score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kickoff_state() {
        let state = MatchState::new();
        assert_eq!(state.scores(), (0, 0));
        assert_eq!(state.player(PlayerId::One).id, PlayerId::One);
        assert_eq!(state.player(PlayerId::Two).id, PlayerId::Two);
        assert!(!state.ball.is_held());
        assert_eq!(state.time_ticks, 0);
    }
}
