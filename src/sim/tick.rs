//! Fixed timestep simulation tick
//!
//! Advances the match by exactly one frame. Order is fixed:
//! release trigger, players, ball, possession, goal.

use glam::Vec2;

use super::controls::PressedKeys;
use super::rules::{check_possession, reset_round};
use super::state::{GameEvent, MatchState};
use crate::tuning::Tuning;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys held this frame
    pub pressed: PressedKeys,
    /// Pointer position (aim target)
    pub pointer: Vec2,
    /// One-shot release trigger
    pub release: bool,
}

/// Advance the match state by one fixed tick
pub fn tick(state: &mut MatchState, input: &TickInput, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    if input.release {
        if let Some(holder) = state.ball.holder() {
            state.ball.release(input.pointer, tuning);
            events.push(GameEvent::Released(holder));
        }
    }

    for player in state.players.iter_mut() {
        player.update(&input.pressed, tuning);
    }

    state.ball.update(&state.players, tuning);

    if let Some(taker) = check_possession(&mut state.ball, &state.players) {
        events.push(GameEvent::Captured(taker));
    }

    if let Some(goal) = state.goals.check(&state.ball) {
        let scorer = goal.scorer();
        let player = state.player_mut(scorer);
        player.score += 1;
        log::info!(
            "Goal ({:?})! {} scores. Score {:?}",
            goal,
            scorer.label(),
            state.scores()
        );
        reset_round(&mut state.players, &mut state.ball);
        events.push(GameEvent::Goal { goal, scorer });
    }

    events
}
