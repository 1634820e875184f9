//! Frame orchestrator
//!
//! One iteration: drain input events, run one simulation tick, draw the
//! scene, present. The match state is owned here and lent to the
//! simulation and the renderer each frame.

use crate::consts::TARGET_FPS;
use crate::platform::{FrameClock, InputEvent, InputSource};
use crate::renderer::{Renderer, draw_match};
use crate::sim::{GameEvent, Key, MatchState, TickInput, tick};
use crate::tuning::Tuning;

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Quit,
}

pub struct Game {
    state: MatchState,
    tuning: Tuning,
}

impl Game {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: MatchState::new(),
            tuning,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Run a single frame. Returns `Quit` without simulating if a quit was
    /// requested.
    pub fn frame<I, R>(&mut self, input: &mut I, renderer: &mut R) -> FrameStatus
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let mut release = false;
        for event in input.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                    log::info!("Quit requested after {} ticks", self.state.time_ticks);
                    return FrameStatus::Quit;
                }
                InputEvent::KeyDown(Key::Space) => release = true,
                InputEvent::KeyDown(_) => {}
            }
        }

        let pointer = input.pointer_position();
        let tick_input = TickInput {
            pressed: input.pressed_keys(),
            pointer,
            release,
        };

        // Goals are already logged by the tick
        for event in tick(&mut self.state, &tick_input, &self.tuning) {
            if !matches!(event, GameEvent::Goal { .. }) {
                log::debug!("Tick {}: {:?}", self.state.time_ticks, event);
            }
        }

        draw_match(renderer, &self.state, pointer, &self.tuning);
        renderer.present();

        FrameStatus::Continue
    }

    /// Blocking loop at the target frame rate until quit. Returns frames run.
    pub fn run<I, R, C>(&mut self, input: &mut I, renderer: &mut R, clock: &mut C) -> u64
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        C: FrameClock + ?Sized,
    {
        log::info!("Match loop starting at {} fps", TARGET_FPS);
        let start = self.state.time_ticks;
        loop {
            clock.tick(TARGET_FPS);
            if self.frame(input, renderer) == FrameStatus::Quit {
                break;
            }
        }
        let (p1, p2) = self.state.scores();
        log::info!("Match loop stopped. Final score {} - {}", p1, p2);
        self.state.time_ticks - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{InputScript, ManualClock, ScriptFrame, ScriptedInput};
    use crate::renderer::ShapeBatch;
    use crate::sim::PlayerId;

    fn script(frames: Vec<ScriptFrame>) -> ScriptedInput {
        ScriptedInput::new(InputScript { frames })
    }

    fn entry(hold: Vec<Key>, release: bool, repeat: u32) -> ScriptFrame {
        ScriptFrame {
            hold,
            pointer: [0.0, 0.0],
            release,
            repeat,
        }
    }

    #[test]
    fn test_quit_ends_loop_without_ticking() {
        let mut game = Game::new(Tuning::default());
        let mut input = script(vec![]);
        let mut batch = ShapeBatch::new();
        assert_eq!(game.frame(&mut input, &mut batch), FrameStatus::Quit);
        assert_eq!(game.state().time_ticks, 0);
        assert_eq!(batch.frames_presented, 0);
    }

    #[test]
    fn test_escape_quits() {
        let mut game = Game::new(Tuning::default());
        let mut input = script(vec![entry(vec![Key::Escape], false, 5)]);
        let mut batch = ShapeBatch::new();
        assert_eq!(game.frame(&mut input, &mut batch), FrameStatus::Quit);
    }

    #[test]
    fn test_run_counts_frames_and_presents() {
        let mut game = Game::new(Tuning::default());
        let mut input = script(vec![entry(vec![Key::D], false, 10)]);
        let mut batch = ShapeBatch::new();
        let mut clock = ManualClock::new();

        let frames = game.run(&mut input, &mut batch, &mut clock);
        assert_eq!(frames, 10);
        assert_eq!(game.state().time_ticks, 10);
        assert_eq!(batch.frames_presented, 10);
        // The quitting iteration still waited on the clock
        assert_eq!(clock.ticks, 11);
        assert_eq!(game.state().player(PlayerId::One).rect.x, 250.0 + 50.0);
    }

    #[test]
    fn test_space_releases_held_ball() {
        let mut game = Game::new(Tuning::default());
        game.state_mut().ball.capture(PlayerId::Two);
        let mut input = script(vec![entry(vec![], false, 3), entry(vec![], true, 1)]);
        let mut batch = ShapeBatch::new();

        for _ in 0..3 {
            game.frame(&mut input, &mut batch);
            assert!(game.state().ball.is_held());
        }
        game.frame(&mut input, &mut batch);
        assert!(!game.state().ball.is_held());
    }

    #[test]
    fn test_run_resumes_from_tick_counter() {
        let mut game = Game::new(Tuning::default());
        let mut batch = ShapeBatch::new();
        let mut clock = ManualClock::new();

        let first = game.run(&mut script(vec![entry(vec![], false, 4)]), &mut batch, &mut clock);
        let second = game.run(&mut script(vec![entry(vec![], false, 3)]), &mut batch, &mut clock);
        assert_eq!((first, second), (4, 3));
        assert_eq!(game.state().time_ticks, 7);
        assert_eq!(batch.frames_presented, 7);
    }
}
