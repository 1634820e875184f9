//! End-to-end frames through the orchestrator with scripted input

use glam::Vec2;

use kickabout::consts::*;
use kickabout::platform::script::DEMO_SCRIPT;
use kickabout::platform::{InputScript, ManualClock, ScriptFrame, ScriptedInput};
use kickabout::renderer::ShapeBatch;
use kickabout::sim::{Key, PlayerId};
use kickabout::{FrameStatus, Game, Tuning};

fn hold(keys: &[Key], repeat: u32) -> ScriptFrame {
    ScriptFrame {
        hold: keys.to_vec(),
        pointer: [0.0, 0.0],
        release: false,
        repeat,
    }
}

fn scripted(frames: Vec<ScriptFrame>) -> ScriptedInput {
    ScriptedInput::new(InputScript { frames })
}

#[test]
fn demo_script_plays_to_the_end() {
    let script = InputScript::from_json(DEMO_SCRIPT).unwrap();
    let expected = script.len_frames();

    let mut game = Game::new(Tuning::default());
    let mut input = ScriptedInput::new(script);
    let mut batch = ShapeBatch::new();
    let frames = game.run(&mut input, &mut batch, &mut ManualClock::new());

    assert_eq!(frames, expected);
    assert_eq!(batch.frames_presented, expected);
    assert_eq!(batch.labels.len(), 2);
    for player in &game.state().players {
        assert!(player.rect.x >= 0.0 && player.rect.x <= FIELD_WIDTH - PLAYER_WIDTH);
        assert!(player.rect.y >= 0.0 && player.rect.y <= FIELD_HEIGHT - PLAYER_HEIGHT);
    }
}

#[test]
fn goal_updates_score_text_and_resets() {
    let mut game = Game::new(Tuning::default());
    game.state_mut().ball.pos = Vec2::new(GOAL_X_LEFT + 1.0, GOAL_Y + GOAL_HEIGHT / 2.0);

    let mut input = scripted(vec![hold(&[], 1)]);
    let mut batch = ShapeBatch::new();
    assert_eq!(game.frame(&mut input, &mut batch), FrameStatus::Continue);

    assert_eq!(game.state().scores(), (0, 1));
    assert_eq!(game.state().ball.pos, Vec2::from(BALL_START));
    let texts: Vec<&str> = batch.label_texts().collect();
    assert_eq!(texts, vec!["Player 1: 0", "Player 2: 1"]);
}

#[test]
fn player_walks_into_resting_ball_and_picks_it_up() {
    let mut game = Game::new(Tuning::default());
    game.state_mut().ball.pos = Vec2::new(600.0, FIELD_HEIGHT - BALL_RADIUS);

    let mut input = scripted(vec![hold(&[Key::D], 120)]);
    let mut batch = ShapeBatch::new();
    game.run(&mut input, &mut batch, &mut ManualClock::new());

    let state = game.state();
    assert_eq!(state.ball.holder(), Some(PlayerId::One));
    let holder = state.player(PlayerId::One);
    assert_eq!(state.ball.pos, holder.carry_point(BALL_RADIUS));
    assert_eq!(state.scores(), (0, 0));
}

#[test]
fn release_throws_toward_pointer() {
    let tuning = Tuning::default();
    let mut game = Game::new(tuning.clone());
    game.state_mut().ball.capture(PlayerId::One);

    let mut input = scripted(vec![
        hold(&[], 2),
        ScriptFrame {
            hold: vec![],
            pointer: [0.0, 0.0],
            release: true,
            repeat: 1,
        },
    ]);
    let mut batch = ShapeBatch::new();
    game.frame(&mut input, &mut batch);
    game.frame(&mut input, &mut batch);
    let from = game.state().ball.pos;
    game.frame(&mut input, &mut batch);

    let ball = &game.state().ball;
    assert!(!ball.is_held());
    // Launch velocity plus one tick of gravity
    let launch = ball.velocity() - Vec2::new(0.0, tuning.gravity);
    assert!((launch.length() - tuning.launch_speed).abs() < 1e-3);
    let expected_dir = (Vec2::ZERO - from).normalize();
    assert!((launch.normalize() - expected_dir).length() < 1e-4);
}
