//! Scene drawing: field, players, ball, aim line, scores

use glam::Vec2;

use super::vertex::colors;
use super::{Renderer, TextAnchor};
use crate::consts::*;
use crate::sim::{Ball, MatchState, Player, Rect};
use crate::tuning::Tuning;

const LINE_WIDTH: f32 = 5.0;
const CENTER_CIRCLE_RADIUS: f32 = 75.0;
const HEAD_RADIUS: f32 = 15.0;
const SCORE_MARGIN: f32 = 20.0;

/// Draw one full frame of the match (does not present)
pub fn draw_match<R: Renderer + ?Sized>(r: &mut R, state: &MatchState, pointer: Vec2, tuning: &Tuning) {
    draw_field(r, state);
    for player in &state.players {
        draw_player(r, player);
    }
    draw_ball(r, &state.ball);
    if let Some((start, end)) = state.ball.aim_preview(pointer, tuning.aim_line_length) {
        r.draw_line(start, end, colors::AIM, 2.0);
    }
    draw_scores(r, state);
}

fn draw_field<R: Renderer + ?Sized>(r: &mut R, state: &MatchState) {
    r.fill_background(colors::PITCH);

    r.draw_rect(
        Rect::new(50.0, 50.0, FIELD_WIDTH - 100.0, FIELD_HEIGHT - 100.0),
        colors::LINE,
        Some(LINE_WIDTH),
    );
    r.draw_line(
        Vec2::new(FIELD_WIDTH / 2.0, 50.0),
        Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT - 50.0),
        colors::LINE,
        LINE_WIDTH,
    );
    r.draw_circle(
        Vec2::from(BALL_START),
        CENTER_CIRCLE_RADIUS,
        colors::LINE,
        Some(LINE_WIDTH),
    );

    r.draw_rect(state.goals.left, colors::GOAL, None);
    r.draw_rect(state.goals.right, colors::GOAL, None);
}

/// Body, head, two arms, two legs
fn draw_player<R: Renderer + ?Sized>(r: &mut R, player: &Player) {
    let b = player.rect;
    let c = player.color;

    r.draw_rect(b, c, None);
    r.draw_circle(Vec2::new(b.center_x(), b.y - HEAD_RADIUS), HEAD_RADIUS, c, None);
    r.draw_rect(Rect::new(b.x - 10.0, b.y + 20.0, 10.0, 60.0), c, None);
    r.draw_rect(Rect::new(b.right(), b.y + 20.0, 10.0, 60.0), c, None);
    r.draw_rect(Rect::new(b.x + 10.0, b.bottom(), 10.0, 40.0), c, None);
    r.draw_rect(Rect::new(b.right() - 20.0, b.bottom(), 10.0, 40.0), c, None);
}

fn draw_ball<R: Renderer + ?Sized>(r: &mut R, ball: &Ball) {
    r.draw_circle(ball.pos, ball.radius, BALL_COLOR, None);
}

fn draw_scores<R: Renderer + ?Sized>(r: &mut R, state: &MatchState) {
    let (p1, p2) = state.scores();
    r.draw_text(
        &format!("Player 1: {}", p1),
        TextAnchor::TopLeft(Vec2::new(SCORE_MARGIN, SCORE_MARGIN)),
        colors::TEXT,
    );
    r.draw_text(
        &format!("Player 2: {}", p2),
        TextAnchor::TopRight(Vec2::new(FIELD_WIDTH - SCORE_MARGIN, SCORE_MARGIN)),
        colors::TEXT,
    );
}
