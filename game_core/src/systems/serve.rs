use crate::{Ball, Color, Config, Events, GameRng, InputState, Phase, Score, Session};
use glam::Vec2;
use hecs::World;
use log::info;

/// Launch the ball when the serve key is held while serving
pub fn handle_serve(
    world: &mut World,
    config: &Config,
    session: &mut Session,
    input: &InputState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if session.phase != Phase::Serving || !input.serve {
        return;
    }

    let vx = config.serve_speed_x * session.serve_direction();
    let vy = rng.range(-config.serve_max_vy, config.serve_max_vy);
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = Vec2::new(vx, vy);
    }

    session.phase = Phase::Playing;
    events.served = true;
    info!("serve toward {:?} ({:.1}, {:.2})", session.serve_toward, vx, vy);
}

/// Start a fresh match when the restart key is held after game over
pub fn handle_restart(
    world: &mut World,
    config: &Config,
    session: &mut Session,
    score: &mut Score,
    input: &InputState,
    events: &mut Events,
) {
    if session.phase != Phase::GameOver || !input.restart {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config.ball_spawn());
        ball.color = Color::WHITE;
    }
    *score = Score::new();
    *session = Session::new();
    events.restarted = true;
    info!("match restarted");
}
