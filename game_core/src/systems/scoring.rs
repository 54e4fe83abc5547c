use crate::{Ball, Config, Events, Phase, Score, Session, Side};
use hecs::World;
use log::info;

/// Check if ball left the arena (scoring)
///
/// The ball is parked at center after every point. Below the win score the
/// session goes back to serving, toward the side that just conceded.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    session: &mut Session,
    score: &mut Score,
    events: &mut Events,
) {
    if session.phase != Phase::Playing {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let conceded = if ball.pos.x < 0.0 {
            Side::Left
        } else if ball.pos.x > config.arena_width {
            Side::Right
        } else {
            continue;
        };
        let scorer = conceded.opponent();

        score.add_point(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        ball.reset(config.ball_spawn());

        if let Some(winner) = score.winner(config.win_score) {
            session.phase = Phase::GameOver;
            events.game_over = true;
            info!(
                "{:?} wins {}-{} after {} hits",
                winner, score.left, score.right, score.hits
            );
        } else {
            session.phase = Phase::Serving;
            session.serve_toward = conceded;
            info!("{:?} scores: {}-{}", scorer, score.left, score.right);
        }
        return;
    }
}
