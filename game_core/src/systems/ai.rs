use crate::{Ball, Config, Paddle, PaddleAi};
use hecs::World;

/// Drive computer paddles toward the ball.
///
/// A paddle only tracks while the ball heads toward its side. It moves one
/// `speed` step per frame when the ball's center is outside the dead zone
/// around the paddle's center. Clamping happens on every branch.
pub fn update_ai(world: &mut World, config: &Config, frames: f32) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.center().y, ball.vel.x));

    for (_entity, (paddle, ai)) in world.query_mut::<(&mut Paddle, &PaddleAi)>() {
        if let Some((ball_center_y, ball_vx)) = ball {
            if ball_vx * paddle.side.direction() > 0.0 {
                let paddle_center_y = paddle.center_y();
                if ball_center_y < paddle_center_y - ai.dead_zone {
                    paddle.pos.y -= ai.speed * frames;
                } else if ball_center_y > paddle_center_y + ai.dead_zone {
                    paddle.pos.y += ai.speed * frames;
                }
            }
        }
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}
