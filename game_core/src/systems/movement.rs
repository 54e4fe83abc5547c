use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config, frames: f32) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.pos.y += intent.dir as f32 * config.paddle_speed * frames;
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}

/// Move ball based on velocity and speed multiplier
pub fn move_ball(world: &mut World, frames: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.move_by(frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_paddle_moves_one_speed_step_per_frame() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, &config, Side::Left);
        let start_y = world.get::<&Paddle>(left).unwrap().pos.y;
        world.get::<&mut PaddleIntent>(left).unwrap().dir = 1;

        move_paddles(&mut world, &config, 1.0);

        let y = world.get::<&Paddle>(left).unwrap().pos.y;
        assert_eq!(y, start_y + config.paddle_speed);
    }

    #[test]
    fn test_paddle_clamped_to_arena() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, &config, Side::Left);

        world.get::<&mut PaddleIntent>(left).unwrap().dir = -1;
        for _ in 0..200 {
            move_paddles(&mut world, &config, 1.0);
            let y = world.get::<&Paddle>(left).unwrap().pos.y;
            assert!(y >= 0.0 && y <= config.arena_height - config.paddle_height);
        }
        assert_eq!(world.get::<&Paddle>(left).unwrap().pos.y, 0.0);

        world.get::<&mut PaddleIntent>(left).unwrap().dir = 1;
        for _ in 0..200 {
            move_paddles(&mut world, &config, 1.0);
        }
        assert_eq!(
            world.get::<&Paddle>(left).unwrap().pos.y,
            config.arena_height - config.paddle_height
        );
    }

    #[test]
    fn test_ball_moves_by_velocity_times_multiplier() {
        let mut world = World::new();
        let config = Config::new();
        let ball = create_ball(&mut world, &config);
        {
            let mut b = world.get::<&mut Ball>(ball).unwrap();
            b.vel = Vec2::new(4.0, 2.0);
            b.speed_multiplier = 1.5;
        }

        move_ball(&mut world, 1.0);

        let b = world.get::<&Ball>(ball).unwrap();
        assert_eq!(b.pos, config.ball_spawn() + Vec2::new(6.0, 3.0));
    }
}
