use crate::{Aabb, Ball, Config, Events, GameRng, Paddle, Score, Side};
use hecs::World;
use log::debug;

/// Check ball collisions with walls and paddles
pub fn check_collisions(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Collect paddle boxes first so the ball can be borrowed mutably
    let paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.aabb()))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls
        let hit_top = ball.pos.y <= 0.0;
        let hit_bottom = ball.pos.y + ball.size.y >= config.arena_height;
        if hit_top || hit_bottom {
            ball.vel.y = -ball.vel.y;
            // Clamp position to prevent stuck
            if hit_top {
                ball.pos.y = 0.0;
            } else {
                ball.pos.y = config.arena_height - ball.size.y;
            }
            ball.change_color(rng);
            events.ball_hit_wall = true;
            debug!("wall bounce at x={:.1}", ball.pos.x);
        }

        // Paddles: only bounce when the ball is heading into that paddle,
        // so an overlap lasting several frames counts once
        let ball_box = ball.aabb();
        for (side, paddle_box) in &paddles {
            let toward = ball.vel.x * side.direction() > 0.0;
            if toward && ball_box.overlaps(paddle_box) {
                ball.vel.x = -ball.vel.x;
                ball.change_color(rng);
                ball.increase_speed(config.speed_step, config.max_speed_multiplier);
                score.add_hit();
                events.ball_hit_paddle = true;
                debug!(
                    "{:?} paddle hit #{}, multiplier {:.1}",
                    side, score.hits, ball.speed_multiplier
                );
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use float_cmp::approx_eq;
    use glam::Vec2;

    struct Fixture {
        world: World,
        config: Config,
        score: Score,
        events: Events,
        rng: GameRng,
        ball: hecs::Entity,
    }

    impl Fixture {
        fn new(pos: Vec2, vel: Vec2) -> Self {
            let mut world = World::new();
            let config = Config::new();
            create_paddle(&mut world, &config, Side::Left);
            create_paddle(&mut world, &config, Side::Right);
            let ball = create_ball(&mut world, &config);
            {
                let mut b = world.get::<&mut Ball>(ball).unwrap();
                b.pos = pos;
                b.vel = vel;
            }
            Self {
                world,
                config,
                score: Score::new(),
                events: Events::new(),
                rng: GameRng::new(12345),
                ball,
            }
        }

        fn check(&mut self) {
            check_collisions(
                &mut self.world,
                &self.config,
                &mut self.score,
                &mut self.events,
                &mut self.rng,
            );
        }

        fn ball(&self) -> Ball {
            *self.world.get::<&Ball>(self.ball).unwrap()
        }
    }

    #[test]
    fn test_ball_bounces_off_top_wall_at_origin() {
        let mut f = Fixture::new(Vec2::new(0.0, 0.0), Vec2::new(-4.0, -2.0));
        f.check();

        let ball = f.ball();
        assert_eq!(ball.vel.y, 2.0, "Y velocity should flip");
        assert_eq!(ball.vel.x, -4.0, "X velocity should be unchanged");
        assert!(f.events.ball_hit_wall);
        assert!(!f.events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let mut f = Fixture::new(Vec2::new(200.0, 395.0), Vec2::new(4.0, 2.0));
        f.check();

        let ball = f.ball();
        assert_eq!(ball.vel.y, -2.0);
        assert_eq!(ball.vel.x, 4.0);
        assert_eq!(
            ball.pos.y,
            f.config.arena_height - ball.size.y,
            "Ball should be pushed back inside"
        );
    }

    #[test]
    fn test_wall_bounce_changes_color() {
        let mut f = Fixture::new(Vec2::new(200.0, -1.0), Vec2::new(4.0, -2.0));
        let mut expected = GameRng::new(12345);
        f.check();
        assert_eq!(f.ball().color, expected.color());
    }

    #[test]
    fn test_no_wall_bounce_mid_arena() {
        let mut f = Fixture::new(Vec2::new(200.0, 200.0), Vec2::new(4.0, 2.0));
        f.check();
        assert_eq!(f.ball().vel, Vec2::new(4.0, 2.0));
        assert!(!f.events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        // Left paddle spans x 20..30, y 170..230
        let mut f = Fixture::new(Vec2::new(25.0, 190.0), Vec2::new(-4.0, 1.0));
        f.check();

        let ball = f.ball();
        assert_eq!(ball.vel.x, 4.0, "Ball should bounce right");
        assert_eq!(ball.vel.y, 1.0);
        assert_eq!(f.score.hits, 1);
        assert!(approx_eq!(f32, ball.speed_multiplier, 1.1, epsilon = 1e-6));
        assert!(f.events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        // Right paddle spans x 370..380
        let mut f = Fixture::new(Vec2::new(365.0, 200.0), Vec2::new(4.0, 0.0));
        f.check();

        assert_eq!(f.ball().vel.x, -4.0, "Ball should bounce left");
        assert_eq!(f.score.hits, 1);
    }

    #[test]
    fn test_ball_does_not_bounce_when_moving_away_from_paddle() {
        let mut f = Fixture::new(Vec2::new(25.0, 190.0), Vec2::new(4.0, 0.0));
        f.check();

        assert_eq!(f.ball().vel.x, 4.0);
        assert_eq!(f.score.hits, 0);
        assert!(!f.events.ball_hit_paddle);
    }

    #[test]
    fn test_overlap_on_one_axis_only_is_a_miss() {
        // Same x band as the left paddle but above it
        let mut f = Fixture::new(Vec2::new(25.0, 100.0), Vec2::new(-4.0, 0.0));
        f.check();
        assert_eq!(f.ball().vel.x, -4.0);
        assert_eq!(f.score.hits, 0);
    }

    #[test]
    fn test_hit_counted_once_while_overlapping() {
        let mut f = Fixture::new(Vec2::new(25.0, 190.0), Vec2::new(-4.0, 0.0));
        for _ in 0..5 {
            f.check();
        }
        assert_eq!(f.score.hits, 1);
        assert_eq!(f.ball().vel.x, 4.0);
    }

    #[test]
    fn test_speed_multiplier_capped() {
        let mut f = Fixture::new(Vec2::new(25.0, 190.0), Vec2::new(-4.0, 0.0));
        for _ in 0..30 {
            {
                let mut b = f.world.get::<&mut Ball>(f.ball).unwrap();
                b.vel.x = -4.0;
            }
            f.check();
            assert!(f.ball().speed_multiplier <= f.config.max_speed_multiplier);
        }
        assert_eq!(f.score.hits, 30);
        assert_eq!(f.ball().speed_multiplier, f.config.max_speed_multiplier);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, &config, Side::Left);
        let mut score = Score::new();
        let mut events = Events::new();
        let mut rng = GameRng::default();

        check_collisions(&mut world, &config, &mut score, &mut events, &mut rng);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
