pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run the deterministic Pong game simulation
///
/// Speeds in [`Config`] are per reference frame; a `dt` of
/// [`Params::FRAME_DT`] advances exactly one frame.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    session: &mut Session,
    score: &mut Score,
    events: &mut Events,
    input: &InputState,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    events.clear();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 1e-6 {
        let step_dt = remaining_dt.min(Params::FRAME_DT);
        remaining_dt -= step_dt;
        let frames = step_dt / Params::FRAME_DT;

        // 1. Restart is the only way out of game over
        handle_restart(world, config, session, score, input, events);
        if session.phase == Phase::GameOver {
            continue;
        }

        // 2. Paddles: human intents, then AI
        apply_input(world, input);
        move_paddles(world, config, frames);
        update_ai(world, config, frames);

        // 3. Serve
        handle_serve(world, config, session, input, events, rng);
        if session.phase != Phase::Playing {
            continue;
        }

        // 4. Ball
        move_ball(world, frames);
        check_collisions(world, config, score, events, rng);
        check_scoring(world, config, session, score, events);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a human-driven paddle entity
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    world.spawn((new_paddle(config, side), PaddleIntent::new()))
}

/// Helper to create a computer-driven paddle entity
pub fn create_ai_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    world.spawn((
        new_paddle(config, side),
        PaddleAi::new(config.ai_speed, config.ai_dead_zone),
    ))
}

/// Helper to create the ball entity, at rest in the center
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(
        config.ball_spawn(),
        glam::Vec2::splat(config.ball_size),
    ),))
}

/// Populate an empty world for a new match
pub fn spawn_match(world: &mut World, config: &Config) {
    create_paddle(world, config, Side::Left);
    match config.right_paddle {
        Controller::Human => create_paddle(world, config, Side::Right),
        Controller::Ai => create_ai_paddle(world, config, Side::Right),
    };
    create_ball(world, config);
}

fn new_paddle(config: &Config, side: Side) -> Paddle {
    let color = match side {
        Side::Left => Color::RED,
        Side::Right => Color::BLUE,
    };
    Paddle::new(
        side,
        config.paddle_spawn(side),
        glam::Vec2::new(config.paddle_width, config.paddle_height),
        color,
    )
}
