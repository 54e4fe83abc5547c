use hecs::World;

use crate::components::*;
use crate::input::InputState;

/// Turn held keys into paddle intents for human-driven paddles
pub fn apply_input(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = match paddle.side {
            Side::Left => input.left_dir(),
            Side::Right => input.right_dir(),
        };
    }
}
