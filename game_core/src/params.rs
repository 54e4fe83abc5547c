/// Game tuning parameters for Pong
///
/// Distances are in arena units (one unit is one pixel of the reference
/// 400x400 window). Speeds are per reference frame (see [`Params::FRAME_DT`]).
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between arena edge and paddle
    pub const PADDLE_SPEED: f32 = 5.0;

    // AI
    pub const AI_SPEED: f32 = 4.0;
    pub const AI_DEAD_ZONE: f32 = 5.0;

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const SERVE_SPEED_X: f32 = 4.0;
    pub const SERVE_MAX_VY: f32 = 2.0;
    pub const SPEED_STEP: f32 = 0.1; // added to the multiplier on paddle hit
    pub const MAX_SPEED_MULTIPLIER: f32 = 2.0;

    // Score
    pub const WIN_SCORE: u32 = 5; // First to 5 wins

    // Timing
    pub const FRAME_DT: f32 = 1.0 / 60.0; // reference frame, 60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
