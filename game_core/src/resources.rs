use rand::Rng;

use crate::components::{Color, Side};
use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: Params::FRAME_DT,
            now: 0.0,
        }
    }
}

/// Points for each side plus the rally hit counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
    pub hits: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_left_point(&mut self) {
        self.left += 1;
    }

    pub fn add_right_point(&mut self) {
        self.right += 1;
    }

    pub fn add_hit(&mut self) {
        self.hits += 1;
    }

    pub fn add_point(&mut self, side: Side) {
        match side {
            Side::Left => self.add_left_point(),
            Side::Right => self.add_right_point(),
        }
    }

    pub fn winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Which update branch runs each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ball parked at center until the serve key
    Serving,
    Playing,
    /// Terminal until the restart key
    GameOver,
}

/// Session state: current phase and where the next serve goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub phase: Phase,
    pub serve_toward: Side,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Serving,
            serve_toward: Side::Right,
        }
    }

    pub fn waiting_to_serve(&self) -> bool {
        self.phase == Phase::Serving
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// -1.0 serves toward the left paddle, 1.0 toward the right
    pub fn serve_direction(&self) -> f32 {
        self.serve_toward.direction()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform opaque color
    pub fn color(&mut self) -> Color {
        Color::rgb(self.0.gen(), self.0.gen(), self.0.gen())
    }

    /// Uniform float in `[lo, hi]`; `lo` when the range is empty
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if lo >= hi {
            lo
        } else {
            self.0.gen_range(lo..=hi)
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub served: bool,
    pub game_over: bool,
    pub restarted: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.add_left_point();
        assert_eq!(score.left, 1);
        score.add_left_point();
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        score.add_right_point();
        score.add_right_point();
        assert_eq!(score.right, 2);
        assert_eq!(score.left, 0);
    }

    #[test]
    fn test_score_hits() {
        let mut score = Score::new();
        score.add_hit();
        score.add_hit();
        score.add_hit();
        assert_eq!(score.hits, 3);
        assert_eq!(score.left + score.right, 0);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..4 {
            score.add_right_point();
        }
        assert_eq!(score.winner(5), None, "No winner below threshold");
        score.add_right_point();
        assert_eq!(score.winner(5), Some(Side::Right));
    }

    #[test]
    fn test_session_starts_serving_right() {
        let session = Session::new();
        assert!(session.waiting_to_serve());
        assert!(!session.game_over());
        assert_eq!(session.serve_direction(), 1.0);
    }

    #[test]
    fn test_rng_range_bounds() {
        let mut rng = GameRng::new(99);
        for _ in 0..1000 {
            let v = rng.range(-2.0, 2.0);
            assert!((-2.0..=2.0).contains(&v));
        }
        assert_eq!(rng.range(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_rng_is_deterministic() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        assert_eq!(a.color(), b.color());
        assert_eq!(a.range(-2.0, 2.0), b.range(-2.0, 2.0));
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.game_over = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.game_over);
    }
}
