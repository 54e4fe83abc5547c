use hecs::World;

use crate::{
    render, spawn_match, step, Ball, Config, DrawList, Events, GameRng, InputState, Paddle,
    Score, Session, Side, Time,
};

/// A complete local match: world plus every resource `step` needs
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub session: Session,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        spawn_match(&mut world, &config);

        Self {
            world,
            time: Time::new(0.0, 0.0),
            config,
            session: Session::new(),
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Advance by `dt` seconds with the given keys held
    pub fn update(&mut self, input: &InputState, dt: f32) -> &Events {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.session,
            &mut self.score,
            &mut self.events,
            input,
            &mut self.rng,
        );
        &self.events
    }

    pub fn render(&self) -> DrawList {
        render(&self.world, &self.config, &self.session, &self.score)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn winner(&self) -> Option<Side> {
        if self.session.game_over() {
            self.score.winner(self.config.win_score)
        } else {
            None
        }
    }
}
