mod input;
mod terminal;

use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{poll, read, Event};
use game_core::{Config, Controller, Game, InputState, Params};
use glam::Vec2;
use input::KeyTracker;
use log::{debug, info};
use terminal::{Grid, Terminal};

#[derive(Parser)]
#[command(name = "pong")]
#[command(version)]
#[command(about = "Pong in the terminal: W/S and Up/Down move, SPACE serves, R restarts, Q quits", long_about = None)]
struct Cli {
    /// Random seed for ball colors and serve angles
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file overriding game parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Right paddle is a second player on Up/Down instead of the computer
    #[arg(short, long)]
    two_player: bool,

    /// Points needed to win
    #[arg(short, long)]
    win_score: Option<u32>,
}

impl Cli {
    fn game_config(&self) -> Result<Config, game_core::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::new(),
        };
        if self.two_player {
            config.right_paddle = Controller::Human;
        }
        if let Some(win_score) = self.win_score {
            config.win_score = win_score;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    let config = cli.game_config()?;
    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!("starting match, seed {seed}, right paddle {:?}", config.right_paddle);

    run(Game::new(config, seed))?;
    Ok(())
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Fixed-rate loop: poll keys, step one frame, draw
fn run(mut game: Game) -> std::io::Result<()> {
    let term = Terminal::new()?;
    let frame = Duration::from_secs_f32(Params::FRAME_DT);
    let arena = Vec2::new(game.config.arena_width, game.config.arena_height);
    let (w, h) = term.size()?;
    let mut grid = Grid::new(w, h, arena);
    let mut keys = KeyTracker::new();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        while poll(Duration::ZERO)? {
            match read()? {
                Event::Key(event) => keys.handle(&event),
                Event::Resize(w, h) => grid = Grid::new(w, h, arena),
                _ => {}
            }
        }
        if keys.quit_requested() {
            break;
        }

        let input = InputState::poll(&keys);
        let dt = last.elapsed().as_secs_f32();
        last = Instant::now();
        let events = game.update(&input, dt);
        if events.game_over {
            if let Some(winner) = game.winner() {
                info!("{winner:?} won {}-{}", game.score.left, game.score.right);
            }
        }
        keys.end_frame();

        grid.clear();
        game.render().replay(&mut grid);
        term.draw(&grid)?;

        match frame.checked_sub(frame_start.elapsed()) {
            Some(rest) => std::thread::sleep(rest),
            None => debug!("frame overran by {:?}", frame_start.elapsed() - frame),
        }
    }

    info!("quit at {}-{}", game.score.left, game.score.right);
    Ok(())
}
