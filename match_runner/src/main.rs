//! Headless match driver
//!
//! Plays the outer loop a windowed front end would: feeds input events,
//! ticks the controller and watches for game over or quit.

mod tracker;

use std::path::PathBuf;

use clap::Parser;
use game_core::{
    Config, Cue, CueError, CueSink, GameRng, InputEvent, MatchController, MatchState, Side,
};

use tracker::{steer, FollowBall};

#[derive(Parser)]
#[command(name = "pong-match", about = "Run headless best-of-N Pong matches")]
struct Cli {
    /// TOML file overriding the default arena and match length
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for serves
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Match length (3, 5 or 7); overrides the config file
    #[arg(long)]
    best_of: Option<u8>,

    /// Give up on a match after this many ticks
    #[arg(long, default_value_t = 200_000)]
    max_ticks: u32,

    /// Number of consecutive matches to play
    #[arg(long, default_value_t = 1)]
    matches: u32,
}

/// Cue sink that writes cues to the log instead of a speaker
struct LogSink;

impl CueSink for LogSink {
    fn play(&mut self, cue: Cue) -> Result<(), CueError> {
        tracing::trace!(?cue, "cue");
        Ok(())
    }
}

/// Outcome of one match as seen by the driver
struct MatchReport {
    ticks: u32,
    player: u8,
    ai: u8,
    winner: Option<String>,
}

fn play_match(game: &mut MatchController, max_ticks: u32) -> MatchReport {
    let mut ticks = 0;
    while ticks < max_ticks && !game.should_quit() {
        let mut events = Vec::with_capacity(2);
        match game.state() {
            MatchState::GameOver => break,
            MatchState::Serve => events.push(InputEvent::TogglePlay),
            MatchState::Playing | MatchState::Paused => {}
        }
        if let Some(event) = steer(game.player(), game.ball(), 5.0) {
            events.push(event);
        }

        game.handle_input(&events);
        game.update();
        ticks += 1;
    }

    let winner = (game.state() == MatchState::GameOver).then(|| game.winner_text().to_string());
    MatchReport {
        ticks,
        player: game.player_score(),
        ai: game.ai_score(),
        winner,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(best_of) = cli.best_of {
        config.best_of = best_of;
    }

    let track_speed = config.track_speed;
    let mut game = MatchController::new(config, GameRng::new(cli.seed))?
        .with_cue_sink(LogSink)
        .with_tracker(FollowBall::new(track_speed));

    tracing::info!(seed = cli.seed, best_of = %game.best_of(), "starting");

    for round in 1..=cli.matches {
        if round > 1 {
            game.handle_event(InputEvent::Restart);
        }

        let report = play_match(&mut game, cli.max_ticks);
        match report.winner {
            Some(text) => println!(
                "match {}: {} {}-{} after {} ticks",
                round, text, report.player, report.ai, report.ticks
            ),
            None => println!(
                "match {}: unfinished {}-{} after {} ticks",
                round, report.player, report.ai, report.ticks
            ),
        }
        tracing::debug!(
            player_y = game.paddle(Side::Left).pos.y,
            ai_y = game.paddle(Side::Right).pos.y,
            "final paddles"
        );

        if game.should_quit() {
            break;
        }
    }

    Ok(())
}
