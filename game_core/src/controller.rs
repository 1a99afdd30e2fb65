//! Match controller
//!
//! Owns both paddles, the ball, the score and the match state. One call to
//! [`MatchController::handle_input`] followed by one call to
//! [`MatchController::update`] makes a frame.

use crate::systems::{move_ball, point_winner, transition, InputEvent, MatchState, Transition};
use crate::{
    create_ball, create_paddle, Arena, AutoTrack, Ball, BestOf, Config, ConfigError, Cue, CueBus,
    CueSink, Events, GameRng, Paddle, Score, Side,
};

pub struct MatchController {
    config: Config,
    arena: Arena,
    player: Paddle,
    ai: Paddle,
    ball: Ball,
    score: Score,
    state: MatchState,
    best_of: BestOf,
    winner_text: String,
    should_quit: bool,
    rng: GameRng,
    cues: CueBus,
    tracker: Option<Box<dyn AutoTrack>>,
}

impl MatchController {
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let best_of = config.best_of()?;
        let ball = create_ball(&config, &mut rng);

        Ok(Self {
            arena: config.arena(),
            player: create_paddle(&config, Side::Left),
            ai: create_paddle(&config, Side::Right),
            ball,
            score: Score::new(),
            state: MatchState::Serve,
            best_of,
            winner_text: String::new(),
            should_quit: false,
            rng,
            cues: CueBus::silent(),
            tracker: None,
            config,
        })
    }

    /// Install the sink cues are played on
    pub fn with_cue_sink(mut self, sink: impl CueSink + 'static) -> Self {
        self.cues = CueBus::new(Box::new(sink));
        self
    }

    /// Let the right paddle follow the ball on its own
    pub fn with_tracker(mut self, tracker: impl AutoTrack + 'static) -> Self {
        self.tracker = Some(Box::new(tracker));
        self
    }

    /// Apply this tick's input events in order
    pub fn handle_input(&mut self, events: &[InputEvent]) {
        for &event in events {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match transition(self.state, event) {
            Transition::Stay => {}
            Transition::Enter(next) => self.enter(next),
            Transition::MovePlayer(dir) => {
                self.player
                    .move_by(dir.sign() * self.config.paddle_speed, self.arena.height);
            }
            Transition::Restart => self.reset_game(),
            Transition::Replay(n) => {
                self.set_best_of(n);
                self.reset_game();
            }
            Transition::Quit => {
                tracing::debug!(state = ?self.state, "quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.cues.clear();

        match self.state {
            MatchState::Playing => self.play_tick(),
            // Frozen until the next input
            MatchState::Serve | MatchState::Paused | MatchState::GameOver => {}
        }
    }

    fn play_tick(&mut self) {
        move_ball(
            &mut self.ball,
            Some(&self.player),
            Some(&self.ai),
            &mut self.cues,
        );

        if let Some(tracker) = self.tracker.as_mut() {
            tracker.track(&mut self.ai, &self.ball, self.arena.height);
        }

        if let Some(side) = point_winner(&self.ball, &self.arena) {
            self.award_point(side);
        }
    }

    fn award_point(&mut self, side: Side) {
        self.score.increment(side);
        self.cues.emit(Cue::Score);
        self.ball.reset(&mut self.rng);
        tracing::info!(
            ?side,
            points = self.score.get(side),
            player = self.score.player,
            ai = self.score.ai,
            "point scored"
        );

        match self.score.has_winner(self.winner_score()) {
            Some(winner) => self.game_over(winner),
            None => self.enter(MatchState::Serve),
        }
    }

    fn game_over(&mut self, winner: Side) {
        self.winner_text = match winner {
            Side::Left => "Player Wins!",
            Side::Right => "AI Wins!",
        }
        .to_string();
        tracing::info!(
            winner = %self.winner_text,
            player = self.score.player,
            ai = self.score.ai,
            best_of = %self.best_of,
            "match over"
        );
        self.enter(MatchState::GameOver);
    }

    fn enter(&mut self, next: MatchState) {
        tracing::debug!(from = ?self.state, to = ?next, "state change");
        self.state = next;
    }

    /// Change match length. Anything other than 3, 5 or 7 is ignored.
    pub fn set_best_of(&mut self, n: u8) {
        match BestOf::try_from(n) {
            Ok(best_of) => {
                tracing::debug!(%best_of, "match length set");
                self.best_of = best_of;
            }
            Err(err) => tracing::debug!(%err, "ignoring match length"),
        }
    }

    /// Fresh match with the current best-of
    pub fn reset_game(&mut self) {
        self.score.reset();
        self.ball.reset(&mut self.rng);
        self.player.recenter(&self.arena);
        self.ai.recenter(&self.arena);
        self.winner_text.clear();
        self.should_quit = false;
        self.enter(MatchState::Serve);
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn player_score(&self) -> u8 {
        self.score.player
    }

    pub fn ai_score(&self) -> u8 {
        self.score.ai
    }

    pub fn best_of(&self) -> BestOf {
        self.best_of
    }

    pub fn winner_score(&self) -> u8 {
        self.best_of.winner_score()
    }

    /// Empty unless the match is over
    pub fn winner_text(&self) -> &str {
        &self.winner_text
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn ai(&self) -> &Paddle {
        &self.ai
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.ai,
        }
    }

    /// Cues emitted by the last `update`
    pub fn events(&self) -> &Events {
        self.cues.events()
    }

    /// Direct access for drivers that place the ball themselves
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.player,
            Side::Right => &mut self.ai,
        }
    }
}

impl std::fmt::Debug for MatchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchController")
            .field("state", &self.state)
            .field("score", &self.score)
            .field("best_of", &self.best_of)
            .field("ball", &self.ball)
            .field("tracked", &self.tracker.is_some())
            .finish_non_exhaustive()
    }
}
