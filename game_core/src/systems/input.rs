//! Input transition table
//!
//! Maps (state, event) to the action the controller must take. Every pair
//! is listed so a new state or event fails to compile until it is handled.

use crate::Direction;

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Waiting for the player to put the ball in play
    Serve,
    Playing,
    Paused,
    /// A side reached the winning score; waiting for replay or quit
    GameOver,
}

/// Discrete input consumed once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    TogglePlay,
    Restart,
    SelectBestOf(u8),
    Quit,
}

/// What an input asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Enter(MatchState),
    MovePlayer(Direction),
    Restart,
    /// Set best-of (ignored if invalid), then restart
    Replay(u8),
    Quit,
}

pub fn transition(state: MatchState, event: InputEvent) -> Transition {
    use InputEvent as E;
    use MatchState as S;

    match (state, event) {
        (S::Serve | S::Playing, E::MoveUp) => Transition::MovePlayer(Direction::Up),
        (S::Serve | S::Playing, E::MoveDown) => Transition::MovePlayer(Direction::Down),
        (S::Paused | S::GameOver, E::MoveUp | E::MoveDown) => Transition::Stay,

        (S::Serve, E::TogglePlay) => Transition::Enter(S::Playing),
        (S::Playing, E::TogglePlay) => Transition::Enter(S::Paused),
        (S::Paused, E::TogglePlay) => Transition::Enter(S::Playing),
        (S::GameOver, E::TogglePlay) => Transition::Stay,

        (S::Serve | S::Playing | S::Paused | S::GameOver, E::Restart) => Transition::Restart,

        (S::GameOver, E::SelectBestOf(n)) => Transition::Replay(n),
        (S::Serve | S::Playing | S::Paused, E::SelectBestOf(_)) => Transition::Stay,

        (S::Serve | S::Playing | S::Paused | S::GameOver, E::Quit) => Transition::Quit,
    }
}
