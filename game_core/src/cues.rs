//! Audio cue port
//!
//! The core never depends on playback succeeding. Sinks report failures
//! through [`CueError`] and the bus drops them after logging.

use crate::{CueError, Events};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    PaddleHit,
    WallBounce,
    Score,
}

/// Something that can play a cue, typically a sound device
pub trait CueSink {
    fn play(&mut self, cue: Cue) -> Result<(), CueError>;
}

/// Sink used when no audio device is present
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl CueSink for Silent {
    fn play(&mut self, _cue: Cue) -> Result<(), CueError> {
        Ok(())
    }
}

/// Routes cues to the installed sink and tallies them for the current tick
pub struct CueBus {
    sink: Box<dyn CueSink>,
    events: Events,
}

impl CueBus {
    pub fn new(sink: Box<dyn CueSink>) -> Self {
        Self {
            sink,
            events: Events::new(),
        }
    }

    pub fn silent() -> Self {
        Self::new(Box::new(Silent))
    }

    pub fn emit(&mut self, cue: Cue) {
        match cue {
            Cue::PaddleHit => self.events.paddle_hits += 1,
            Cue::WallBounce => self.events.wall_bounces += 1,
            Cue::Score => self.events.scores += 1,
        }
        if let Err(err) = self.sink.play(cue) {
            tracing::trace!(?cue, %err, "cue dropped");
        }
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for CueBus {
    fn default() -> Self {
        Self::silent()
    }
}

impl std::fmt::Debug for CueBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CueBus")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
