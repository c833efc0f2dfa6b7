//! Practice session state and the entry points exposed to the UI
//!
//! All session mutation happens on the caller's context. The output
//! worker shares only the command queue and the volume handle, so no
//! locking is needed anywhere.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use cwtrainer_code::Symbol;
use cwtrainer_output::command::PlaybackCommand;
use cwtrainer_output::queue::CommandSender;
use cwtrainer_output::volume::{Volume, INITIAL_VOLUME};

use crate::decoder::{AppendOutcome, DecodeOutcome, Decoder, DEFAULT_DECODE_TIMEOUT};
use crate::error::{EngineError, Result};
use crate::history::{History, DEFAULT_HISTORY_CAPACITY};

/// Result of the last completed decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastDecode {
    /// Nothing decoded yet (or cleared)
    #[default]
    None,
    /// The last sequence matched no table entry
    Unknown,
    Char(char),
}

impl LastDecode {
    /// Rendering used by the practice display
    pub fn display(&self) -> String {
        match self {
            LastDecode::None => String::new(),
            LastDecode::Unknown => "[unknown]".to_string(),
            LastDecode::Char(c) => c.to_string(),
        }
    }
}

/// What a symbol keypress did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Symbol accepted into the pending buffer
    Accepted,
    /// Pending buffer overflowed and was cleared; show an alert pulse
    Overflow,
}

/// Read-only view handed to the rendering collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub pending_code: String,
    pub decoded_text: String,
    pub last_decode: String,
    pub volume: f32,
}

/// Session configuration
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub decode_timeout: Duration,
    pub history_capacity: usize,
    pub initial_volume: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            decode_timeout: DEFAULT_DECODE_TIMEOUT,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            initial_volume: INITIAL_VOLUME,
        }
    }
}

/// A practice session: decoder, decoded history, and playback feedback.
pub struct PracticeSession {
    decoder: Decoder,
    history: History,
    last_decode: LastDecode,
    space_pending: bool,
    commands: CommandSender,
    volume: Volume,
}

impl PracticeSession {
    pub fn new(config: SessionConfig, commands: CommandSender) -> Result<Self> {
        if config.history_capacity == 0 {
            return Err(EngineError::InvalidHistoryCapacity);
        }
        Ok(Self {
            decoder: Decoder::with_timeout(config.decode_timeout)?,
            history: History::new(config.history_capacity),
            last_decode: LastDecode::None,
            space_pending: false,
            commands,
            volume: Volume::new(config.initial_volume),
        })
    }

    /// Handle of the shared volume; hand a clone to the output worker
    pub fn volume_handle(&self) -> Volume {
        self.volume.clone()
    }

    /// A dot or dash was keyed at time `now`
    pub fn on_symbol_input(&mut self, symbol: Symbol, now: Instant) -> InputOutcome {
        match self.decoder.append(symbol, now) {
            AppendOutcome::Accepted => {
                let command = match symbol {
                    Symbol::Dot => PlaybackCommand::Dot,
                    Symbol::Dash => PlaybackCommand::Dash,
                };
                self.commands.send(command);
                InputOutcome::Accepted
            }
            AppendOutcome::Overflow => {
                debug!("symbol buffer overflow, input cleared");
                InputOutcome::Overflow
            }
        }
    }

    /// Drive time-based decoding; call on a fixed tick.
    ///
    /// On a successful decode the character lands in history, preceded by
    /// a word space when an earlier character already completed. The
    /// space is deferred like this so it never trails the last character.
    pub fn poll(&mut self, now: Instant) -> Option<DecodeOutcome> {
        let outcome = self.decoder.poll(now)?;
        match &outcome {
            DecodeOutcome::Resolved(character) => {
                if self.space_pending {
                    self.history.push(' ');
                }
                self.history.push(*character);
                self.space_pending = true;
                self.last_decode = LastDecode::Char(*character);
                info!(character = %character, "decoded");
            }
            DecodeOutcome::Unresolved(code) => {
                self.last_decode = LastDecode::Unknown;
                debug!(%code, "no character for sequence");
            }
        }
        Some(outcome)
    }

    /// Explicit user clear: pending symbols, history, last decode, and
    /// the deferred space all reset together.
    pub fn on_clear(&mut self) {
        self.decoder.clear();
        self.history.clear();
        self.last_decode = LastDecode::None;
        self.space_pending = false;
    }

    /// Adjust the volume by whole steps and return the new level
    pub fn on_volume_delta(&mut self, steps: i32) -> f32 {
        self.volume.step(steps)
    }

    /// Queue full-character playback for learning mode
    pub fn on_learn_play(&mut self, character: char) {
        self.commands
            .send(PlaybackCommand::Character(character.to_ascii_uppercase()));
    }

    pub fn pending_code(&self) -> String {
        self.decoder.pending_code()
    }

    pub fn decoded_text(&self) -> String {
        self.history.as_string()
    }

    pub fn last_decode(&self) -> LastDecode {
        self.last_decode
    }

    pub fn volume(&self) -> f32 {
        self.volume.get()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            pending_code: self.pending_code(),
            decoded_text: self.decoded_text(),
            last_decode: self.last_decode.display(),
            volume: self.volume(),
        }
    }
}
