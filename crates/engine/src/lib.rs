//! CW Trainer Engine - timed Morse decoding and practice session state
//!
//! The decoder segments keyed symbols into characters using the silence
//! between them; the session wires the decoder, history, and playback
//! queue together and exposes the entry points the UI calls.

pub mod decoder;
pub mod error;
pub mod history;
pub mod session;

pub use error::{EngineError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        decoder::{AppendOutcome, DecodeOutcome, Decoder, DEFAULT_DECODE_TIMEOUT},
        error::{EngineError, Result},
        history::{History, DEFAULT_HISTORY_CAPACITY},
        session::{InputOutcome, LastDecode, PracticeSession, SessionConfig, SessionSnapshot},
    };
}
