//! CW Trainer Output - timed audio/visual playback
//!
//! This crate carries playback commands from the UI context to a dedicated
//! worker thread that realizes them as timed tones and visual pulses. It
//! also provides offline tone rendering with the same timing.

pub mod command;
pub mod error;
pub mod queue;
pub mod render;
pub mod sink;
pub mod timing;
pub mod volume;
pub mod worker;

pub use error::{OutputError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        command::PlaybackCommand,
        error::{OutputError, Result},
        queue::{command_queue, CommandReceiver, CommandSender, QUEUE_CAPACITY},
        render::ToneRenderer,
        sink::{NullPulseSink, NullToneSink, Pulse, PulseSink, ToneSink},
        timing::Timing,
        volume::Volume,
        worker::{spawn_worker, WorkerHandle},
    };
}
