//! Audio and visual sink seams
//!
//! The trainer never talks to hardware directly; the worker drives these
//! traits and the embedding environment supplies implementations.

use crate::error::Result;

/// Visual pulse kinds, keyed to what is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    /// Shown while a dot sounds
    Dot,
    /// Shown while a dash sounds
    Dash,
    /// Attention cue (buffer overflow, volume change)
    Alert,
}

/// Tone output channel with explicit acquire/release semantics.
///
/// The worker holds the channel for at most one element at a time and
/// releases it even when acquisition fails, so a failed acquire never
/// leaves the channel held.
pub trait ToneSink: Send {
    /// Take exclusive hold of the channel for one element
    fn acquire(&mut self) -> Result<()>;

    /// Begin a tone; `volume` is in [0.0, 1.0]
    fn start(&mut self, frequency_hz: f32, volume: f32);

    /// End the current tone
    fn stop(&mut self);

    /// Give the channel back; must be safe after a failed acquire
    fn release(&mut self);
}

/// Visual pulse output
pub trait PulseSink: Send {
    fn set(&mut self, pulse: Pulse);
    fn reset(&mut self, pulse: Pulse);
}

/// Tone sink that discards everything (visual-only operation)
#[derive(Debug, Default)]
pub struct NullToneSink;

impl ToneSink for NullToneSink {
    fn acquire(&mut self) -> Result<()> {
        Ok(())
    }

    fn start(&mut self, _frequency_hz: f32, _volume: f32) {}

    fn stop(&mut self) {}

    fn release(&mut self) {}
}

/// Pulse sink that discards everything
#[derive(Debug, Default)]
pub struct NullPulseSink;

impl PulseSink for NullPulseSink {
    fn set(&mut self, _pulse: Pulse) {}

    fn reset(&mut self, _pulse: Pulse) {}
}
