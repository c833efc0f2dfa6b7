//! Terminal-backed pulse sink
//!
//! Stands in for the hardware notification LEDs: each pulse prints a
//! marker so dot/dash playback stays visible in a plain terminal.

use std::io::{self, Write};

use cwtrainer_output::sink::{Pulse, PulseSink};

/// Marker printed for a pulse
pub fn marker(pulse: Pulse) -> &'static str {
    match pulse {
        Pulse::Dot => "*",
        Pulse::Dash => "===",
        Pulse::Alert => "!",
    }
}

/// Prints a marker when a pulse starts; reset is a no-op since the
/// terminal has nothing to turn off.
#[derive(Debug, Default)]
pub struct TerminalPulseSink;

impl PulseSink for TerminalPulseSink {
    fn set(&mut self, pulse: Pulse) {
        print!("{}", marker(pulse));
        let _ = io::stdout().flush();
    }

    fn reset(&mut self, _pulse: Pulse) {}
}
