//! Timing parameters for tone playback and decode segmentation

use std::time::Duration;

use cwtrainer_code::Symbol;

use crate::error::{OutputError, Result};

/// Trainer timing parameters, milliseconds unless noted.
///
/// Defaults match the trainer's fixed keying speed: 150 ms dots, 300 ms
/// dashes (1:2), a 100 ms element gap, and a 2 s decode pause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Dot tone length
    pub dot_ms: u64,
    /// Dash tone length
    pub dash_ms: u64,
    /// Silence between consecutive elements
    pub element_gap_ms: u64,
    /// Silence between rendered characters
    pub char_gap_ms: u64,
    /// Silence rendered for a word space
    pub word_gap_ms: u64,
    /// Pause after which pending symbols decode to a character
    pub decode_timeout_ms: u64,
    /// Tone carrier frequency in Hz
    pub tone_hz: f32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            dot_ms: 150,
            dash_ms: 300,
            element_gap_ms: 100,
            char_gap_ms: 300,
            word_gap_ms: 1000,
            decode_timeout_ms: 2000,
            tone_hz: 800.0,
        }
    }
}

impl Timing {
    /// Validate the parameters, returning the timing on success
    pub fn validated(self) -> Result<Self> {
        if self.dot_ms == 0 {
            return Err(OutputError::InvalidTiming {
                msg: "dot length must be non-zero".to_string(),
            });
        }
        if self.dash_ms < self.dot_ms {
            return Err(OutputError::InvalidTiming {
                msg: format!(
                    "dash length {} ms shorter than dot length {} ms",
                    self.dash_ms, self.dot_ms
                ),
            });
        }
        if self.decode_timeout_ms <= self.dash_ms {
            return Err(OutputError::InvalidTiming {
                msg: format!(
                    "decode timeout {} ms must exceed dash length {} ms",
                    self.decode_timeout_ms, self.dash_ms
                ),
            });
        }
        if !self.tone_hz.is_finite() || self.tone_hz <= 0.0 {
            return Err(OutputError::InvalidTiming {
                msg: format!("tone frequency {} Hz out of range", self.tone_hz),
            });
        }
        Ok(self)
    }

    /// Tone length for one symbol
    pub fn symbol_tone(&self, symbol: Symbol) -> Duration {
        Duration::from_millis(self.symbol_tone_ms(symbol))
    }

    /// Tone length for one symbol in milliseconds
    pub fn symbol_tone_ms(&self, symbol: Symbol) -> u64 {
        match symbol {
            Symbol::Dot => self.dot_ms,
            Symbol::Dash => self.dash_ms,
        }
    }

    /// Inter-element silence
    pub fn element_gap(&self) -> Duration {
        Duration::from_millis(self.element_gap_ms)
    }

    /// Decode pause threshold
    pub fn decode_timeout(&self) -> Duration {
        Duration::from_millis(self.decode_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing_is_valid() {
        let timing = Timing::default().validated().unwrap();
        assert_eq!(timing.symbol_tone_ms(Symbol::Dot), 150);
        assert_eq!(timing.symbol_tone_ms(Symbol::Dash), 300);
        assert_eq!(timing.decode_timeout(), Duration::from_millis(2000));
    }

    #[test]
    fn test_rejects_zero_dot() {
        let timing = Timing {
            dot_ms: 0,
            ..Timing::default()
        };
        assert!(timing.validated().is_err());
    }

    #[test]
    fn test_rejects_dash_shorter_than_dot() {
        let timing = Timing {
            dot_ms: 200,
            dash_ms: 100,
            ..Timing::default()
        };
        assert!(timing.validated().is_err());
    }

    #[test]
    fn test_rejects_timeout_within_a_dash() {
        let timing = Timing {
            decode_timeout_ms: 300,
            ..Timing::default()
        };
        assert!(timing.validated().is_err());
    }
}
