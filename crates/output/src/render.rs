//! Offline tone rendering
//!
//! Renders text to audio samples with the same timing the worker uses, so
//! a rendered file sounds like ideal manual keying. Tones get a short
//! rise/fall ramp to avoid key clicks.

use cwtrainer_code::lookup_code;

use crate::timing::Timing;

/// Rise/fall shaping applied to each tone edge, in milliseconds
const RISE_FALL_MS: f32 = 5.0;

/// Renders Morse audio at a fixed sample rate
#[derive(Debug, Clone)]
pub struct ToneRenderer {
    timing: Timing,
    sample_rate: f32,
    amplitude: f32,
}

impl ToneRenderer {
    /// Create a renderer; amplitude is clamped to [0.0, 1.0]
    pub fn new(timing: Timing, sample_rate: f32, amplitude: f32) -> Self {
        Self {
            timing,
            sample_rate,
            amplitude: amplitude.clamp(0.0, 1.0),
        }
    }

    /// Render a whole text. Spaces become word gaps; characters outside
    /// the table are skipped.
    pub fn render_text(&self, text: &str) -> Vec<f32> {
        let mut samples = Vec::new();
        let text = text.to_uppercase();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == ' ' {
                self.push_silence(&mut samples, self.timing.word_gap_ms);
                continue;
            }
            let symbols = match lookup_code(ch) {
                Some(symbols) => symbols,
                None => continue,
            };
            for (i, symbol) in symbols.iter().enumerate() {
                self.push_tone(&mut samples, self.timing.symbol_tone_ms(*symbol));
                if i + 1 < symbols.len() {
                    self.push_silence(&mut samples, self.timing.element_gap_ms);
                }
            }
            if chars.peek().is_some() && chars.peek() != Some(&' ') {
                self.push_silence(&mut samples, self.timing.char_gap_ms);
            }
        }

        samples
    }

    /// Render a single character, or `None` when the table has no code
    pub fn render_character(&self, character: char) -> Option<Vec<f32>> {
        let symbols = lookup_code(character)?;
        let mut samples = Vec::new();
        for (i, symbol) in symbols.iter().enumerate() {
            self.push_tone(&mut samples, self.timing.symbol_tone_ms(*symbol));
            if i + 1 < symbols.len() {
                self.push_silence(&mut samples, self.timing.element_gap_ms);
            }
        }
        Some(samples)
    }

    fn samples_for(&self, ms: u64) -> usize {
        (ms as f32 / 1000.0 * self.sample_rate) as usize
    }

    fn push_silence(&self, out: &mut Vec<f32>, ms: u64) {
        out.resize(out.len() + self.samples_for(ms), 0.0);
    }

    fn push_tone(&self, out: &mut Vec<f32>, ms: u64) {
        let total = self.samples_for(ms);
        let edge = (RISE_FALL_MS / 1000.0 * self.sample_rate) as usize;
        let step = 2.0 * std::f32::consts::PI * self.timing.tone_hz / self.sample_rate;

        for i in 0..total {
            let mut amplitude = self.amplitude;
            if edge > 0 && total > edge {
                if i < edge {
                    amplitude *= i as f32 / edge as f32;
                } else if i + edge >= total {
                    amplitude *= (total - 1 - i) as f32 / edge as f32;
                }
            }
            out.push(amplitude * (step * i as f32).sin());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> ToneRenderer {
        ToneRenderer::new(Timing::default(), 8000.0, 0.5)
    }

    #[test]
    fn test_single_dot_has_tone() {
        let samples = renderer().render_text("E");
        assert!(!samples.is_empty());
        assert!(samples.iter().any(|s| s.abs() > 0.1));
    }

    #[test]
    fn test_space_renders_silence() {
        let samples = renderer().render_text(" ");
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_unknown_characters_skipped() {
        assert!(renderer().render_text("#").is_empty());
        assert!(renderer().render_character('#').is_none());
    }

    #[test]
    fn test_dash_longer_than_dot() {
        let r = renderer();
        let dot = r.render_character('E').unwrap();
        let dash = r.render_character('T').unwrap();
        assert!(dash.len() > dot.len());
    }

    #[test]
    fn test_lowercase_accepted() {
        let r = renderer();
        assert_eq!(r.render_text("s").len(), r.render_text("S").len());
    }
}
