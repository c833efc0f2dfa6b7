//! Shared volume level
//!
//! The session adjusts the level from the UI context; the worker reads it
//! at tone start so a change applies to the next element, never
//! retroactively. A lock-free atomic is enough since there is exactly one
//! writer.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Volume at session start
pub const INITIAL_VOLUME: f32 = 0.25;

/// Per-step volume change
pub const VOLUME_STEP: f32 = 0.1;

/// At or below this level the tone is skipped; pulses and timing still run
pub const MUTE_FLOOR: f32 = 0.05;

/// Volume level in [0.0, 1.0], cloneable across threads
#[derive(Debug, Clone)]
pub struct Volume(Arc<AtomicU32>);

impl Volume {
    pub fn new(level: f32) -> Self {
        Self(Arc::new(AtomicU32::new(clamp(level).to_bits())))
    }

    /// Current level
    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, level: f32) {
        self.0.store(clamp(level).to_bits(), Ordering::Relaxed);
    }

    /// Move the level by whole steps and return the new value
    pub fn step(&self, steps: i32) -> f32 {
        let level = clamp(self.get() + steps as f32 * VOLUME_STEP);
        self.set(level);
        level
    }

    /// True when the level sits at the mute floor
    pub fn is_muted(&self) -> bool {
        self.get() <= MUTE_FLOOR
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(INITIAL_VOLUME)
    }
}

fn clamp(level: f32) -> f32 {
    level.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_to_unit_range() {
        let volume = Volume::new(2.0);
        assert_eq!(volume.get(), 1.0);
        volume.set(-0.5);
        assert_eq!(volume.get(), 0.0);
    }

    #[test]
    fn test_stepping() {
        let volume = Volume::new(0.25);
        assert!((volume.step(1) - 0.35).abs() < 1e-6);
        assert!((volume.step(-2) - 0.15).abs() < 1e-6);
        // Steps saturate at the bounds
        assert_eq!(volume.step(100), 1.0);
        assert_eq!(volume.step(-100), 0.0);
    }

    #[test]
    fn test_mute_floor() {
        let volume = Volume::new(0.0);
        assert!(volume.is_muted());
        volume.set(0.25);
        assert!(!volume.is_muted());
    }

    #[test]
    fn test_clones_share_state() {
        let volume = Volume::default();
        let reader = volume.clone();
        volume.set(0.8);
        assert_eq!(reader.get(), 0.8);
    }
}
