//! CW Trainer Tools - CLI front ends for the trainer core
//!
//! `cwt-practice` runs an interactive practice loop on the terminal;
//! `cwt-synth` renders text to a WAV file with the trainer's timing.

pub mod config;
pub mod practice;
pub mod terminal;
pub mod wav;
