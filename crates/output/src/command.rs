//! Playback commands carried from producers to the output worker

/// A single playback request
///
/// Created by a producer, consumed exactly once by the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// One short element
    Dot,
    /// One long element
    Dash,
    /// A full character; the worker decomposes it via the code table
    Character(char),
}
