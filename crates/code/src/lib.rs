//! CW Trainer Code - Morse symbol primitives and the static character table
//!
//! This crate provides the dot/dash symbol type and the fixed bidirectional
//! mapping between characters (A-Z, 0-9) and Morse sequences.

pub mod symbol;
pub mod table;

pub use symbol::{symbols_to_string, Symbol, MAX_CODE_LEN};
pub use table::{lookup_character, lookup_code, CodeEntry, MORSE_TABLE};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::symbol::{symbols_to_string, Symbol, MAX_CODE_LEN};
    pub use crate::table::{lookup_character, lookup_code, CodeEntry};
}
