//! Static international Morse table for A-Z and 0-9
//!
//! The table is a plain array scanned linearly; at 36 entries this is
//! cheaper and more predictable than a map, and lookups stay tie-break
//! free because no two entries share a sequence.

use crate::symbol::Symbol::{self, Dash, Dot};

/// One character-to-sequence mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub character: char,
    pub symbols: &'static [Symbol],
}

/// International Morse mappings, letters then digits
pub static MORSE_TABLE: [CodeEntry; 36] = [
    CodeEntry { character: 'A', symbols: &[Dot, Dash] },
    CodeEntry { character: 'B', symbols: &[Dash, Dot, Dot, Dot] },
    CodeEntry { character: 'C', symbols: &[Dash, Dot, Dash, Dot] },
    CodeEntry { character: 'D', symbols: &[Dash, Dot, Dot] },
    CodeEntry { character: 'E', symbols: &[Dot] },
    CodeEntry { character: 'F', symbols: &[Dot, Dot, Dash, Dot] },
    CodeEntry { character: 'G', symbols: &[Dash, Dash, Dot] },
    CodeEntry { character: 'H', symbols: &[Dot, Dot, Dot, Dot] },
    CodeEntry { character: 'I', symbols: &[Dot, Dot] },
    CodeEntry { character: 'J', symbols: &[Dot, Dash, Dash, Dash] },
    CodeEntry { character: 'K', symbols: &[Dash, Dot, Dash] },
    CodeEntry { character: 'L', symbols: &[Dot, Dash, Dot, Dot] },
    CodeEntry { character: 'M', symbols: &[Dash, Dash] },
    CodeEntry { character: 'N', symbols: &[Dash, Dot] },
    CodeEntry { character: 'O', symbols: &[Dash, Dash, Dash] },
    CodeEntry { character: 'P', symbols: &[Dot, Dash, Dash, Dot] },
    CodeEntry { character: 'Q', symbols: &[Dash, Dash, Dot, Dash] },
    CodeEntry { character: 'R', symbols: &[Dot, Dash, Dot] },
    CodeEntry { character: 'S', symbols: &[Dot, Dot, Dot] },
    CodeEntry { character: 'T', symbols: &[Dash] },
    CodeEntry { character: 'U', symbols: &[Dot, Dot, Dash] },
    CodeEntry { character: 'V', symbols: &[Dot, Dot, Dot, Dash] },
    CodeEntry { character: 'W', symbols: &[Dot, Dash, Dash] },
    CodeEntry { character: 'X', symbols: &[Dash, Dot, Dot, Dash] },
    CodeEntry { character: 'Y', symbols: &[Dash, Dot, Dash, Dash] },
    CodeEntry { character: 'Z', symbols: &[Dash, Dash, Dot, Dot] },
    CodeEntry { character: '0', symbols: &[Dash, Dash, Dash, Dash, Dash] },
    CodeEntry { character: '1', symbols: &[Dot, Dash, Dash, Dash, Dash] },
    CodeEntry { character: '2', symbols: &[Dot, Dot, Dash, Dash, Dash] },
    CodeEntry { character: '3', symbols: &[Dot, Dot, Dot, Dash, Dash] },
    CodeEntry { character: '4', symbols: &[Dot, Dot, Dot, Dot, Dash] },
    CodeEntry { character: '5', symbols: &[Dot, Dot, Dot, Dot, Dot] },
    CodeEntry { character: '6', symbols: &[Dash, Dot, Dot, Dot, Dot] },
    CodeEntry { character: '7', symbols: &[Dash, Dash, Dot, Dot, Dot] },
    CodeEntry { character: '8', symbols: &[Dash, Dash, Dash, Dot, Dot] },
    CodeEntry { character: '9', symbols: &[Dash, Dash, Dash, Dash, Dot] },
];

/// Look up the code for a character, case-insensitively.
///
/// Returns `None` for anything outside A-Z and 0-9.
pub fn lookup_code(character: char) -> Option<&'static [Symbol]> {
    let upper = character.to_ascii_uppercase();
    MORSE_TABLE
        .iter()
        .find(|entry| entry.character == upper)
        .map(|entry| entry.symbols)
}

/// Look up the character for a symbol sequence.
///
/// Exact match only; `None` is the "unknown sequence" outcome.
pub fn lookup_character(symbols: &[Symbol]) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|entry| entry.symbols == symbols)
        .map(|entry| entry.character)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::MAX_CODE_LEN;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    #[derive(Debug, Clone, Copy)]
    struct AnySymbol(Symbol);

    impl Arbitrary for AnySymbol {
        fn arbitrary(g: &mut Gen) -> Self {
            AnySymbol(*g.choose(&[Dot, Dash]).unwrap())
        }
    }

    #[test]
    fn test_round_trip_all_characters() {
        for entry in MORSE_TABLE.iter() {
            let code = lookup_code(entry.character).unwrap();
            assert_eq!(lookup_character(code), Some(entry.character));
        }
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(lookup_code('a'), lookup_code('A'));
        assert_eq!(lookup_code('z'), lookup_code('Z'));
    }

    #[test]
    fn test_unsupported_characters() {
        assert_eq!(lookup_code('?'), None);
        assert_eq!(lookup_code(' '), None);
        assert_eq!(lookup_code('é'), None);
    }

    #[test]
    fn test_unknown_sequences() {
        assert_eq!(lookup_character(&[]), None);
        assert_eq!(lookup_character(&[Dot, Dot, Dash, Dash]), None);
        assert_eq!(lookup_character(&[Dash; 6]), None);
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(MORSE_TABLE.len(), 36);
        for entry in MORSE_TABLE.iter() {
            assert!(!entry.symbols.is_empty());
            assert!(entry.symbols.len() <= MAX_CODE_LEN);
        }
    }

    #[test]
    fn test_injective_mapping() {
        for (i, a) in MORSE_TABLE.iter().enumerate() {
            for b in MORSE_TABLE.iter().skip(i + 1) {
                assert_ne!(a.character, b.character);
                assert_ne!(a.symbols, b.symbols, "{} and {} share a code", a.character, b.character);
            }
        }
    }

    #[quickcheck]
    fn prop_lookup_never_wrong(symbols: Vec<AnySymbol>) -> bool {
        let symbols: Vec<Symbol> = symbols.into_iter().map(|s| s.0).collect();
        match lookup_character(&symbols) {
            Some(c) => lookup_code(c) == Some(&symbols[..]),
            None => !MORSE_TABLE.iter().any(|e| e.symbols == symbols),
        }
    }
}
