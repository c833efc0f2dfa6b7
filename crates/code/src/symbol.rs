//! Morse symbol primitives

/// Longest code sequence in the table (the digits)
pub const MAX_CODE_LEN: usize = 5;

/// A single Morse element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short element
    Dot,
    /// Long element
    Dash,
}

impl Symbol {
    /// Glyph used when rendering a sequence as text
    pub const fn glyph(&self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }

    /// Tone length relative to a dot (the trainer keys a 1:2 ratio)
    pub const fn duration_units(&self) -> u32 {
        match self {
            Symbol::Dot => 1,
            Symbol::Dash => 2,
        }
    }

    /// Parse a single glyph back into a symbol
    pub fn from_glyph(c: char) -> Option<Symbol> {
        match c {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }
}

/// Render a symbol sequence as a ".-" style string
pub fn symbols_to_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(Symbol::glyph).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_round_trip() {
        for symbol in [Symbol::Dot, Symbol::Dash] {
            assert_eq!(Symbol::from_glyph(symbol.glyph()), Some(symbol));
        }
        assert_eq!(Symbol::from_glyph('x'), None);
    }

    #[test]
    fn test_sequence_rendering() {
        let code = [Symbol::Dot, Symbol::Dash, Symbol::Dot];
        assert_eq!(symbols_to_string(&code), ".-.");
        assert_eq!(symbols_to_string(&[]), "");
    }

    #[test]
    fn test_duration_ratio() {
        assert_eq!(Symbol::Dash.duration_units(), 2 * Symbol::Dot.duration_units());
    }
}
