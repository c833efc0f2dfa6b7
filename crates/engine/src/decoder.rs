//! Pause-segmented Morse decoder
//!
//! Buffers dot/dash symbols as they are keyed and resolves the buffer into
//! a character once the configured silence has elapsed. Resolution is
//! purely time-based, so `poll` must run on a fixed tick even when no new
//! input arrives. Within one tick the caller appends before polling, which
//! means a press landing exactly on the timeout boundary restarts the
//! pause instead of triggering a premature decode.
//!
//! Timing is full millisecond resolution. The original trainer compared
//! whole seconds, quantizing decode latency to the next second boundary;
//! that quirk is intentionally not reproduced.

use std::time::{Duration, Instant};

use tracing::trace;

use cwtrainer_code::{lookup_character, symbols_to_string, Symbol, MAX_CODE_LEN};

use crate::error::{EngineError, Result};

/// Default silence after which pending symbols resolve
pub const DEFAULT_DECODE_TIMEOUT: Duration = Duration::from_millis(2000);

/// Outcome of appending one symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Symbol buffered; the pause timer restarted
    Accepted,
    /// The buffer already held the longest code; it has been cleared and
    /// the symbol discarded so the next press starts a fresh character
    Overflow,
}

/// Outcome of a poll that crossed the decode pause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The buffered sequence matched a table entry
    Resolved(char),
    /// No table entry; carries the ".-" rendering of what was keyed
    Unresolved(String),
}

/// Symbol accumulator: Idle until a symbol arrives, accumulating until
/// the decode pause elapses, then resolved and back to Idle.
#[derive(Debug)]
pub struct Decoder {
    pending: Vec<Symbol>,
    last_update: Option<Instant>,
    decode_timeout: Duration,
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(MAX_CODE_LEN),
            last_update: None,
            decode_timeout: DEFAULT_DECODE_TIMEOUT,
        }
    }

    /// Create a decoder with a custom decode pause
    pub fn with_timeout(decode_timeout: Duration) -> Result<Self> {
        if decode_timeout.is_zero() {
            return Err(EngineError::InvalidTimeout {
                ms: decode_timeout.as_millis(),
            });
        }
        Ok(Self {
            decode_timeout,
            ..Self::new()
        })
    }

    /// Buffer one symbol at time `now`.
    pub fn append(&mut self, symbol: Symbol, now: Instant) -> AppendOutcome {
        if self.pending.len() >= MAX_CODE_LEN {
            trace!("pending buffer full, clearing");
            self.pending.clear();
            self.last_update = None;
            return AppendOutcome::Overflow;
        }
        self.pending.push(symbol);
        self.last_update = Some(now);
        AppendOutcome::Accepted
    }

    /// Check whether the decode pause has elapsed and resolve if so.
    ///
    /// Returns `None` while idle or still within the pause.
    pub fn poll(&mut self, now: Instant) -> Option<DecodeOutcome> {
        let last = self.last_update?;
        if self.pending.is_empty() {
            return None;
        }
        if now.saturating_duration_since(last) < self.decode_timeout {
            return None;
        }

        let outcome = match lookup_character(&self.pending) {
            Some(character) => DecodeOutcome::Resolved(character),
            None => DecodeOutcome::Unresolved(symbols_to_string(&self.pending)),
        };
        self.pending.clear();
        self.last_update = None;
        Some(outcome)
    }

    /// Drop any pending symbols and return to idle
    pub fn clear(&mut self) {
        self.pending.clear();
        self.last_update = None;
    }

    /// Pending symbols rendered as a ".-" string
    pub fn pending_code(&self) -> String {
        symbols_to_string(&self.pending)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use cwtrainer_code::Symbol::{Dash, Dot};

    fn after(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn test_three_dots_decode_to_s() {
        let mut decoder = Decoder::new();
        let t0 = Instant::now();
        decoder.append(Dot, t0);
        decoder.append(Dot, after(t0, 200));
        decoder.append(Dot, after(t0, 400));

        assert_eq!(decoder.poll(after(t0, 500)), None);
        assert_eq!(
            decoder.poll(after(t0, 2400)),
            Some(DecodeOutcome::Resolved('S'))
        );
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_three_dashes_decode_to_o() {
        let mut decoder = Decoder::new();
        let t0 = Instant::now();
        for i in 0..3u64 {
            decoder.append(Dash, after(t0, i * 300));
        }
        assert_eq!(
            decoder.poll(after(t0, 3000)),
            Some(DecodeOutcome::Resolved('O'))
        );
    }

    #[test]
    fn test_unknown_sequence_reported_not_dropped() {
        let mut decoder = Decoder::new();
        let t0 = Instant::now();
        decoder.append(Dot, t0);
        decoder.append(Dot, t0);
        decoder.append(Dash, t0);
        decoder.append(Dash, t0);

        assert_eq!(
            decoder.poll(after(t0, 2000)),
            Some(DecodeOutcome::Unresolved("..--".to_string()))
        );
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_append_on_boundary_restarts_pause() {
        let mut decoder = Decoder::new();
        let t0 = Instant::now();
        decoder.append(Dot, t0);
        // A press at exactly the timeout instant counts as more input
        decoder.append(Dash, after(t0, 2000));
        assert_eq!(decoder.poll(after(t0, 2000)), None);
        assert_eq!(
            decoder.poll(after(t0, 4000)),
            Some(DecodeOutcome::Resolved('A'))
        );
    }

    #[test]
    fn test_poll_exactly_at_timeout_resolves() {
        let mut decoder = Decoder::new();
        let t0 = Instant::now();
        decoder.append(Dash, t0);
        assert_eq!(decoder.poll(after(t0, 1999)), None);
        assert_eq!(
            decoder.poll(after(t0, 2000)),
            Some(DecodeOutcome::Resolved('T'))
        );
    }

    #[test]
    fn test_overflow_clears_and_signals_once() {
        let mut decoder = Decoder::new();
        let t0 = Instant::now();
        for _ in 0..MAX_CODE_LEN {
            assert_eq!(decoder.append(Dot, t0), AppendOutcome::Accepted);
        }
        assert_eq!(decoder.append(Dot, t0), AppendOutcome::Overflow);
        assert!(decoder.is_idle());
        // The next press starts a fresh character
        assert_eq!(decoder.append(Dash, t0), AppendOutcome::Accepted);
        assert_eq!(decoder.pending_code(), "-");
    }

    #[test]
    fn test_poll_while_idle_is_none() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.poll(Instant::now()), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut decoder = Decoder::new();
        decoder.append(Dot, Instant::now());
        decoder.clear();
        let after_once = decoder.pending_code();
        decoder.clear();
        assert_eq!(decoder.pending_code(), after_once);
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Decoder::with_timeout(Duration::ZERO).is_err());
        assert!(Decoder::with_timeout(Duration::from_millis(500)).is_ok());
    }

    #[derive(Debug, Clone, Copy)]
    struct AnySymbol(Symbol);

    impl Arbitrary for AnySymbol {
        fn arbitrary(g: &mut Gen) -> Self {
            AnySymbol(*g.choose(&[Dot, Dash]).unwrap())
        }
    }

    #[quickcheck]
    fn prop_pending_never_exceeds_max(symbols: Vec<AnySymbol>) -> bool {
        let mut decoder = Decoder::new();
        let now = Instant::now();
        for AnySymbol(symbol) in symbols {
            decoder.append(symbol, now);
            if decoder.pending_len() > MAX_CODE_LEN {
                return false;
            }
        }
        true
    }
}
