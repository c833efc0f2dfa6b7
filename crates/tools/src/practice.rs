//! Interactive practice loop
//!
//! A reader thread feeds stdin lines into a channel; the main loop drains
//! it with a bounded wait and polls the session on every tick, so
//! pause-based decoding fires even when the user goes quiet.

use std::io::{self, BufRead};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossbeam_channel::{unbounded, RecvTimeoutError};
use tracing::warn;

use cwtrainer_code::Symbol;
use cwtrainer_engine::session::{InputOutcome, PracticeSession};
use cwtrainer_output::sink::Pulse;

use crate::terminal;

/// Tick interval for the poll/render loop
const TICK: Duration = Duration::from_millis(50);

/// Display options for the practice loop
#[derive(Debug, Clone, Copy, Default)]
pub struct PracticeOpts {
    /// Emit session snapshots as JSON lines instead of plain text
    pub json: bool,
}

/// What one line of input asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    /// Dots and dashes to key
    Symbols(Vec<Symbol>),
    Clear,
    VolumeUp,
    VolumeDown,
    /// Characters to play back in learning mode
    Play(Vec<char>),
    Help,
    Quit,
    Empty,
}

/// Parse one line of practice input.
///
/// A line of '.'/'-' (spaces ignored) keys symbols; "v+"/"v-" adjust the
/// volume; "p TEXT" queues learning-mode playback; "c" clears; "q" quits.
/// Anything else shows the help.
pub fn parse_line(line: &str) -> LineAction {
    let trimmed = line.trim();
    match trimmed {
        "" => return LineAction::Empty,
        "q" | "quit" => return LineAction::Quit,
        "c" | "clear" => return LineAction::Clear,
        "v+" => return LineAction::VolumeUp,
        "v-" => return LineAction::VolumeDown,
        _ => {}
    }

    if let Some(rest) = trimmed.strip_prefix("p ").or_else(|| trimmed.strip_prefix("play ")) {
        let characters: Vec<char> = rest.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        return LineAction::Play(characters);
    }

    if trimmed.chars().all(|c| matches!(c, '.' | '-' | ' ')) {
        let symbols = trimmed.chars().filter_map(Symbol::from_glyph).collect();
        return LineAction::Symbols(symbols);
    }

    LineAction::Help
}

/// Run the practice loop until the user quits or stdin closes
pub fn run(mut session: PracticeSession, opts: PracticeOpts) -> Result<()> {
    let (line_tx, line_rx) = unbounded();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    print_help();
    render(&session, opts);

    loop {
        match line_rx.recv_timeout(TICK) {
            Ok(line) => match parse_line(&line) {
                LineAction::Quit => break,
                LineAction::Empty => {}
                LineAction::Help => print_help(),
                LineAction::Clear => {
                    session.on_clear();
                    render(&session, opts);
                }
                LineAction::VolumeUp => {
                    let level = session.on_volume_delta(1);
                    println!("volume: {:.0}%", level * 100.0);
                }
                LineAction::VolumeDown => {
                    let level = session.on_volume_delta(-1);
                    println!("volume: {:.0}%", level * 100.0);
                }
                LineAction::Play(characters) => {
                    for character in characters {
                        session.on_learn_play(character);
                    }
                }
                LineAction::Symbols(symbols) => {
                    for symbol in symbols {
                        let outcome = session.on_symbol_input(symbol, Instant::now());
                        if outcome == InputOutcome::Overflow {
                            println!(
                                "{} input cleared (too many symbols)",
                                terminal::marker(Pulse::Alert)
                            );
                        }
                    }
                    render(&session, opts);
                }
            },
            Err(RecvTimeoutError::Timeout) => {
                // Decode is time-based, so poll on idle ticks too
                if session.poll(Instant::now()).is_some() {
                    render(&session, opts);
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn render(session: &PracticeSession, opts: PracticeOpts) {
    let snapshot = session.snapshot();
    if opts.json {
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{}", line),
            Err(err) => warn!(%err, "snapshot serialization failed"),
        }
    } else {
        println!(
            "text: [{}]  current: [{}]  decoded: [{}]  vol: {:.0}%",
            snapshot.decoded_text,
            snapshot.pending_code,
            snapshot.last_decode,
            snapshot.volume * 100.0
        );
    }
}

fn print_help() {
    println!("Practice input:");
    println!("  . and -       key dots and dashes (pause to decode)");
    println!("  c / clear     clear input and decoded text");
    println!("  v+ / v-       adjust volume");
    println!("  p TEXT        play TEXT as Morse (learning mode)");
    println!("  q / quit      exit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwtrainer_code::Symbol::{Dash, Dot};

    #[test]
    fn test_parse_symbols() {
        assert_eq!(
            parse_line("..- -"),
            LineAction::Symbols(vec![Dot, Dot, Dash, Dash])
        );
        assert_eq!(parse_line("   "), LineAction::Empty);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("q"), LineAction::Quit);
        assert_eq!(parse_line("quit"), LineAction::Quit);
        assert_eq!(parse_line("c"), LineAction::Clear);
        assert_eq!(parse_line("v+"), LineAction::VolumeUp);
        assert_eq!(parse_line("v-"), LineAction::VolumeDown);
    }

    #[test]
    fn test_parse_play() {
        assert_eq!(parse_line("p sos"), LineAction::Play(vec!['s', 'o', 's']));
        assert_eq!(parse_line("play A1"), LineAction::Play(vec!['A', '1']));
        // Non-alphanumerics are filtered out
        assert_eq!(parse_line("p s!s"), LineAction::Play(vec!['s', 's']));
    }

    #[test]
    fn test_unrecognized_shows_help() {
        assert_eq!(parse_line("xyzzy"), LineAction::Help);
    }
}
