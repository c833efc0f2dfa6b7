//! Output worker thread
//!
//! Drains the playback queue and realizes each command as a timed tone
//! plus a synchronized visual pulse. The worker owns the sinks exclusively
//! while playing; the only state shared with the UI context is the queue
//! and the volume handle, which is read at tone start.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::RecvTimeoutError;
use tracing::{debug, warn};

use cwtrainer_code::{lookup_code, Symbol};

use crate::command::PlaybackCommand;
use crate::error::Result;
use crate::queue::CommandReceiver;
use crate::sink::{Pulse, PulseSink, ToneSink};
use crate::timing::Timing;
use crate::volume::Volume;

/// Bounded dequeue wait; the shutdown flag is observed within one interval
const DEQUEUE_WAIT: Duration = Duration::from_millis(100);

/// Handle to a running output worker.
///
/// Dropping the handle signals shutdown and joins the thread, so the
/// sinks are never used after the owner has torn down.
pub struct WorkerHandle {
    shutdown: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Signal the worker and block until it has finished its last element
    pub fn shutdown(mut self) {
        self.signal_and_join();
    }

    fn signal_and_join(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                warn!("output worker panicked");
            }
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.signal_and_join();
    }
}

/// Spawn the output worker on its own thread
pub fn spawn_worker(
    receiver: CommandReceiver,
    timing: Timing,
    volume: Volume,
    tone: Box<dyn ToneSink>,
    pulse: Box<dyn PulseSink>,
) -> Result<WorkerHandle> {
    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    let thread = thread::Builder::new()
        .name("cwt-output".to_string())
        .spawn(move || worker_loop(receiver, timing, volume, tone, pulse, flag))?;
    Ok(WorkerHandle {
        shutdown,
        thread: Some(thread),
    })
}

fn worker_loop(
    receiver: CommandReceiver,
    timing: Timing,
    volume: Volume,
    mut tone: Box<dyn ToneSink>,
    mut pulse: Box<dyn PulseSink>,
    shutdown: Arc<AtomicBool>,
) {
    while !shutdown.load(Ordering::Relaxed) {
        match receiver.rx.recv_timeout(DEQUEUE_WAIT) {
            Ok(command) => {
                play_command(command, &timing, &volume, tone.as_mut(), pulse.as_mut())
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

fn play_command(
    command: PlaybackCommand,
    timing: &Timing,
    volume: &Volume,
    tone: &mut dyn ToneSink,
    pulse: &mut dyn PulseSink,
) {
    match command {
        PlaybackCommand::Dot => play_element(Symbol::Dot, timing, volume, tone, pulse),
        PlaybackCommand::Dash => play_element(Symbol::Dash, timing, volume, tone, pulse),
        PlaybackCommand::Character(c) => match lookup_code(c) {
            Some(symbols) => {
                // Full-character playback uses the same per-symbol timing
                // and gaps as manual keying
                for symbol in symbols {
                    play_element(*symbol, timing, volume, tone, pulse);
                }
            }
            None => debug!(character = %c, "no code for character, skipping playback"),
        },
    }
}

fn play_element(
    symbol: Symbol,
    timing: &Timing,
    volume: &Volume,
    tone: &mut dyn ToneSink,
    pulse: &mut dyn PulseSink,
) {
    let duration = timing.symbol_tone(symbol);
    let kind = pulse_for(symbol);
    // Read the level now, not at enqueue time
    let level = volume.get();

    if volume.is_muted() {
        // Silent mode keeps the pulse and the timing so visual-only
        // practice stays in sync
        pulse.set(kind);
        thread::sleep(duration);
        pulse.reset(kind);
    } else {
        match tone.acquire() {
            Ok(()) => {
                tone.start(timing.tone_hz, level);
                pulse.set(kind);
                thread::sleep(duration);
                tone.stop();
                pulse.reset(kind);
            }
            Err(err) => {
                debug!(%err, "tone channel unavailable, skipping element audio");
                thread::sleep(duration);
            }
        }
        tone.release();
    }

    thread::sleep(timing.element_gap());
}

const fn pulse_for(symbol: Symbol) -> Pulse {
    match symbol {
        Symbol::Dot => Pulse::Dot,
        Symbol::Dash => Pulse::Dash,
    }
}
