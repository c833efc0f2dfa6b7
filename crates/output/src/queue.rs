//! Bounded playback command queue
//!
//! Strict FIFO between the UI context and the output worker. Enqueueing is
//! best-effort: a full queue drops the new command so rapid input degrades
//! audio feedback instead of stalling the state machine.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use tracing::debug;

use crate::command::PlaybackCommand;

/// Default queue capacity; commands arrive at human key rates
pub const QUEUE_CAPACITY: usize = 8;

/// Create a bounded command queue
pub fn command_queue(capacity: usize) -> (CommandSender, CommandReceiver) {
    let (tx, rx) = bounded(capacity);
    (CommandSender { tx }, CommandReceiver { rx })
}

/// Producer half of the queue, cloneable across producers
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<PlaybackCommand>,
}

impl CommandSender {
    /// Enqueue a command without blocking.
    ///
    /// Returns false when the command was dropped, either because the
    /// queue is saturated or because the worker is gone. Neither case is
    /// an error for the caller.
    pub fn send(&self, command: PlaybackCommand) -> bool {
        match self.tx.try_send(command) {
            Ok(()) => true,
            Err(TrySendError::Full(cmd)) => {
                debug!(?cmd, "playback queue saturated, dropping command");
                false
            }
            Err(TrySendError::Disconnected(cmd)) => {
                debug!(?cmd, "output worker stopped, dropping command");
                false
            }
        }
    }
}

/// Consumer half of the queue, owned by the worker
#[derive(Debug)]
pub struct CommandReceiver {
    pub(crate) rx: Receiver<PlaybackCommand>,
}

impl CommandReceiver {
    /// Take the next command if one is waiting
    pub fn try_recv(&self) -> Option<PlaybackCommand> {
        self.rx.try_recv().ok()
    }
}
