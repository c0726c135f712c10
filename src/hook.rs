//! Ownership of the global input hook.
//!
//! [`install`] starts a [`KeySource`] on a dedicated listener thread and
//! returns the single [`HookHandle`] for it. Presses travel from the
//! listener thread to the handle over an unbounded channel, so the callback
//! passed to [`HookHandle::run`] sees them one at a time and in order.

use crate::error::{ReporterError, Result};
use crate::key::KeyIdentity;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc;
use tracing::{debug, info};

const LISTENER_THREAD: &str = "key-hook";

/// What a press callback asks the hook to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Stop,
}

/// A platform facility that observes key presses system-wide.
pub trait KeySource: Send + 'static {
    /// Blocks on the listener thread, handing every press to `sink`.
    ///
    /// Returning ends the hook. An error here is reported from
    /// [`HookHandle::run`].
    fn listen(self, sink: KeySink) -> Result<()>;
}

/// The listener thread's end of the hook.
#[derive(Clone)]
pub struct KeySink {
    tx: mpsc::UnboundedSender<KeyIdentity>,
    running: Arc<AtomicBool>,
}

impl KeySink {
    pub fn is_listening(&self) -> bool {
        self.running.load(Ordering::Acquire) && !self.tx.is_closed()
    }

    /// Forwards a press. Returns `false` once the hook has been stopped.
    pub fn deliver(&self, key: KeyIdentity) -> bool {
        if !self.is_listening() {
            return false;
        }
        self.tx.send(key).is_ok()
    }
}

/// Owned handle to an installed hook.
///
/// Stopped exactly once, either through [`HookHandle::stop`] or on drop.
pub struct HookHandle {
    rx: mpsc::UnboundedReceiver<KeyIdentity>,
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<Result<()>>>,
}

/// Installs `source` and starts listening.
pub fn install<S: KeySource>(source: S) -> Result<HookHandle> {
    let (tx, rx) = mpsc::unbounded_channel();
    let running = Arc::new(AtomicBool::new(true));
    let sink = KeySink {
        tx,
        running: running.clone(),
    };

    let thread = thread::Builder::new()
        .name(LISTENER_THREAD.to_string())
        .spawn(move || source.listen(sink))?;

    info!(thread = LISTENER_THREAD, "input hook installed");

    Ok(HookHandle {
        rx,
        running,
        thread: Some(thread),
    })
}

impl HookHandle {
    pub fn is_listening(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Feeds presses to `callback` until it returns [`Signal::Stop`] or
    /// fails, or until the source ends by itself.
    pub async fn run<F>(&mut self, mut callback: F) -> Result<()>
    where
        F: FnMut(&KeyIdentity) -> Result<Signal>,
    {
        while self.is_listening() {
            let Some(key) = self.rx.recv().await else {
                debug!("key source closed its end of the hook");
                self.stop();
                return self.join().await;
            };

            match callback(&key) {
                Ok(Signal::Continue) => {}
                Ok(Signal::Stop) => {
                    self.stop();
                    return Ok(());
                }
                Err(e) => {
                    self.stop();
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    /// Deregisters the hook. Presses already queued are discarded.
    ///
    /// The listener thread is not joined: a platform listen loop may never
    /// return, and it ends with the process.
    pub fn stop(&mut self) {
        if self.running.swap(false, Ordering::AcqRel) {
            self.rx.close();
            info!("input hook stopped");
        }
    }

    async fn join(&mut self) -> Result<()> {
        let Some(handle) = self.thread.take() else {
            return Ok(());
        };

        tokio::task::spawn_blocking(move || handle.join())
            .await
            .map_err(|_| ReporterError::hook_thread(LISTENER_THREAD))?
            .map_err(|_| ReporterError::hook_thread(LISTENER_THREAD))?
    }
}

impl Drop for HookHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
