//! The designated context: one named thread that owns surfaces and is the
//! only place their trees may be rendered.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::{Mutex, PoisonError};
use std::thread::{self, JoinHandle, ThreadId};

use crate::error::DispatchError;

type Task = Box<dyn FnOnce() + Send + 'static>;

/// A single-threaded executor draining a FIFO task queue.
///
/// Dropping the context closes the queue; tasks already queued still run
/// before the thread exits.
pub struct DesignatedContext {
    name: String,
    thread_id: ThreadId,
    sender: Mutex<Option<mpsc::Sender<Task>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl DesignatedContext {
    /// Start the context thread.
    pub fn spawn(name: impl Into<String>) -> std::io::Result<Self> {
        let name = name.into();
        let (sender, receiver) = mpsc::channel::<Task>();

        let thread_name = name.clone();
        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || run_loop(&thread_name, receiver))?;

        tracing::debug!(context = %name, "Designated context started");

        Ok(Self {
            name,
            thread_id: handle.thread().id(),
            sender: Mutex::new(Some(sender)),
            handle: Mutex::new(Some(handle)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when called from the context thread itself.
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.thread_id
    }

    /// Queue a task. Fails once the context has been shut down; the task is
    /// dropped unrun in that case.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) -> Result<(), DispatchError> {
        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        match sender.as_ref() {
            Some(sender) => sender
                .send(Box::new(task))
                .map_err(|_| DispatchError::ContextClosed),
            None => Err(DispatchError::ContextClosed),
        }
    }

    /// Run `f` on the context and wait for its result. Runs inline when
    /// already on the context.
    pub fn invoke<R, F>(&self, f: F) -> Result<R, DispatchError>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        if self.is_current() {
            return Ok(f());
        }

        let (tx, rx) = mpsc::sync_channel(1);
        self.post(move || {
            let _ = tx.send(f());
        })?;
        // A panic in `f` drops `tx` without sending.
        rx.recv().map_err(|_| DispatchError::ContextClosed)
    }

    /// Close the queue and wait for the thread to drain it.
    ///
    /// Calling this from the context itself only closes the queue.
    pub fn shutdown(&self) {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if sender.is_none() {
            return;
        }
        drop(sender);

        if self.is_current() {
            return;
        }

        let handle = self
            .handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                tracing::warn!(context = %self.name, "Designated context thread panicked");
            }
        }
        tracing::debug!(context = %self.name, "Designated context stopped");
    }
}

impl Drop for DesignatedContext {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for DesignatedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignatedContext")
            .field("name", &self.name)
            .field("thread_id", &self.thread_id)
            .finish()
    }
}

fn run_loop(name: &str, receiver: mpsc::Receiver<Task>) {
    while let Ok(task) = receiver.recv() {
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
            tracing::warn!(
                context = %name,
                panic = %panic_message(payload.as_ref()),
                "Task panicked on designated context"
            );
        }
    }
}

/// Best-effort text of a panic payload
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
