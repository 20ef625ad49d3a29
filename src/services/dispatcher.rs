//! Single-flight classification on the designated context.
//!
//! Each surface carries a [`Flight`]: a phase guarded by a mutex plus a
//! condition variable raised when the phase reaches `Done`. The first
//! caller to see `Unstarted` either runs the classification inline (when
//! already on the designated context) or queues it there and waits. Every
//! other caller waits on the same condition variable.
//!
//! ```text
//! Unstarted ──inline──────────────▶ Running ──▶ Done
//!     │                               ▲
//!     └──post──▶ Queued ──task/claim──┘
//! ```
//!
//! The classification is committed to the surface cache before the phase
//! becomes `Done`, so every released waiter reads the final value.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use super::context::{panic_message, DesignatedContext};
use super::scanner::ElementTreeScanner;
use super::surface::Surface;
use crate::error::{ClassifyError, DispatchError};
use crate::models::{Classification, ColorPolicy};

/// Where a surface's classification stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Unstarted,
    /// Posted to the designated context, not yet picked up
    Queued,
    /// Executing on the designated context
    Running,
    Done,
}

#[derive(Debug)]
pub(crate) struct Flight {
    phase: Mutex<FlightPhase>,
    done: Condvar,
}

impl Flight {
    pub(crate) fn new() -> Self {
        Self {
            phase: Mutex::new(FlightPhase::Unstarted),
            done: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FlightPhase> {
        self.phase.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Flight lock poisoned, continuing with last state");
            PoisonError::into_inner(poisoned)
        })
    }

    pub(crate) fn phase(&self) -> FlightPhase {
        *self.lock()
    }

    /// Move `Queued` to `Running`. False when another caller got there first.
    fn claim_queued(&self) -> bool {
        let mut phase = self.lock();
        if *phase == FlightPhase::Queued {
            *phase = FlightPhase::Running;
            true
        } else {
            false
        }
    }

    fn finish(&self) {
        let mut phase = self.lock();
        *phase = FlightPhase::Done;
        self.done.notify_all();
    }

    fn wait_done(&self, timeout: Duration) -> Result<(), DispatchError> {
        let deadline = Instant::now() + timeout;
        let mut phase = self
            .phase
            .lock()
            .map_err(|e| DispatchError::Interrupted(e.to_string()))?;

        while *phase != FlightPhase::Done {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(DispatchError::Timeout(timeout));
            }
            let (guard, _) = self
                .done
                .wait_timeout(phase, remaining)
                .map_err(|e| DispatchError::Interrupted(e.to_string()))?;
            phase = guard;
        }
        Ok(())
    }
}

/// Runs each surface's classification exactly once, on the designated
/// context, and hands the result to every caller.
#[derive(Clone)]
pub struct Dispatcher {
    context: Arc<DesignatedContext>,
    policy: Arc<ColorPolicy>,
    wait_timeout: Duration,
}

impl Dispatcher {
    pub fn new(
        context: Arc<DesignatedContext>,
        policy: Arc<ColorPolicy>,
        wait_timeout: Duration,
    ) -> Self {
        Self {
            context,
            policy,
            wait_timeout,
        }
    }

    pub fn context(&self) -> &Arc<DesignatedContext> {
        &self.context
    }

    pub fn policy(&self) -> &ColorPolicy {
        &self.policy
    }

    /// Make sure the surface is classified and return the classification.
    ///
    /// Blocks while the classification is queued or running elsewhere. When
    /// no committed classification is available afterwards (wait timed out,
    /// or a reentrant call from inside the running classification), returns
    /// [`Classification::undetermined`] without storing it.
    pub fn ensure_computed(&self, surface: &Surface) -> Classification {
        if let Some(classification) = surface.cache().classification() {
            return classification;
        }

        let on_context = self.context.is_current();
        let mut phase = surface.flight().lock();
        let current = *phase;

        match current {
            FlightPhase::Done => drop(phase),
            FlightPhase::Unstarted if on_context => {
                *phase = FlightPhase::Running;
                drop(phase);
                tracing::debug!(surface = %surface.id(), "Classifying inline on designated context");
                run_flight(surface, &self.policy);
            }
            FlightPhase::Unstarted => {
                *phase = FlightPhase::Queued;
                drop(phase);
                tracing::debug!(
                    surface = %surface.id(),
                    context = %self.context.name(),
                    "Posting classification to designated context"
                );
                let task = QueuedFlight::new(surface.clone(), self.policy.clone());
                if let Err(e) = self.context.post(move || task.run()) {
                    // The unrun task has been dropped, which abandons the flight.
                    tracing::warn!(surface = %surface.id(), error = %e, "Could not post classification");
                }
                self.wait(surface);
            }
            FlightPhase::Queued if on_context => {
                *phase = FlightPhase::Running;
                drop(phase);
                tracing::debug!(surface = %surface.id(), "Claiming queued classification inline");
                run_flight(surface, &self.policy);
            }
            FlightPhase::Running if on_context => {
                drop(phase);
                tracing::debug!(
                    surface = %surface.id(),
                    "Reentrant request during classification, returning current state"
                );
            }
            FlightPhase::Queued | FlightPhase::Running => {
                drop(phase);
                self.wait(surface);
            }
        }

        surface
            .cache()
            .classification()
            .unwrap_or_else(Classification::undetermined)
    }

    /// [`ensure_computed`](Self::ensure_computed) for async callers.
    ///
    /// Uses spawn_blocking so waiting on the designated context never
    /// blocks the async runtime.
    pub async fn ensure_computed_async(&self, surface: &Surface) -> Classification {
        let dispatcher = self.clone();
        let surface = surface.clone();

        tokio::task::spawn_blocking(move || dispatcher.ensure_computed(&surface))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Classification task failed");
                Classification::undetermined()
            })
    }

    fn wait(&self, surface: &Surface) {
        if let Err(e) = surface.flight().wait_done(self.wait_timeout) {
            tracing::warn!(
                surface = %surface.id(),
                error = %e,
                "Proceeding without a committed classification"
            );
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("context", &self.context.name())
            .field("wait_timeout", &self.wait_timeout)
            .finish()
    }
}

/// A classification posted to the designated context.
///
/// Dropped without running (context closed or gone), it commits the
/// undetermined classification so waiters are released.
struct QueuedFlight {
    surface: Surface,
    policy: Arc<ColorPolicy>,
    started: bool,
}

impl QueuedFlight {
    fn new(surface: Surface, policy: Arc<ColorPolicy>) -> Self {
        Self {
            surface,
            policy,
            started: false,
        }
    }

    fn run(mut self) {
        self.started = true;
        if self.surface.flight().claim_queued() {
            run_flight(&self.surface, &self.policy);
        } else {
            tracing::trace!(surface = %self.surface.id(), "Queued classification already claimed");
        }
    }
}

impl Drop for QueuedFlight {
    fn drop(&mut self) {
        if self.started {
            return;
        }
        let flight = self.surface.flight();
        let mut phase = flight.lock();
        if *phase == FlightPhase::Queued {
            tracing::warn!(
                surface = %self.surface.id(),
                "Classification dropped before it ran, using undetermined result"
            );
            self.surface.cache().commit(Classification::undetermined());
            *phase = FlightPhase::Done;
            flight.done.notify_all();
        }
    }
}

/// Classify, commit, release waiters. The phase must already be `Running`.
fn run_flight(surface: &Surface, policy: &ColorPolicy) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| classify_surface(surface, policy)))
        .unwrap_or_else(|payload| Err(ClassifyError::Panicked(panic_message(payload.as_ref()))));

    let classification = match outcome {
        Ok(classification) => {
            tracing::info!(
                surface = %surface.id(),
                dark_background = classification.dark_background,
                title = ?classification.title.color(),
                content = ?classification.content.color(),
                "Surface classified"
            );
            classification
        }
        Err(e) => {
            tracing::warn!(
                surface = %surface.id(),
                error = %e,
                "Classification failed, using undetermined result"
            );
            Classification::undetermined()
        }
    };

    if !surface.cache().commit(classification) {
        tracing::debug!(surface = %surface.id(), "Classification already committed");
    }
    surface.flight().finish();
}

fn classify_surface(surface: &Surface, policy: &ColorPolicy) -> Result<Classification, ClassifyError> {
    let tree = surface
        .source()
        .render_tree()?
        .ok_or(ClassifyError::TreeUnavailable)?;

    let found = ElementTreeScanner::from_policy(policy).scan(Some(&tree))?;
    if found.title.is_none() {
        tracing::debug!(surface = %surface.id(), "No title label found, classification undetermined");
    }
    Ok(found.classify(policy))
}
