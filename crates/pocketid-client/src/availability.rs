//! One-time availability gate for the upstream instance.
//!
//! The first caller triggers a health probe; callers arriving while it is
//! in flight attach to the same shared future instead of issuing their
//! own. Success is memoized for the lifetime of the gate, failure clears
//! the state so the next caller re-probes.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;

use crate::error::{Error, Result};

type ProbeHandle = Shared<BoxFuture<'static, std::result::Result<(), Arc<Error>>>>;

enum GateState {
    Unchecked,
    Checking(ProbeHandle),
    Available,
}

/// Tracks whether the upstream instance has been verified reachable.
///
/// There is no terminal "unavailable" state: a failed probe resets the
/// gate, so failure is always retryable on the next call.
#[derive(Default)]
pub struct AvailabilityGate {
    state: Mutex<GateState>,
}

impl Default for GateState {
    fn default() -> Self {
        GateState::Unchecked
    }
}

impl std::fmt::Debug for AvailabilityGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &*self.lock() {
            GateState::Unchecked => "unchecked",
            GateState::Checking(_) => "checking",
            GateState::Available => "available",
        };
        f.debug_struct("AvailabilityGate")
            .field("state", &state)
            .finish()
    }
}

impl AvailabilityGate {
    /// Create a gate in the unchecked state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a probe has already succeeded.
    pub fn is_available(&self) -> bool {
        matches!(*self.lock(), GateState::Available)
    }

    /// Forget any memoized outcome so the next call probes again.
    pub fn reset(&self) {
        *self.lock() = GateState::Unchecked;
    }

    /// Ensure the upstream is available, probing at most once concurrently.
    ///
    /// `probe` is only invoked when no check is in flight and none has
    /// succeeded; otherwise the caller awaits the outcome of the existing
    /// check. All joiners of one probe observe the same result.
    pub async fn ensure<F, Fut>(&self, probe: F) -> Result<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let handle = {
            let mut state = self.lock();
            match &*state {
                GateState::Available => return Ok(()),
                GateState::Checking(handle) => handle.clone(),
                GateState::Unchecked => {
                    let handle = probe().map(|r| r.map_err(Arc::new)).boxed().shared();
                    *state = GateState::Checking(handle.clone());
                    handle
                }
            }
        };

        let outcome = handle.clone().await;

        let mut state = self.lock();
        match outcome {
            Ok(()) => {
                *state = GateState::Available;
                Ok(())
            }
            Err(err) => {
                // Clear the state only if it still belongs to the probe we
                // observed; a newer probe started after the reset must not
                // be clobbered by a late joiner of the failed one.
                if let GateState::Checking(current) = &*state {
                    if current.ptr_eq(&handle) {
                        *state = GateState::Unchecked;
                    }
                }
                Err(Error::new(err.kind.clone()))
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
