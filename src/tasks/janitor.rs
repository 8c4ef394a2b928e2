//! Janitor Task
//!
//! Background task that periodically purges stale state from a store.

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::{EvictError, Result};

// == Sweep ==
/// A store that can purge its own stale entries in one pass.
pub trait Sweep: Send + Sync + 'static {
    /// Removes every stale item and returns how many were removed.
    fn sweep(&self) -> usize;
}

// == Janitor ==
/// Handle to a running sweep task.
///
/// The task stops when [`Janitor::stop`] is called, when the handle is
/// dropped, or when the swept store itself has been dropped.
#[derive(Debug)]
pub struct Janitor {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Janitor {
    /// Spawns a sweep task on the current tokio runtime.
    ///
    /// The task only holds a weak reference to `target`, so it never keeps
    /// the store alive on its own.
    ///
    /// # Errors
    /// - `InvalidConfig` if `interval` is zero
    /// - `NoRuntime` if called outside a tokio runtime
    pub fn spawn<S: Sweep>(name: &'static str, target: &Arc<S>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(EvictError::InvalidConfig(format!(
                "{} sweep interval must be greater than zero",
                name
            )));
        }
        let runtime = Handle::try_current().map_err(|_| EvictError::NoRuntime)?;

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let target: Weak<S> = Arc::downgrade(target);

        let handle = runtime.spawn(async move {
            info!("Starting {} sweep with interval of {:?}", name, interval);

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => {
                        let Some(store) = target.upgrade() else {
                            break;
                        };
                        let removed = store.sweep();
                        drop(store);

                        if removed > 0 {
                            info!("{} sweep: removed {} stale entries", name, removed);
                        } else {
                            debug!("{} sweep: no stale entries found", name);
                        }
                    }
                }
            }

            info!("{} sweep stopped", name);
        });

        Ok(Self { token, handle })
    }

    // == Stop ==
    /// Signals the sweep task to exit. Idempotent.
    pub fn stop(&self) {
        self.token.cancel();
    }

    /// Returns true once the sweep task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Janitor {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
