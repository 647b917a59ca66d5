//! Navigation runtime: owns the environment, the component state and the
//! deferred timers

use crate::clock::{Clock, SystemClock};
use crate::config::NavConfig;
use crate::messages::NavEvent;
use crate::ports::Environment;
use crate::snapshot::NavSnapshot;
use crate::state::NavState;
use crate::timers::{PendingTimer, Ticket, TimerSlot};
use crate::update;
use std::time::Instant;
use tokio::sync::mpsc;

/// Single-threaded driver for the navigation subsystem.
///
/// Construction performs the synchronous initial pass; [`dispose`] unbinds
/// every listener and cancels both timers. Events dispatched after
/// disposal are dropped.
///
/// [`dispose`]: NavRuntime::dispose
#[derive(Debug)]
pub struct NavRuntime<E: Environment, C: Clock = SystemClock> {
    env: E,
    clock: C,
    config: NavConfig,
    state: NavState,
    disposed: bool,
}

impl<E: Environment> NavRuntime<E, SystemClock> {
    /// Build a runtime on the tokio clock and run the initial pass.
    pub fn new(env: E, config: NavConfig) -> Self {
        Self::init(env, config, SystemClock)
    }

    /// Drive the runtime from a channel of host events, firing timers as
    /// their deadlines pass. Returns the environment once the channel
    /// closes and the runtime has been disposed.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<NavEvent>) -> E {
        loop {
            let deadline = self.next_deadline();
            tokio::select! {
                biased;

                _ = sleep_until(deadline) => {
                    self.fire_due();
                }
                event = events.recv() => match event {
                    Some(event) => self.dispatch(event),
                    None => break,
                },
            }
        }

        tracing::debug!("event channel closed; disposing navigation runtime");
        self.into_env()
    }
}

impl<E: Environment, C: Clock> NavRuntime<E, C> {
    /// Build a runtime on `clock` and run the synchronous initial pass.
    pub fn init(mut env: E, config: NavConfig, clock: C) -> Self {
        let mut state = NavState::new(&config);
        update::init_state(&mut state, &mut env, &config, clock.now());
        Self {
            env,
            clock,
            config,
            state,
            disposed: false,
        }
    }

    /// Handle one host event. Dropped once the runtime is disposed.
    pub fn dispatch(&mut self, event: NavEvent) {
        if self.disposed {
            tracing::trace!(event = event.name(), "dropped after dispose");
            return;
        }
        let now = self.clock.now();
        update::handle_event(
            &mut self.state,
            &mut self.env,
            &self.config,
            now,
            event,
        );
    }

    /// Navigate back to the root view with a fresh restoration intent.
    pub fn request_back_with_restore(&mut self) {
        self.dispatch(NavEvent::BackToProjects);
    }

    /// Fire every timer whose deadline is at or before the clock's now.
    /// Returns how many fired.
    pub fn fire_due(&mut self) -> usize {
        if self.disposed {
            return 0;
        }
        let mut fired = 0;
        loop {
            let due = self.state.timers.take_due(self.clock.now());
            if due.is_empty() {
                break;
            }
            for slot in due {
                tracing::trace!(?slot, "timer fired");
                update::handle_timer(&mut self.state, &mut self.env, slot);
                fired += 1;
            }
        }
        fired
    }

    /// Fire one externally scheduled timer. Stale tickets are ignored.
    pub fn on_timer(&mut self, slot: TimerSlot, ticket: Ticket) -> bool {
        if self.disposed || !self.state.timers.expire(slot, ticket) {
            tracing::trace!(?slot, ?ticket, "stale timer firing ignored");
            return false;
        }
        update::handle_timer(&mut self.state, &mut self.env, slot);
        true
    }

    /// Earliest armed deadline, if any timer is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.timers.next_deadline()
    }

    /// Armed timers in slot order.
    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        self.state.timers.pending()
    }

    /// Serializable view of every component's current state.
    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot::capture(&self.state)
    }

    /// Component state, for inspection.
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Configuration the runtime was built with.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Clock driving the deadlines.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Shared access to the environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Mutable access for hosts that move the page (scroll, resize)
    /// before dispatching the matching event.
    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Cancel both timers and unbind every listener. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        let cancelled = self.state.timers.clear();
        self.state.restoration.cancel();
        self.state.spy.teardown(&mut self.env);
        self.state.viewport.dispose(&mut self.env);
        self.state.motion.dispose(&mut self.env);
        self.disposed = true;

        tracing::debug!(cancelled, "navigation runtime disposed");
    }

    /// Whether [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Dispose and hand the environment back.
    pub fn into_env(mut self) -> E {
        self.dispose();
        self.env
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline))
                .await
        }
        None => std::future::pending().await,
    }
}
