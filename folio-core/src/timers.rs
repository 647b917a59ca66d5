//! Single-shot deferred timers
//!
//! The subsystem has exactly two suspension points. Each owns one slot in
//! this table; scheduling a slot that is already armed replaces the earlier
//! arming, so timers never stack.

use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// The deferred callbacks the runtime can arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerSlot {
    /// Trailing resize debounce
    ResizeDebounce,
    /// Layout settle delay before scroll restoration
    RestoreSettle,
}

/// Identifies one arming of a slot. A firing whose ticket no longer
/// matches the slot's current ticket is stale and must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ticket(pub u64);

#[derive(Debug, Clone, Copy)]
struct Armed {
    deadline: Instant,
    ticket: Ticket,
}

/// A timer that has been armed but not yet fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    /// Which timer
    pub slot: TimerSlot,
    /// Ticket issued when it was armed
    pub ticket: Ticket,
    /// When it fires
    pub deadline: Instant,
}

/// One single-shot timer per [`TimerSlot`]. Scheduling an armed slot
/// replaces its deadline and issues a new ticket.
#[derive(Debug, Default)]
pub struct DeferredTimers {
    slots: HashMap<TimerSlot, Armed>,
    next_ticket: u64,
}

impl DeferredTimers {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `slot` to fire `delay` after `now`, cancelling any earlier
    /// arming of the same slot.
    pub fn schedule(
        &mut self,
        slot: TimerSlot,
        now: Instant,
        delay: Duration,
    ) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        let replaced = self.slots.insert(
            slot,
            Armed {
                deadline: now + delay,
                ticket,
            },
        );
        if replaced.is_some() {
            tracing::trace!(?slot, ?ticket, "rescheduled pending timer");
        }
        ticket
    }

    /// Disarm `slot`. Returns whether it was armed.
    pub fn cancel(&mut self, slot: TimerSlot) -> bool {
        self.slots.remove(&slot).is_some()
    }

    /// Whether `slot` has a pending deadline.
    pub fn is_armed(&self, slot: TimerSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Armed timers in slot order.
    pub fn pending(&self) -> Vec<PendingTimer> {
        let mut pending: Vec<_> = self
            .slots
            .iter()
            .map(|(slot, armed)| PendingTimer {
                slot: *slot,
                ticket: armed.ticket,
                deadline: armed.deadline,
            })
            .collect();
        pending.sort_by_key(|p| (p.deadline, p.slot));
        pending
    }

    /// Earliest deadline of any armed slot.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots.values().map(|armed| armed.deadline).min()
    }

    /// Disarm and return every slot whose deadline is at or before `now`,
    /// earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerSlot> {
        let mut due: Vec<_> = self
            .slots
            .iter()
            .filter(|(_, armed)| armed.deadline <= now)
            .map(|(slot, armed)| (armed.deadline, *slot))
            .collect();
        due.sort();

        for (_, slot) in &due {
            self.slots.remove(slot);
        }
        due.into_iter().map(|(_, slot)| slot).collect()
    }

    /// Consume an externally driven firing. Returns `false` for stale
    /// tickets, which leave the slot untouched.
    pub fn expire(&mut self, slot: TimerSlot, ticket: Ticket) -> bool {
        match self.slots.get(&slot) {
            Some(armed) if armed.ticket == ticket => {
                self.slots.remove(&slot);
                true
            }
            _ => false,
        }
    }

    /// Disarm everything. Returns how many slots were armed.
    pub fn clear(&mut self) -> usize {
        let count = self.slots.len();
        self.slots.clear();
        count
    }
}
