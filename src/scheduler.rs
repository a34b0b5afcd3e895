//! Cancellable delayed tasks.
//!
//! The scheduler only keeps the bookkeeping; the host owns the real timers.
//! A task that was cancelled before its timer fired is simply gone, so the
//! late expiry resolves to nothing.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Handle of a scheduled task, unique for the lifetime of a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// A task that has been registered and now needs a host timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub id: TaskId,
    pub delay: Duration,
}

struct Pending<C, T> {
    chain: C,
    task: T,
}

pub struct Scheduler<C, T> {
    next_id: u64,
    pending: BTreeMap<TaskId, Pending<C, T>>,
}

impl<C, T> Default for Scheduler<C, T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<C: Copy + PartialEq, T> Scheduler<C, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, chain: C, delay: Duration, task: T) -> Scheduled {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.pending.insert(id, Pending { chain, task });
        Scheduled { id, delay }
    }

    /// Claim the task behind an expired timer.
    pub fn fire(&mut self, id: TaskId) -> Option<(C, T)> {
        self.pending
            .remove(&id)
            .map(|pending| (pending.chain, pending.task))
    }

    /// Drop every pending task of `chain`, returning their ids.
    pub fn cancel_chain(&mut self, chain: C) -> Vec<TaskId> {
        let ids: Vec<TaskId> = self
            .pending
            .iter()
            .filter(|(_, pending)| pending.chain == chain)
            .map(|(id, _)| *id)
            .collect();
        for id in &ids {
            self.pending.remove(id);
        }
        ids
    }

    pub fn cancel_all(&mut self) -> Vec<TaskId> {
        let ids = self.pending.keys().copied().collect();
        self.pending.clear();
        ids
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Lane {
        A,
        B,
    }

    #[test]
    fn fires_each_task_once() {
        let mut scheduler: Scheduler<Lane, &str> = Scheduler::new();
        let first = scheduler.schedule(Lane::A, Duration::from_millis(10), "first");
        assert_eq!(first.delay, Duration::from_millis(10));
        assert_eq!(scheduler.fire(first.id), Some((Lane::A, "first")));
        assert_eq!(scheduler.fire(first.id), None);
    }

    #[test]
    fn cancelling_a_chain_leaves_others() {
        let mut scheduler: Scheduler<Lane, u8> = Scheduler::new();
        let a1 = scheduler.schedule(Lane::A, Duration::ZERO, 1);
        let b1 = scheduler.schedule(Lane::B, Duration::ZERO, 2);
        let a2 = scheduler.schedule(Lane::A, Duration::ZERO, 3);

        let cancelled = scheduler.cancel_chain(Lane::A);
        assert_eq!(cancelled, vec![a1.id, a2.id]);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.fire(a1.id), None);
        assert_eq!(scheduler.fire(b1.id), Some((Lane::B, 2)));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_cancel_all() {
        let mut scheduler: Scheduler<Lane, ()> = Scheduler::new();
        let old = scheduler.schedule(Lane::A, Duration::ZERO, ());
        assert_eq!(scheduler.cancel_all(), vec![old.id]);
        let fresh = scheduler.schedule(Lane::A, Duration::ZERO, ());
        assert_ne!(old.id, fresh.id);
        assert_eq!(scheduler.len(), 1);
    }
}
