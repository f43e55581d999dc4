/// Handle for a deferred action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledTask {
    id: u64,
    due_ms: u64,
}

impl ScheduledTask {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn due_ms(&self) -> u64 {
        self.due_ms
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.due_ms
    }
}

/// Collapses bursts of signals into one action after a quiet period.
///
/// Owns at most one pending [`ScheduledTask`]. Each `trigger` replaces it, so a burst never
/// leaves stale tasks behind.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay_ms: u64,
    next_id: u64,
    pending: Option<ScheduledTask>,
    fired: u64,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            next_id: 0,
            pending: None,
            fired: 0,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn pending(&self) -> Option<ScheduledTask> {
        self.pending
    }

    /// Number of tasks that have fired so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Cancels any pending task and schedules a new one `delay_ms` after `now_ms`.
    pub fn trigger(&mut self, now_ms: u64) -> ScheduledTask {
        let task = ScheduledTask {
            id: self.next_id,
            due_ms: now_ms.saturating_add(self.delay_ms),
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some(task);
        strace!(id = task.id, due_ms = task.due_ms, "Debouncer::trigger");
        task
    }

    pub fn cancel(&mut self) -> Option<ScheduledTask> {
        self.pending.take()
    }

    /// Takes the pending task if it is due.
    pub fn poll(&mut self, now_ms: u64) -> Option<ScheduledTask> {
        let task = self.pending?;
        if !task.is_due(now_ms) {
            return None;
        }
        self.pending = None;
        self.fired = self.fired.saturating_add(1);
        Some(task)
    }
}
