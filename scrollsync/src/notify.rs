use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{NotificationOptions, OverlapPolicy};

pub type NotificationId = u64;

/// Lifecycle of a transient notification. Phases only ever move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NotificationPhase {
    /// Inserted, not yet painted visible.
    Entering,
    Visible,
    Exiting,
    /// Gone from the document.
    Removed,
}

impl NotificationPhase {
    fn next(self) -> Self {
        match self {
            Self::Entering => Self::Visible,
            Self::Visible => Self::Exiting,
            Self::Exiting | Self::Removed => Self::Removed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub phase: NotificationPhase,
    pub shown_at_ms: u64,
}

/// A phase change the host must apply.
///
/// `Entering` means "insert a node with `message`", `Removed` means "remove the node".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationChange<'a> {
    pub id: NotificationId,
    pub message: &'a str,
    pub phase: NotificationPhase,
}

/// Short-lived messages with a fixed enter/hold/exit timeline.
///
/// Time is adapter-driven: `show` stamps the insertion time and `tick(now_ms)` advances every
/// instance. Once started, a timeline always runs to removal.
#[derive(Clone, Debug)]
pub struct NotificationQueue {
    options: NotificationOptions,
    next_id: NotificationId,
    active: Vec<Notification>,
    queued: VecDeque<(NotificationId, String)>,
}

fn phase_at(options: &NotificationOptions, shown_at_ms: u64, now_ms: u64) -> NotificationPhase {
    let elapsed = now_ms.saturating_sub(shown_at_ms);
    if elapsed >= options.hold_ms.saturating_add(options.exit_ms) {
        NotificationPhase::Removed
    } else if elapsed >= options.hold_ms {
        NotificationPhase::Exiting
    } else if elapsed >= options.enter_delay_ms {
        NotificationPhase::Visible
    } else {
        NotificationPhase::Entering
    }
}

impl NotificationQueue {
    pub fn new(options: NotificationOptions) -> Self {
        Self {
            options,
            next_id: 0,
            active: Vec::new(),
            queued: VecDeque::new(),
        }
    }

    pub fn options(&self) -> &NotificationOptions {
        &self.options
    }

    /// Notifications currently in the document, oldest first.
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id == id)
    }

    /// Messages waiting for their turn (`OverlapPolicy::Serialize` only).
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty() && self.queued.is_empty()
    }

    /// Shows `message`, or queues it behind the current notification under
    /// `OverlapPolicy::Serialize`.
    ///
    /// Emits the `Entering` change when the node should be inserted right away.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        now_ms: u64,
        mut emit: impl FnMut(NotificationChange<'_>),
    ) -> NotificationId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let message = message.into();

        if self.options.policy == OverlapPolicy::Serialize && !self.is_idle() {
            sdebug!(id, queued = self.queued.len() + 1, "NotificationQueue: queued");
            self.queued.push_back((id, message));
            return id;
        }

        self.insert(id, message, now_ms, &mut emit);
        id
    }

    fn insert(
        &mut self,
        id: NotificationId,
        message: String,
        now_ms: u64,
        emit: &mut dyn FnMut(NotificationChange<'_>),
    ) {
        sdebug!(id, now_ms, "NotificationQueue: inserted");
        emit(NotificationChange {
            id,
            message: &message,
            phase: NotificationPhase::Entering,
        });
        self.active.push(Notification {
            id,
            message,
            phase: NotificationPhase::Entering,
            shown_at_ms: now_ms,
        });
    }

    /// Advances every timeline to `now_ms`.
    ///
    /// Phases are never skipped: a late tick emits each intermediate phase in order. Returns the
    /// number of emitted changes.
    pub fn tick(&mut self, now_ms: u64, mut emit: impl FnMut(NotificationChange<'_>)) -> usize {
        let options = self.options;
        let mut changes = 0usize;
        loop {
            for n in &mut self.active {
                let target = phase_at(&options, n.shown_at_ms, now_ms);
                while n.phase < target {
                    n.phase = n.phase.next();
                    strace!(id = n.id, phase = ?n.phase, "NotificationQueue::tick");
                    emit(NotificationChange {
                        id: n.id,
                        message: &n.message,
                        phase: n.phase,
                    });
                    changes += 1;
                }
            }
            self.active.retain(|n| n.phase != NotificationPhase::Removed);

            if !self.active.is_empty() {
                break;
            }
            let Some((id, message)) = self.queued.pop_front() else {
                break;
            };
            self.insert(id, message, now_ms, &mut emit);
            changes += 1;
        }
        changes
    }

    /// The earliest time at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        let options = &self.options;
        self.active
            .iter()
            .filter_map(|n| {
                let offset = match n.phase {
                    NotificationPhase::Entering => options.enter_delay_ms,
                    NotificationPhase::Visible => options.hold_ms,
                    NotificationPhase::Exiting => options.hold_ms.saturating_add(options.exit_ms),
                    NotificationPhase::Removed => return None,
                };
                Some(n.shown_at_ms.saturating_add(offset))
            })
            .min()
    }
}
