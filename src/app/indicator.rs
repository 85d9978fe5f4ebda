use std::time::{Duration, Instant};

/// Tracks which swatch shows the "Copied!" marker.
///
/// Each copy schedules a delayed reset tagged with a sequence number. A reset
/// only clears the marker if it still points at the same index and copy it
/// was scheduled for, so an older reset never hides a newer copy.
#[derive(Debug)]
pub struct CopiedIndicator {
    current: Option<usize>,
    active_seq: u64,
    next_seq: u64,
    reset_after: Duration,
    pending: Vec<PendingReset>,
}

#[derive(Clone, Copy, Debug)]
struct PendingReset {
    index: usize,
    seq: u64,
    due: Instant,
}

impl CopiedIndicator {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            current: None,
            active_seq: 0,
            next_seq: 0,
            reset_after,
            pending: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.current() == Some(index)
    }

    /// Show the marker on `index` and schedule its reset.
    pub fn mark(&mut self, index: usize, now: Instant) {
        self.next_seq += 1;
        self.active_seq = self.next_seq;
        self.current = Some(index);
        self.pending.push(PendingReset {
            index,
            seq: self.active_seq,
            due: now + self.reset_after,
        });
    }

    /// Fire every reset that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|reset| reset.due <= now);
        self.pending = waiting;
        for reset in due {
            if self.current == Some(reset.index) && self.active_seq == reset.seq {
                self.current = None;
            }
        }
    }

    /// Drop all scheduled resets and hide the marker.
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.current = None;
    }

    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
