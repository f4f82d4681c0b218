use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A deferred auto-advance callback.
///
/// Ordered by `(due_ms, seq)`; `seq` is strictly increasing, so ticks due at the same
/// millisecond fire in scheduling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tick {
    pub due_ms: u64,
    pub seq: u64,
    /// Playback epoch the tick was scheduled in.
    pub epoch: u64,
}

/// Deterministic virtual clock plus a min-heap of pending ticks.
///
/// Time only moves when the host calls [`PlaybackClock::advance`]. Ticks are never
/// cancelled; the controller discards ticks whose epoch is no longer current.
#[derive(Clone, Debug, Default)]
pub struct PlaybackClock {
    now_ms: u64,
    queue: BinaryHeap<Reverse<Tick>>,
    next_seq: u64,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn advance(&mut self, elapsed_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
    }

    pub fn schedule_at(&mut self, due_ms: u64, epoch: u64) -> Tick {
        let tick = Tick {
            due_ms,
            seq: self.next_seq,
            epoch,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(tick));
        tick
    }

    /// Remove and return the earliest tick if it is due.
    pub fn pop_due(&mut self) -> Option<Tick> {
        match self.queue.peek() {
            Some(Reverse(t)) if t.due_ms <= self.now_ms => self.queue.pop().map(|Reverse(t)| t),
            _ => None,
        }
    }

    pub fn peek(&self) -> Option<&Tick> {
        self.queue.peek().map(|Reverse(t)| t)
    }

    /// Ticks still queued, stale ones included.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/clock.rs"]
mod tests;
