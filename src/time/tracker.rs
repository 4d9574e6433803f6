//! Elapsed/total bookkeeping.
//!
//! Two timestamps are shared by every caller of a logger:
//! - `first_log`: set by a checkpoint; `total` is measured from here.
//! - `last_log`: set by a checkpoint and by every stamp; `elapsed` is measured from here.
//!
//! Both are read and written under one mutex, and the clock is sampled inside
//! the critical section, so `last_log` always holds the reading of whichever
//! call locked last and `last_log >= first_log` holds for a monotonic clock.

use parking_lot::Mutex;

use super::clock::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockState {
    first_log: u64,
    last_log: u64,
}

/// Timing of one stamped message, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    /// Clock reading taken for this message.
    pub at: u64,
    /// Time since the previous stamp or checkpoint.
    pub elapsed: u64,
    /// Time since the last checkpoint.
    pub total: u64,
}

impl Stamp {
    /// Renders `"(<thread>) [<elapsed>,<total>] <message>"`.
    pub fn prefix(&self, thread: &str, message: &str) -> String {
        let mut out = String::with_capacity(thread.len() + message.len() + 32);
        out.push('(');
        out.push_str(thread);
        out.push_str(") [");
        out.push_str(&self.elapsed.to_string());
        out.push(',');
        out.push_str(&self.total.to_string());
        out.push_str("] ");
        out.push_str(message);
        out
    }
}

/// Owns a clock and the checkpoint baseline measured against it.
#[derive(Debug)]
pub struct TimingTracker<C: Clock> {
    clock: C,
    state: Mutex<ClockState>,
}

impl<C: Clock> TimingTracker<C> {
    /// Both timestamps start at the clock's current reading.
    pub fn new(clock: C) -> Self {
        let now = clock.now_millis();
        TimingTracker { clock, state: Mutex::new(ClockState { first_log: now, last_log: now }) }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Resets both timestamps to now. The returned stamp is the checkpoint's
    /// own reading and always has zero deltas.
    pub fn checkpoint(&self) -> Stamp {
        let mut state = self.state.lock();
        let now = self.clock.now_millis();
        state.first_log = now;
        state.last_log = now;
        tracing::trace!(at = now, "timing baseline reset");
        Stamp { at: now, elapsed: 0, total: 0 }
    }

    /// Measures now against both timestamps and advances `last_log`.
    pub fn stamp(&self) -> Stamp {
        let mut state = self.state.lock();
        let now = self.clock.now_millis();
        // A clock stepping backwards reads as zero rather than wrapping.
        let elapsed = now.saturating_sub(state.last_log);
        let total = now.saturating_sub(state.first_log);
        state.last_log = now;
        Stamp { at: now, elapsed, total }
    }

    /// Current `(first_log, last_log)` pair.
    pub fn snapshot(&self) -> (u64, u64) {
        let state = self.state.lock();
        (state.first_log, state.last_log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::clock::ManualClock;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_tracker_starts_at_clock_reading() {
        let tracker = TimingTracker::new(ManualClock::new(1000));
        assert_eq!(tracker.snapshot(), (1000, 1000));
    }

    #[test]
    fn test_checkpoint_then_stamp_reads_zero() {
        let tracker = TimingTracker::new(ManualClock::new(0));
        tracker.clock().set(1000);
        assert_eq!(tracker.checkpoint(), Stamp { at: 1000, elapsed: 0, total: 0 });
        let stamp = tracker.stamp();
        assert_eq!((stamp.elapsed, stamp.total), (0, 0));
    }

    #[test]
    fn test_elapsed_and_total_accumulate() {
        let tracker = TimingTracker::new(ManualClock::new(1000));
        tracker.clock().set(1300);
        assert_eq!(tracker.stamp(), Stamp { at: 1300, elapsed: 300, total: 300 });
        tracker.clock().set(1450);
        assert_eq!(tracker.stamp(), Stamp { at: 1450, elapsed: 150, total: 450 });
        assert_eq!(tracker.snapshot(), (1000, 1450));
    }

    #[test]
    fn test_checkpoint_resets_total() {
        let tracker = TimingTracker::new(ManualClock::new(0));
        tracker.clock().set(500);
        tracker.stamp();
        tracker.clock().set(800);
        tracker.checkpoint();
        tracker.clock().set(820);
        assert_eq!(tracker.stamp(), Stamp { at: 820, elapsed: 20, total: 20 });
    }

    #[test]
    fn test_backwards_clock_saturates() {
        let tracker = TimingTracker::new(ManualClock::new(1000));
        tracker.clock().set(900);
        let stamp = tracker.stamp();
        assert_eq!((stamp.elapsed, stamp.total), (0, 0));
        assert_eq!(tracker.snapshot(), (1000, 900));
    }

    #[test]
    fn test_prefix_shape() {
        let stamp = Stamp { at: 0, elapsed: 298, total: 474 };
        assert_eq!(stamp.prefix("main", "hello"), "(main) [298,474] hello");
        assert_eq!(stamp.prefix("", ""), "() [298,474] ");
    }

    #[test]
    fn test_concurrent_stamps_leave_last_reading() {
        let tracker = Arc::new(TimingTracker::new(ManualClock::new(0)));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || {
                    for _ in 0..100 {
                        tracker.clock().advance(1);
                        tracker.stamp();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        // Every advance lands before the final stamp's critical section.
        let final_stamp = tracker.stamp();
        assert_eq!(final_stamp.at, 800);
        assert_eq!(tracker.snapshot(), (0, 800));
    }
}
