use std::time::Duration;

/// Identifies one repeating timer registration.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct TimerHandle(u64);

/// Source of repeating timer fires.
///
/// The owner moves time forward with `fire_next` and reacts to each returned
/// handle before asking for the next one, so a handler may cancel or schedule
/// timers in between fires.
pub trait Scheduler {
    fn now(&self) -> Duration;
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
    fn is_active(&self, handle: TimerHandle) -> bool;
    fn active_count(&self) -> usize;

    /// Returns the earliest timer due at or before `deadline`, moving the clock
    /// to its due time and re-arming it. When nothing is due the clock moves to
    /// `deadline` and `None` is returned.
    fn fire_next(&mut self, deadline: Duration) -> Option<TimerHandle>;
}

// Guards against an interval of zero spinning forever in `fire_next`.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

struct Timer {
    handle: TimerHandle,
    interval: Duration,
    next_due: Duration,
}

/// Scheduler driven by accumulated frame time.
pub struct FrameClock {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: Vec::new(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for FrameClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        let interval = interval.max(MIN_INTERVAL);
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            handle,
            interval,
            next_due: self.now + interval,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|timer| timer.handle != handle);
    }

    fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|timer| timer.handle == handle)
    }

    fn active_count(&self) -> usize {
        self.timers.len()
    }

    fn fire_next(&mut self, deadline: Duration) -> Option<TimerHandle> {
        let due = self
            .timers
            .iter_mut()
            .filter(|timer| timer.next_due <= deadline)
            .min_by_key(|timer| timer.next_due);

        match due {
            Some(timer) => {
                self.now = self.now.max(timer.next_due);
                timer.next_due += timer.interval;
                Some(timer.handle)
            }
            None => {
                self.now = self.now.max(deadline);
                None
            }
        }
    }
}
