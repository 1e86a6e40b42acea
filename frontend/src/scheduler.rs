use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Fire-and-forget delayed work. Nothing scheduled here is ever cancelled.
pub trait Scheduler: Clone + 'static {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Deterministic virtual time for tests.
#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Moves time forward by `by`, running every task that falls due in
    /// order of due time, then scheduling order.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.state.borrow_mut().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut state = self.state.borrow_mut();
        let index = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= target)
            .min_by_key(|(_, pending)| (pending.due, pending.seq))
            .map(|(index, _)| index)?;
        let pending = state.pending.swap_remove(index);
        state.now = pending.due;
        Some(pending.task)
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.pending.push(Pending { due, seq, task });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn tasks_run_in_due_order_when_time_passes() {
        let clock = VirtualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, label) in [(300, "c"), (100, "a"), (200, "b")] {
            let log = log.clone();
            clock.schedule(ms(delay), Box::new(move || log.borrow_mut().push(label)));
        }

        clock.advance(ms(150));
        assert_eq!(*log.borrow(), vec!["a"]);
        assert_eq!(clock.pending(), 2);

        clock.advance(ms(1000));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(clock.now(), ms(1150));
    }

    #[test]
    fn equal_deadlines_keep_scheduling_order() {
        let clock = VirtualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for label in ["first", "second"] {
            let log = log.clone();
            clock.schedule(ms(50), Box::new(move || log.borrow_mut().push(label)));
        }
        clock.advance(ms(50));
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn tasks_scheduled_by_tasks_use_their_own_start_time() {
        let clock = VirtualClock::new();
        let fired_at = Rc::new(RefCell::new(None));
        {
            let inner_clock = clock.clone();
            let fired_at = fired_at.clone();
            clock.schedule(
                ms(100),
                Box::new(move || {
                    let observed = inner_clock.clone();
                    inner_clock.schedule(
                        ms(50),
                        Box::new(move || *fired_at.borrow_mut() = Some(observed.now())),
                    );
                }),
            );
        }
        clock.advance(ms(200));
        assert_eq!(*fired_at.borrow(), Some(ms(150)));
    }
}
