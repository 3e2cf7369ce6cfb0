//! Timer scheduling behind a small trait so animations can run on browser
//! timers in production and on a hand-cranked clock in tests.
//!
//! Every timer is represented by a handle; dropping the handle cancels it.

use gloo_timers::callback::{Interval, Timeout};

pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    /// Calls `tick` every `period_ms` until the returned handle is dropped.
    fn every(&self, period_ms: u32, tick: impl FnMut() + 'static) -> Self::Handle;

    /// Calls `fire` once after `delay_ms` unless the handle is dropped first.
    fn after(&self, delay_ms: u32, fire: impl FnOnce() + 'static) -> Self::Handle;
}

/// `setInterval` / `setTimeout` through gloo-timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

pub enum BrowserTimer {
    Interval(Option<Interval>),
    Timeout(Option<Timeout>),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn every(&self, period_ms: u32, tick: impl FnMut() + 'static) -> BrowserTimer {
        BrowserTimer::Interval(Some(Interval::new(period_ms, tick)))
    }

    fn after(&self, delay_ms: u32, fire: impl FnOnce() + 'static) -> BrowserTimer {
        BrowserTimer::Timeout(Some(Timeout::new(delay_ms, fire)))
    }
}

impl Drop for BrowserTimer {
    fn drop(&mut self) {
        // The handle may be dropped from inside its own callback, so the
        // timer is cleared right away but the JS closure is released on the
        // next turn of the event loop.
        match self {
            BrowserTimer::Interval(interval) => {
                if let Some(interval) = interval.take() {
                    let closure = interval.cancel();
                    wasm_bindgen_futures::spawn_local(async move { drop(closure) });
                }
            }
            BrowserTimer::Timeout(timeout) => {
                if let Some(timeout) = timeout.take() {
                    let closure = timeout.cancel();
                    wasm_bindgen_futures::spawn_local(async move { drop(closure) });
                }
            }
        }
    }
}

#[cfg(test)]
pub use manual::{ManualClock, ManualTimer};

#[cfg(test)]
mod manual {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::{Rc, Weak};

    enum Task {
        Repeat { period: u64, tick: Box<dyn FnMut()> },
        Once(Box<dyn FnOnce()>),
    }

    struct Pending {
        due: u64,
        task: Task,
    }

    #[derive(Default)]
    struct ClockState {
        now: u64,
        next_id: u64,
        timers: BTreeMap<u64, Pending>,
        running: Option<u64>,
        running_cancelled: bool,
    }

    /// Deterministic scheduler: nothing fires until [`ManualClock::advance`].
    #[derive(Clone, Default)]
    pub struct ManualClock {
        state: Rc<RefCell<ClockState>>,
    }

    pub struct ManualTimer {
        id: u64,
        state: Weak<RefCell<ClockState>>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.state.borrow().now
        }

        /// Number of timers still scheduled.
        pub fn pending(&self) -> usize {
            self.state.borrow().timers.len()
        }

        fn schedule(&self, due_in: u64, task: Task) -> ManualTimer {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + due_in;
            state.timers.insert(id, Pending { due, task });
            ManualTimer { id, state: Rc::downgrade(&self.state) }
        }

        /// Moves time forward by `ms`, firing every timer that comes due in
        /// `(due, id)` order. Callbacks may schedule or cancel timers.
        pub fn advance(&self, ms: u64) {
            let target = self.state.borrow().now + ms;
            loop {
                let (id, pending) = {
                    let mut state = self.state.borrow_mut();
                    let next = state
                        .timers
                        .iter()
                        .filter(|(_, pending)| pending.due <= target)
                        .min_by_key(|(id, pending)| (pending.due, **id))
                        .map(|(id, _)| *id);
                    let Some(id) = next else { break };
                    let pending = state.timers.remove(&id).expect("timer listed above");
                    state.now = pending.due;
                    state.running = Some(id);
                    state.running_cancelled = false;
                    (id, pending)
                };

                match pending.task {
                    Task::Once(fire) => {
                        fire();
                        self.state.borrow_mut().running = None;
                    }
                    Task::Repeat { period, mut tick } => {
                        tick();
                        let mut state = self.state.borrow_mut();
                        state.running = None;
                        if !std::mem::take(&mut state.running_cancelled) {
                            let due = pending.due + period;
                            state.timers.insert(id, Pending { due, task: Task::Repeat { period, tick } });
                        } else {
                            drop(state);
                            drop(tick);
                        }
                    }
                }
            }
            self.state.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualClock {
        type Handle = ManualTimer;

        fn every(&self, period_ms: u32, tick: impl FnMut() + 'static) -> ManualTimer {
            let period = u64::from(period_ms.max(1));
            self.schedule(period, Task::Repeat { period, tick: Box::new(tick) })
        }

        fn after(&self, delay_ms: u32, fire: impl FnOnce() + 'static) -> ManualTimer {
            self.schedule(u64::from(delay_ms), Task::Once(Box::new(fire)))
        }
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            let Some(state) = self.state.upgrade() else { return };
            let removed = {
                let mut state = state.borrow_mut();
                let removed = state.timers.remove(&self.id);
                if removed.is_none() && state.running == Some(self.id) {
                    state.running_cancelled = true;
                }
                removed
            };
            // Released outside the borrow: the task may own other timers.
            drop(removed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn interval_fires_once_per_period() {
        let clock = ManualClock::new();
        let count = Rc::new(Cell::new(0));
        let _handle = clock.every(50, {
            let count = count.clone();
            move || count.set(count.get() + 1)
        });

        clock.advance(49);
        assert_eq!(count.get(), 0);
        clock.advance(1);
        assert_eq!(count.get(), 1);
        clock.advance(500);
        assert_eq!(count.get(), 11);
    }

    #[test]
    fn dropping_handle_cancels() {
        let clock = ManualClock::new();
        let fired = Rc::new(Cell::new(false));
        let handle = clock.after(100, {
            let fired = fired.clone();
            move || fired.set(true)
        });
        drop(handle);

        clock.advance(1_000);
        assert!(!fired.get());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn interval_can_cancel_itself_from_its_own_tick() {
        let clock = ManualClock::new();
        let slot: Rc<RefCell<Option<ManualTimer>>> = Rc::default();
        let count = Rc::new(Cell::new(0));
        let handle = clock.every(10, {
            let slot = slot.clone();
            let count = count.clone();
            move || {
                count.set(count.get() + 1);
                if count.get() == 3 {
                    slot.borrow_mut().take();
                }
            }
        });
        *slot.borrow_mut() = Some(handle);

        clock.advance(1_000);
        assert_eq!(count.get(), 3);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn timers_fire_in_due_order() {
        let clock = ManualClock::new();
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let push = |label: &'static str| {
            let order = order.clone();
            move || order.borrow_mut().push(label)
        };
        let _late = clock.after(30, push("late"));
        let _early = clock.after(10, push("early"));
        let _same = clock.after(10, push("same-time"));

        clock.advance(30);
        assert_eq!(*order.borrow(), ["early", "same-time", "late"]);
        assert_eq!(clock.now(), 30);
    }

    #[test]
    fn callback_may_schedule_follow_up_within_same_advance() {
        let clock = ManualClock::new();
        let fired_at = Rc::new(Cell::new(None));
        let keep: Rc<RefCell<Vec<ManualTimer>>> = Rc::default();
        let _first = clock.after(100, {
            let clock = clock.clone();
            let fired_at = fired_at.clone();
            let keep = keep.clone();
            move || {
                let follow_up = clock.after(200, {
                    let clock = clock.clone();
                    move || fired_at.set(Some(clock.now()))
                });
                keep.borrow_mut().push(follow_up);
            }
        });

        clock.advance(299);
        assert_eq!(fired_at.get(), None);
        clock.advance(1);
        assert_eq!(fired_at.get(), Some(300));
    }
}
