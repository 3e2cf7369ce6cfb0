//! Runs a [`ScrambleReveal`] on a [`Scheduler`]: a 50 ms idle reshuffle until
//! started, then the timed reveal, then a single completion callback.
//!
//! Dropping the animation cancels whatever timer is live, so nothing touches
//! component state after teardown.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::rngs::SmallRng;

use crate::scramble::{ScrambleReveal, Tick, IDLE_TICK_MS};
use crate::timer::Scheduler;

/// Gap between one headline phrase locking in and the next one starting.
pub const HEADLINE_STAGGER_MS: u32 = 200;

type FrameSink = Rc<dyn Fn(String)>;

struct Inner<S: Scheduler> {
    reveal: ScrambleReveal<SmallRng>,
    timer: Option<S::Handle>,
    on_frame: FrameSink,
    on_complete: Option<Box<dyn FnOnce()>>,
}

pub struct ScrambleAnimation<S: Scheduler> {
    scheduler: S,
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Scheduler> ScrambleAnimation<S> {
    /// Starts idle scrambling immediately. `on_frame` receives every new
    /// display string, including the first one.
    pub fn new(scheduler: S, text: &str, rng: SmallRng, on_frame: impl Fn(String) + 'static) -> Self {
        let reveal = ScrambleReveal::new(text, rng);
        let on_frame: FrameSink = Rc::new(on_frame);
        on_frame(reveal.display().to_string());

        let inner = Rc::new(RefCell::new(Inner {
            reveal,
            timer: None,
            on_frame,
            on_complete: None,
        }));

        let weak = Rc::downgrade(&inner);
        let idle = scheduler.every(IDLE_TICK_MS, move || Self::idle_tick(&weak));
        inner.borrow_mut().timer = Some(idle);

        Self { scheduler, inner }
    }

    pub fn display(&self) -> String {
        self.inner.borrow().reveal.display().to_string()
    }

    pub fn is_started(&self) -> bool {
        self.inner.borrow().reveal.has_started()
    }

    pub fn is_completed(&self) -> bool {
        self.inner.borrow().reveal.is_completed()
    }

    /// Begins the reveal. Only the first call on a not-yet-completed
    /// animation does anything; later calls drop their callback unused.
    pub fn start(&self, duration_ms: u32, on_complete: Option<Box<dyn FnOnce()>>) {
        let mut inner = self.inner.borrow_mut();
        let Some(plan) = inner.reveal.start(duration_ms) else {
            return;
        };

        inner.timer = None;
        inner.on_complete = on_complete;

        if inner.reveal.is_completed() {
            let on_frame = inner.on_frame.clone();
            let text = inner.reveal.display().to_string();
            let on_complete = inner.on_complete.take();
            drop(inner);
            on_frame(text);
            if let Some(on_complete) = on_complete {
                on_complete();
            }
            return;
        }

        log::debug!(
            "revealing {:?}: {} ticks every {}ms",
            inner.reveal.target(),
            plan.total_ticks,
            plan.interval_ms
        );
        let weak = Rc::downgrade(&self.inner);
        inner.timer = Some(self.scheduler.every(plan.interval_ms, move || Self::reveal_tick(&weak)));
    }

    fn idle_tick(weak: &Weak<RefCell<Inner<S>>>) {
        let Some(inner) = weak.upgrade() else { return };
        let frame = {
            let mut inner = inner.borrow_mut();
            match inner.reveal.scramble_tick() {
                Tick::Ignored => None,
                _ => Some((inner.on_frame.clone(), inner.reveal.display().to_string())),
            }
        };
        if let Some((on_frame, text)) = frame {
            on_frame(text);
        }
    }

    fn reveal_tick(weak: &Weak<RefCell<Inner<S>>>) {
        let Some(inner) = weak.upgrade() else { return };
        let (on_frame, text, finished) = {
            let mut inner = inner.borrow_mut();
            let finished = match inner.reveal.reveal_tick() {
                Tick::Ignored => return,
                Tick::Frame => None,
                Tick::Completed => Some((inner.timer.take(), inner.on_complete.take())),
            };
            (inner.on_frame.clone(), inner.reveal.display().to_string(), finished)
        };

        on_frame(text);
        if let Some((timer, on_complete)) = finished {
            drop(timer);
            if let Some(on_complete) = on_complete {
                on_complete();
            }
        }
    }
}

impl<S: Scheduler> Drop for ScrambleAnimation<S> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.timer.take();
            inner.on_complete.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;
    use rand::SeedableRng;
    use std::cell::Cell;

    struct Recorder {
        frames: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        fn new() -> Self {
            Self { frames: Rc::default() }
        }

        fn sink(&self) -> impl Fn(String) + 'static {
            let frames = self.frames.clone();
            move |text| frames.borrow_mut().push(text)
        }

        fn count(&self) -> usize {
            self.frames.borrow().len()
        }

        fn last(&self) -> String {
            self.frames.borrow().last().cloned().unwrap_or_default()
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Box<dyn FnOnce()>) {
        let calls = Rc::new(Cell::new(0));
        let callback = {
            let calls = calls.clone();
            Box::new(move || calls.set(calls.get() + 1)) as Box<dyn FnOnce()>
        };
        (calls, callback)
    }

    fn animation(clock: &ManualClock, text: &str, recorder: &Recorder) -> ScrambleAnimation<ManualClock> {
        ScrambleAnimation::new(clock.clone(), text, SmallRng::seed_from_u64(42), recorder.sink())
    }

    #[test]
    fn scrambles_every_fifty_ms_while_idle() {
        let clock = ManualClock::new();
        let recorder = Recorder::new();
        let anim = animation(&clock, "Wasting Money", &recorder);
        assert_eq!(recorder.count(), 1);

        clock.advance(500);
        assert_eq!(recorder.count(), 11);
        for frame in recorder.frames.borrow().iter() {
            assert_eq!(frame.chars().count(), 13);
            assert_eq!(frame.chars().nth(7), Some(' '));
        }
        assert!(!anim.is_started());
    }

    #[test]
    fn reveals_dont_stick_in_one_second() {
        let clock = ManualClock::new();
        let recorder = Recorder::new();
        let anim = animation(&clock, "Don't Stick", &recorder);
        let (calls, on_complete) = counter();

        anim.start(1000, Some(on_complete));
        clock.advance(989);
        assert!(!anim.is_completed());
        assert_eq!(calls.get(), 0);

        clock.advance(11);
        assert!(anim.is_completed());
        assert_eq!(anim.display(), "Don't Stick");
        assert_eq!(recorder.last(), "Don't Stick");
        assert_eq!(calls.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn idle_scrambling_stops_when_started() {
        let clock = ManualClock::new();
        let recorder = Recorder::new();
        let anim = animation(&clock, "AB", &recorder);
        anim.start(60, None);
        assert_eq!(clock.pending(), 1);

        clock.advance(60);
        let frames_at_completion = recorder.count();
        clock.advance(1_000);
        assert_eq!(recorder.count(), frames_at_completion);
        assert_eq!(anim.display(), "AB");
    }

    #[test]
    fn repeated_start_fires_completion_once() {
        let clock = ManualClock::new();
        let recorder = Recorder::new();
        let anim = animation(&clock, "Stick", &recorder);
        let (calls, first) = counter();
        let (late_calls, second) = counter();

        anim.start(150, Some(first));
        clock.advance(50);
        anim.start(150, Some(second));
        clock.advance(1_000);

        let (after_calls, third) = counter();
        anim.start(150, Some(third));
        clock.advance(1_000);

        assert_eq!(calls.get(), 1);
        assert_eq!(late_calls.get(), 0);
        assert_eq!(after_calls.get(), 0);
        assert_eq!(anim.display(), "Stick");
    }

    #[test]
    fn dropping_mid_reveal_cancels_timer() {
        let clock = ManualClock::new();
        let recorder = Recorder::new();
        let anim = animation(&clock, "Money", &recorder);
        let (calls, on_complete) = counter();
        anim.start(300, Some(on_complete));
        clock.advance(100);

        drop(anim);
        let frames = recorder.count();
        assert_eq!(clock.pending(), 0);
        clock.advance(1_000);
        assert_eq!(recorder.count(), frames);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn dropping_while_idle_cancels_timer() {
        let clock = ManualClock::new();
        let recorder = Recorder::new();
        drop(animation(&clock, "Money", &recorder));
        assert_eq!(clock.pending(), 0);
        clock.advance(1_000);
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn empty_text_completes_immediately() {
        let clock = ManualClock::new();
        let recorder = Recorder::new();
        let anim = animation(&clock, "", &recorder);
        let (calls, on_complete) = counter();
        anim.start(1000, Some(on_complete));
        assert!(anim.is_completed());
        assert_eq!(calls.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn chained_headline_waits_for_stagger_after_first_completes() {
        let clock = ManualClock::new();
        let first_frames = Recorder::new();
        let second_frames = Recorder::new();
        let first = animation(&clock, "Wasting Money", &first_frames);
        let second = Rc::new(animation(&clock, "Don't Stick", &second_frames));

        let completed_at = Rc::new(Cell::new(None));
        let second_started_at = Rc::new(Cell::new(None));
        let stagger: Rc<RefCell<Option<_>>> = Rc::default();

        let on_first_complete = {
            let clock = clock.clone();
            let second = second.clone();
            let completed_at = completed_at.clone();
            let second_started_at = second_started_at.clone();
            let stagger = stagger.clone();
            Box::new(move || {
                completed_at.set(Some(clock.now()));
                let timer = clock.after(HEADLINE_STAGGER_MS, {
                    let clock = clock.clone();
                    move || {
                        second_started_at.set(Some(clock.now()));
                        second.start(1000, None);
                    }
                });
                *stagger.borrow_mut() = Some(timer);
            }) as Box<dyn FnOnce()>
        };

        first.start(1200, Some(on_first_complete));
        clock.advance(1_170);
        assert_eq!(completed_at.get(), Some(1_170));
        assert!(!second.is_started());

        clock.advance(HEADLINE_STAGGER_MS as u64 - 1);
        assert!(!second.is_started());

        clock.advance(1);
        assert!(second.is_started());
        assert!(second_started_at.get().unwrap() > completed_at.get().unwrap());
        assert_eq!(
            second_started_at.get().unwrap() - completed_at.get().unwrap(),
            HEADLINE_STAGGER_MS as u64
        );

        clock.advance(1_000);
        assert_eq!(first.display(), "Wasting Money");
        assert_eq!(second.display(), "Don't Stick");
    }
}
