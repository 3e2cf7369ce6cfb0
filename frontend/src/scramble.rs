//! Scramble-then-reveal text state machine.
//!
//! Pure state: no timers, no DOM. [`crate::animation`] drives it from a
//! scheduler; tests drive it by hand.

use rand::Rng;

/// Characters drawn for every scrambled position.
pub const SCRAMBLE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%&*";

/// Reveal ticks budgeted per character of the target.
pub const TICKS_PER_CHAR: usize = 3;

/// Reshuffle period while waiting for the start signal.
pub const IDLE_TICK_MS: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Scrambling,
    Revealing { iteration: usize, total_ticks: usize },
    Completed,
}

/// Tick budget for one reveal. Total wall-clock time stays close to the
/// requested duration whatever the text length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealPlan {
    pub total_ticks: usize,
    pub interval_ms: u32,
}

impl RevealPlan {
    pub fn new(char_count: usize, duration_ms: u32) -> Self {
        let total_ticks = char_count * TICKS_PER_CHAR;
        let interval_ms = match u32::try_from(total_ticks) {
            Ok(0) => 0,
            Ok(ticks) => (duration_ms / ticks).max(1),
            Err(_) => 1,
        };
        Self { total_ticks, interval_ms }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Not in the phase this tick belongs to; nothing changed.
    Ignored,
    Frame,
    Completed,
}

pub struct ScrambleReveal<R> {
    target: Vec<char>,
    text: String,
    display: String,
    phase: Phase,
    rng: R,
}

fn random_char(rng: &mut impl Rng) -> char {
    char::from(SCRAMBLE_CHARS[rng.gen_range(0..SCRAMBLE_CHARS.len())])
}

impl<R: Rng> ScrambleReveal<R> {
    pub fn new(text: &str, rng: R) -> Self {
        let mut reveal = Self {
            target: text.chars().collect(),
            text: text.to_string(),
            display: String::with_capacity(text.len()),
            phase: Phase::Scrambling,
            rng,
        };
        reveal.render(0);
        reveal
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn target(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_started(&self) -> bool {
        !matches!(self.phase, Phase::Scrambling)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, Phase::Completed)
    }

    /// Rewrites `display`: the first `locked` characters show their true
    /// value, the rest are redrawn. Spaces always pass through.
    fn render(&mut self, locked: usize) {
        self.display.clear();
        for (index, &ch) in self.target.iter().enumerate() {
            if ch == ' ' || index < locked {
                self.display.push(ch);
            } else {
                let scrambled = random_char(&mut self.rng);
                self.display.push(scrambled);
            }
        }
    }

    /// Idle reshuffle. Only has an effect before the reveal starts.
    pub fn scramble_tick(&mut self) -> Tick {
        if self.phase != Phase::Scrambling {
            return Tick::Ignored;
        }
        self.render(0);
        Tick::Frame
    }

    /// Enters the reveal phase. Returns `None` if the reveal already started
    /// or finished, so repeated start signals are harmless.
    pub fn start(&mut self, duration_ms: u32) -> Option<RevealPlan> {
        if self.phase != Phase::Scrambling {
            return None;
        }
        let plan = RevealPlan::new(self.target.len(), duration_ms);
        if plan.total_ticks == 0 {
            self.finish();
        } else {
            self.phase = Phase::Revealing { iteration: 0, total_ticks: plan.total_ticks };
        }
        Some(plan)
    }

    pub fn reveal_tick(&mut self) -> Tick {
        let Phase::Revealing { iteration, total_ticks } = self.phase else {
            return Tick::Ignored;
        };

        self.render(iteration / TICKS_PER_CHAR);
        let iteration = iteration + 1;
        if iteration >= total_ticks {
            self.finish();
            Tick::Completed
        } else {
            self.phase = Phase::Revealing { iteration, total_ticks };
            Tick::Frame
        }
    }

    fn finish(&mut self) {
        self.display.clone_from(&self.text);
        self.phase = Phase::Completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn reveal(text: &str) -> ScrambleReveal<SmallRng> {
        ScrambleReveal::new(text, SmallRng::seed_from_u64(7))
    }

    fn assert_shape(display: &str, target: &str) {
        assert_eq!(display.chars().count(), target.chars().count());
        for (shown, real) in display.chars().zip(target.chars()) {
            if real == ' ' {
                assert_eq!(shown, ' ', "space replaced in {display:?}");
            } else {
                assert_ne!(shown, ' ', "space introduced in {display:?}");
            }
        }
    }

    #[test]
    fn starts_scrambled_with_spaces_in_place() {
        let state = reveal("Wasting Money");
        assert_shape(state.display(), "Wasting Money");
        assert!(state
            .display()
            .chars()
            .filter(|ch| *ch != ' ')
            .all(|ch| SCRAMBLE_CHARS.contains(&(ch as u8))));
        assert_eq!(state.phase(), Phase::Scrambling);
    }

    #[test]
    fn plan_scales_interval_with_length() {
        assert_eq!(RevealPlan::new(11, 1000), RevealPlan { total_ticks: 33, interval_ms: 30 });
        assert_eq!(RevealPlan::new(13, 1200), RevealPlan { total_ticks: 39, interval_ms: 30 });
        assert_eq!(RevealPlan::new(500, 100).interval_ms, 1);
        assert_eq!(RevealPlan::new(0, 1000), RevealPlan { total_ticks: 0, interval_ms: 0 });
    }

    #[test]
    fn shape_holds_on_every_tick() {
        let target = "Don't Stick  twice";
        let mut state = reveal(target);
        for _ in 0..10 {
            state.scramble_tick();
            assert_shape(state.display(), target);
        }
        state.start(1000).unwrap();
        while state.reveal_tick() == Tick::Frame {
            assert_shape(state.display(), target);
        }
        assert_eq!(state.display(), target);
    }

    #[test]
    fn characters_lock_in_left_to_right() {
        let target = "ABCDEFGH";
        let mut state = reveal(target);
        let plan = state.start(900).unwrap();
        for iteration in 0..plan.total_ticks - 1 {
            state.reveal_tick();
            let locked = iteration / TICKS_PER_CHAR;
            assert_eq!(&state.display()[..locked], &target[..locked]);
        }
    }

    #[test]
    fn completes_after_exact_tick_budget() {
        let mut state = reveal("Don't Stick");
        let plan = state.start(1000).unwrap();
        assert_eq!(plan.total_ticks, 33);

        let mut frames = 0;
        loop {
            match state.reveal_tick() {
                Tick::Frame => frames += 1,
                Tick::Completed => break,
                Tick::Ignored => panic!("reveal stalled"),
            }
        }
        assert_eq!(frames + 1, plan.total_ticks);
        assert!(state.is_completed());
        assert_eq!(state.display(), "Don't Stick");
    }

    #[test]
    fn completed_state_is_permanent() {
        let mut state = reveal("Stick");
        state.start(150).unwrap();
        while state.reveal_tick() != Tick::Completed {}

        assert_eq!(state.reveal_tick(), Tick::Ignored);
        assert_eq!(state.scramble_tick(), Tick::Ignored);
        assert_eq!(state.start(150), None);
        assert_eq!(state.display(), "Stick");
    }

    #[test]
    fn second_start_is_ignored_mid_reveal() {
        let mut state = reveal("Money");
        state.start(300).unwrap();
        state.reveal_tick();
        assert_eq!(state.start(300), None);
        assert!(matches!(state.phase(), Phase::Revealing { iteration: 1, .. }));
    }

    #[test]
    fn idle_scramble_stops_once_revealing() {
        let mut state = reveal("Money");
        state.start(300).unwrap();
        assert_eq!(state.scramble_tick(), Tick::Ignored);
    }

    #[test]
    fn empty_target_completes_on_start() {
        let mut state = reveal("");
        assert_eq!(state.display(), "");
        let plan = state.start(1000).unwrap();
        assert_eq!(plan.total_ticks, 0);
        assert!(state.is_completed());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut state = reveal("naïve ×");
        assert_eq!(state.display().chars().count(), 7);
        let plan = state.start(700).unwrap();
        assert_eq!(plan.total_ticks, 21);
        while state.reveal_tick() != Tick::Completed {}
        assert_eq!(state.display(), "naïve ×");
    }
}
