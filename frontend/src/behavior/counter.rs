use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::dom;

/// Starts fast and settles into the final value.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - progress).powi(3)
}

/// Displayed value `elapsed_ms` into an animation towards `target`.
pub fn value_at(target: u64, duration_ms: f64, elapsed_ms: f64) -> u64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    if elapsed_ms <= 0.0 {
        return 0;
    }
    let eased = (target as f64 * ease_out_cubic(elapsed_ms / duration_ms)).floor() as u64;
    eased.min(target)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterState {
    pub value: u64,
    pub target: u64,
    pub duration_ms: f64,
    pub started_at: Option<f64>,
    pub finished: bool,
    /// Bumped on every tick so the frame effect re-arms.
    pub frame: u32,
}

pub enum CounterAction {
    Configure { target: u64, duration_ms: u32 },
    Start(f64),
    Tick(f64),
    Reset,
}

impl CounterState {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        Self {
            value: 0,
            target,
            duration_ms: f64::from(duration_ms),
            started_at: None,
            finished: false,
            frame: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.finished
    }

    fn advance(&mut self, elapsed_ms: f64) {
        // Timer jitter must never make the display count backwards.
        self.value = self.value.max(value_at(self.target, self.duration_ms, elapsed_ms));
        self.finished = elapsed_ms >= self.duration_ms;
        if self.finished {
            self.value = self.target;
        }
    }

    pub fn apply(mut self, action: CounterAction) -> Self {
        match action {
            CounterAction::Configure { target, duration_ms } => {
                if target != self.target || f64::from(duration_ms) != self.duration_ms {
                    self = Self::new(target, duration_ms);
                }
            }
            CounterAction::Start(now) => {
                self.value = 0;
                self.started_at = Some(now);
                self.frame = 0;
                self.advance(0.0);
            }
            CounterAction::Tick(now) => {
                if let Some(started_at) = self.started_at.filter(|_| !self.finished) {
                    self.frame = self.frame.wrapping_add(1);
                    self.advance(now - started_at);
                }
            }
            CounterAction::Reset => {
                self = Self::new(self.target, self.duration_ms as u32);
            }
        }
        self
    }
}

impl Reducible for CounterState {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

/// Counts from zero up to `target` once `active` turns true.
#[hook]
pub fn use_animated_counter(target: u64, duration_ms: u32, active: bool) -> u64 {
    let counter = use_reducer_eq(|| CounterState::new(target, duration_ms));

    {
        let counter = counter.clone();
        use_effect_with_deps(
            move |&(target, duration_ms)| {
                counter.dispatch(CounterAction::Configure { target, duration_ms });
                || ()
            },
            (target, duration_ms),
        );
    }

    {
        let handle = counter.clone();
        let started = counter.started_at.is_some();
        use_effect_with_deps(
            move |&(active, started, finished, _frame)| {
                let mut pending = None;
                if !active {
                    if started {
                        handle.dispatch(CounterAction::Reset);
                    }
                } else if !started {
                    handle.dispatch(CounterAction::Start(dom::now_ms()));
                } else if !finished {
                    pending = Some(Timeout::new(config::COUNTER_FRAME_MS, move || {
                        handle.dispatch(CounterAction::Tick(dom::now_ms()));
                    }));
                }
                // Dropping a pending timeout cancels the next frame.
                move || drop(pending)
            },
            (active, started, counter.finished, counter.frame),
        );
    }

    counter.value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_hits_both_ends() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn five_hundred_over_two_seconds() {
        assert_eq!(value_at(500, 2000.0, 0.0), 0);
        assert_eq!(value_at(500, 2000.0, 1000.0), 437);
        assert_eq!(value_at(500, 2000.0, 2000.0), 500);
        assert_eq!(value_at(500, 2000.0, 9000.0), 500);

        let samples: Vec<u64> = (0..=200).map(|t| value_at(500, 2000.0, t as f64 * 10.0)).collect();
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(samples.iter().all(|&v| v <= 500));
    }

    #[test]
    fn zero_target_stays_zero() {
        for t in [0.0, 1.0, 999.0, 2000.0, 5000.0] {
            assert_eq!(value_at(0, 2000.0, t), 0);
        }
        let state = CounterState::new(0, 2000).apply(CounterAction::Start(10.0));
        assert_eq!(state.value, 0);
        let state = state.apply(CounterAction::Tick(2500.0));
        assert_eq!(state.value, 0);
        assert!(state.finished);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let state = CounterState::new(98, 0).apply(CounterAction::Start(0.0));
        assert_eq!(state.value, 98);
        assert!(!state.is_running());
    }

    #[test]
    fn inactive_counter_shows_zero() {
        let state = CounterState::new(1200, 2500);
        assert_eq!(state.value, 0);
        assert!(!state.is_running());
        // Ticks before activation are ignored.
        assert_eq!(state.apply(CounterAction::Tick(400.0)).value, 0);
    }

    #[test]
    fn ticks_run_to_target_and_stop() {
        let mut state = CounterState::new(500, 2000).apply(CounterAction::Start(1000.0));
        let mut values = vec![state.value];
        let mut now = 1000.0;
        while state.is_running() {
            now += 16.0;
            state = state.apply(CounterAction::Tick(now));
            values.push(state.value);
        }
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&500));
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));

        let frame = state.frame;
        let after = state.apply(CounterAction::Tick(now + 16.0));
        assert_eq!(after.frame, frame);
        assert_eq!(after.value, 500);
    }

    #[test]
    fn late_tick_never_goes_backwards() {
        let state = CounterState::new(100, 1000)
            .apply(CounterAction::Start(0.0))
            .apply(CounterAction::Tick(600.0));
        let seen = state.value;
        let state = state.apply(CounterAction::Tick(500.0));
        assert_eq!(state.value, seen);
    }

    #[test]
    fn restart_begins_from_zero() {
        let done = CounterState::new(15, 1800)
            .apply(CounterAction::Start(0.0))
            .apply(CounterAction::Tick(1800.0));
        assert_eq!(done.value, 15);

        let reset = done.apply(CounterAction::Reset);
        assert_eq!(reset.value, 0);
        assert_eq!(reset.started_at, None);

        let restarted = reset.apply(CounterAction::Start(5000.0));
        assert_eq!(restarted.value, 0);
        assert!(restarted.is_running());
    }

    #[test]
    fn reconfigure_only_resets_on_change() {
        let running = CounterState::new(98, 1600)
            .apply(CounterAction::Start(0.0))
            .apply(CounterAction::Tick(800.0));
        let same = running.clone().apply(CounterAction::Configure { target: 98, duration_ms: 1600 });
        assert_eq!(same, running);

        let changed = running.apply(CounterAction::Configure { target: 120, duration_ms: 1600 });
        assert_eq!(changed, CounterState::new(120, 1600));
    }
}
