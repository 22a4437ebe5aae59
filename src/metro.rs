use std::time::{Duration, Instant};

const STEPS_PER_BEAT: u32 = 4;

/// Fixed-interval scheduler. Owns the state so ticks and input handling never overlap.
pub struct Metro<State> {
    interval: Duration,
    last_execution: Instant,
    state: State,
}

/// Period of one sixteenth note.
pub fn interval_from_bpm(bpm: u32) -> Duration {
    let beat_ms = 60_000. / bpm.max(1) as f32;
    let interval_ms = beat_ms / STEPS_PER_BEAT as f32;
    Duration::from_millis(interval_ms as u64)
}

impl<State> Metro<State> {
    pub fn new(interval: Duration, state: State) -> Self {
        Self {
            interval,
            last_execution: Instant::now(),
            state,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    fn is_ready(&self) -> bool {
        Instant::now() >= self.last_execution + self.interval
    }

    /// One scheduling pass: tick if due, otherwise drain input until it runs
    /// dry or the next tick comes due. Returns whether a tick ran.
    pub fn step<Tick, HandleEvent>(
        &mut self,
        tick: &mut Tick,
        handle_event: &mut HandleEvent,
    ) -> bool
    where
        Tick: FnMut(&mut State),
        HandleEvent: FnMut(&mut State) -> bool,
    {
        if self.is_ready() {
            tick(&mut self.state);
            self.last_execution = Instant::now();
            return true;
        }

        while !self.is_ready() {
            if !handle_event(&mut self.state) {
                std::thread::sleep(Duration::from_millis(1));
                break;
            }
        }
        false
    }

    pub fn forever<Tick, HandleEvent>(mut self, mut tick: Tick, mut handle_event: HandleEvent) -> !
    where
        Tick: FnMut(&mut State),
        HandleEvent: FnMut(&mut State) -> bool,
    {
        loop {
            self.step(&mut tick, &mut handle_event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bpm_maps_to_sixteenths() {
        assert_eq!(interval_from_bpm(150), Duration::from_millis(100));
        assert_eq!(interval_from_bpm(120), Duration::from_millis(125));
    }

    #[test]
    fn drains_input_before_first_tick() {
        let mut metro = Metro::new(Duration::from_secs(60), (0, 3));
        let ticked = metro.step(
            &mut |state: &mut (u32, u32)| state.0 += 1,
            &mut |state: &mut (u32, u32)| {
                if state.1 == 0 {
                    false
                } else {
                    state.1 -= 1;
                    true
                }
            },
        );
        assert!(!ticked);
        assert_eq!(*metro.state(), (0, 0));
    }

    #[test]
    fn ticks_once_due() {
        let mut metro = Metro::new(Duration::ZERO, 0u32);
        assert!(metro.step(&mut |n: &mut u32| *n += 1, &mut |_: &mut u32| false));
        assert!(metro.step(&mut |n: &mut u32| *n += 1, &mut |_: &mut u32| false));
        assert_eq!(*metro.state(), 2);
    }
}
