use crate::grid::SIMULATION_DELTA_TIME_S;

/// Frame deltas above this are clamped before accumulation so a stall (a
/// breakpoint, an OS suspend) doesn't queue up a runaway backlog of ticks.
pub const MAX_FRAME_TIME_S: f32 = 0.25;

/// Decouples the variable wall-clock render rate from a fixed simulation
/// rate. See <https://gafferongames.com/post/fix_your_timestep/>.
///
/// Each render frame feeds its elapsed time into [`FixedTimestep::advance`],
/// which drains the accumulator in fixed-size steps, running the tick
/// callback zero or more times before the caller renders once.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step_s: f32,
    accumulator_s: f32,
    /// Monotonic simulation-clock total. Everything time-based keys off what
    /// the simulation has seen, not off wall time.
    simulation_elapsed_s: f64,
}

impl FixedTimestep {
    pub fn new() -> Self {
        FixedTimestep::with_step(SIMULATION_DELTA_TIME_S)
    }

    pub fn with_step(step_s: f32) -> Self {
        FixedTimestep {
            step_s,
            accumulator_s: 0.0,
            simulation_elapsed_s: 0.0,
        }
    }

    pub fn step_s(&self) -> f32 {
        self.step_s
    }

    pub fn simulation_elapsed_s(&self) -> f64 {
        self.simulation_elapsed_s
    }

    /// Leftover accumulator fraction in `0.0..1.0`, usable for render
    /// interpolation. Grid-stepped movement doesn't benefit, so the game
    /// renders the current state directly and ignores this.
    pub fn alpha(&self) -> f32 {
        self.accumulator_s / self.step_s
    }

    /// Consumes one frame's worth of wall-clock time, invoking `tick` once
    /// per full simulation step drained. `tick` receives the simulation
    /// elapsed total and the fixed step duration. Returns how many ticks ran.
    pub fn advance<F>(&mut self, frame_time_s: f32, mut tick: F) -> u32
    where
        F: FnMut(f64, f32),
    {
        let frame_time_s = if frame_time_s > MAX_FRAME_TIME_S {
            MAX_FRAME_TIME_S
        } else {
            frame_time_s
        };

        self.accumulator_s += frame_time_s;

        let mut ticks = 0;
        while self.accumulator_s >= self.step_s {
            tick(self.simulation_elapsed_s, self.step_s);
            self.simulation_elapsed_s += f64::from(self.step_s);
            self.accumulator_s -= self.step_s;
            ticks += 1;
        }

        ticks
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        FixedTimestep::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_frame_runs_no_ticks() {
        let mut timestep = FixedTimestep::with_step(0.01);
        let ticks = timestep.advance(0.004, |_, _| {});
        assert_eq!(ticks, 0);
        assert!(timestep.alpha() > 0.0 && timestep.alpha() < 1.0);
    }

    #[test]
    fn accumulator_carries_between_frames() {
        let mut timestep = FixedTimestep::with_step(0.01);
        assert_eq!(timestep.advance(0.004, |_, _| {}), 0);
        assert_eq!(timestep.advance(0.004, |_, _| {}), 0);
        // 0.012 accumulated in total
        assert_eq!(timestep.advance(0.004, |_, _| {}), 1);
    }

    #[test]
    fn one_frame_can_drain_several_ticks() {
        let mut timestep = FixedTimestep::with_step(0.01);
        let mut dts = vec![];
        let ticks = timestep.advance(0.035, |_, dt| dts.push(dt));
        assert_eq!(ticks, 3);
        assert!(dts.iter().all(|&dt| dt == 0.01));
    }

    #[test]
    fn stall_is_clamped() {
        let mut timestep = FixedTimestep::with_step(0.01);
        // A two second stall must only produce 0.25s worth of ticks.
        let ticks = timestep.advance(2.0, |_, _| {});
        assert_eq!(ticks, 25);
    }

    #[test]
    fn tick_count_matches_accumulated_time() {
        // For any frame sequence, total ticks == floor(sum of clamped deltas
        // / step), within float tolerance.
        let frames = [0.016f32, 0.031, 0.002, 0.3, 0.008, 0.016, 0.12, 0.0];
        let step = 0.01f32;

        let mut timestep = FixedTimestep::with_step(step);
        let mut total_ticks = 0;
        let mut accumulated = 0.0f32;
        for &frame in &frames {
            total_ticks += timestep.advance(frame, |_, _| {});
            accumulated += frame.min(MAX_FRAME_TIME_S);
        }

        let expected = (accumulated / step).floor() as u32;
        // The incremental subtraction can differ from one big division by at
        // most a single step of rounding error.
        assert!(
            total_ticks == expected || total_ticks + 1 == expected || total_ticks == expected + 1,
            "ticks {} vs expected {}",
            total_ticks,
            expected
        );
    }

    #[test]
    fn simulation_clock_is_monotonic() {
        let mut timestep = FixedTimestep::with_step(0.01);
        let mut last_seen = -1.0f64;
        for _ in 0..100 {
            timestep.advance(0.016, |elapsed, _| {
                assert!(elapsed > last_seen);
                last_seen = elapsed;
            });
        }
        let expected = timestep.simulation_elapsed_s();
        assert!((expected - last_seen - 0.01).abs() < 1e-6);
    }
}
