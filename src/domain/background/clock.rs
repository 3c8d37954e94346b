use serde::{Deserialize, Deserializer, Serialize};

/// Nominal frame duration of a 60 Hz display, in seconds.
pub const NOMINAL_FRAME_SECONDS: f32 = 0.016;

/// Lower bound of any step; keeps the time uniform strictly
/// increasing when two callbacks share a timestamp.
const MIN_STEP_SECONDS: f64 = 1e-4;

/// How far the time uniform advances per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum TimeStep {
    /// Constant step per frame. Playback speed follows the refresh rate.
    Fixed {
        #[serde(deserialize_with = "positive_seconds")]
        seconds: f32,
    },
    /// Wall-clock delta between frame timestamps, capped so a backgrounded
    /// tab does not jump ahead on return.
    Measured {
        #[serde(rename = "maxSeconds", deserialize_with = "positive_seconds")]
        max_seconds: f32,
    },
}

fn positive_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    let seconds = f32::deserialize(deserializer)?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(serde::de::Error::custom(format!("time step must be a positive number of seconds, got {}", seconds)))
    }
}

impl Default for TimeStep {
    fn default() -> Self {
        TimeStep::Fixed { seconds: NOMINAL_FRAME_SECONDS }
    }
}

/// Per-session animation clock driving the `time` uniform.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: TimeStep,
    frames: u64,
    elapsed: f64,
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new(step: TimeStep) -> Self {
        Self { step, frames: 0, elapsed: 0.0, last_timestamp: None }
    }

    /// Advance by one frame. `timestamp_ms` is the scheduler's frame time and
    /// is only consulted by [`TimeStep::Measured`].
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        self.frames += 1;
        match self.step {
            // Multiplying instead of accumulating keeps every step the same size.
            TimeStep::Fixed { seconds } => {
                let seconds = (seconds as f64).max(MIN_STEP_SECONDS);
                self.elapsed = self.frames as f64 * seconds;
            }
            TimeStep::Measured { max_seconds } => {
                let delta = match self.last_timestamp {
                    Some(last) if timestamp_ms.is_finite() => (timestamp_ms - last) / 1000.0,
                    _ => NOMINAL_FRAME_SECONDS as f64,
                };
                let max = (max_seconds as f64).max(MIN_STEP_SECONDS);
                self.elapsed += delta.clamp(MIN_STEP_SECONDS, max);
            }
        }
        if timestamp_ms.is_finite() {
            self.last_timestamp = Some(timestamp_ms);
        }
        self.elapsed()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn step(&self) -> TimeStep {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_ignores_timestamps() {
        let mut clock = FrameClock::new(TimeStep::default());
        let first = clock.tick(0.0);
        let second = clock.tick(500.0);
        let third = clock.tick(501.0);
        assert!((first - 0.016).abs() < 1e-6);
        assert!((second - first - 0.016).abs() < 1e-6);
        assert!((third - second - 0.016).abs() < 1e-6);
    }

    #[test]
    fn fixed_step_does_not_drift() {
        let mut clock = FrameClock::new(TimeStep::Fixed { seconds: 0.016 });
        for _ in 0..10_000 {
            clock.tick(0.0);
        }
        assert!((clock.elapsed() - 160.0).abs() < 1e-3);
        assert_eq!(clock.frames(), 10_000);
    }

    #[test]
    fn measured_step_follows_wall_clock_and_caps_gaps() {
        let mut clock = FrameClock::new(TimeStep::Measured { max_seconds: 0.1 });
        let first = clock.tick(1000.0);
        assert!((first - NOMINAL_FRAME_SECONDS).abs() < 1e-6);
        let second = clock.tick(1008.0);
        assert!((second - first - 0.008).abs() < 1e-5);
        let third = clock.tick(9000.0);
        assert!((third - second - 0.1).abs() < 1e-5);
    }

    #[test]
    fn measured_step_is_strictly_increasing_on_repeated_timestamps() {
        let mut clock = FrameClock::new(TimeStep::Measured { max_seconds: 0.1 });
        let a = clock.tick(42.0);
        let b = clock.tick(42.0);
        let c = clock.tick(41.0);
        assert!(a < b && b < c);
    }

    #[test]
    fn time_step_reads_from_json() {
        let fixed: TimeStep = serde_json::from_str(r#"{"mode":"fixed","seconds":0.02}"#).unwrap();
        assert_eq!(fixed, TimeStep::Fixed { seconds: 0.02 });
        let measured: TimeStep =
            serde_json::from_str(r#"{"mode":"measured","maxSeconds":0.05}"#).unwrap();
        assert_eq!(measured, TimeStep::Measured { max_seconds: 0.05 });
    }

    #[test]
    fn non_positive_steps_are_rejected() {
        for json in [
            r#"{"mode":"fixed","seconds":-0.5}"#,
            r#"{"mode":"fixed","seconds":0}"#,
            r#"{"mode":"measured","maxSeconds":-1}"#,
        ] {
            assert!(serde_json::from_str::<TimeStep>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn fixed_step_built_in_code_still_moves_forward() {
        for seconds in [-0.5, 0.0, f32::NAN] {
            let mut clock = FrameClock::new(TimeStep::Fixed { seconds });
            let a = clock.tick(0.0);
            let b = clock.tick(16.0);
            assert!(a > 0.0 && b > a, "{seconds}: {a} {b}");
        }
    }
}
