use std::time::Duration;

use tracing::trace;

use super::Direction;

pub const GESTURE_GAP: Duration = Duration::from_millis(200);
pub const GESTURE_THRESHOLD: f32 = 0.7;

/// Identifies one connected controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(pub u32);

/// One reading from a touch surface. Axes are in `[-1, 1]`; `at` is the
/// time since the input session started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSample {
    pub x: f32,
    pub y: f32,
    pub at: Duration,
}

impl AxisSample {
    pub fn new(x: f32, y: f32, at: Duration) -> Self {
        Self { x, y, at }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub gap: Duration,
    pub threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            gap: GESTURE_GAP,
            threshold: GESTURE_THRESHOLD,
        }
    }
}

/// Turns a stream of analog samples into at most one direction per swipe.
///
/// A swipe ends when no sample arrives for longer than the configured gap.
/// Within a swipe, the first direction whose accumulated travel crosses the
/// threshold fires and locks the swipe; only a pause unlocks it.
#[derive(Debug, Clone)]
pub struct GestureAccumulator {
    config: GestureConfig,
    last_x: f32,
    last_y: f32,
    total_x: f32,
    total_y: f32,
    last_event_time: Option<Duration>,
    is_new_gesture: bool,
}

impl Default for GestureAccumulator {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureAccumulator {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            last_x: 0.0,
            last_y: 0.0,
            total_x: 0.0,
            total_y: 0.0,
            last_event_time: None,
            is_new_gesture: true,
        }
    }

    pub fn feed(&mut self, sample: AxisSample) -> Option<Direction> {
        let gap_elapsed = match self.last_event_time {
            Some(last) => sample.at.saturating_sub(last) > self.config.gap,
            None => true,
        };
        if gap_elapsed {
            self.total_x = 0.0;
            self.total_y = 0.0;
            self.last_x = sample.x;
            self.last_y = sample.y;
            self.is_new_gesture = true;
        }
        self.last_event_time = Some(sample.at);

        self.total_x += sample.x - self.last_x;
        self.last_x = sample.x;
        self.total_y += sample.y - self.last_y;
        self.last_y = sample.y;

        if !self.is_new_gesture {
            return None;
        }

        let threshold = self.config.threshold;
        let direction = if self.total_y > threshold {
            Direction::Up
        } else if self.total_y < -threshold {
            Direction::Down
        } else if self.total_x > threshold {
            Direction::Right
        } else if self.total_x < -threshold {
            Direction::Left
        } else {
            return None;
        };

        trace!(?direction, total_x = self.total_x, total_y = self.total_y, "gesture_fired");
        self.is_new_gesture = false;
        Some(direction)
    }

    pub fn is_locked(&self) -> bool {
        !self.is_new_gesture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn feed_all(acc: &mut GestureAccumulator, samples: &[(f32, f32, u64)]) -> Vec<Direction> {
        samples
            .iter()
            .filter_map(|&(x, y, t)| acc.feed(AxisSample::new(x, y, at(t))))
            .collect()
    }

    #[test]
    fn swipe_up_fires_once_on_crossing_sample() {
        let mut acc = GestureAccumulator::default();
        assert_eq!(acc.feed(AxisSample::new(0.0, 0.0, at(1_000))), None);
        assert_eq!(acc.feed(AxisSample::new(0.0, 0.8, at(1_050))), Some(Direction::Up));
        assert_eq!(acc.feed(AxisSample::new(0.0, 0.8, at(1_100))), None);
        assert!(acc.is_locked());
    }

    #[test]
    fn each_direction_fires_with_the_right_sign() {
        for (x, y, expected) in [
            (0.0, -0.8, Direction::Down),
            (0.8, 0.0, Direction::Right),
            (-0.8, 0.0, Direction::Left),
        ] {
            let mut acc = GestureAccumulator::default();
            let fired = feed_all(&mut acc, &[(0.0, 0.0, 0), (x, y, 20)]);
            assert_eq!(fired, vec![expected]);
        }
    }

    #[test]
    fn jitter_below_threshold_is_ignored() {
        let mut acc = GestureAccumulator::default();
        let fired = feed_all(
            &mut acc,
            &[(0.0, 0.0, 0), (0.1, 0.2, 30), (-0.1, 0.1, 60), (0.2, -0.3, 90)],
        );
        assert!(fired.is_empty());
    }

    #[test]
    fn pause_starts_a_new_gesture() {
        let mut acc = GestureAccumulator::default();
        let fired = feed_all(
            &mut acc,
            &[
                (0.0, 0.0, 0),
                (0.0, 0.8, 50),
                // more than 200ms of silence
                (0.0, 0.0, 400),
                (0.0, 0.8, 450),
            ],
        );
        assert_eq!(fired, vec![Direction::Up, Direction::Up]);
    }

    #[test]
    fn swipes_without_a_pause_fire_once() {
        let mut acc = GestureAccumulator::default();
        let fired = feed_all(
            &mut acc,
            &[
                (0.0, 0.0, 0),
                (0.0, 0.8, 50),
                (0.0, 0.0, 150),
                (0.0, -0.9, 250),
                (0.9, 0.0, 350),
            ],
        );
        assert_eq!(fired, vec![Direction::Up]);
    }

    #[test]
    fn slow_drag_fires_once() {
        let mut acc = GestureAccumulator::default();
        let samples: Vec<_> = (0..=20)
            .map(|i| (i as f32 * 0.1 - 1.0, 0.0_f32, i as u64 * 100))
            .collect();
        assert_eq!(feed_all(&mut acc, &samples), vec![Direction::Right]);
    }

    #[test]
    fn up_beats_right_on_a_diagonal() {
        let mut acc = GestureAccumulator::default();
        let fired = feed_all(&mut acc, &[(0.0, 0.0, 0), (0.8, 0.8, 20)]);
        assert_eq!(fired, vec![Direction::Up]);
    }

    #[test]
    fn first_sample_only_anchors() {
        let mut acc = GestureAccumulator::default();
        assert_eq!(acc.feed(AxisSample::new(0.9, 0.9, at(0))), None);
        assert!(!acc.is_locked());

        let mut acc = GestureAccumulator::default();
        assert_eq!(acc.feed(AxisSample::new(0.0, 0.8, at(50))), None);
        assert_eq!(acc.feed(AxisSample::new(0.0, 0.8, at(100))), None);
    }

    #[test]
    fn custom_threshold_and_gap() {
        let mut acc = GestureAccumulator::new(GestureConfig {
            gap: Duration::from_millis(50),
            threshold: 0.3,
        });
        let fired = feed_all(
            &mut acc,
            &[(0.0, 0.0, 0), (0.0, 0.4, 20), (0.0, 0.0, 100), (0.0, -0.4, 120)],
        );
        assert_eq!(fired, vec![Direction::Up, Direction::Down]);
    }
}
