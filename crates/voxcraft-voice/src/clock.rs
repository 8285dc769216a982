//! Wall-clock driver for the recorder's elapsed-seconds counter.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval};

use crate::capture::{CaptureDevice, CaptureRecorder, ChunkFinalizer};

/// Ticks a [`CaptureRecorder`] once per second.
///
/// The first tick lands one full second after the clock is created, so a
/// clock created right after `start()` counts whole recorded seconds.
/// Ticks missed while the task was busy are delivered immediately on the
/// next await, which keeps the counter aligned with wall time.
#[derive(Debug)]
pub struct RecordingClock {
    interval: Interval,
}

impl RecordingClock {
    const PERIOD: Duration = Duration::from_secs(1);

    /// Clock whose first tick is one second from now.
    pub fn new() -> Self {
        Self {
            interval: interval_at(Instant::now() + Self::PERIOD, Self::PERIOD),
        }
    }

    /// Waits for the next second boundary.
    pub async fn wait(&mut self) {
        self.interval.tick().await;
    }

    /// Waits for the next second boundary, then ticks `recorder`.
    ///
    /// Returns the recorder's elapsed seconds, 0 if it is idle.
    pub async fn advance<D, F>(&mut self, recorder: &mut CaptureRecorder<D, F>) -> u32
    where
        D: CaptureDevice,
        F: ChunkFinalizer,
    {
        self.wait().await;
        recorder.tick()
    }
}

impl Default for RecordingClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeviceError;
    use voxcraft_audio::AudioFormat;

    struct Mic;

    impl CaptureDevice for Mic {
        fn open(&mut self) -> Result<(), DeviceError> {
            Ok(())
        }

        fn close(&mut self) {}
    }

    #[tokio::test(start_paused = true)]
    async fn test_advance_counts_one_per_second() {
        let mut recorder = CaptureRecorder::new(Mic, AudioFormat::synthesis());
        recorder.start().unwrap();

        let started = Instant::now();
        let mut clock = RecordingClock::new();
        for expected in 1..=3 {
            assert_eq!(clock.advance(&mut recorder).await, expected);
        }

        assert!(started.elapsed() >= Duration::from_secs(3));
        assert_eq!(recorder.elapsed_seconds(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_a_full_second() {
        let started = Instant::now();
        let mut clock = RecordingClock::default();
        clock.wait().await;
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_advance_idle_recorder_stays_zero() {
        let mut recorder = CaptureRecorder::new(Mic, AudioFormat::synthesis());
        let mut clock = RecordingClock::new();
        assert_eq!(clock.advance(&mut recorder).await, 0);
        assert_eq!(recorder.elapsed_seconds(), 0);
    }
}
