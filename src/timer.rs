//! Session clock and its audible cues.

use std::time::Instant;

/// An audible cue emitted by a running clock.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Beep {
    /// Every other second.
    Short,
    /// Every third second, starting at zero.
    Long,
}

impl Beep {
    /// How long the tone plays.
    pub fn duration_ms(self) -> u32 {
        match self {
            Self::Short => 90,
            Self::Long => 180,
        }
    }

    /// Pitch of the tone.
    pub fn frequency_hz(self) -> u32 {
        match self {
            Self::Short => 660,
            Self::Long => 880,
        }
    }
}

/// Turns a stream of elapsed times into one [`Beep`] per whole second.
#[derive(Copy, Clone, Debug, Default)]
pub struct BeepClock {
    last_second: Option<u64>,
}

impl BeepClock {
    /// Report `elapsed` seconds since the start.
    /// Returns a beep the first time each whole second is seen.
    pub fn tick(&mut self, elapsed: f64) -> Option<Beep> {
        let second = elapsed.max(0.0).floor() as u64;
        if self.last_second == Some(second) {
            return None;
        }

        self.last_second = Some(second);
        Some(if second % 3 == 0 { Beep::Long } else { Beep::Short })
    }

    /// Forget the seconds seen so far, so that the next tick beeps.
    pub fn reset(&mut self) {
        self.last_second = None;
    }
}

/// A wall-clock timer with a [`BeepClock`] attached.
#[derive(Clone, Debug, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    stopped_at: f64,
    clock: BeepClock,
}

impl Stopwatch {
    /// Start from zero, discarding any earlier reading.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.stopped_at = 0.0;
        self.clock.reset();
    }

    /// Stop the watch and return the elapsed seconds.
    pub fn stop(&mut self) -> f64 {
        self.stopped_at = self.elapsed();
        self.started = None;
        self.stopped_at
    }

    /// Started and not yet stopped.
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Seconds since [`Self::start`], or the stopped reading.
    pub fn elapsed(&self) -> f64 {
        self.started.map_or(self.stopped_at, |started| started.elapsed().as_secs_f64())
    }

    /// The elapsed seconds and any beep due. Stopped watches never beep.
    pub fn poll(&mut self) -> (f64, Option<Beep>) {
        let elapsed = self.elapsed();
        let beep = if self.is_running() { self.clock.tick(elapsed) } else { None };
        (elapsed, beep)
    }
}

/// Format seconds as `HH:MM:SS.cc`.
pub fn format_elapsed(secs: f64) -> String {
    let secs = secs.max(0.0);
    let whole = secs.floor() as u64;
    let centis = ((secs - secs.floor()) * 100.0).floor() as u64;
    format!("{:02}:{:02}:{:02}.{:02}", whole / 3600, whole % 3600 / 60, whole % 60, centis)
}
