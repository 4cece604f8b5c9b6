//! A timed session of selection trials.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::arrangement::POSITIONS;
use crate::judge::{answers, judge, Judgement};
use crate::mark::Mark;
use crate::pattern::{Pattern, PatternSet};

/// Tiles in a selection.
pub const PICKS: usize = 3;

/// Tunables for a session.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GameConfig {
    /// Trials per session.
    pub trials: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            trials: 30,
        }
    }
}

/// Where a session is, as seen by its single mode button.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// A layout is dealt; the clock has not started.
    Idle,
    /// The clock runs and tiles may be selected.
    Running,
    /// A trial was recorded; the next press deals a new layout.
    Paused,
    /// Every trial has been played.
    Finished,
}

/// How a trial ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Outcome {
    /// [`None`] when the player stopped the clock without completing a selection.
    pub judgement: Option<Judgement>,
    /// Seconds from the start of the trial to the recording.
    pub elapsed: f64,
}

/// A timed session of trials, each a fresh shuffled layout of a random pattern.
///
/// Elapsed times are supplied by the caller so that any clock can drive the game.
pub struct Game<R: Rng> {
    patterns: PatternSet,
    config: GameConfig,
    rng: R,
    phase: Phase,
    pattern: Pattern,
    layout: [Mark; POSITIONS],
    selected: Vec<usize>,
    times: Vec<f64>,
    last: Option<Outcome>,
}

impl<R: Rng> Game<R> {
    /// A session dealing from `patterns`, with the first layout dealt and the clock not yet started.
    pub fn new(patterns: PatternSet, config: GameConfig, mut rng: R) -> Self {
        let pattern = *patterns.choose(&mut rng);
        let mut game = Self {
            patterns,
            config,
            rng,
            phase: Phase::Idle,
            pattern,
            layout: *pattern.marks(),
            selected: Vec::with_capacity(PICKS),
            times: Vec::with_capacity(config.trials),
            last: None,
        };
        game.deal();

        game
    }

    fn deal(&mut self) {
        self.pattern = *self.patterns.choose(&mut self.rng);
        self.layout = *self.pattern.marks();
        self.layout.shuffle(&mut self.rng);
        self.selected.clear();
        debug!("dealt pattern {:09b} with {} warm marks", self.pattern.index(), self.pattern.warm_total());
    }

    /// Press the mode button at `elapsed` seconds into the current trial.
    ///
    /// Starts the clock, stops it (recording the trial without a judgement), or deals the next layout and
    /// starts again. Returns the [`Outcome`] when a trial is recorded.
    pub fn press(&mut self, elapsed: f64) -> Option<Outcome> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Running;
                None
            }
            Phase::Running => Some(self.record(elapsed, None)),
            Phase::Paused => {
                self.deal();
                self.phase = Phase::Running;
                None
            }
            Phase::Finished => None,
        }
    }

    /// Select or deselect the tile at `position` while the clock runs.
    ///
    /// Selections beyond the limit are ignored. Completing a selection judges it, records the trial and
    /// returns its [`Outcome`].
    pub fn toggle(&mut self, position: usize, elapsed: f64) -> Option<Outcome> {
        if self.phase != Phase::Running || position >= POSITIONS {
            return None;
        }

        if let Some(index) = self.selected.iter().position(|p| *p == position) {
            self.selected.remove(index);
        } else if self.selected.len() < PICKS {
            self.selected.push(position);
        }

        if self.selected.len() < PICKS {
            return None;
        }

        let selection = [self.selected[0], self.selected[1], self.selected[2]].map(|p| self.layout[p]);
        let judgement = judge(selection, self.pattern.warm_total());
        Some(self.record(elapsed, Some(judgement)))
    }

    fn record(&mut self, elapsed: f64, judgement: Option<Judgement>) -> Outcome {
        let outcome = Outcome { judgement, elapsed };
        self.times.push(elapsed);
        self.last = Some(outcome);
        self.phase = if self.times.len() >= self.config.trials { Phase::Finished } else { Phase::Paused };
        debug!("trial {} recorded: {:?}", self.times.len(), outcome);

        outcome
    }

    /// Where the session is.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The pattern behind the current layout.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The marks on the grid, row-major.
    pub fn layout(&self) -> &[Mark; POSITIONS] {
        &self.layout
    }

    /// Selected positions in the order they were picked.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Number of recorded trials.
    pub fn trial(&self) -> usize {
        self.times.len()
    }

    /// Recorded times in seconds, one per trial.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The most recently recorded trial.
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }

    /// Mean recorded time, 0 before the first trial.
    pub fn average(&self) -> f64 {
        if self.times.is_empty() {
            return 0.0;
        }
        self.times.iter().sum::<f64>() / self.times.len() as f64
    }

    /// A correct selection for the current layout.
    pub fn hint(&self) -> Option<[usize; 3]> {
        answers(&self.layout, self.pattern.warm_total()).first().copied()
    }

    /// The mode button's caption; there is no button once the session is finished.
    pub fn button_label(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Idle => Some("START"),
            Phase::Running => Some("STOP"),
            Phase::Paused => Some("NEXT"),
            Phase::Finished => None,
        }
    }

    /// The status line shown under the grid, e.g. `Correct! | 1.50s`.
    pub fn feedback(&self) -> String {
        match (self.phase, self.last) {
            (Phase::Idle, _) => "Tap START".to_string(),
            (Phase::Running, _) => String::new(),
            (Phase::Finished, _) => format!("Finished! Average: {:.2}s", self.average()),
            (Phase::Paused, Some(Outcome { judgement: Some(judgement), elapsed })) => {
                let verdict = match (judgement.correct, judgement.conflict) {
                    (true, _) => "Correct!",
                    (false, true) => "Incorrect (conflict)",
                    (false, false) => "Incorrect",
                };
                format!("{} | {:.2}s", verdict, elapsed)
            }
            (Phase::Paused, Some(Outcome { judgement: None, elapsed })) => format!("{:.2}s recorded, tap NEXT", elapsed),
            (Phase::Paused, None) => String::new(),
        }
    }
}
