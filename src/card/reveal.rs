use super::constants::{REVEAL_TICK_MS, ROW_SEPARATOR};
use super::heart::build_pattern;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Revealing,
    Done,
}

/// Character-by-character disclosure of a heart pattern.
///
/// The pending timer is the `elapsed` accumulator: it only exists while the
/// state is `Revealing` and is dropped on restart, reset and completion, so a
/// stale reveal can never keep writing into the displayed text.
#[derive(Clone, Debug)]
pub struct RevealScheduler {
    state: RevealState,
    rows: Vec<Vec<char>>,
    row: usize,
    col: usize,
    displayed: String,
    interval: Duration,
    elapsed: Duration,
}

impl Default for RevealScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(REVEAL_TICK_MS))
    }
}

impl RevealScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: RevealState::Idle,
            rows: Vec::new(),
            row: 0,
            col: 0,
            displayed: String::new(),
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    /// Begin revealing the heart for `name`. Whitespace-only names are
    /// ignored and leave every field untouched.
    pub fn start(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.begin(build_pattern(name));
        true
    }

    /// Begin revealing an already generated pattern.
    pub fn begin(&mut self, pattern: Vec<String>) {
        self.cancel_timer();
        self.displayed.clear();
        self.rows = pattern.into_iter().map(|r| r.chars().collect()).collect();
        self.row = 0;
        self.col = 0;
        self.state = RevealState::Revealing;
    }

    pub fn reset(&mut self) {
        self.cancel_timer();
        self.displayed.clear();
        self.rows.clear();
        self.row = 0;
        self.col = 0;
        self.state = RevealState::Idle;
    }

    /// One timer tick. Returns whether the reveal is still running afterwards.
    pub fn tick(&mut self) -> bool {
        if self.state != RevealState::Revealing {
            return false;
        }
        match self.rows.get(self.row) {
            Some(row) if self.col < row.len() => {
                self.displayed.push(row[self.col]);
                self.col += 1;
            }
            Some(_) => {
                self.row += 1;
                self.col = 0;
                if self.row < self.rows.len() {
                    self.displayed.push(ROW_SEPARATOR);
                } else {
                    self.finish();
                }
            }
            None => self.finish(),
        }
        self.state == RevealState::Revealing
    }

    /// Feed elapsed wall time; fires one tick per full interval and keeps the
    /// remainder for the next call. Returns the number of ticks fired.
    pub fn advance(&mut self, dt: Duration) -> usize {
        if self.state != RevealState::Revealing {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval && self.state == RevealState::Revealing {
            self.elapsed -= self.interval;
            self.tick();
            fired += 1;
        }
        fired
    }

    fn finish(&mut self) {
        self.cancel_timer();
        self.state = RevealState::Done;
        log::info!("[reveal] done ({} chars)", self.displayed.len());
    }

    #[inline]
    fn cancel_timer(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    /// Current `(row, column)` cursor into the pattern.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks needed from `start` to `Done`: every character plus one
    /// end-of-row tick per row.
    pub fn total_ticks(&self) -> usize {
        self.rows.iter().map(|r| r.len() + 1).sum()
    }
}
