use serde::Serialize;

/// Running tally of a quiz session.
///
/// The counters can only move through [`Score::record`], so
/// `correct <= total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one answered question.
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        }
        self.total += 1;
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.correct as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}
