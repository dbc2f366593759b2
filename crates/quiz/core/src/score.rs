//! Scoring and end-of-session summary.

/// Number of correct outcomes in a result log.
pub fn score(results: &[bool]) -> usize {
    results.iter().filter(|&&correct| correct).count()
}

/// Aggregated view of a result log, as shown on the result screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub correct: usize,
    pub total: usize,
}

impl Summary {
    pub fn from_results(results: &[bool]) -> Self {
        Self {
            correct: score(results),
            total: results.len(),
        }
    }

    /// Hit rate as a whole percentage; zero for an empty log.
    pub fn percent(&self) -> u16 {
        if self.total == 0 {
            0
        } else {
            (self.correct * 100 / self.total) as u16
        }
    }
}
