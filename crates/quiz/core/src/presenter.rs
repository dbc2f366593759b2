//! Per-question interaction state.

/// Tracks the player's interaction with the question at `index`: which
/// alternative is selected and whether the verdict has been revealed.
///
/// A presenter lives exactly as long as its question is on screen. Advancing
/// replaces it wholesale, so selection and reveal state can never leak from
/// one question into the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presenter {
    index: usize,
    selected: Option<usize>,
    revealed: bool,
}

impl Presenter {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            selected: None,
            revealed: false,
        }
    }

    /// Zero-based index of the question this presenter fronts.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the verdict is on screen and input is locked out.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Submission is enabled only after a selection and before the reveal.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.revealed
    }

    pub(crate) fn select(&mut self, alternative: usize) {
        self.selected = Some(alternative);
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }
}
