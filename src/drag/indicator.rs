/// Visibility of a lane's slot indicators during a drag.
///
/// At most one indicator is lit at a time. Every highlight resets the whole
/// lane first, so repeated drag-over events converge on the same state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotIndicators {
    states: Vec<bool>,
}

impl SlotIndicators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all `count` indicators, then lights the one at `index`
    pub fn highlight(&mut self, count: usize, index: usize) {
        self.states.clear();
        self.states.resize(count, false);
        if let Some(state) = self.states.get_mut(index) {
            *state = true;
        }
    }

    /// Turns every indicator off
    pub fn clear(&mut self) {
        self.states.iter_mut().for_each(|state| *state = false);
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.states.get(index).copied().unwrap_or(false)
    }

    /// Index of the lit indicator, if any
    pub fn active_index(&self) -> Option<usize> {
        self.states.iter().position(|state| *state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
