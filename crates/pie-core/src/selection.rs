// File: crates/pie-core/src/selection.rs
// Summary: Selection state, its transition on a hit, and the item-selected callback seam.

/// The only state carried across interactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionState {
    pub highlighted_index: Option<usize>,
}

impl SelectionState {
    pub const fn new(highlighted_index: Option<usize>) -> Self {
        Self { highlighted_index }
    }

    #[inline]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted_index == Some(index)
    }

    /// Drop a highlight that no longer refers to an item of a series of `len` items.
    pub fn clamped(self, len: usize) -> Self {
        match self.highlighted_index {
            Some(i) if i >= len => Self::new(None),
            _ => self,
        }
    }
}

impl Default for SelectionState {
    /// The first item is highlighted until the user taps elsewhere.
    fn default() -> Self {
        Self::new(Some(0))
    }
}

/// Transition on a tap: a hit replaces the highlight, a miss keeps the state.
pub fn apply_hit(state: SelectionState, hit: Option<usize>) -> SelectionState {
    match hit {
        Some(index) => SelectionState::new(Some(index)),
        None => state,
    }
}

/// Receiver notified once per successful hit.
pub trait ItemSelected {
    fn item_selected(&mut self, index: usize);
}

impl<F: FnMut(usize)> ItemSelected for F {
    fn item_selected(&mut self, index: usize) {
        self(index)
    }
}
