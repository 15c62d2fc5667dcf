//! Per-view selection and hover tracking.
//!
//! Each view instance (list, map) owns its own [`ViewSelection`], so selecting a
//! piece in one view never marks it in another view showing the same data.

use crate::domain::PieceId;

/// Visual state of a single piece marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    Default,
    Hovered,
    /// Overrides hover.
    Selected,
}

/// Selected and hovered piece of one view instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSelection {
    selected: Option<PieceId>,
    hovered: Option<PieceId>,
}

impl ViewSelection {
    #[must_use]
    pub const fn selected(&self) -> Option<&PieceId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn hovered(&self) -> Option<&PieceId> {
        self.hovered.as_ref()
    }

    /// Selects `id`, replacing any prior selection.
    ///
    /// Returns `false` when `id` was already selected.
    pub fn select(&mut self, id: PieceId) -> bool {
        if self.selected.as_ref() == Some(&id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Sets or clears the hovered piece. Returns `false` when unchanged.
    pub fn hover(&mut self, id: Option<PieceId>) -> bool {
        if self.hovered == id {
            return false;
        }
        self.hovered = id;
        true
    }

    /// Clears both selection and hover. Returns `false` when already clear.
    pub fn clear(&mut self) -> bool {
        let changed = self.selected.is_some() || self.hovered.is_some();
        self.selected = None;
        self.hovered = None;
        changed
    }

    /// Drops selection or hover pointing at pieces for which `keep` is false.
    pub fn retain(&mut self, keep: impl Fn(&PieceId) -> bool) -> bool {
        let mut changed = false;
        if self.selected.as_ref().is_some_and(|id| !keep(id)) {
            self.selected = None;
            changed = true;
        }
        if self.hovered.as_ref().is_some_and(|id| !keep(id)) {
            self.hovered = None;
            changed = true;
        }
        changed
    }

    #[must_use]
    pub fn state_of(&self, id: &PieceId) -> MarkerState {
        if self.selected.as_ref() == Some(id) {
            MarkerState::Selected
        } else if self.hovered.as_ref() == Some(id) {
            MarkerState::Hovered
        } else {
            MarkerState::Default
        }
    }
}
