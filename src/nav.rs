use tracing::debug;

use crate::error::{ScResult, ScorecardError};
use crate::model::PERSPECTIVE_COUNT;

/// Which view the session is showing. The detail index lives inside the
/// variant, so it cannot be unset while the detail view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    Overview,
    Detail(usize),
    Summary,
}

/// Ephemeral UI-routing state layered on top of the model; not persisted.
///
/// Detail and Summary are only reachable from Overview, and only Overview is
/// reachable from them. A transition issued outside its source view is
/// dropped, mirroring a layout where those controls do not exist elsewhere.
pub struct NavigationController {
    state: NavigationState,
    edit_mode: bool,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            state: NavigationState::Overview,
            edit_mode: true,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Overview -> Detail(index). Invalid indices are a contract violation,
    /// never reachable from the fixed four-tile layout.
    pub fn open_detail(&mut self, index: usize) -> ScResult<()> {
        if index >= PERSPECTIVE_COUNT {
            return Err(ScorecardError::IndexOutOfRange {
                what: "perspective",
                index,
                len: PERSPECTIVE_COUNT,
            });
        }
        match self.state {
            NavigationState::Overview => {
                self.state = NavigationState::Detail(index);
                debug!(index, "overview -> detail");
            }
            _ => debug!(state = ?self.state, "detail selection ignored outside overview"),
        }
        Ok(())
    }

    /// Overview -> Summary.
    pub fn open_summary(&mut self) {
        match self.state {
            NavigationState::Overview => {
                self.state = NavigationState::Summary;
                debug!("overview -> summary");
            }
            _ => debug!(state = ?self.state, "summary selection ignored outside overview"),
        }
    }

    /// Detail or Summary -> Overview. No-op on Overview.
    pub fn back(&mut self) {
        match self.state {
            NavigationState::Detail(_) | NavigationState::Summary => {
                debug!(from = ?self.state, "back -> overview");
                self.state = NavigationState::Overview;
            }
            NavigationState::Overview => {}
        }
    }

    /// Flips edit mode; orthogonal to navigation and the model. Returns the
    /// new value.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        self.edit_mode
    }
}
