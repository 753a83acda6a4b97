//! ViewSelector - the one piece of user-mutable state in a dashboard.

use tracing::debug;

use super::view_mode::ViewMode;

/// Holds the currently selected view mode.
///
/// Every mode is reachable from every other; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSelector<V: ViewMode> {
    current: V,
}

impl<V: ViewMode> ViewSelector<V> {
    /// Starts in the role's primary active mode.
    pub fn new() -> Self {
        Self {
            current: V::default(),
        }
    }

    pub fn starting_at(mode: V) -> Self {
        Self { current: mode }
    }

    pub fn current(&self) -> V {
        self.current
    }

    /// Selects `mode`, returning true if the selection changed.
    pub fn select(&mut self, mode: V) -> bool {
        if self.current == mode {
            return false;
        }
        debug!(from = %self.current, to = %mode, "view mode changed");
        self.current = mode;
        true
    }
}

impl<V: ViewMode> Default for ViewSelector<V> {
    fn default() -> Self {
        Self::new()
    }
}
