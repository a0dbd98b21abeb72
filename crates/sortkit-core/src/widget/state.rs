//! Widget lifecycle state.

/// Where a widget is in its mount/destroy lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Constructed but never rendered.
    #[default]
    Unmounted,
    /// Rendered and attached to the page.
    Mounted,
    /// Torn down; listeners released and root detached.
    Destroyed,
}

impl WidgetState {
    /// Check if the widget is attached to the page.
    pub fn is_mounted(&self) -> bool {
        matches!(self, Self::Mounted)
    }

    /// Check if the widget has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        matches!(self, Self::Destroyed)
    }
}
