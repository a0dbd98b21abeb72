//! Lifecycle contract shared by dashboard widgets.
//!
//! Charts, tables, pickers and the sortable list all follow the same
//! mount/update/destroy protocol:
//! - `render` mounts (idempotently) and returns the root element
//! - `update` feeds new data to a mounted widget
//! - `destroy` releases every listener and detaches the root; repeatable

mod state;

pub use state::WidgetState;

/// A presentational widget hosted on a dashboard page.
pub trait Widget {
    /// Root element type handed to the host.
    type Element;

    /// Mount the widget if needed and return its root element.
    fn render(&mut self) -> &Self::Element;

    /// Replace the widget's data. Widgets without data ignore it.
    fn update(&mut self, _data: &serde_json::Value) {}

    /// Tear the widget down. Calling it again is a no-op.
    fn destroy(&mut self);

    /// Current lifecycle state.
    fn state(&self) -> WidgetState;
}
