//! egui components for sortkit lists with Tailwind-inspired styling.
//!
//! - **List**: [`SortableListView`] hosts a [`sortkit_core::SortableList`],
//!   feeding it pointer input and painting rows, placeholder and the
//!   floating item

pub mod list;

pub use list::{ListResponse, ListStyle, SortableListView};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Medium control size (compact rows)
    pub const MEDIUM: f32 = 28.0;
    /// Default list row height
    pub const ROW_HEIGHT: f32 = 36.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Selected background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(235, 245, 255);
}
