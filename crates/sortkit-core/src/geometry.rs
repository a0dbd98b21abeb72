//! Geometry queries for displayed list nodes.
//!
//! The list never measures anything itself. Hosts inject a [`GeometryProbe`]
//! that answers bounds queries in one shared coordinate space, which keeps
//! the placement logic testable without a rendering surface.

use crate::element::{ListElement, Node};
use crate::item::ItemId;
use kurbo::{Point, Rect, Size};
use std::collections::HashMap;

/// Default row height for items without a recorded height.
pub const DEFAULT_ROW_HEIGHT: f64 = 40.0;

/// Answers bounding-box queries for a mounted list.
///
/// Implementations must be free of side effects and cheap: the list calls
/// into the probe for every sibling on every pointer-movement sample.
pub trait GeometryProbe {
    /// Bounds of a node, or `None` if it is not displayed.
    ///
    /// The element is passed so probes that compute layout can read the
    /// current flow; probes backed by a live layout may ignore it.
    fn bounds_of(&self, element: &ListElement, node: Node) -> Option<Rect>;

    /// Bounds of the list container.
    fn container_bounds(&self, element: &ListElement) -> Rect;

    /// Bounds of every child of the flow, in display order.
    fn flow_bounds(&self, element: &ListElement) -> Vec<Option<Rect>> {
        element
            .children()
            .iter()
            .map(|&node| self.bounds_of(element, node))
            .collect()
    }
}

/// Vertical stack layout: rows laid out top to bottom from an origin.
///
/// Items use their recorded height or the default row height; the
/// placeholder takes the footprint recorded when the drag started.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout {
    origin: Point,
    width: f64,
    row_height: f64,
    gap: f64,
    heights: HashMap<ItemId, f64>,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self::new(Point::ZERO, 0.0)
    }
}

impl StackLayout {
    /// Create a layout anchored at `origin` with a fixed width.
    pub fn new(origin: Point, width: f64) -> Self {
        Self {
            origin,
            width,
            row_height: DEFAULT_ROW_HEIGHT,
            gap: 0.0,
            heights: HashMap::new(),
        }
    }

    /// Set the default row height.
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// Set the vertical gap between rows.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Top-left corner of the first row.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the layout.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Row width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Change the row width.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Default row height.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Change the default row height.
    pub fn set_row_height(&mut self, row_height: f64) {
        self.row_height = row_height;
    }

    /// Gap between rows.
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Change the gap between rows.
    pub fn set_gap(&mut self, gap: f64) {
        self.gap = gap;
    }

    /// Record a height for one item, overriding the default row height.
    pub fn set_item_height(&mut self, id: ItemId, height: f64) {
        self.heights.insert(id, height);
    }

    fn height_of(&self, element: &ListElement, node: Node) -> f64 {
        match node {
            Node::Item(id) => self.heights.get(&id).copied().unwrap_or(self.row_height),
            Node::Placeholder => element
                .placeholder()
                .map_or(self.row_height, |placeholder| placeholder.size.height),
        }
    }

    fn row(&self, top: f64, height: f64) -> Rect {
        Rect::new(self.origin.x, top, self.origin.x + self.width, top + height)
    }
}

impl GeometryProbe for StackLayout {
    fn bounds_of(&self, element: &ListElement, node: Node) -> Option<Rect> {
        if let Node::Item(id) = node {
            if let Some(floating) = element.floating().filter(|floating| floating.item == id) {
                return Some(floating.rect());
            }
        }
        let mut top = self.origin.y;
        for &child in element.children() {
            let height = self.height_of(element, child);
            if child == node {
                return Some(self.row(top, height));
            }
            top += height + self.gap;
        }
        None
    }

    fn container_bounds(&self, element: &ListElement) -> Rect {
        let rows: f64 = element
            .children()
            .iter()
            .map(|&node| self.height_of(element, node))
            .sum();
        let gaps = self.gap * element.len().saturating_sub(1) as f64;
        Rect::from_origin_size(self.origin, Size::new(self.width, rows + gaps))
    }

    // Single pass instead of one scan per child.
    fn flow_bounds(&self, element: &ListElement) -> Vec<Option<Rect>> {
        let mut top = self.origin.y;
        element
            .children()
            .iter()
            .map(|&node| {
                let height = self.height_of(element, node);
                let rect = self.row(top, height);
                top += height + self.gap;
                Some(rect)
            })
            .collect()
    }
}
