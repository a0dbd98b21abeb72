//! Placeholder placement from the pointer position.
//!
//! Slots are the children of the flow with the dragged item excluded and
//! the placeholder included at its current position. The resolver maps a
//! pointer `y` to an insertion point among those slots:
//!
//! 1. above the first slot's top edge: 0
//! 2. below the last slot's bottom edge: the number of slots
//! 3. otherwise the first slot whose vertical span contains `y`: its index
//!    when `y` is strictly above its midpoint, its index + 1 otherwise
//!
//! A pointer exactly on a midpoint resolves to "after", so repeated
//! identical samples never oscillate. A pointer in a gap between slots
//! resolves to nothing.

use crate::element::{ListElement, Node};
use crate::geometry::GeometryProbe;
use kurbo::Rect;

/// Decision for one movement sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The placeholder already sits at the target; no flow mutation.
    Unchanged,
    /// Move the placeholder so it occupies slot `to`.
    Move { to: usize },
}

/// Insertion point for a pointer at `y`, in `0..=slots.len()`.
pub fn insertion_point(y: f64, slots: &[Rect]) -> Option<usize> {
    let (first, last) = (slots.first()?, slots.last()?);
    if y < first.y0 {
        return Some(0);
    }
    if y > last.y1 {
        return Some(slots.len());
    }
    slots
        .iter()
        .position(|slot| slot.y0 <= y && y <= slot.y1)
        .map(|index| {
            let slot = &slots[index];
            let midpoint = slot.y0 + slot.height() / 2.0;
            if y < midpoint { index } else { index + 1 }
        })
}

/// Computes where the placeholder should sit for each movement sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResolver {
    dragged_height: f64,
}

impl PlacementResolver {
    /// Create a resolver for a dragged item of the given height.
    pub fn new(dragged_height: f64) -> Self {
        Self { dragged_height }
    }

    /// Height of the dragged item.
    pub fn dragged_height(&self) -> f64 {
        self.dragged_height
    }

    /// Slot geometries for the current flow, one per child.
    ///
    /// Children the probe cannot measure are stacked directly below the
    /// previous slot; an unmeasured placeholder takes the dragged item's
    /// height, anything else collapses to zero height.
    pub fn slots<P: GeometryProbe + ?Sized>(&self, probe: &P, element: &ListElement) -> Vec<Rect> {
        let container = probe.container_bounds(element);
        let mut bottom = container.y0;
        element
            .children()
            .iter()
            .zip(probe.flow_bounds(element))
            .map(|(&node, bounds)| {
                let rect = bounds.unwrap_or_else(|| {
                    let height = match node {
                        Node::Placeholder => self.dragged_height,
                        Node::Item(_) => 0.0,
                    };
                    Rect::new(container.x0, bottom, container.x1, bottom + height)
                });
                bottom = rect.y1;
                rect
            })
            .collect()
    }

    /// Decide the placeholder's next slot.
    ///
    /// Inserting directly before or directly after the placeholder leaves it
    /// where it is, so both report [`Placement::Unchanged`].
    pub fn resolve(&self, y: f64, slots: &[Rect], placeholder_index: usize) -> Placement {
        let Some(target) = insertion_point(y, slots) else {
            return Placement::Unchanged;
        };
        let slot = if target > placeholder_index { target - 1 } else { target };
        if slot == placeholder_index {
            Placement::Unchanged
        } else {
            Placement::Move { to: slot }
        }
    }
}
