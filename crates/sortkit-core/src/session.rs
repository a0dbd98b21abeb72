//! State of one open drag gesture.

use crate::events::GestureSubscriptions;
use crate::item::ItemId;
use kurbo::{Point, Size, Vec2};

/// How a drag session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Drop: the item lands at the placeholder's final slot.
    Commit,
    /// Pointer lost or forced teardown: the item returns to its origin.
    Revert,
}

/// Result of a closed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// The dragged item.
    pub item: ItemId,
    /// Index before the drag.
    pub from: usize,
    /// Index after the drag.
    pub to: usize,
    /// How the session ended.
    pub end: SessionEnd,
}

/// An open drag gesture.
///
/// Born on grab, mutated by movement samples, consumed exactly once by
/// [`DragSession::finish`]. It owns the gesture's document-scope listeners,
/// so however the session goes away they go with it.
#[derive(Debug)]
pub struct DragSession {
    item: ItemId,
    grab_offset: Vec2,
    origin_index: usize,
    placeholder_index: usize,
    size: Size,
    /// Placeholder moves performed during this session.
    moves: usize,
    subscriptions: GestureSubscriptions,
}

impl DragSession {
    pub(crate) fn open(
        item: ItemId,
        grab_offset: Vec2,
        origin_index: usize,
        size: Size,
        subscriptions: GestureSubscriptions,
    ) -> Self {
        Self {
            item,
            grab_offset,
            origin_index,
            placeholder_index: origin_index,
            size,
            moves: 0,
            subscriptions,
        }
    }

    /// The dragged item.
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Offset from the item's top-left corner to the pointer at grab time.
    pub fn grab_offset(&self) -> Vec2 {
        self.grab_offset
    }

    /// Index of the item when the drag started.
    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    /// Current slot of the placeholder.
    pub fn placeholder_index(&self) -> usize {
        self.placeholder_index
    }

    /// Footprint of the dragged item and its placeholder.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of placeholder moves so far.
    pub fn placeholder_moves(&self) -> usize {
        self.moves
    }

    /// Check if the gesture listeners are still registered.
    pub fn is_subscribed(&self) -> bool {
        self.subscriptions.is_active()
    }

    /// Where the floating item goes for a pointer position, so the item
    /// tracks the pointer without jumping.
    pub fn floating_origin(&self, pointer: Point) -> Point {
        pointer - self.grab_offset
    }

    pub(crate) fn set_placeholder_index(&mut self, index: usize) {
        self.placeholder_index = index;
        self.moves += 1;
    }

    /// Close the session, releasing its listeners.
    pub fn finish(mut self, end: SessionEnd) -> SessionSummary {
        self.subscriptions.release();
        let to = match end {
            SessionEnd::Commit => self.placeholder_index,
            SessionEnd::Revert => self.origin_index,
        };
        SessionSummary {
            item: self.item,
            from: self.origin_index,
            to,
            end,
        }
    }
}
