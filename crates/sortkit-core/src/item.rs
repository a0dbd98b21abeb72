//! Items displayed by a sortable list and their interactive regions.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for list items.
pub type ItemId = Uuid;

/// Which affordance a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affordance {
    /// Starts a drag gesture.
    Grab,
    /// Removes the item immediately.
    Delete,
}

/// A sub-region of an item, in item-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Region {
    /// Fixed rectangle relative to the item's top-left corner.
    Rect(Rect),
    /// Full-height strip of the given width along the item's left edge.
    Leading(f64),
    /// Full-height strip of the given width along the item's right edge.
    Trailing(f64),
}

impl Region {
    /// Resolve the region against the item's current footprint.
    pub fn resolve(&self, size: Size) -> Rect {
        match *self {
            Region::Rect(rect) => rect,
            Region::Leading(width) => Rect::new(0.0, 0.0, width.min(size.width), size.height),
            Region::Trailing(width) => {
                Rect::new((size.width - width).max(0.0), 0.0, size.width, size.height)
            }
        }
    }
}

/// The grab and delete regions of an item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Affordances {
    /// Pressing here starts a drag.
    pub grab: Option<Region>,
    /// Pressing here removes the item.
    pub delete: Option<Region>,
}

impl Affordances {
    /// Create affordances from explicit regions.
    pub fn new(grab: Region, delete: Region) -> Self {
        Self {
            grab: Some(grab),
            delete: Some(delete),
        }
    }

    /// Grab handle on the left edge, delete handle on the right edge.
    pub fn edge_handles(handle_width: f64) -> Self {
        Self::new(Region::Leading(handle_width), Region::Trailing(handle_width))
    }

    /// Only a grab region; the item cannot be deleted.
    pub fn grab_only(grab: Region) -> Self {
        Self {
            grab: Some(grab),
            delete: None,
        }
    }

    /// Find the affordance under `local`, a point relative to the item's
    /// top-left corner. Grab wins when the regions overlap.
    pub fn hit_test(&self, local: Point, size: Size) -> Option<Affordance> {
        if self.grab.is_some_and(|region| region.resolve(size).contains(local)) {
            return Some(Affordance::Grab);
        }
        if self.delete.is_some_and(|region| region.resolve(size).contains(local)) {
            return Some(Affordance::Delete);
        }
        None
    }
}

/// A caller-supplied visual unit with stable identity.
///
/// The list never recreates an item's content; reordering only changes
/// where the item sits.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<T> {
    id: ItemId,
    /// Caller content, opaque to the engine.
    pub content: T,
    /// Interactive regions.
    pub affordances: Affordances,
}

impl<T> Item<T> {
    /// Create an item with a fresh identity and no affordances.
    pub fn new(content: T) -> Self {
        Self::with_id(Uuid::new_v4(), content)
    }

    /// Create an item with a caller-chosen identity.
    pub fn with_id(id: ItemId, content: T) -> Self {
        Self {
            id,
            content,
            affordances: Affordances::default(),
        }
    }

    /// Set the item's affordances.
    pub fn with_affordances(mut self, affordances: Affordances) -> Self {
        self.affordances = affordances;
        self
    }

    /// The item's stable identity.
    pub fn id(&self) -> ItemId {
        self.id
    }
}
