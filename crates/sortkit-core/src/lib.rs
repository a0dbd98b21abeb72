//! SortKit Core Library
//!
//! Platform-agnostic drag-and-drop list reordering: the item registry, the
//! rendered flow, placement resolution and the drag session lifecycle.

pub mod config;
pub mod element;
pub mod events;
pub mod fetch;
pub mod geometry;
pub mod input;
pub mod item;
pub mod placement;
pub mod registry;
pub mod session;
pub mod surface;
pub mod widget;

pub use config::{ConfigError, ConfigResult, ListConfig};
pub use element::{FloatingItem, ListElement, Node, Placeholder};
pub use events::{EventScope, GestureStream, GestureSubscriptions, ListenerTable, OwnerId, Subscription, SubscriptionId};
pub use fetch::{AbortController, AbortSignal, Fetch, FetchError, FetchResult, MemoryFetch};
pub use geometry::{DEFAULT_ROW_HEIGHT, GeometryProbe, StackLayout};
pub use input::{MouseButton, PointerEvent};
pub use item::{Affordance, Affordances, Item, ItemId, Region};
pub use placement::{Placement, PlacementResolver, insertion_point};
pub use registry::ItemRegistry;
pub use session::{DragSession, SessionEnd, SessionSummary};
pub use surface::{GestureOutcome, SortableList};
pub use widget::{Widget, WidgetState};
