//! The sortable list surface: registry, rendered element and drag protocol.
//!
//! # State machine
//!
//! The list is either idle or dragging; dragging is exactly "a
//! [`DragSession`] is open".
//!
//! - **Idle → Dragging**: a press on a grab affordance. The item's
//!   footprint becomes a placeholder in the flow, the item moves to the
//!   floating layer, and document-scope movement/release listeners are
//!   acquired.
//! - **Dragging, movement**: the floating item follows the pointer minus the
//!   grab offset; the placeholder moves when the resolved slot changes.
//! - **Dragging → Idle, release**: the placeholder's slot is committed to
//!   the registry.
//! - **Dragging → Idle, pointer lost or destroy**: the item returns to its
//!   original slot.
//!
//! Every exit consumes the session, and the session owns the listeners, so
//! no path out of dragging leaves a listener behind.
//!
//! A press on a delete affordance removes the item immediately and never
//! opens a session. Presses of any kind are ignored while dragging, and
//! movement or release samples are ignored while idle.

use crate::config::ListConfig;
use crate::element::{ListElement, Node};
use crate::events::{EventScope, GestureSubscriptions, OwnerId};
use crate::geometry::{GeometryProbe, StackLayout};
use crate::input::{MouseButton, PointerEvent};
use crate::item::{Affordance, Item, ItemId};
use crate::placement::{Placement, PlacementResolver};
use crate::registry::ItemRegistry;
use crate::session::{DragSession, SessionEnd};
use crate::widget::{Widget, WidgetState};
use kurbo::{Point, Rect};
use std::rc::Rc;
use uuid::Uuid;

/// What a pointer sample did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The sample had no effect.
    Ignored,
    /// A drag started from `index`.
    DragStarted { item: ItemId, index: usize },
    /// The placeholder moved to slot `to`.
    PlaceholderMoved { item: ItemId, to: usize },
    /// A movement sample during a drag that needed no flow mutation.
    Unchanged,
    /// The drag was committed.
    Dropped { item: ItemId, from: usize, to: usize },
    /// The drag was abandoned and the item returned to `index`.
    Reverted { item: ItemId, index: usize },
    /// An item was removed through its delete affordance.
    Deleted { item: ItemId, index: usize },
}

impl GestureOutcome {
    /// Check if the committed order changed.
    pub fn changed_order(&self) -> bool {
        match *self {
            GestureOutcome::Dropped { from, to, .. } => from != to,
            GestureOutcome::Deleted { .. } => true,
            _ => false,
        }
    }
}

/// A list of items the user can reorder by dragging and prune by deleting.
///
/// The list owns its registry, its rendered element and at most one open
/// drag session. Several lists may share one [`EventScope`]; each
/// subscribes under its own owner id.
pub struct SortableList<T, P = StackLayout> {
    owner: OwnerId,
    registry: ItemRegistry<T>,
    element: Option<ListElement>,
    session: Option<DragSession>,
    probe: P,
    scope: Rc<dyn EventScope>,
    config: ListConfig,
    state: WidgetState,
}

impl<T, P: GeometryProbe> SortableList<T, P> {
    /// Create a list and mount it.
    pub fn new(
        items: impl IntoIterator<Item = Item<T>>,
        probe: P,
        scope: Rc<dyn EventScope>,
    ) -> Self {
        let mut list = Self {
            owner: Uuid::new_v4(),
            registry: ItemRegistry::new(items),
            element: None,
            session: None,
            probe,
            scope,
            config: ListConfig::default(),
            state: WidgetState::Unmounted,
        };
        list.render();
        list
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }

    /// Mount the list if it is not mounted and return its root element.
    ///
    /// Rendering a mounted list returns the existing element. Rendering a
    /// destroyed list mounts a fresh element from the registry.
    pub fn render(&mut self) -> &ListElement {
        if self.element.is_none() {
            log::debug!("Mounting list {} with {} items", self.owner, self.registry.len());
            self.state = WidgetState::Mounted;
        }
        let registry = &self.registry;
        self.element.get_or_insert_with(|| ListElement::mount(registry.ids()))
    }

    /// Tear the list down: revert any open drag, release its listeners and
    /// detach the root element. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!("List {} destroyed mid-drag; reverting", self.owner);
            self.close_session(session, SessionEnd::Revert);
        }
        if self.element.take().is_some() {
            log::debug!("Detached list {}", self.owner);
        }
        self.state = WidgetState::Destroyed;
    }

    /// Dispatch a pointer sample.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> GestureOutcome {
        match event {
            PointerEvent::Down { position, button } => self.pointer_down(position, button),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position, .. } => self.pointer_up(position),
            PointerEvent::Cancel => self.pointer_cancel(),
        }
    }

    /// Handle a press on the list.
    pub fn pointer_down(&mut self, position: Point, button: MouseButton) -> GestureOutcome {
        if self.session.is_some() || button != self.config.drag_button {
            return GestureOutcome::Ignored;
        }
        match self.hit_test(position) {
            Some((id, Affordance::Grab, bounds)) => self.start_drag(id, bounds, position),
            Some((id, Affordance::Delete, _)) => self.delete(id),
            None => GestureOutcome::Ignored,
        }
    }

    /// Handle a document-scope movement sample.
    pub fn pointer_move(&mut self, position: Point) -> GestureOutcome {
        let (Some(session), Some(element)) = (self.session.as_mut(), self.element.as_mut()) else {
            return GestureOutcome::Ignored;
        };
        element.set_floating_origin(session.floating_origin(position));

        let resolver = PlacementResolver::new(session.size().height);
        let slots = resolver.slots(&self.probe, element);
        match resolver.resolve(position.y, &slots, session.placeholder_index()) {
            Placement::Move { to } if element.move_placeholder(to) => {
                session.set_placeholder_index(to);
                log::trace!("Placeholder for {} moved to {}", session.item(), to);
                GestureOutcome::PlaceholderMoved {
                    item: session.item(),
                    to,
                }
            }
            _ => GestureOutcome::Unchanged,
        }
    }

    /// Handle a document-scope release sample: commit the drag.
    pub fn pointer_up(&mut self, position: Point) -> GestureOutcome {
        if self.session.is_none() {
            return GestureOutcome::Ignored;
        }
        // The release position is the last word on placement.
        self.pointer_move(position);
        match self.session.take() {
            Some(session) => self.close_session(session, SessionEnd::Commit),
            None => GestureOutcome::Ignored,
        }
    }

    /// Handle a lost pointer.
    pub fn pointer_cancel(&mut self) -> GestureOutcome {
        let Some(session) = self.session.take() else {
            return GestureOutcome::Ignored;
        };
        let end = if self.config.revert_on_cancel {
            SessionEnd::Revert
        } else {
            SessionEnd::Commit
        };
        self.close_session(session, end)
    }

    /// Find the item and affordance under a point, with the item's bounds.
    pub fn hit_test(&self, position: Point) -> Option<(ItemId, Affordance, Rect)> {
        let element = self.element.as_ref()?;
        element
            .children()
            .iter()
            .zip(self.probe.flow_bounds(element))
            .find_map(|(&node, bounds)| {
                let (Node::Item(id), Some(bounds)) = (node, bounds) else {
                    return None;
                };
                if !bounds.contains(position) {
                    return None;
                }
                let item = self.registry.get(id)?;
                let local = position - bounds.origin().to_vec2();
                let affordance = item.affordances.hit_test(local, bounds.size())?;
                Some((id, affordance, bounds))
            })
    }

    fn start_drag(&mut self, id: ItemId, bounds: Rect, pointer: Point) -> GestureOutcome {
        let Some(element) = self.element.as_mut() else {
            return GestureOutcome::Ignored;
        };
        let Some(index) = element.detach_to_placeholder(id, bounds.origin(), bounds.size()) else {
            return GestureOutcome::Ignored;
        };
        let subscriptions = GestureSubscriptions::acquire(&self.scope, self.owner);
        let grab_offset = pointer - bounds.origin();
        self.session = Some(DragSession::open(id, grab_offset, index, bounds.size(), subscriptions));
        log::debug!("Drag started for {} at index {}", id, index);
        GestureOutcome::DragStarted { item: id, index }
    }

    fn close_session(&mut self, session: DragSession, end: SessionEnd) -> GestureOutcome {
        let summary = session.finish(end);
        if let Some(element) = self.element.as_mut() {
            element.settle(summary.to);
        }
        match summary.end {
            SessionEnd::Commit => {
                self.registry.insert_before(summary.item, summary.to);
                log::debug!("Dropped {} from {} to {}", summary.item, summary.from, summary.to);
                GestureOutcome::Dropped {
                    item: summary.item,
                    from: summary.from,
                    to: summary.to,
                }
            }
            SessionEnd::Revert => {
                log::debug!("Reverted {} to {}", summary.item, summary.from);
                GestureOutcome::Reverted {
                    item: summary.item,
                    index: summary.from,
                }
            }
        }
    }

    fn delete(&mut self, id: ItemId) -> GestureOutcome {
        let Some(index) = self.registry.index_of(id) else {
            return GestureOutcome::Ignored;
        };
        self.registry.remove_at(index);
        if let Some(element) = self.element.as_mut() {
            element.remove_item(id);
        }
        log::debug!("Deleted {} at index {}", id, index);
        GestureOutcome::Deleted { item: id, index }
    }
}

impl<T, P> SortableList<T, P> {
    /// Identity used for this list's subscriptions.
    pub fn owner_id(&self) -> OwnerId {
        self.owner
    }

    /// Items in committed order.
    pub fn items(&self) -> std::slice::Iter<'_, Item<T>> {
        self.registry.iter()
    }

    /// Identities in committed order.
    pub fn order(&self) -> Vec<ItemId> {
        self.registry.ids()
    }

    /// The authoritative registry.
    pub fn registry(&self) -> &ItemRegistry<T> {
        &self.registry
    }

    /// The root element, while mounted.
    pub fn element(&self) -> Option<&ListElement> {
        self.element.as_ref()
    }

    /// The open drag session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Check if the list is mounted.
    pub fn is_mounted(&self) -> bool {
        self.element.is_some()
    }

    /// The geometry probe.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Mutable access to the geometry probe, for hosts that re-measure.
    pub fn probe_mut(&mut self) -> &mut P {
        &mut self.probe
    }

    /// Current configuration.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }
}

impl<T, P: GeometryProbe> Widget for SortableList<T, P> {
    type Element = ListElement;

    fn render(&mut self) -> &ListElement {
        SortableList::render(self)
    }

    fn destroy(&mut self) {
        SortableList::destroy(self);
    }

    fn state(&self) -> WidgetState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{GestureStream, ListenerTable};
    use crate::item::Affordances;

    const ROW: f64 = 50.0;
    const WIDTH: f64 = 200.0;
    const HANDLE: f64 = 20.0;

    struct Fixture {
        table: Rc<ListenerTable>,
        list: SortableList<&'static str>,
    }

    impl Fixture {
        fn new(labels: &[&'static str]) -> Self {
            let table = Rc::new(ListenerTable::new());
            let items = labels
                .iter()
                .map(|&label| Item::new(label).with_affordances(Affordances::edge_handles(HANDLE)));
            let layout = StackLayout::new(Point::ZERO, WIDTH).with_row_height(ROW);
            let list = SortableList::new(items, layout, table.clone());
            Self { table, list }
        }

        fn id(&self, label: &str) -> ItemId {
            self.list
                .items()
                .find(|item| item.content == label)
                .map(Item::id)
                .unwrap()
        }

        fn labels(&self) -> Vec<&'static str> {
            self.list.items().map(|item| item.content).collect()
        }

        fn flow_labels(&self) -> Vec<&'static str> {
            let element = self.list.element().unwrap();
            element
                .item_order()
                .into_iter()
                .map(|id| self.list.registry().get(id).unwrap().content)
                .collect()
        }

        /// Grab the row currently at `index`.
        fn grab(&mut self, index: usize) -> GestureOutcome {
            let y = index as f64 * ROW + ROW / 2.0;
            self.list.pointer_down(Point::new(HANDLE / 2.0, y), MouseButton::Left)
        }

        fn delete(&mut self, index: usize) -> GestureOutcome {
            let y = index as f64 * ROW + ROW / 2.0;
            self.list.pointer_down(Point::new(WIDTH - HANDLE / 2.0, y), MouseButton::Left)
        }

        fn move_to(&mut self, y: f64) -> GestureOutcome {
            self.list.pointer_move(Point::new(HANDLE / 2.0, y))
        }

        fn release(&mut self, y: f64) -> GestureOutcome {
            self.list.pointer_up(Point::new(HANDLE / 2.0, y))
        }
    }

    #[test]
    fn test_new_mounts() {
        let fx = Fixture::new(&["a", "b", "c"]);
        assert!(fx.list.is_mounted());
        assert_eq!(fx.list.state(), WidgetState::Mounted);
        assert_eq!(fx.flow_labels(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut fx = Fixture::new(&["a", "b"]);
        let first = fx.list.render().clone();
        assert_eq!(fx.list.render(), &first);
    }

    #[test]
    fn test_drag_to_midpoint_of_last() {
        // [A, B, C]: grab A, move onto C's midpoint, release -> [B, C, A]
        let mut fx = Fixture::new(&["A", "B", "C"]);
        let a = fx.id("A");

        assert_eq!(fx.grab(0), GestureOutcome::DragStarted { item: a, index: 0 });
        assert!(fx.list.is_dragging());
        assert_eq!(fx.move_to(125.0), GestureOutcome::PlaceholderMoved { item: a, to: 2 });
        assert_eq!(fx.release(125.0), GestureOutcome::Dropped { item: a, from: 0, to: 2 });

        assert_eq!(fx.labels(), vec!["B", "C", "A"]);
        assert_eq!(fx.flow_labels(), vec!["B", "C", "A"]);
        assert!(!fx.list.is_dragging());
    }

    #[test]
    fn test_drag_above_first() {
        // [A, B, C]: grab B, move above A, release -> [B, A, C]
        let mut fx = Fixture::new(&["A", "B", "C"]);
        let b = fx.id("B");

        fx.grab(1);
        assert_eq!(fx.move_to(-10.0), GestureOutcome::PlaceholderMoved { item: b, to: 0 });
        assert_eq!(fx.release(-10.0), GestureOutcome::Dropped { item: b, from: 1, to: 0 });
        assert_eq!(fx.labels(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_destroy_mid_drag_reverts() {
        let mut fx = Fixture::new(&["A", "B", "C"]);
        fx.grab(0);
        fx.move_to(125.0);
        assert_eq!(fx.table.active_count(), 2);

        fx.list.destroy();

        assert_eq!(fx.labels(), vec!["A", "B", "C"]);
        assert!(!fx.list.is_dragging());
        assert!(!fx.list.is_mounted());
        assert_eq!(fx.table.active_count(), 0);
        assert_eq!(fx.table.unsubscribe_count(), 2);
        assert_eq!(fx.move_to(10.0), GestureOutcome::Ignored);
        assert_eq!(fx.release(10.0), GestureOutcome::Ignored);
        assert_eq!(fx.labels(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_delete() {
        // [A, B, C]: delete B -> [A, C], no session
        let mut fx = Fixture::new(&["A", "B", "C"]);
        let b = fx.id("B");

        assert_eq!(fx.delete(1), GestureOutcome::Deleted { item: b, index: 1 });
        assert_eq!(fx.labels(), vec!["A", "C"]);
        assert_eq!(fx.flow_labels(), vec!["A", "C"]);
        assert!(!fx.list.is_dragging());
        assert_eq!(fx.table.subscribe_count(), 0);
    }

    #[test]
    fn test_repeated_target_moves_once() {
        let mut fx = Fixture::new(&["A", "B", "C"]);
        fx.grab(0);
        let before = fx.list.element().unwrap().mutation_count();

        assert!(matches!(fx.move_to(125.0), GestureOutcome::PlaceholderMoved { .. }));
        assert_eq!(fx.move_to(130.0), GestureOutcome::Unchanged);
        assert_eq!(fx.move_to(125.0), GestureOutcome::Unchanged);

        assert_eq!(fx.list.element().unwrap().mutation_count(), before + 1);
        assert_eq!(fx.list.session().unwrap().placeholder_moves(), 1);
    }

    #[test]
    fn test_destroy_twice() {
        let mut fx = Fixture::new(&["A", "B"]);
        fx.grab(1);
        fx.list.destroy();
        let after_first = (fx.table.subscribe_count(), fx.table.unsubscribe_count());

        fx.list.destroy();
        assert_eq!((fx.table.subscribe_count(), fx.table.unsubscribe_count()), after_first);
        assert_eq!(fx.list.state(), WidgetState::Destroyed);
        assert_eq!(fx.labels(), vec!["A", "B"]);
    }

    #[test]
    fn test_render_after_destroy_remounts() {
        let mut fx = Fixture::new(&["A", "B"]);
        fx.list.destroy();
        assert_eq!(fx.grab(0), GestureOutcome::Ignored);

        fx.list.render();
        assert_eq!(fx.list.state(), WidgetState::Mounted);
        assert_eq!(fx.flow_labels(), vec!["A", "B"]);
    }

    #[test]
    fn test_samples_without_session_ignored() {
        let mut fx = Fixture::new(&["A", "B"]);
        assert_eq!(fx.move_to(10.0), GestureOutcome::Ignored);
        assert_eq!(fx.release(10.0), GestureOutcome::Ignored);
        assert_eq!(fx.list.pointer_cancel(), GestureOutcome::Ignored);
    }

    #[test]
    fn test_press_outside_affordances_ignored() {
        let mut fx = Fixture::new(&["A", "B"]);
        let middle = Point::new(WIDTH / 2.0, ROW / 2.0);
        assert_eq!(fx.list.pointer_down(middle, MouseButton::Left), GestureOutcome::Ignored);
        let below = Point::new(HANDLE / 2.0, 10.0 * ROW);
        assert_eq!(fx.list.pointer_down(below, MouseButton::Left), GestureOutcome::Ignored);
        assert!(!fx.list.is_dragging());
    }

    #[test]
    fn test_other_button_ignored() {
        let mut fx = Fixture::new(&["A"]);
        let grab = Point::new(HANDLE / 2.0, ROW / 2.0);
        assert_eq!(fx.list.pointer_down(grab, MouseButton::Right), GestureOutcome::Ignored);
    }

    #[test]
    fn test_second_press_while_dragging_ignored() {
        let mut fx = Fixture::new(&["A", "B", "C"]);
        fx.grab(0);
        assert_eq!(fx.grab(2), GestureOutcome::Ignored);
        assert_eq!(fx.delete(2), GestureOutcome::Ignored);
        assert_eq!(fx.table.subscribe_count(), 2);
        assert_eq!(fx.labels(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_grab_offset_tracks_pointer() {
        let mut fx = Fixture::new(&["A", "B"]);
        fx.list.pointer_down(Point::new(5.0, 60.0), MouseButton::Left);

        let session = fx.list.session().unwrap();
        assert_eq!(session.grab_offset(), kurbo::Vec2::new(5.0, 10.0));

        fx.list.pointer_move(Point::new(15.0, 80.0));
        let floating = fx.list.element().unwrap().floating().unwrap();
        assert_eq!(floating.origin, Point::new(10.0, 70.0));
        assert_eq!(floating.size, kurbo::Size::new(WIDTH, ROW));
    }

    #[test]
    fn test_subscriptions_follow_session() {
        let mut fx = Fixture::new(&["A", "B"]);
        let owner = fx.list.owner_id();

        fx.grab(0);
        assert!(fx.table.is_listening(owner, GestureStream::PointerMove));
        assert!(fx.table.is_listening(owner, GestureStream::PointerUp));

        fx.release(ROW / 2.0);
        assert!(!fx.table.is_listening(owner, GestureStream::PointerMove));
        assert_eq!(fx.table.active_count(), 0);
    }

    #[test]
    fn test_cancel_reverts() {
        let mut fx = Fixture::new(&["A", "B", "C"]);
        let a = fx.id("A");
        fx.grab(0);
        fx.move_to(200.0);

        assert_eq!(
            fx.list.handle_pointer_event(PointerEvent::Cancel),
            GestureOutcome::Reverted { item: a, index: 0 }
        );
        assert_eq!(fx.labels(), vec!["A", "B", "C"]);
        assert_eq!(fx.flow_labels(), vec!["A", "B", "C"]);
        assert_eq!(fx.table.active_count(), 0);
    }

    #[test]
    fn test_cancel_commits_when_configured() {
        let table = Rc::new(ListenerTable::new());
        let items = ["A", "B", "C"]
            .map(|label| Item::new(label).with_affordances(Affordances::edge_handles(HANDLE)));
        let layout = StackLayout::new(Point::ZERO, WIDTH).with_row_height(ROW);
        let config = ListConfig {
            revert_on_cancel: false,
            ..Default::default()
        };
        let mut list = SortableList::new(items, layout, table.clone()).with_config(config);

        list.pointer_down(Point::new(5.0, 25.0), MouseButton::Left);
        list.pointer_move(Point::new(5.0, 200.0));
        assert!(matches!(
            list.pointer_cancel(),
            GestureOutcome::Dropped { from: 0, to: 2, .. }
        ));
        let labels: Vec<_> = list.items().map(|item| item.content).collect();
        assert_eq!(labels, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_release_position_decides_placement() {
        let mut fx = Fixture::new(&["A", "B", "C"]);
        fx.grab(0);
        // No movement samples at all; the release alone decides.
        fx.release(1000.0);
        assert_eq!(fx.labels(), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_release_in_place() {
        let mut fx = Fixture::new(&["A", "B", "C"]);
        let b = fx.id("B");
        fx.grab(1);
        let outcome = fx.release(75.0);
        assert_eq!(outcome, GestureOutcome::Dropped { item: b, from: 1, to: 1 });
        assert!(!outcome.changed_order());
        assert_eq!(fx.labels(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_placeholder_in_flow_while_dragging() {
        let mut fx = Fixture::new(&["A", "B", "C"]);
        fx.grab(1);
        let element = fx.list.element().unwrap();
        assert_eq!(element.placeholder_index(), Some(1));
        assert_eq!(element.placeholder().unwrap().size.height, ROW);
        // Registry keeps the pre-drag order until the commit.
        assert_eq!(fx.labels(), vec!["A", "B", "C"]);

        fx.move_to(-1.0);
        assert_eq!(fx.list.element().unwrap().placeholder_index(), Some(0));
        assert_eq!(fx.labels(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_lists_sharing_scope_are_isolated() {
        let table = Rc::new(ListenerTable::new());
        let make = |labels: [&'static str; 2]| {
            let items =
                labels.map(|label| Item::new(label).with_affordances(Affordances::edge_handles(HANDLE)));
            let layout = StackLayout::new(Point::ZERO, WIDTH).with_row_height(ROW);
            SortableList::new(items, layout, table.clone())
        };
        let mut first = make(["a", "b"]);
        let second = make(["x", "y"]);

        first.pointer_down(Point::new(5.0, 25.0), MouseButton::Left);
        assert_eq!(table.listeners(GestureStream::PointerMove), vec![first.owner_id()]);
        assert!(!second.is_dragging());

        first.destroy();
        assert_eq!(table.active_count(), 0);
        assert!(second.is_mounted());
    }

    #[test]
    fn test_widget_contract() {
        fn cycle<W: Widget>(widget: &mut W) {
            widget.render();
            widget.update(&serde_json::Value::Null);
            widget.destroy();
            widget.destroy();
        }

        let mut fx = Fixture::new(&["A"]);
        cycle(&mut fx.list);
        assert!(fx.list.state().is_destroyed());
    }
}
