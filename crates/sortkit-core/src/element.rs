//! The rendered list: the flow of nodes, the placeholder and the floating layer.

use crate::config::ListConfig;
use crate::item::ItemId;
use kurbo::{Point, Rect, Size};

/// A child of the rendered flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    /// A displayed item.
    Item(ItemId),
    /// The transient slot marking where the dragged item will land.
    Placeholder,
}

/// Contentless slot occupying the dragged item's footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placeholder {
    /// Footprint copied from the dragged item.
    pub size: Size,
}

/// An item detached from the flow and drawn on the floating layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingItem {
    /// The dragged item.
    pub item: ItemId,
    /// Top-left corner, tracking the pointer minus the grab offset.
    pub origin: Point,
    /// Footprint frozen at grab time.
    pub size: Size,
}

impl FloatingItem {
    /// Bounds on the floating layer.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Root element of a mounted list.
///
/// Outside a drag the flow mirrors the registry order. During a drag the
/// dragged item lives on the floating layer and a placeholder holds its
/// place in the flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ListElement {
    children: Vec<Node>,
    placeholder: Option<Placeholder>,
    floating: Option<FloatingItem>,
    /// Number of flow mutations since mount.
    mutations: usize,
}

impl ListElement {
    /// Build the flow for a sequence of items.
    pub(crate) fn mount(ids: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            children: ids.into_iter().map(Node::Item).collect(),
            placeholder: None,
            floating: None,
            mutations: 0,
        }
    }

    /// Children of the flow, in display order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of children in the flow.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the flow is empty.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Position of a node in the flow.
    pub fn index_of(&self, node: Node) -> Option<usize> {
        self.children.iter().position(|&child| child == node)
    }

    /// Items in the flow, skipping the placeholder.
    pub fn item_order(&self) -> Vec<ItemId> {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Item(id) => Some(*id),
                Node::Placeholder => None,
            })
            .collect()
    }

    /// The placeholder, while a drag is open.
    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

    /// Position of the placeholder in the flow.
    pub fn placeholder_index(&self) -> Option<usize> {
        self.index_of(Node::Placeholder)
    }

    /// The item on the floating layer, while a drag is open.
    pub fn floating(&self) -> Option<&FloatingItem> {
        self.floating.as_ref()
    }

    /// Number of flow mutations performed since mount.
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    /// Class names for a node, the way a DOM host would style it.
    pub fn class_list<'a>(&self, node: Node, config: &'a ListConfig) -> Vec<&'a str> {
        match node {
            Node::Item(id) => {
                let mut classes = vec![config.item_class.as_str()];
                if self.floating.is_some_and(|floating| floating.item == id) {
                    classes.push(config.dragging_class.as_str());
                }
                classes
            }
            Node::Placeholder => vec![config.placeholder_class.as_str()],
        }
    }

    /// Swap an item for a placeholder of its footprint and move it to the
    /// floating layer. Returns the item's former index.
    pub(crate) fn detach_to_placeholder(
        &mut self,
        item: ItemId,
        origin: Point,
        size: Size,
    ) -> Option<usize> {
        if self.placeholder.is_some() {
            return None;
        }
        let index = self.index_of(Node::Item(item))?;
        self.children[index] = Node::Placeholder;
        self.placeholder = Some(Placeholder { size });
        self.floating = Some(FloatingItem { item, origin, size });
        self.mutations += 1;
        Some(index)
    }

    /// Reposition the floating item. Not a flow mutation.
    pub(crate) fn set_floating_origin(&mut self, origin: Point) {
        if let Some(floating) = self.floating.as_mut() {
            floating.origin = origin;
        }
    }

    /// Move the placeholder so it ends up at slot `to`.
    /// Returns false when there is nothing to move.
    pub(crate) fn move_placeholder(&mut self, to: usize) -> bool {
        let Some(from) = self.placeholder_index() else {
            return false;
        };
        let to = to.min(self.children.len() - 1);
        if from == to {
            return false;
        }
        let node = self.children.remove(from);
        self.children.insert(to, node);
        self.mutations += 1;
        true
    }

    /// Remove the placeholder and put the floating item back into the flow
    /// at `index`, clearing all floating state.
    pub(crate) fn settle(&mut self, index: usize) -> Option<ItemId> {
        let floating = self.floating.take()?;
        self.placeholder = None;
        if let Some(slot) = self.placeholder_index() {
            self.children.remove(slot);
        }
        let index = index.min(self.children.len());
        self.children.insert(index, Node::Item(floating.item));
        self.mutations += 1;
        Some(floating.item)
    }

    /// Remove an item from the flow.
    pub(crate) fn remove_item(&mut self, id: ItemId) -> bool {
        let Some(index) = self.index_of(Node::Item(id)) else {
            return false;
        };
        self.children.remove(index);
        self.mutations += 1;
        true
    }
}
