//! egui host for a [`SortableList`].
//!
//! The view lays the list out as a [`StackLayout`] inside the allocated
//! rect, translates the frame's raw pointer events into sortkit pointer
//! samples, and paints the flow plus the floating item.
//!
//! Presses are delivered only when they land inside the list. Movement and
//! release samples are delivered from anywhere on screen, but only while the
//! list holds the matching subscription in its [`ListenerTable`].

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, Event, FontId, Id, LayerId, Order, Painter,
    PointerButton, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2, vec2,
};
use sortkit_core::{
    Affordance, GeometryProbe, GestureOutcome, GestureStream, Item, ListenerTable, MouseButton,
    Node, PointerEvent, Region, SortableList, StackLayout,
};
use std::fmt::Display;

use crate::{sizing, theme};

/// Style configuration for sortable lists.
#[derive(Clone)]
pub struct ListStyle {
    /// Default row height
    pub row_height: f32,
    /// Vertical gap between rows
    pub gap: f32,
    /// Corner radius for rows and the placeholder
    pub corner_radius: u8,
    /// Row background
    pub row_color: Color32,
    /// Row border
    pub border_color: Color32,
    /// Label color
    pub text_color: Color32,
    /// Grab and delete glyph color
    pub handle_color: Color32,
    /// Placeholder fill
    pub placeholder_color: Color32,
    /// Placeholder outline
    pub placeholder_border: Color32,
    /// Label font size
    pub font_size: f32,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            row_height: sizing::ROW_HEIGHT,
            gap: 4.0,
            corner_radius: sizing::CORNER_RADIUS,
            row_color: Color32::WHITE,
            border_color: theme::BORDER,
            text_color: theme::TEXT,
            handle_color: theme::TEXT_MUTED,
            placeholder_color: theme::SELECTED_BG,
            placeholder_border: theme::ACCENT,
            font_size: 13.0,
        }
    }
}

impl ListStyle {
    /// Compact rows for dense dashboards.
    pub fn compact() -> Self {
        Self {
            row_height: sizing::MEDIUM,
            gap: 2.0,
            font_size: 11.0,
            ..Default::default()
        }
    }
}

/// Result of showing a list for one frame.
pub struct ListResponse {
    /// Every non-ignored outcome produced this frame, in event order.
    pub outcomes: Vec<GestureOutcome>,
    /// Screen rect the list occupied.
    pub rect: Rect,
}

impl ListResponse {
    /// Check if the committed order changed this frame.
    pub fn changed(&self) -> bool {
        self.outcomes.iter().any(GestureOutcome::changed_order)
    }
}

/// A sortable list shown in an egui [`Ui`].
pub struct SortableListView<'a, T> {
    list: &'a mut SortableList<T, StackLayout>,
    listeners: &'a ListenerTable,
    style: ListStyle,
    id: Option<Id>,
}

impl<'a, T: Display> SortableListView<'a, T> {
    /// Create a view over `list`. `listeners` must be the scope the list
    /// subscribes to.
    pub fn new(list: &'a mut SortableList<T, StackLayout>, listeners: &'a ListenerTable) -> Self {
        Self {
            list,
            listeners,
            style: ListStyle::default(),
            id: None,
        }
    }

    /// Set the list style.
    pub fn style(mut self, style: ListStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the id salt for the floating layer. Defaults to the list's owner id.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id = Some(Id::new(salt));
        self
    }

    /// Show the list and process this frame's pointer input.
    pub fn show(self, ui: &mut Ui) -> ListResponse {
        let Self {
            list,
            listeners,
            style,
            id,
        } = self;
        let id = id.unwrap_or_else(|| Id::new(list.owner_id()));

        list.render();
        let width = ui.available_width();
        {
            let probe = list.probe_mut();
            probe.set_width(width as f64);
            probe.set_row_height(style.row_height as f64);
            probe.set_gap(style.gap as f64);
        }
        let height = list
            .element()
            .map(|element| list.probe().container_bounds(element).height())
            .unwrap_or_default();
        let (rect, response) = ui.allocate_exact_size(vec2(width, height as f32), Sense::hover());
        list.probe_mut().set_origin(to_point(rect.min));

        let events = ui.input(|i| i.events.clone());
        let mut outcomes = Vec::new();
        for event in events {
            let Some(sample) = translate(&event) else {
                continue;
            };
            if !accepts(list, listeners, &sample, rect) {
                continue;
            }
            let outcome = list.handle_pointer_event(sample);
            if outcome != GestureOutcome::Ignored {
                log::trace!("List {} handled {:?}: {:?}", list.owner_id(), sample, outcome);
                outcomes.push(outcome);
            }
        }

        if ui.is_rect_visible(rect) || list.is_dragging() {
            paint(ui, list, &style, id);
        }

        if list.is_dragging() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
            ui.ctx().request_repaint();
        } else if let Some(pos) = response.hover_pos() {
            match list.hit_test(to_point(pos)) {
                Some((_, Affordance::Grab, _)) => ui.ctx().set_cursor_icon(CursorIcon::Grab),
                Some((_, Affordance::Delete, _)) => ui.ctx().set_cursor_icon(CursorIcon::PointingHand),
                None => {}
            }
        }

        ListResponse { outcomes, rect }
    }
}

/// Translate a raw egui event into a pointer sample.
fn translate(event: &Event) -> Option<PointerEvent> {
    match *event {
        Event::PointerMoved(pos) => Some(PointerEvent::Move {
            position: to_point(pos),
        }),
        Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = to_button(button)?;
            let position = to_point(pos);
            Some(if pressed {
                PointerEvent::Down { position, button }
            } else {
                PointerEvent::Up { position, button }
            })
        }
        Event::PointerGone | Event::WindowFocused(false) => Some(PointerEvent::Cancel),
        _ => None,
    }
}

/// Route a sample the way a page routes DOM events: presses only reach the
/// list they land on, movement and release reach subscribed lists.
fn accepts<T>(
    list: &SortableList<T, StackLayout>,
    listeners: &ListenerTable,
    sample: &PointerEvent,
    rect: Rect,
) -> bool {
    let owner = list.owner_id();
    match *sample {
        PointerEvent::Down { position, .. } => rect.contains(to_pos(position)),
        PointerEvent::Move { .. } => listeners.is_listening(owner, GestureStream::PointerMove),
        PointerEvent::Up { button, .. } => {
            button == list.config().drag_button
                && listeners.is_listening(owner, GestureStream::PointerUp)
        }
        PointerEvent::Cancel => listeners.is_listening(owner, GestureStream::PointerUp),
    }
}

fn paint<T: Display>(ui: &Ui, list: &SortableList<T, StackLayout>, style: &ListStyle, id: Id) {
    let Some(element) = list.element() else {
        return;
    };
    let painter = ui.painter();
    let bounds = list.probe().flow_bounds(element);

    for (&node, rect) in element.children().iter().zip(bounds) {
        let Some(rect) = rect.map(to_rect) else {
            continue;
        };
        match node {
            Node::Item(item_id) => {
                if let Some(item) = list.registry().get(item_id) {
                    paint_row(painter, item, rect, style);
                }
            }
            Node::Placeholder => {
                let radius = CornerRadius::same(style.corner_radius);
                painter.rect_filled(rect, radius, style.placeholder_color);
                painter.rect_stroke(
                    rect,
                    radius,
                    Stroke::new(1.0, style.placeholder_border),
                    StrokeKind::Inside,
                );
            }
        }
    }

    if let Some(floating) = element.floating() {
        if let Some(item) = list.registry().get(floating.item) {
            let layer = ui.ctx().layer_painter(LayerId::new(Order::Tooltip, id));
            let rect = to_rect(floating.rect());
            layer.rect_filled(
                rect.translate(Vec2::splat(2.0)),
                CornerRadius::same(style.corner_radius),
                Color32::from_black_alpha(30),
            );
            paint_row(&layer, item, rect, style);
        }
    }
}

fn paint_row<T: Display>(painter: &Painter, item: &Item<T>, rect: Rect, style: &ListStyle) {
    let radius = CornerRadius::same(style.corner_radius);
    painter.rect_filled(rect, radius, style.row_color);
    painter.rect_stroke(
        rect,
        radius,
        Stroke::new(1.0, style.border_color),
        StrokeKind::Inside,
    );

    let size = kurbo::Size::new(rect.width() as f64, rect.height() as f64);
    let region = |region: Option<Region>| {
        region.map(|r| to_rect(r.resolve(size)).translate(rect.min.to_vec2()))
    };
    let grab = region(item.affordances.grab);
    let delete = region(item.affordances.delete);
    let font = FontId::proportional(style.font_size);

    if let Some(grab) = grab {
        painter.text(grab.center(), Align2::CENTER_CENTER, "≡", font.clone(), style.handle_color);
    }
    if let Some(delete) = delete {
        painter.text(delete.center(), Align2::CENTER_CENTER, "×", font.clone(), style.handle_color);
    }

    let left = grab.map_or(rect.left(), |grab| grab.right()) + 6.0;
    painter.text(
        Pos2::new(left, rect.center().y),
        Align2::LEFT_CENTER,
        item.content.to_string(),
        font,
        style.text_color,
    );
}

fn to_button(button: PointerButton) -> Option<MouseButton> {
    match button {
        PointerButton::Primary => Some(MouseButton::Left),
        PointerButton::Secondary => Some(MouseButton::Right),
        PointerButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

fn to_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(pos.x as f64, pos.y as f64)
}

fn to_pos(point: kurbo::Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

fn to_rect(rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(rect.x0 as f32, rect.y0 as f32),
        Pos2::new(rect.x1 as f32, rect.y1 as f32),
    )
}
