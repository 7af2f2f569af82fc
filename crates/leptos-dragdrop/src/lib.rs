//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Escape cancels an active drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on another draggable item
    Item(u32),
    /// Drop on a named container (e.g. an empty grid)
    Container(&'static str),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are swallowed after a drop
const DRAG_END_GRACE_MS: i32 = 100;

/// True once the pointer has moved far enough from the press point
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DRAG_END_GRACE_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(item_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind document mousemove - starts drag if moved enough
fn bind_global_mousemove<S>(dnd: DndSignals, on_start: S)
where
    S: Fn(u32) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        if let (Some(id), None) = (pending, dnd.dragging_id_read.get_untracked()) {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(Some(id));
                on_start(id);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Pointer crossing a drop-capable element during a drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    EnterItem(u32),
    /// Left an item, back over the container that holds it
    LeaveItem(&'static str),
    EnterContainer(&'static str),
    LeaveContainer(&'static str),
}

/// Drop target after a hover event while `dragging` is held
pub fn next_drop_target(dragging: u32, current: Option<DropTarget>, hover: Hover) -> Option<DropTarget> {
    match hover {
        // Don't allow dropping on self
        Hover::EnterItem(id) if id == dragging => current,
        Hover::EnterItem(id) => Some(DropTarget::Item(id)),
        Hover::LeaveItem(container) | Hover::EnterContainer(container) => Some(DropTarget::Container(container)),
        Hover::LeaveContainer(container) => match current {
            Some(DropTarget::Container(c)) if c != container => current,
            _ => None,
        },
    }
}

fn apply_hover(dnd: DndSignals, hover: Hover) {
    if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
        let current = dnd.drop_target_read.get_untracked();
        let next = next_drop_target(dragging, current, hover);
        if next != current {
            dnd.drop_target_write.set(next);
        }
    }
}

/// Create mouseenter handler for items
pub fn make_on_item_mouseenter(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| apply_hover(dnd, Hover::EnterItem(item_id))
}

/// Create mouseleave handler for items inside `container`
pub fn make_on_item_mouseleave(dnd: DndSignals, container: &'static str) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| apply_hover(dnd, Hover::LeaveItem(container))
}

/// Create mouseenter handler for containers
pub fn make_on_container_mouseenter(dnd: DndSignals, container: &'static str) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| apply_hover(dnd, Hover::EnterContainer(container))
}

/// Create mouseleave handler for containers
pub fn make_on_container_mouseleave(dnd: DndSignals, container: &'static str) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| apply_hover(dnd, Hover::LeaveContainer(container))
}

/// Bind global handlers for a drag gesture.
///
/// `on_start` fires once the movement threshold is crossed. `on_drop` fires
/// when an active drag ends, with the hovered target (None when released
/// over nothing or cancelled with Escape).
pub fn bind_global_handlers<S, F>(dnd: DndSignals, on_start: S, on_drop: F)
where
    S: Fn(u32) + 'static,
    F: Fn(u32, Option<DropTarget>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_drop_key = on_drop.clone();
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        dnd.pending_id_write.set(None);
        end_drag(&dnd);

        // Plain clicks never started a drag; the click event fires on its own
        if let Some(dragged) = dragging_id {
            on_drop(dragged, drop_target);
        }
    });

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        if let Some(dragged) = dnd.dragging_id_read.get_untracked() {
            end_drag(&dnd);
            on_drop_key(dragged, None);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_mouseup.forget();
    on_keydown.forget();

    bind_global_mousemove(dnd, on_start);
}
