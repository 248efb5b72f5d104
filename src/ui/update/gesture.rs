//! Pointer routing: raw mouse input to the player's state machines.
//!
//! A press is offered to every recognizer whose region it lands in. The
//! first one to activate claims the pointer (`Route`) and the others are
//! cancelled. A press that never activates anything is a tap.
//!
//! - on the open sheet: the sheet drag
//! - on the player: the panel drag (long-press gated), plus the horizontal
//!   drag when over the track list; horizontal wins only when the movement
//!   is mostly sideways

use iced::{Point, Task};
use std::time::Instant;

use crate::gesture::{PanEvent, Vec2};
use crate::player::Direction;

use super::super::layout::PlayerLayout;
use super::super::messages::{Message, PointerEvent};
use super::super::state::{AppState, Route};

/// Farthest a pointer can travel and still count as a tap.
const TAP_SLOP: f32 = 10.0;

/// Handle a pointer event.
pub fn handle_pointer(s: &mut AppState, event: PointerEvent, now: Instant) -> Task<Message> {
    match event {
        PointerEvent::Pressed(p) => press(s, to_vec(p), now),
        PointerEvent::Moved(p) => moved(s, to_vec(p), now),
        PointerEvent::Released(p) => release(s, Some(to_vec(p)), now),
        PointerEvent::Left => release(s, None, now),
    }
    Task::none()
}

/// Frame tick: a pointer held still may pass its long-press gate.
pub fn tick(s: &mut AppState, now: Instant) {
    if let Some(event) = s.pointer.panel.tick(now) {
        apply_panel(s, event, now);
    }
}

fn to_vec(p: Point) -> Vec2 {
    Vec2::new(p.x, p.y)
}

fn current_layout(s: &AppState, now: Instant) -> (PlayerLayout, crate::style::PlayerStyles) {
    let styles = s.session.styles(now);
    let layout = PlayerLayout::compute(&styles, s.session.geometry());
    (layout, styles)
}

fn press(s: &mut AppState, pos: Vec2, now: Instant) {
    let (layout, _) = current_layout(s, now);
    let point = Point::new(pos.x, pos.y);
    let fullscreen = s.session.panel().is_fullscreen(now);

    s.pointer.reset();
    s.pointer.pressed_at = Some(pos);

    if fullscreen && layout.sheet.is_some_and(|r| r.contains(point)) {
        s.pointer.tabs.press(pos, now);
    } else if layout.container.contains(point) {
        s.pointer.panel.press(pos, now);
        if layout.track_list.contains(point) {
            s.pointer.horizontal.press(pos, now);
        }
    }
}

fn moved(s: &mut AppState, pos: Vec2, now: Instant) {
    if let Some(event) = s.pointer.tabs.move_to(pos, now) {
        apply_tabs(s, event, now);
    }
    if let Some(event) = s.pointer.horizontal.move_to(pos, now) {
        apply_horizontal(s, event, now);
    }
    if let Some(event) = s.pointer.panel.move_to(pos, now) {
        apply_panel(s, event, now);
    }
}

/// Finish the pointer. `pos` is `None` when it left the window, which ends
/// any drag but never taps.
fn release(s: &mut AppState, pos: Option<Vec2>, now: Instant) {
    let claimed = s.pointer.route.is_some();

    if let Some(event) = s.pointer.tabs.release(now) {
        apply_tabs(s, event, now);
    }
    if let Some(event) = s.pointer.horizontal.release(now) {
        apply_horizontal(s, event, now);
    }
    if let Some(event) = s.pointer.panel.release(now) {
        apply_panel(s, event, now);
    }

    let pressed_at = s.pointer.pressed_at;
    s.pointer.reset();

    if let (false, Some(pos), Some(origin)) = (claimed, pos, pressed_at)
        && (pos - origin).length() <= TAP_SLOP
    {
        tap(s, pos, now);
    }
}

fn apply_panel(s: &mut AppState, event: PanEvent, now: Instant) {
    match event {
        PanEvent::Began => {
            if s.pointer.route.is_some() {
                s.pointer.panel.cancel();
                return;
            }
            s.pointer.route = Some(Route::Panel);
            s.pointer.horizontal.cancel();
            s.session.begin_panel_drag(now);
            s.session.update_panel_drag(s.pointer.panel.translation().y);
        }
        PanEvent::Updated { translation, .. } => {
            if s.pointer.route == Some(Route::Panel) {
                s.session.update_panel_drag(translation.y);
            }
        }
        PanEvent::Ended { velocity } => {
            if s.pointer.route == Some(Route::Panel) {
                let snap = s.session.end_panel_drag(velocity.y, now);
                tracing::debug!(velocity = velocity.y, ?snap, "Panel drag released");
            }
        }
    }
}

fn apply_horizontal(s: &mut AppState, event: PanEvent, now: Instant) {
    match event {
        PanEvent::Began => {
            let t = s.pointer.horizontal.translation();
            if s.pointer.route.is_some() || t.x.abs() <= t.y.abs() {
                s.pointer.horizontal.cancel();
                return;
            }
            s.pointer.panel.cancel();
            if s.session.panel().is_fullscreen(now) {
                s.pointer.route = Some(Route::Scroll);
                s.pointer.scroll_origin = s.session.pager().offset();
                s.session.scroll_to(s.pointer.scroll_origin - t.x);
            } else {
                s.pointer.route = Some(Route::Swipe);
                s.session.update_swipe(t.x);
            }
        }
        PanEvent::Updated { translation, .. } => match s.pointer.route {
            Some(Route::Swipe) => s.session.update_swipe(translation.x),
            Some(Route::Scroll) => s.session.scroll_to(s.pointer.scroll_origin - translation.x),
            _ => {}
        },
        PanEvent::Ended { .. } => match s.pointer.route {
            Some(Route::Swipe) => {
                s.session.end_swipe(now);
            }
            Some(Route::Scroll) => {
                s.session.settle_scroll(now);
            }
            _ => {}
        },
    }
}

fn apply_tabs(s: &mut AppState, event: PanEvent, now: Instant) {
    match event {
        PanEvent::Began => {
            s.pointer.route = Some(Route::Tabs);
            s.session.begin_tab_drag(now);
            s.session.update_tab_drag(s.pointer.tabs.translation().y);
        }
        PanEvent::Updated { translation, .. } => s.session.update_tab_drag(translation.y),
        PanEvent::Ended { velocity } => {
            let snap = s.session.end_tab_drag(velocity.y, now);
            tracing::debug!(velocity = velocity.y, ?snap, "Sheet drag released");
        }
    }
}

fn tap(s: &mut AppState, pos: Vec2, now: Instant) {
    let (layout, styles) = current_layout(s, now);
    let point = Point::new(pos.x, pos.y);
    let session = &mut s.session;

    if styles.mini_controls.is_visible() && layout.mini_play.contains(point) {
        session.toggle_play(now);
        return;
    }

    if !session.panel().is_fullscreen(now) {
        if layout.container.contains(point) {
            session.expand_panel(now);
        }
        return;
    }

    if let Some(labels) = layout.sheet_labels()
        && labels.contains(point)
    {
        if session.tabs().is_open(now) {
            session.collapse_tabs(now);
        } else {
            session.expand_tabs(now);
        }
    } else if styles.full_controls.is_visible() && layout.play.contains(point) {
        session.toggle_play(now);
    } else if styles.full_controls.is_visible() && layout.prev.contains(point) {
        session.navigate(Direction::Prev, now);
    } else if styles.full_controls.is_visible() && layout.next.contains(point) {
        session.navigate(Direction::Next, now);
    } else if styles.nav_bar.effective_opacity() > 0.0 && layout.collapse_button.contains(point) {
        session.collapse_panel(now);
    }
}
