//! The player surface: a canvas that paints every region from the derived
//! styles and turns mouse input into pointer messages.

use iced::border::Radius;
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Stroke, Text, event};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector, alignment, mouse};
use std::time::Instant;

use crate::format::format_duration;
use crate::model::Track;
use crate::session::PlayerSession;
use crate::style::PlayerStyles;

use super::super::layout::{self, INSET, PlayerLayout};
use super::super::messages::{Message, PointerEvent};
use super::super::theme::{self, color, typography};

const MINI_COVER: f32 = 60.0;
const SHEET_ROW: f32 = 56.0;
const SHEET_TABS: [&str; 3] = ["UP NEXT", "LYRICS", "RELATED"];
const APP_TABS: [&str; 4] = ["Home", "Samples", "Explore", "Library"];

pub struct PlayerCanvas<'a> {
    session: &'a PlayerSession,
    styles: PlayerStyles,
    layout: PlayerLayout,
    now: Instant,
    status: Option<&'a str>,
}

impl<'a> PlayerCanvas<'a> {
    pub fn new(session: &'a PlayerSession, now: Instant, status: Option<&'a str>) -> Self {
        let styles = session.styles(now);
        let layout = PlayerLayout::compute(&styles, session.geometry());
        Self {
            session,
            styles,
            layout,
            now,
            status,
        }
    }

    fn tracks(&self) -> &[Track] {
        self.session.store().queue().tracks()
    }
}

impl canvas::Program<Message> for PlayerCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        let Event::Mouse(mouse_event) = event else {
            return (event::Status::Ignored, None);
        };

        let pointer = match mouse_event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                cursor.position_in(bounds).map(PointerEvent::Pressed)
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                cursor.position_in(bounds).map(PointerEvent::Released)
            }
            mouse::Event::CursorMoved { .. } => cursor.position_in(bounds).map(PointerEvent::Moved),
            mouse::Event::CursorLeft => Some(PointerEvent::Left),
            _ => None,
        };

        match pointer {
            Some(p) => (event::Status::Captured, Some(Message::Pointer(p))),
            None => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        self.draw_home(&mut frame, bounds.size());
        self.draw_tab_bar(&mut frame);
        self.draw_player(&mut frame);
        self.draw_sheet(&mut frame);

        vec![frame.into_geometry()]
    }
}

impl PlayerCanvas<'_> {
    /// Placeholder feed behind the player.
    fn draw_home(&self, frame: &mut Frame, size: Size) {
        frame.fill_rectangle(Point::ORIGIN, size, color::BASE);
        label(
            frame,
            "Home",
            Point::new(INSET + 4.0, 36.0),
            typography::SIZE_TITLE,
            color::TEXT_PRIMARY,
            alignment::Horizontal::Left,
        );
        if let Some(status) = self.status {
            label(
                frame,
                status,
                Point::new(INSET + 4.0, 62.0),
                typography::SIZE_SMALL,
                color::TEXT_SECONDARY,
                alignment::Horizontal::Left,
            );
        }

        let card_width = size.width - INSET * 2.0;
        let mut y = 84.0;
        while y < size.height {
            let card = Rectangle::new(Point::new(INSET, y), Size::new(card_width, 132.0));
            rounded(frame, card, 12.0, color::CARD);
            y += 148.0;
        }
    }

    fn draw_tab_bar(&self, frame: &mut Frame) {
        let bar = self.layout.tab_bar;
        frame.fill_rectangle(bar.position(), bar.size(), color::TAB_BAR);

        let alpha = self.styles.tab_bar_items.effective_opacity();
        let slot = bar.width / APP_TABS.len() as f32;
        for (i, name) in APP_TABS.iter().enumerate() {
            let text_color = if i == 0 {
                color::TEXT_PRIMARY
            } else {
                color::TEXT_SECONDARY
            };
            label(
                frame,
                *name,
                Point::new(slot * (i as f32 + 0.5), bar.center_y()),
                typography::SIZE_SMALL,
                color::with_alpha(text_color, alpha),
                alignment::Horizontal::Center,
            );
        }
    }

    fn draw_player(&self, frame: &mut Frame) {
        let container = self.layout.container;
        if container.height <= 0.0 {
            return;
        }
        if let Some(background) = self.styles.container.background {
            frame.fill_rectangle(container.position(), container.size(), theme::to_color(background));
        }

        // Clip regions do not nest; the track list clips separately
        clipped(frame, container, |frame| self.draw_nav_bar(frame));
        if let Some(list) = container.intersection(&self.layout.track_list) {
            clipped(frame, list, |frame| self.draw_track_list(frame));
        }
        clipped(frame, container, |frame| {
            self.draw_track_info(frame);
            self.draw_full_controls(frame);
            self.draw_mini_controls(frame);
            self.draw_progress_strip(frame);
        });
    }

    fn draw_nav_bar(&self, frame: &mut Frame) {
        let alpha = self.styles.nav_bar.effective_opacity();
        if alpha <= 0.0 || self.layout.nav_bar.height <= 0.0 {
            return;
        }
        let ink = color::with_alpha(color::TEXT_PRIMARY, alpha);
        chevron_down(frame, self.layout.collapse_button, ink);

        // Cast and overflow buttons
        let nav = self.layout.nav_bar;
        for i in 0..2 {
            let centre = Point::new(nav.width - INSET - 20.0 - i as f32 * 44.0, nav.center_y());
            frame.stroke(
                &Path::circle(centre, 9.0),
                Stroke::default().with_width(2.0).with_color(ink),
            );
        }
    }

    fn draw_track_list(&self, frame: &mut Frame) {
        let list = self.layout.track_list;
        let scroll_x = self.session.pager().offset();
        let sw = self.layout.screen.width;

        for (index, track) in self.tracks().iter().enumerate() {
            let Some(item) = self.styles.track_items.get(index) else {
                continue;
            };
            let x = self.layout.page_x(&self.styles, index, scroll_x);
            if x >= sw || x + sw <= 0.0 {
                continue;
            }

            let width = item.width.unwrap_or(sw);
            let height = item.height.unwrap_or(list.height);
            let page = Rectangle {
                x,
                y: list.y + (list.height - height) / 2.0,
                width,
                height,
            };
            let alpha = item.effective_opacity();
            let scale = item.scale.unwrap_or(1.0);
            let centre = page.center();

            frame.with_save(|frame| {
                frame.translate(Vector::new(centre.x, centre.y));
                frame.scale(scale);
                frame.translate(Vector::new(-centre.x, -centre.y));
                self.draw_cover(frame, page, track, alpha);
            });
        }
    }

    fn draw_cover(&self, frame: &mut Frame, page: Rectangle, track: &Track, alpha: f32) {
        let wrapper = self.styles.artwork_wrapper.width.unwrap_or(MINI_COVER);
        let edge = self.styles.artwork.width.unwrap_or(MINI_COVER);
        let radius = self.styles.artwork.border_radius.unwrap_or(0.0).max(0.0);
        let cover = Rectangle {
            x: page.x + INSET + (wrapper - edge).max(0.0) / 2.0,
            y: page.y + (page.height - edge) / 2.0,
            width: edge,
            height: edge,
        };

        let fill = track
            .accent_color
            .map(theme::to_color)
            .unwrap_or(color::COVER_FALLBACK);
        rounded(frame, cover, radius, color::with_alpha(fill, alpha));

        if edge > 120.0
            && let Some(initial) = track.name.chars().next()
        {
            label(
                frame,
                initial.to_string(),
                cover.center(),
                edge * 0.4,
                color::with_alpha(color::TEXT_PRIMARY, alpha * 0.8),
                alignment::Horizontal::Center,
            );
        }
    }

    /// Title and artists beside the mini cover.
    fn draw_track_info(&self, frame: &mut Frame) {
        let style = &self.styles.track_info;
        let alpha = style.effective_opacity();
        if alpha <= 0.0 {
            return;
        }
        let Some(track) = self.session.active_track() else {
            let active = self.layout.active;
            label(
                frame,
                "No track loaded",
                Point::new(INSET * 2.0, active.y + active.height.min(80.0) / 2.0),
                typography::SIZE_BODY,
                color::with_alpha(color::TEXT_SECONDARY, alpha),
                alignment::Horizontal::Left,
            );
            return;
        };

        let swipe = self
            .styles
            .active_item(self.session.store().active_index())
            .and_then(|s| s.translate_x)
            .unwrap_or(0.0);
        let active = self.layout.active;
        let x = INSET * 2.0 + MINI_COVER + swipe;
        let y = active.y + active.height.min(80.0) / 2.0 + style.translate_y.unwrap_or(0.0);
        let gap = style.gap.unwrap_or(0.0);

        label(
            frame,
            track.name.as_str(),
            Point::new(x, y - 9.0 - gap / 2.0),
            typography::SIZE_BODY,
            color::with_alpha(color::TEXT_PRIMARY, alpha),
            alignment::Horizontal::Left,
        );
        label(
            frame,
            track.artist_line(),
            Point::new(x, y + 9.0 + gap / 2.0),
            typography::SIZE_SMALL,
            color::with_alpha(color::TEXT_SECONDARY, alpha),
            alignment::Horizontal::Left,
        );
    }

    fn draw_full_controls(&self, frame: &mut Frame) {
        let style = &self.styles.full_controls;
        let alpha = style.effective_opacity();
        let Some(track) = self.session.active_track() else {
            return;
        };
        if alpha <= 0.0 {
            return;
        }

        let top = self.layout.controls.y;
        let ink = color::with_alpha(color::TEXT_PRIMARY, alpha);
        let muted = color::with_alpha(color::TEXT_SECONDARY, alpha);

        label(
            frame,
            track.name.as_str(),
            Point::new(INSET * 2.0, top + layout::controls::TITLE_Y + 11.0),
            typography::SIZE_TITLE,
            ink,
            alignment::Horizontal::Left,
        );
        label(
            frame,
            track.artist_line(),
            Point::new(INSET * 2.0, top + layout::controls::ARTIST_Y + 8.0),
            typography::SIZE_BODY,
            muted,
            alignment::Horizontal::Left,
        );

        // Scrubber
        let groove = self.layout.scrubber;
        let progress = self.session.progress();
        frame.fill_rectangle(
            groove.position(),
            groove.size(),
            color::with_alpha(color::TRACK_GROOVE, alpha),
        );
        frame.fill_rectangle(
            groove.position(),
            Size::new(groove.width * progress.fraction(self.now), groove.height),
            ink,
        );
        let times_y = top + layout::controls::TIMES_Y + 6.0;
        label(
            frame,
            format_duration(progress.elapsed(self.now).as_secs()),
            Point::new(groove.x, times_y),
            typography::SIZE_SMALL,
            muted,
            alignment::Horizontal::Left,
        );
        label(
            frame,
            format_duration(u64::from(track.duration)),
            Point::new(groove.x + groove.width, times_y),
            typography::SIZE_SMALL,
            muted,
            alignment::Horizontal::Right,
        );

        // Transport
        let play = self.layout.play;
        frame.fill(&Path::circle(play.center(), play.width / 2.0), ink);
        play_glyph(
            frame,
            play,
            self.session.store().is_playing(),
            color::with_alpha(Color::BLACK, alpha),
        );
        skip_glyph(frame, self.layout.prev, false, ink);
        skip_glyph(frame, self.layout.next, true, ink);
    }

    fn draw_mini_controls(&self, frame: &mut Frame) {
        let alpha = self.styles.mini_controls.effective_opacity();
        if alpha <= 0.0 || self.session.active_track().is_none() {
            return;
        }
        play_glyph(
            frame,
            self.layout.mini_play,
            self.session.store().is_playing(),
            color::with_alpha(color::TEXT_PRIMARY, alpha),
        );
    }

    fn draw_progress_strip(&self, frame: &mut Frame) {
        let alpha = self.styles.progress_wrapper.effective_opacity();
        if alpha <= 0.0 {
            return;
        }
        let strip = self.layout.progress_strip;
        let offset = self.session.progress().bar_offset(strip.width, self.now);
        frame.fill_rectangle(
            Point::new(strip.x + offset, strip.y),
            strip.size(),
            color::with_alpha(color::TEXT_PRIMARY, alpha),
        );
    }

    fn draw_sheet(&self, frame: &mut Frame) {
        let Some(sheet) = self.layout.sheet else {
            return;
        };
        let radius = self.styles.sheet.border_radius.unwrap_or(0.0);
        if let Some(background) = self.styles.sheet.background {
            let top_only = Radius {
                top_left: radius,
                top_right: radius,
                bottom_right: 0.0,
                bottom_left: 0.0,
            };
            frame.fill(
                &Path::rounded_rectangle(sheet.position(), sheet.size(), top_only),
                theme::to_color(background),
            );
        }

        let Some(labels) = self.layout.sheet_labels() else {
            return;
        };
        if let Some(backdrop) = self.styles.sheet_backdrop.background {
            frame.fill_rectangle(labels.position(), labels.size(), theme::to_color(backdrop));
        }

        let text_color = self
            .styles
            .sheet_labels
            .color
            .map(theme::to_color)
            .unwrap_or(color::TEXT_SECONDARY);
        let has_lyrics = self.session.active_track().is_some_and(Track::has_lyrics);
        let slot = labels.width / SHEET_TABS.len() as f32;
        for (i, name) in SHEET_TABS.iter().enumerate() {
            let ink = if i == 1 && !has_lyrics {
                color::with_alpha(text_color, 0.4)
            } else {
                text_color
            };
            label(
                frame,
                *name,
                Point::new(slot * (i as f32 + 0.5), labels.center_y()),
                typography::SIZE_SMALL,
                ink,
                alignment::Horizontal::Center,
            );
        }

        let body = Rectangle {
            y: labels.y + labels.height,
            height: (sheet.height - labels.height).max(0.0),
            ..sheet
        };
        if body.height > 0.0 {
            clipped(frame, body, |frame| self.draw_up_next(frame, body));
        }
    }

    /// Queue rows under the sheet labels.
    fn draw_up_next(&self, frame: &mut Frame, body: Rectangle) {
        let active = self.session.store().active_index();
        for (i, track) in self.tracks().iter().enumerate() {
            let y = body.y + INSET + i as f32 * SHEET_ROW;
            if y > body.y + body.height {
                break;
            }
            let cover = Rectangle::new(Point::new(INSET * 2.0, y), Size::new(40.0, 40.0));
            rounded(
                frame,
                cover,
                4.0,
                track
                    .accent_color
                    .map(theme::to_color)
                    .unwrap_or(color::COVER_FALLBACK),
            );
            let title_color = if Some(i) == active {
                color::TEXT_PRIMARY
            } else {
                color::TEXT_SECONDARY
            };
            let text_x = cover.x + cover.width + INSET;
            label(
                frame,
                track.name.as_str(),
                Point::new(text_x, y + 11.0),
                typography::SIZE_BODY,
                title_color,
                alignment::Horizontal::Left,
            );
            label(
                frame,
                track.artist_line(),
                Point::new(text_x, y + 30.0),
                typography::SIZE_SMALL,
                color::TEXT_SECONDARY,
                alignment::Horizontal::Left,
            );
        }
    }
}

// ============================================================================
// Drawing helpers
// ============================================================================

/// Draw inside `region` using screen coordinates, clipping the overflow.
fn clipped(frame: &mut Frame, region: Rectangle, draw: impl FnOnce(&mut Frame)) {
    frame.with_clip(region, |frame| {
        frame.translate(Vector::new(-region.x, -region.y));
        draw(frame);
    });
}

fn label(
    frame: &mut Frame,
    content: impl Into<String>,
    position: Point,
    size: f32,
    color: Color,
    align: alignment::Horizontal,
) {
    frame.fill_text(Text {
        content: content.into(),
        position,
        color,
        size: Pixels(size),
        horizontal_alignment: align,
        vertical_alignment: alignment::Vertical::Center,
        ..Text::default()
    });
}

fn rounded(frame: &mut Frame, rect: Rectangle, radius: f32, color: Color) {
    let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    frame.fill(
        &Path::rounded_rectangle(rect.position(), rect.size(), Radius::from(radius)),
        color,
    );
}

fn play_glyph(frame: &mut Frame, rect: Rectangle, playing: bool, color: Color) {
    let c = rect.center();
    let w = rect.width;
    let h = rect.height;
    if playing {
        let bar = Size::new(w * 0.12, h * 0.44);
        for dx in [-w * 0.13, w * 0.13] {
            frame.fill_rectangle(
                Point::new(c.x + dx - bar.width / 2.0, c.y - bar.height / 2.0),
                bar,
                color,
            );
        }
    } else {
        let triangle = Path::new(|b| {
            b.move_to(Point::new(c.x - w * 0.16, c.y - h * 0.24));
            b.line_to(Point::new(c.x - w * 0.16, c.y + h * 0.24));
            b.line_to(Point::new(c.x + w * 0.24, c.y));
            b.close();
        });
        frame.fill(&triangle, color);
    }
}

fn skip_glyph(frame: &mut Frame, rect: Rectangle, forward: bool, color: Color) {
    let c = rect.center();
    let s = rect.width * 0.22;
    let dir = if forward { 1.0 } else { -1.0 };
    let triangle = Path::new(|b| {
        b.move_to(Point::new(c.x - s * dir, c.y - s));
        b.line_to(Point::new(c.x - s * dir, c.y + s));
        b.line_to(Point::new(c.x + s * 0.6 * dir, c.y));
        b.close();
    });
    frame.fill(&triangle, color);
    frame.fill_rectangle(
        Point::new(c.x + s * 0.6 * dir - if forward { 0.0 } else { 3.0 }, c.y - s),
        Size::new(3.0, s * 2.0),
        color,
    );
}

fn chevron_down(frame: &mut Frame, rect: Rectangle, color: Color) {
    let c = rect.center();
    let s = rect.width * 0.2;
    let path = Path::new(|b| {
        b.move_to(Point::new(c.x - s, c.y - s / 2.0));
        b.line_to(Point::new(c.x, c.y + s / 2.0));
        b.line_to(Point::new(c.x + s, c.y - s / 2.0));
    });
    frame.stroke(&path, Stroke::default().with_width(2.5).with_color(color));
}
