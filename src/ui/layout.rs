//! Screen rectangles for the player regions.
//!
//! Shared by the canvas (painting) and the pointer handler (hit-testing), so
//! a tap lands on exactly what was drawn.

use iced::{Point, Rectangle};

use crate::sheet::Geometry;
use crate::style::PlayerStyles;

/// Height of the nav row the docked player keeps in layout.
const DOCKED_NAV_ROW: f32 = 46.0;
/// Nav row height when the classic player is fully open.
const CLASSIC_NAV_ROW: f32 = 80.0;
/// App tab bar at the bottom of the screen.
pub const TAB_BAR_HEIGHT: f32 = 60.0;
/// Tab labels strip at the top of the bottom sheet.
pub const SHEET_LABELS_HEIGHT: f32 = 60.0;
/// Horizontal padding around the player content.
pub const INSET: f32 = 12.0;

const MINI_BUTTON: f32 = 40.0;
const PLAY_BUTTON: f32 = 64.0;
const SKIP_BUTTON: f32 = 48.0;
const SKIP_SPACING: f32 = 100.0;

/// Full controls block, measured from its top edge.
pub mod controls {
    pub const TITLE_Y: f32 = 8.0;
    pub const ARTIST_Y: f32 = 38.0;
    pub const SCRUBBER_Y: f32 = 78.0;
    pub const TIMES_Y: f32 = 90.0;
    pub const BUTTONS_Y: f32 = 150.0;
    pub const HEIGHT: f32 = 200.0;
}

/// Where each player region sits on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLayout {
    pub screen: Rectangle,
    pub container: Rectangle,
    pub nav_bar: Rectangle,
    pub collapse_button: Rectangle,
    /// Area holding the paged track list
    pub active: Rectangle,
    /// Visible window of the track list
    pub track_list: Rectangle,
    pub mini_play: Rectangle,
    pub controls: Rectangle,
    pub play: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub scrubber: Rectangle,
    pub progress_strip: Rectangle,
    /// `None` while the sheet is not laid out
    pub sheet: Option<Rectangle>,
    pub tab_bar: Rectangle,
}

impl PlayerLayout {
    pub fn compute(styles: &PlayerStyles, geometry: Geometry) -> Self {
        let sw = geometry.screen_width;
        let sh = geometry.screen_height;

        let height = styles.container.height.unwrap_or(0.0);
        let bottom = styles.container.bottom.unwrap_or(0.0);
        let container = Rectangle::new(
            Point::new(0.0, sh - bottom - height),
            iced::Size::new(sw, height),
        );

        let (offset, nav_height) = match &styles.player_container {
            Some(docked) => (docked.translate_y.unwrap_or(0.0), DOCKED_NAV_ROW),
            None if styles.nav_bar.is_visible() => {
                (0.0, styles.nav_bar.height.unwrap_or(CLASSIC_NAV_ROW))
            }
            None => (0.0, 0.0),
        };
        let content_top = container.y + offset;
        let nav_bar = Rectangle {
            x: 0.0,
            y: content_top + styles.nav_bar.translate_y.unwrap_or(0.0),
            width: sw,
            height: nav_height,
        };
        let collapse_button = Rectangle {
            x: INSET,
            y: nav_bar.y + (nav_height - MINI_BUTTON).max(0.0) / 2.0,
            width: MINI_BUTTON,
            height: MINI_BUTTON.min(nav_height),
        };

        let active = Rectangle {
            x: 0.0,
            y: content_top + nav_height + styles.active_container.translate_y.unwrap_or(0.0),
            width: styles.active_container.width.unwrap_or(sw),
            height: styles.active_container.height.unwrap_or(0.0),
        };
        let list_height = styles.track_list.height.unwrap_or(active.height);
        let track_list = Rectangle {
            x: 0.0,
            y: active.y + (active.height - list_height) / 2.0,
            width: styles.track_list.width.unwrap_or(sw),
            height: list_height,
        };

        let mini_play = Rectangle {
            x: sw - INSET - MINI_BUTTON,
            y: active.y
                + (active.height.min(80.0) - MINI_BUTTON) / 2.0
                + styles.mini_controls.translate_y.unwrap_or(0.0),
            width: MINI_BUTTON,
            height: MINI_BUTTON,
        };

        let controls_top =
            active.y + active.height + styles.full_controls.translate_y.unwrap_or(0.0);
        let controls = Rectangle {
            x: 0.0,
            y: controls_top,
            width: sw,
            height: controls::HEIGHT,
        };
        let centre_x = sw / 2.0;
        let buttons_y = controls_top + controls::BUTTONS_Y;
        let play = centred(centre_x, buttons_y, PLAY_BUTTON);
        let prev = centred(centre_x - SKIP_SPACING, buttons_y, SKIP_BUTTON);
        let next = centred(centre_x + SKIP_SPACING, buttons_y, SKIP_BUTTON);
        let scrubber = Rectangle {
            x: INSET * 2.0,
            y: controls_top + controls::SCRUBBER_Y,
            width: sw - INSET * 4.0,
            height: 4.0,
        };

        let progress_strip = Rectangle {
            x: 0.0,
            y: container.y + container.height - 2.0,
            width: sw,
            height: 2.0,
        };

        let sheet = styles.sheet.is_visible().then(|| {
            let h = styles.sheet.height.unwrap_or(SHEET_LABELS_HEIGHT);
            Rectangle {
                x: 0.0,
                y: sh - h,
                width: sw,
                height: h,
            }
        });

        let tab_bar = Rectangle {
            x: 0.0,
            y: sh - TAB_BAR_HEIGHT + styles.tab_bar.translate_y.unwrap_or(0.0),
            width: sw,
            height: TAB_BAR_HEIGHT,
        };

        Self {
            screen: Rectangle {
                x: 0.0,
                y: 0.0,
                width: sw,
                height: sh,
            },
            container,
            nav_bar,
            collapse_button,
            active,
            track_list,
            mini_play,
            controls,
            play,
            prev,
            next,
            scrubber,
            progress_strip,
            sheet,
            tab_bar,
        }
    }

    /// Left edge of track `index`'s page, after scrolling and swiping.
    pub fn page_x(&self, styles: &PlayerStyles, index: usize, scroll_x: f32) -> f32 {
        let translate = styles
            .track_items
            .get(index)
            .and_then(|s| s.translate_x)
            .unwrap_or(0.0);
        index as f32 * self.screen.width - scroll_x + translate
    }

    /// The labels strip of the sheet, if it is laid out.
    pub fn sheet_labels(&self) -> Option<Rectangle> {
        self.sheet.map(|s| Rectangle {
            height: SHEET_LABELS_HEIGHT.min(s.height),
            ..s
        })
    }
}

fn centred(x: f32, y: f32, edge: f32) -> Rectangle {
    Rectangle {
        x: x - edge / 2.0,
        y: y - edge / 2.0,
        width: edge,
        height: edge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{PlayerVariant, StyleInputs, derive_styles};

    fn layout(panel: f32, tab: f32, variant: PlayerVariant) -> (PlayerLayout, PlayerStyles) {
        let geometry = Geometry::new(400.0, 800.0);
        let mut inputs = StyleInputs::collapsed(geometry, 3);
        inputs.panel_height = panel;
        inputs.tab_height = tab;
        inputs.safe_area = 800.0;
        inputs.variant = variant;
        let styles = derive_styles(&inputs);
        (PlayerLayout::compute(&styles, geometry), styles)
    }

    #[test]
    fn test_mini_player_sits_above_tab_bar() {
        let (l, _) = layout(80.0, 64.0, PlayerVariant::Classic);
        assert_eq!(l.container.y, 800.0 - 60.0 - 80.0);
        assert_eq!(l.container.height, 80.0);
        assert_eq!(l.tab_bar.y, 740.0);
        assert!(l.sheet.is_none());
    }

    #[test]
    fn test_docked_hides_nav_row_when_collapsed() {
        let (l, _) = layout(80.0, 64.0, PlayerVariant::Docked);
        // The 46px row is pulled up out of view; the track strip starts at
        // the container top (less the active container's own lift).
        assert_eq!(l.active.y, l.container.y - 5.0);
    }

    #[test]
    fn test_fullscreen_fills_screen() {
        let (l, _) = layout(800.0, 64.0, PlayerVariant::Docked);
        assert_eq!(l.container.y, 0.0);
        assert_eq!(l.container.height, 800.0);
        assert_eq!(l.tab_bar.y, 800.0);
        let sheet = l.sheet.unwrap();
        assert_eq!(sheet.height, 60.0);
        assert_eq!(sheet.y, 740.0);
    }

    #[test]
    fn test_page_x_follows_scroll() {
        let (l, styles) = layout(800.0, 64.0, PlayerVariant::Docked);
        assert_eq!(l.page_x(&styles, 1, 400.0), 0.0);
        assert_eq!(l.page_x(&styles, 2, 400.0), 400.0);
    }

    #[test]
    fn test_buttons_are_centred() {
        let (l, _) = layout(800.0, 64.0, PlayerVariant::Classic);
        assert_eq!(l.play.center().x, 200.0);
        assert!(l.prev.x + l.prev.width < l.play.x);
        assert!(l.next.x > l.play.x + l.play.width);
    }
}
