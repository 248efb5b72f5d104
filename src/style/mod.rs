//! Style derivation: from sheet heights and scroll state to per-region
//! style descriptors.
//!
//! Everything here is a pure function of [`StyleInputs`]. The renderer
//! recomputes [`PlayerStyles`] every frame and paints what it gets.
//!
//! While the panel is below full screen, regions follow the panel height;
//! once it reaches full screen they follow the bottom-sheet height instead.
//! That switch is [`Mode`], matched once per region.

mod artwork;
mod bottom_sheet;
mod container;
mod controls;

use serde::{Deserialize, Serialize};

use crate::motion::Rgba;
use crate::sheet::Geometry;

pub use artwork::image_width;

/// Player layout variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerVariant {
    /// Player stacked inline with its bottom sheet
    Classic,
    /// Player container slides into place and the sheet overlays it
    #[default]
    Docked,
}

impl PlayerVariant {
    pub fn toggled(self) -> Self {
        match self {
            PlayerVariant::Classic => PlayerVariant::Docked,
            PlayerVariant::Docked => PlayerVariant::Classic,
        }
    }
}

impl std::fmt::Display for PlayerVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerVariant::Classic => write!(f, "classic"),
            PlayerVariant::Docked => write!(f, "docked"),
        }
    }
}

/// Which height currently drives the styles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Mode {
    /// Mini-player, or mid-transition to full screen
    Collapsed { panel_height: f32 },
    /// Full screen; the bottom sheet drives the layout
    Expanded { tab_height: f32 },
}

/// Whether a region takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

impl Visibility {
    fn shown_if(condition: bool) -> Self {
        if condition {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}

/// Style descriptor for one region. Unset properties are left to the
/// region's static layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Offset from the bottom edge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    /// Raw interpolated opacity; may leave 0.0 - 1.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgba>,
    /// Text colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    pub visibility: Visibility,
}

impl RegionStyle {
    pub fn height(mut self, value: f32) -> Self {
        self.height = Some(value);
        self
    }

    pub fn width(mut self, value: f32) -> Self {
        self.width = Some(value);
        self
    }

    pub fn bottom(mut self, value: f32) -> Self {
        self.bottom = Some(value);
        self
    }

    pub fn translate_x(mut self, value: f32) -> Self {
        self.translate_x = Some(value);
        self
    }

    pub fn translate_y(mut self, value: f32) -> Self {
        self.translate_y = Some(value);
        self
    }

    pub fn scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn border_radius(mut self, value: f32) -> Self {
        self.border_radius = Some(value);
        self
    }

    pub fn background(mut self, value: Rgba) -> Self {
        self.background = Some(value);
        self
    }

    pub fn color(mut self, value: Rgba) -> Self {
        self.color = Some(value);
        self
    }

    pub fn gap(mut self, value: f32) -> Self {
        self.gap = Some(value);
        self
    }

    pub fn visible_if(mut self, condition: bool) -> Self {
        self.visibility = Visibility::shown_if(condition);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    /// Opacity as a renderer applies it: clamped, and zero when hidden.
    pub fn effective_opacity(&self) -> f32 {
        if !self.is_visible() {
            return 0.0;
        }
        self.opacity.unwrap_or(1.0).clamp(0.0, 1.0)
    }
}

/// Everything a frame's styles depend on.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleInputs {
    pub geometry: Geometry,
    pub panel_height: f32,
    pub tab_height: f32,
    pub safe_area: f32,
    /// Live horizontal swipe offset
    pub translated_x: f32,
    /// Track pager scroll offset
    pub scroll_x: f32,
    pub track_count: usize,
    pub track_index: Option<usize>,
    pub variant: PlayerVariant,
    /// Accent colour of the active track
    pub accent: Option<Rgba>,
    pub base_color: Rgba,
    pub sheet_backdrop: Rgba,
}

impl StyleInputs {
    /// Inputs for a resting, collapsed player with default colours.
    pub fn collapsed(geometry: Geometry, track_count: usize) -> Self {
        Self {
            geometry,
            panel_height: 80.0,
            tab_height: 64.0,
            safe_area: geometry.screen_height,
            translated_x: 0.0,
            scroll_x: 0.0,
            track_count,
            track_index: (track_count > 0).then_some(0),
            variant: PlayerVariant::default(),
            accent: None,
            base_color: Rgba::from_rgba8(0x17, 0x17, 0x17, 0xff),
            sheet_backdrop: Rgba::from_rgba8(0x17, 0x17, 0x17, 0x80),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.panel_height < self.geometry.screen_height {
            Mode::Collapsed {
                panel_height: self.panel_height,
            }
        } else {
            Mode::Expanded {
                tab_height: self.tab_height,
            }
        }
    }

    fn sw(&self) -> f32 {
        self.geometry.screen_width
    }

    fn sh(&self) -> f32 {
        self.geometry.screen_height
    }
}

/// Styles for every region of the player and the app tab bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStyles {
    pub mode: Mode,
    pub variant: PlayerVariant,
    pub container: RegionStyle,
    /// Docked variant only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_container: Option<RegionStyle>,
    pub nav_bar: RegionStyle,
    pub active_container: RegionStyle,
    pub track_list: RegionStyle,
    /// One per queued track, in queue order
    pub track_items: Vec<RegionStyle>,
    pub image_width: f32,
    pub artwork_wrapper: RegionStyle,
    pub artwork: RegionStyle,
    pub track_info: RegionStyle,
    pub full_controls: RegionStyle,
    pub mini_controls: RegionStyle,
    pub progress_wrapper: RegionStyle,
    pub sheet: RegionStyle,
    pub sheet_backdrop: RegionStyle,
    pub sheet_labels: RegionStyle,
    pub tab_bar: RegionStyle,
    pub tab_bar_items: RegionStyle,
}

impl PlayerStyles {
    /// Style of the active track's item.
    pub fn active_item(&self, index: Option<usize>) -> Option<&RegionStyle> {
        index.and_then(|i| self.track_items.get(i))
    }
}

/// Derive every region's style.
pub fn derive_styles(inputs: &StyleInputs) -> PlayerStyles {
    let image_width = artwork::image_width(inputs);
    PlayerStyles {
        mode: inputs.mode(),
        variant: inputs.variant,
        container: container::container(inputs),
        player_container: container::player_container(inputs),
        nav_bar: container::nav_bar(inputs),
        active_container: artwork::active_container(inputs),
        track_list: artwork::track_list(inputs),
        track_items: (0..inputs.track_count)
            .map(|i| artwork::track_item(inputs, i, image_width))
            .collect(),
        image_width,
        artwork_wrapper: artwork::artwork_wrapper(inputs, image_width),
        artwork: artwork::artwork(inputs, image_width),
        track_info: artwork::track_info(inputs),
        full_controls: controls::full_controls(inputs),
        mini_controls: controls::mini_controls(inputs),
        progress_wrapper: container::progress_wrapper(inputs),
        sheet: bottom_sheet::frame(inputs),
        sheet_backdrop: bottom_sheet::backdrop(inputs),
        sheet_labels: bottom_sheet::labels(inputs),
        tab_bar: container::tab_bar(inputs),
        tab_bar_items: container::tab_bar_items(inputs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> StyleInputs {
        StyleInputs::collapsed(Geometry::new(400.0, 800.0), 3)
    }

    #[test]
    fn test_mode_switches_at_fullscreen() {
        let mut i = inputs();
        i.panel_height = 799.9;
        assert_eq!(i.mode(), Mode::Collapsed { panel_height: 799.9 });
        i.panel_height = 800.0;
        i.tab_height = 100.0;
        assert_eq!(i.mode(), Mode::Expanded { tab_height: 100.0 });
    }

    #[test]
    fn test_derivation_is_pure() {
        let mut i = inputs();
        for panel in [80.0, 300.0, 640.0, 800.0] {
            i.panel_height = panel;
            assert_eq!(derive_styles(&i), derive_styles(&i));
        }
        i.tab_height = 400.0;
        i.safe_area = 760.0;
        assert_eq!(derive_styles(&i), derive_styles(&i));
    }

    #[test]
    fn test_one_item_per_track() {
        let styles = derive_styles(&inputs());
        assert_eq!(styles.track_items.len(), 3);
        assert!(styles.active_item(Some(1)).is_some());
        assert!(styles.active_item(Some(3)).is_none());
        assert!(styles.active_item(None).is_none());
    }

    #[test]
    fn test_empty_queue_has_no_items() {
        let i = StyleInputs::collapsed(Geometry::new(400.0, 800.0), 0);
        assert_eq!(i.track_index, None);
        assert!(derive_styles(&i).track_items.is_empty());
    }

    #[test]
    fn test_cross_fade_between_mini_and_full_controls() {
        let mut i = inputs();
        i.panel_height = 80.0;
        let low = derive_styles(&i);
        assert!(low.mini_controls.is_visible());
        assert_eq!(low.mini_controls.effective_opacity(), 1.0);
        assert_eq!(low.full_controls.effective_opacity(), 0.0);

        i.panel_height = 790.0;
        let high = derive_styles(&i);
        assert_eq!(high.mini_controls.effective_opacity(), 0.0);
        assert!(high.full_controls.effective_opacity() > 0.9);
    }

    #[test]
    fn test_effective_opacity_clamps_and_hides() {
        let style = RegionStyle::default().opacity(-0.4);
        assert_eq!(style.effective_opacity(), 0.0);
        let style = RegionStyle::default().opacity(1.7);
        assert_eq!(style.effective_opacity(), 1.0);
        let style = RegionStyle::default().opacity(0.5).visible_if(false);
        assert_eq!(style.effective_opacity(), 0.0);
    }

    #[test]
    fn test_json_skips_unset_properties() {
        let json = serde_json::to_value(RegionStyle::default().height(80.0)).unwrap();
        assert_eq!(json["height"], 80.0);
        assert_eq!(json["visibility"], "shown");
        assert!(json.get("opacity").is_none());
    }

    #[test]
    fn test_mode_serializes_tagged() {
        let json = serde_json::to_value(Mode::Expanded { tab_height: 64.0 }).unwrap();
        assert_eq!(json["mode"], "expanded");
        assert_eq!(json["tab_height"], 64.0);
    }

    #[test]
    fn test_variant_toggles() {
        assert_eq!(PlayerVariant::Docked.toggled(), PlayerVariant::Classic);
        assert_eq!(PlayerVariant::Classic.toggled().to_string(), "docked");
    }
}
