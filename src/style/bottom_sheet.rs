//! Up next / lyrics / related bottom sheet.

use super::{RegionStyle, StyleInputs};
use crate::motion::{Rgba, interpolate_clamped, interpolate_color};

/// Tab label colour while the sheet is closed (neutral-400).
const LABEL_IDLE: Rgba = Rgba::from_rgba8(0xa3, 0xa3, 0xa3, 0xff);

/// Sheet frame. Only laid out once the panel is most of the way open.
pub(super) fn frame(inputs: &StyleInputs) -> RegionStyle {
    let t = inputs.tab_height;
    let s = inputs.safe_area;
    let fill = inputs.accent.unwrap_or(Rgba::BLACK);
    let radius = interpolate_clamped(t, [64.0, s], [0.0, 12.0]);

    RegionStyle::default()
        .height(interpolate_clamped(t, [64.0, s], [60.0, s - 50.0]))
        .border_radius(radius)
        .background(interpolate_color(
            t,
            &[64.0, s / 2.0, s],
            &[Rgba::TRANSPARENT, fill, fill],
        ))
        .visible_if(inputs.panel_height > inputs.sh() * 0.75)
}

/// Dim layer behind the tab labels.
pub(super) fn backdrop(inputs: &StyleInputs) -> RegionStyle {
    let s = inputs.safe_area;
    let dim = inputs.sheet_backdrop;
    RegionStyle::default().background(interpolate_color(
        inputs.tab_height,
        &[64.0, s * 0.4, s - 80.0],
        &[Rgba::TRANSPARENT, dim, dim],
    ))
}

/// Tab labels brighten to white as the sheet opens.
pub(super) fn labels(inputs: &StyleInputs) -> RegionStyle {
    let s = inputs.safe_area;
    RegionStyle::default().color(interpolate_color(
        inputs.tab_height,
        &[s * 0.15, s - 80.0],
        &[LABEL_IDLE, Rgba::WHITE],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Geometry;

    fn inputs(tab_height: f32) -> StyleInputs {
        let mut i = StyleInputs::collapsed(Geometry::new(400.0, 800.0), 3);
        i.panel_height = 800.0;
        i.safe_area = 700.0;
        i.tab_height = tab_height;
        i
    }

    #[test]
    fn test_frame_closed() {
        let style = frame(&inputs(64.0));
        assert_eq!(style.height, Some(60.0));
        assert_eq!(style.border_radius, Some(0.0));
        assert_eq!(style.background.unwrap().a, 0.0);
        assert!(style.is_visible());
    }

    #[test]
    fn test_frame_open_takes_accent() {
        let mut i = inputs(700.0);
        let accent = Rgba::from_rgba8(0x1e, 0x90, 0xff, 0xff);
        i.accent = Some(accent);
        let style = frame(&i);
        assert_eq!(style.height, Some(650.0));
        assert_eq!(style.border_radius, Some(12.0));
        assert_eq!(style.background.unwrap().to_hex(), "#1e90ffff");

        i.accent = None;
        assert_eq!(frame(&i).background.unwrap().to_hex(), "#000000ff");
    }

    #[test]
    fn test_frame_hidden_on_mini_player() {
        let mut i = inputs(64.0);
        i.panel_height = 400.0;
        assert!(!frame(&i).is_visible());
    }

    #[test]
    fn test_backdrop_dims_as_sheet_opens() {
        assert_eq!(backdrop(&inputs(64.0)).background.unwrap().a, 0.0);
        assert_eq!(
            backdrop(&inputs(620.0)).background.unwrap().to_hex(),
            "#17171780"
        );
    }

    #[test]
    fn test_labels_brighten() {
        assert_eq!(labels(&inputs(64.0)).color.unwrap().to_hex(), "#a3a3a3ff");
        assert_eq!(labels(&inputs(620.0)).color.unwrap().to_hex(), "#ffffffff");
    }
}
