//! Active track area: the paged track list, cover art and title text.

use super::{Mode, RegionStyle, StyleInputs};
use crate::motion::{Extrapolation, interpolate, interpolate_clamped};

/// Height of the cover art block when fully open.
const ART_HEIGHT: f32 = 510.0;
/// Largest cover image edge.
const ART_MAX: f32 = 460.0;
/// Cover edge on the mini-player.
const ART_MIN: f32 = 60.0;

/// Shared driver for the artwork regions: 60 on the mini-player, the full
/// screen width when open, shrinking back to 60 as the sheet opens.
pub fn image_width(inputs: &StyleInputs) -> f32 {
    let sw = inputs.sw();
    match inputs.mode() {
        Mode::Collapsed { panel_height: h } => {
            interpolate_clamped(h, [80.0, inputs.sh()], [ART_MIN, sw])
        }
        Mode::Expanded { tab_height: t } => {
            interpolate_clamped(t, [64.0, inputs.safe_area - 80.0], [sw, ART_MIN])
        }
    }
}

pub(super) fn active_container(inputs: &StyleInputs) -> RegionStyle {
    match inputs.mode() {
        Mode::Collapsed { panel_height: h } => {
            let range = [80.0, inputs.sh()];
            RegionStyle::default()
                .translate_y(interpolate_clamped(h, range, [-5.0, 0.0]))
                .height(interpolate_clamped(h, range, [80.0, ART_HEIGHT]))
                .width(inputs.sw())
        }
        Mode::Expanded { tab_height: t } => {
            let range = [64.0, inputs.safe_area - 80.0];
            RegionStyle::default()
                .translate_y(interpolate_clamped(t, range, [0.0, -64.0]))
                .height(interpolate_clamped(t, range, [ART_HEIGHT, 80.0]))
        }
    }
}

pub(super) fn track_list(inputs: &StyleInputs) -> RegionStyle {
    let sw = inputs.sw();
    let (x, range, heights, widths) = match inputs.mode() {
        Mode::Collapsed { panel_height: h } => (
            h,
            [80.0, inputs.sh()],
            [80.0, ART_HEIGHT],
            [sw * 0.75, sw],
        ),
        Mode::Expanded { tab_height: t } => (
            t,
            [64.0, inputs.safe_area - 80.0],
            [ART_HEIGHT, 80.0],
            [sw, sw * 0.75],
        ),
    };
    RegionStyle::default()
        .height(interpolate(x, &range, &heights, Extrapolation::Extend))
        .width(interpolate(x, &range, &widths, Extrapolation::Extend))
}

/// One page of the track list. Pages next to the one in view are shrunk
/// and dimmed.
pub(super) fn track_item(inputs: &StyleInputs, index: usize, image_width: f32) -> RegionStyle {
    let sw = inputs.sw();
    let position = index as f32 * sw;
    let range = [position - sw, position, position + sw];

    let height = match inputs.mode() {
        Mode::Collapsed { .. } => interpolate(
            image_width,
            &[ART_MIN, sw],
            &[60.0, ART_HEIGHT],
            Extrapolation::Extend,
        ),
        Mode::Expanded { tab_height: t } => interpolate(
            t,
            &[64.0, inputs.safe_area - 80.0],
            &[ART_HEIGHT, 60.0],
            Extrapolation::Extend,
        ),
    };

    RegionStyle::default()
        .scale(interpolate(inputs.scroll_x, &range, &[0.9, 1.0, 0.9], Extrapolation::Clamp))
        .opacity(interpolate(inputs.scroll_x, &range, &[0.6, 1.0, 0.6], Extrapolation::Clamp))
        .translate_x(inputs.translated_x)
        .width(sw)
        .height(height)
}

pub(super) fn artwork_wrapper(inputs: &StyleInputs, image_width: f32) -> RegionStyle {
    let sw = inputs.sw();
    let range = [ART_MIN, sw];
    RegionStyle::default()
        .width(interpolate(image_width, &range, &[ART_MIN, sw - 24.0], Extrapolation::Extend))
        .height(interpolate(image_width, &range, &[ART_MIN, ART_HEIGHT], Extrapolation::Extend))
}

/// Square cover image.
pub(super) fn artwork(inputs: &StyleInputs, image_width: f32) -> RegionStyle {
    let range = [ART_MIN, inputs.sw()];
    let (min_edge, radius) = match inputs.mode() {
        Mode::Collapsed { panel_height: h } => (
            ART_MIN,
            interpolate(h, &[64.0, inputs.sh()], &[0.0, 12.0], Extrapolation::Extend),
        ),
        Mode::Expanded { tab_height: t } => (
            50.0,
            interpolate(
                t,
                &[64.0, inputs.safe_area - 80.0],
                &[12.0, 0.0],
                Extrapolation::Extend,
            ),
        ),
    };
    let edge = interpolate(image_width, &range, &[min_edge, ART_MAX], Extrapolation::Extend);
    RegionStyle::default()
        .width(edge)
        .height(edge)
        .border_radius(radius)
}

/// Title and artists beside the mini cover; back again under a fully open
/// sheet.
pub(super) fn track_info(inputs: &StyleInputs) -> RegionStyle {
    match inputs.mode() {
        Mode::Collapsed { panel_height: h } => RegionStyle::default()
            .translate_y(interpolate_clamped(h, [80.0, inputs.sh()], [0.0, -100.0]))
            .opacity(interpolate(
                h,
                &[80.0, inputs.sh() * 0.3, 100.0],
                &[1.0, 0.0, 0.0],
                Extrapolation::Clamp,
            ))
            .visible_if(h <= 100.0)
            .gap(4.0),
        Mode::Expanded { tab_height: t } => {
            let s = inputs.safe_area;
            RegionStyle::default()
                .translate_y(interpolate_clamped(t, [64.0, s - 80.0], [-10.0, 0.0]))
                .opacity(interpolate(
                    t,
                    &[64.0, s * 0.833, s - 80.0],
                    &[0.0, 0.0, 1.0],
                    Extrapolation::Clamp,
                ))
                .visible_if(t > s * 0.833)
                .gap(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Geometry;

    fn inputs(panel_height: f32) -> StyleInputs {
        let mut i = StyleInputs::collapsed(Geometry::new(400.0, 800.0), 3);
        i.panel_height = panel_height;
        i
    }

    fn expanded(tab_height: f32) -> StyleInputs {
        let mut i = inputs(800.0);
        i.safe_area = 700.0;
        i.tab_height = tab_height;
        i
    }

    #[test]
    fn test_image_width_tracks_both_modes() {
        assert_eq!(image_width(&inputs(80.0)), 60.0);
        assert_eq!(image_width(&inputs(440.0)), 230.0);
        assert_eq!(image_width(&expanded(64.0)), 400.0);
        assert_eq!(image_width(&expanded(620.0)), 60.0);
        assert_eq!(image_width(&expanded(900.0)), 60.0);
    }

    #[test]
    fn test_active_container() {
        let low = active_container(&inputs(80.0));
        assert_eq!(low.translate_y, Some(-5.0));
        assert_eq!(low.height, Some(80.0));
        assert_eq!(low.width, Some(400.0));

        let open = active_container(&expanded(620.0));
        assert_eq!(open.translate_y, Some(-64.0));
        assert_eq!(open.height, Some(80.0));
        assert_eq!(open.width, None);
    }

    #[test]
    fn test_track_list_narrows_on_mini_player() {
        let low = track_list(&inputs(80.0));
        assert_eq!(low.width, Some(300.0));
        assert_eq!(low.height, Some(80.0));
        let full = track_list(&expanded(64.0));
        assert_eq!(full.width, Some(400.0));
        assert_eq!(full.height, Some(510.0));
    }

    #[test]
    fn test_track_item_in_view_is_full_size() {
        let mut i = inputs(80.0);
        i.scroll_x = 400.0;
        i.translated_x = -35.0;
        let w = image_width(&i);

        let current = track_item(&i, 1, w);
        assert_eq!(current.scale, Some(1.0));
        assert_eq!(current.opacity, Some(1.0));
        assert_eq!(current.translate_x, Some(-35.0));
        assert_eq!(current.height, Some(60.0));

        let neighbour = track_item(&i, 2, w);
        assert_eq!(neighbour.scale, Some(0.9));
        assert_eq!(neighbour.opacity, Some(0.6));

        let far = track_item(&i, 0, w);
        assert_eq!(far.scale, Some(0.9));
    }

    #[test]
    fn test_track_item_height_follows_sheet() {
        let i = expanded(620.0);
        assert_eq!(track_item(&i, 0, image_width(&i)).height, Some(60.0));
        let i = expanded(64.0);
        assert_eq!(track_item(&i, 0, image_width(&i)).height, Some(510.0));
    }

    #[test]
    fn test_artwork_sizes() {
        let i = inputs(800.0 - 0.001);
        let w = image_width(&i);
        let wrapper = artwork_wrapper(&i, w);
        assert!((wrapper.width.unwrap() - 376.0).abs() < 0.1);

        let i = inputs(80.0);
        let art = artwork(&i, image_width(&i));
        assert_eq!(art.width, Some(60.0));
        assert_eq!(art.width, art.height);

        let i = expanded(620.0);
        let art = artwork(&i, image_width(&i));
        assert_eq!(art.width, Some(50.0));
        assert_eq!(art.border_radius, Some(0.0));
    }

    #[test]
    fn test_track_info_collapsed() {
        let rest = track_info(&inputs(80.0));
        assert!(rest.is_visible());
        assert_eq!(rest.opacity, Some(1.0));
        assert_eq!(rest.gap, Some(4.0));
        assert!(!track_info(&inputs(101.0)).is_visible());
    }

    #[test]
    fn test_track_info_returns_under_open_sheet() {
        assert!(!track_info(&expanded(300.0)).is_visible());
        let open = track_info(&expanded(620.0));
        assert!(open.is_visible());
        assert_eq!(open.opacity, Some(1.0));
        assert_eq!(open.translate_y, Some(0.0));
        assert_eq!(open.gap, Some(0.0));
    }
}
