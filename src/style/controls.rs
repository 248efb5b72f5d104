//! Full-player transport controls and the mini-player play button.

use super::{Mode, PlayerVariant, RegionStyle, StyleInputs};
use crate::motion::{Extrapolation, interpolate, interpolate_clamped};

/// Mini controls disappear once the panel is dragged past this height.
const MINI_CONTROLS_MAX_PANEL: f32 = 200.0;

/// Title, transport, scrubber and action chips of the full player.
pub(super) fn full_controls(inputs: &StyleInputs) -> RegionStyle {
    let sw = inputs.sw();
    let sh = inputs.sh();
    match inputs.mode() {
        Mode::Collapsed { panel_height: h } => RegionStyle::default()
            .translate_y(interpolate(h, &[100.0, sh], &[sw, 0.0], Extrapolation::Extend))
            .opacity(interpolate(h, &[sw, sh], &[0.0, 1.0], Extrapolation::Extend))
            .visible_if(h > sh / 2.0),
        Mode::Expanded { tab_height: t } => {
            let s = inputs.safe_area;
            RegionStyle::default()
                .translate_y(interpolate(t, &[64.0, s - 80.0], &[0.0, s / 2.0], Extrapolation::Extend))
                .opacity(interpolate(
                    t,
                    &[64.0, s * 0.4, s - 80.0],
                    &[1.0, 0.2, 0.0],
                    Extrapolation::Extend,
                ))
                .visible_if(t < s * 0.75)
        }
    }
}

/// Cast and play/pause buttons at the right of the mini-player, and of the
/// collapsed strip above a fully open sheet.
pub(super) fn mini_controls(inputs: &StyleInputs) -> RegionStyle {
    let (collapsed_slide, expanded_slide) = match inputs.variant {
        PlayerVariant::Docked => ([12.0, 0.0], [0.0, 14.0]),
        PlayerVariant::Classic => ([-30.0, 0.0], [0.0, 18.0]),
    };

    match inputs.mode() {
        Mode::Collapsed { panel_height: h } => {
            let sh = inputs.sh();
            RegionStyle::default()
                .translate_y(interpolate_clamped(h, [80.0, sh], collapsed_slide))
                .opacity(interpolate(
                    h,
                    &[80.0, sh * 0.2, sh],
                    &[1.0, 0.5, 0.0],
                    Extrapolation::Clamp,
                ))
                .visible_if(h <= MINI_CONTROLS_MAX_PANEL)
        }
        Mode::Expanded { tab_height: t } => {
            let s = inputs.safe_area;
            RegionStyle::default()
                .translate_y(interpolate_clamped(t, [80.0, s - 80.0], expanded_slide))
                .opacity(interpolate(
                    t,
                    &[64.0, s * 0.5, s - 80.0],
                    &[0.0, 0.0, 1.0],
                    Extrapolation::Clamp,
                ))
                .visible_if(t >= s * 0.5)
        }
    }
}
