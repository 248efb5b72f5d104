//! Outer player frame, nav bar, progress strip and the app tab bar.

use super::{Mode, PlayerVariant, RegionStyle, StyleInputs};
use crate::motion::{Extrapolation, interpolate, interpolate_clamped, interpolate_color};

/// Panel height at which the accent colour has fully taken over.
const ACCENT_FULL_AT: f32 = 120.0;

pub(super) fn container(inputs: &StyleInputs) -> RegionStyle {
    let h = inputs.panel_height;
    let sh = inputs.sh();
    let accent = inputs.accent.unwrap_or(inputs.base_color);

    RegionStyle::default()
        .height(h)
        .bottom(interpolate(h, &[80.0, sh], &[60.0, 0.0], Extrapolation::Extend))
        .background(interpolate_color(
            h,
            &[80.0, ACCENT_FULL_AT, sh],
            &[inputs.base_color, accent, accent],
        ))
}

/// The docked variant slides its content up into place as it opens.
pub(super) fn player_container(inputs: &StyleInputs) -> Option<RegionStyle> {
    match inputs.variant {
        PlayerVariant::Classic => None,
        PlayerVariant::Docked => Some(RegionStyle::default().translate_y(interpolate(
            inputs.panel_height,
            &[80.0, inputs.sh()],
            &[-46.0, 0.0],
            Extrapolation::Extend,
        ))),
    }
}

pub(super) fn nav_bar(inputs: &StyleInputs) -> RegionStyle {
    let sh = inputs.sh();
    let s = inputs.safe_area;

    match inputs.mode() {
        Mode::Collapsed { panel_height: h } => RegionStyle::default()
            .height(interpolate(h, &[120.0, sh], &[10.0, 80.0], Extrapolation::Extend))
            .opacity(interpolate_clamped(h, [sh * 0.75, sh], [0.0, 1.0]))
            .translate_y(interpolate(h, &[80.0, sh], &[-100.0, 0.0], Extrapolation::Extend))
            .visible_if(h >= 120.0),
        Mode::Expanded { tab_height: t } => RegionStyle::default()
            .translate_y(interpolate(t, &[64.0, s - 80.0], &[0.0, -160.0], Extrapolation::Extend))
            .opacity(interpolate(
                t,
                &[64.0, s * 0.4, s - 80.0],
                &[1.0, 0.2, 0.0],
                Extrapolation::Extend,
            )),
    }
}

/// The thin progress strip only shows on the resting mini-player.
pub(super) fn progress_wrapper(inputs: &StyleInputs) -> RegionStyle {
    RegionStyle::default().opacity(interpolate(
        inputs.panel_height,
        &[80.0, 88.0, inputs.sh()],
        &[1.0, 0.0, 0.0],
        Extrapolation::Clamp,
    ))
}

/// App tab bar slides out below the screen as the player opens.
pub(super) fn tab_bar(inputs: &StyleInputs) -> RegionStyle {
    RegionStyle::default().translate_y(interpolate_clamped(
        inputs.panel_height,
        [80.0, inputs.sh()],
        [0.0, 60.0],
    ))
}

pub(super) fn tab_bar_items(inputs: &StyleInputs) -> RegionStyle {
    let sh = inputs.sh();
    RegionStyle::default().opacity(interpolate(
        inputs.panel_height,
        &[80.0, sh * 0.7, sh],
        &[1.0, 0.2, 0.0],
        Extrapolation::Clamp,
    ))
}
