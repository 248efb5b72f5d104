//! `styles`: one-shot style derivation.

use crate::config::Config;
use crate::model::dummy_tracks;
use crate::sheet::Geometry;
use crate::style::{PlayerStyles, PlayerVariant, StyleInputs, derive_styles};

/// Parsed `styles` arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct StylesArgs {
    pub panel: f32,
    pub tab: f32,
    pub safe_area: Option<f32>,
    pub variant: Option<PlayerVariant>,
    pub index: usize,
    pub swipe: f32,
}

/// Print every region's style as pretty JSON.
pub fn cmd_styles(config: &Config, args: &StylesArgs) -> anyhow::Result<()> {
    let styles = styles_for(config, args)?;
    println!("{}", serde_json::to_string_pretty(&styles)?);
    Ok(())
}

fn styles_for(config: &Config, args: &StylesArgs) -> anyhow::Result<PlayerStyles> {
    let tracks = dummy_tracks();
    let Some(track) = tracks.get(args.index) else {
        anyhow::bail!(
            "Track index {} out of range (queue has {} tracks)",
            args.index,
            tracks.len()
        );
    };

    let geometry = Geometry::from(&config.geometry);
    let motion = &config.motion;
    let panel_height = args
        .panel
        .clamp(motion.collapsed_height, geometry.screen_height.max(motion.collapsed_height));
    if panel_height != args.panel {
        tracing::warn!(
            requested = args.panel,
            used = panel_height,
            "Panel height outside its range, clamped"
        );
    }

    let inputs = StyleInputs {
        geometry,
        panel_height,
        tab_height: args.tab,
        safe_area: args.safe_area.unwrap_or(geometry.screen_height),
        translated_x: args.swipe,
        scroll_x: args.index as f32 * geometry.screen_width,
        track_count: tracks.len(),
        track_index: Some(args.index),
        variant: args.variant.unwrap_or(config.appearance.variant),
        accent: track.accent_color,
        base_color: config.appearance.base_color,
        sheet_backdrop: config.appearance.sheet_backdrop,
    };
    Ok(derive_styles(&inputs))
}
