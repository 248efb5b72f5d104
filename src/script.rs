//! Scripted gesture sessions.
//!
//! A script is a TOML file with an optional `[setup]` table and a list of
//! `[[step]]` tables, each tagged by `action`:
//!
//! ```toml
//! [setup]
//! safe_area = 700.0
//!
//! [[step]]
//! action = "panel_begin"
//!
//! [[step]]
//! action = "panel_update"
//! delta_y = -500.0
//!
//! [[step]]
//! action = "panel_end"
//! velocity_y = 0.0
//!
//! [[step]]
//! action = "wait"
//! ms = 400
//! ```
//!
//! Steps run against a [`PlayerSession`] on a virtual clock: only `wait`
//! advances time.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::error::{Error, Result, ResultExt};
use crate::player::{Direction, TrackChange};
use crate::session::{PlayerSession, SessionSnapshot};
use crate::sheet::{Geometry, SnapPoint};
use crate::style::PlayerVariant;

/// Overrides applied before the first step.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Setup {
    pub screen_width: Option<f32>,
    pub screen_height: Option<f32>,
    /// Measured safe-area height for the bottom sheet
    pub safe_area: Option<f32>,
    pub variant: Option<PlayerVariant>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    PanelBegin,
    PanelUpdate { delta_y: f32 },
    PanelEnd { velocity_y: f32 },
    PanelExpand,
    PanelCollapse,
    TabBegin,
    TabUpdate { delta_y: f32 },
    TabEnd { velocity_y: f32 },
    TabExpand,
    TabCollapse,
    MeasureSafeArea { height: f32 },
    Resize { width: f32, height: f32 },
    Wait { ms: u64 },
    Next,
    Prev,
    Jump { index: usize },
    TogglePlay,
    /// Horizontal drag to `translation_x`, then release
    Swipe { translation_x: f32 },
    /// Scroll the track list to `offset` and let it settle
    Scroll { offset: f32 },
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::PanelBegin => write!(f, "panel_begin"),
            Step::PanelUpdate { delta_y } => write!(f, "panel_update {delta_y}"),
            Step::PanelEnd { velocity_y } => write!(f, "panel_end v={velocity_y}"),
            Step::PanelExpand => write!(f, "panel_expand"),
            Step::PanelCollapse => write!(f, "panel_collapse"),
            Step::TabBegin => write!(f, "tab_begin"),
            Step::TabUpdate { delta_y } => write!(f, "tab_update {delta_y}"),
            Step::TabEnd { velocity_y } => write!(f, "tab_end v={velocity_y}"),
            Step::TabExpand => write!(f, "tab_expand"),
            Step::TabCollapse => write!(f, "tab_collapse"),
            Step::MeasureSafeArea { height } => write!(f, "measure_safe_area {height}"),
            Step::Resize { width, height } => write!(f, "resize {width}x{height}"),
            Step::Wait { ms } => write!(f, "wait {ms}ms"),
            Step::Next => write!(f, "next"),
            Step::Prev => write!(f, "prev"),
            Step::Jump { index } => write!(f, "jump {index}"),
            Step::TogglePlay => write!(f, "toggle_play"),
            Step::Swipe { translation_x } => write!(f, "swipe {translation_x}"),
            Step::Scroll { offset } => write!(f, "scroll {offset}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub setup: Setup,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// What one step did.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Virtual time after the step
    pub at: Duration,
    pub step: Step,
    /// Snap decision or track change, if the step produced one
    pub note: Option<String>,
    pub snapshot: SessionSnapshot,
}

impl Script {
    pub fn parse(source: &str, path: &Path) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::script(path, e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(format!("reading script {}", path.display()))?;
        Self::parse(&source, path)
    }

    /// Apply the setup table at `start`.
    pub fn prepare(&self, session: &mut PlayerSession, start: Instant) {
        let setup = &self.setup;
        if setup.screen_width.is_some() || setup.screen_height.is_some() {
            let current = session.geometry();
            let geometry = Geometry::new(
                setup.screen_width.unwrap_or(current.screen_width),
                setup.screen_height.unwrap_or(current.screen_height),
            );
            session.set_geometry(geometry, start);
        }
        if let Some(height) = setup.safe_area {
            session.measure_safe_area(height, start);
        }
        if let Some(variant) = setup.variant {
            session.set_variant(variant);
        }
    }

    /// Run every step, calling `observe` after each.
    pub fn run(
        &self,
        session: &mut PlayerSession,
        start: Instant,
        mut observe: impl FnMut(&StepOutcome, &PlayerSession, Instant),
    ) -> Vec<StepOutcome> {
        self.prepare(session, start);

        let mut elapsed = Duration::ZERO;
        let mut outcomes = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            if let Step::Wait { ms } = step {
                elapsed += Duration::from_millis(*ms);
            }
            let now = start + elapsed;
            let note = apply(step, session, now);
            session.tick(now);

            tracing::trace!(step = %step, at_ms = elapsed.as_millis() as u64, "Script step");
            let outcome = StepOutcome {
                at: elapsed,
                step: step.clone(),
                note,
                snapshot: session.snapshot(now),
            };
            observe(&outcome, session, now);
            outcomes.push(outcome);
        }
        outcomes
    }
}

fn apply(step: &Step, session: &mut PlayerSession, now: Instant) -> Option<String> {
    let snap_note = |snap: SnapPoint| match snap {
        SnapPoint::Upper => "snap open".to_string(),
        SnapPoint::Lower => "snap closed".to_string(),
    };
    let change_note = |change: Option<TrackChange>| {
        change.map(|c| format!("track {} -> {}", c.from, c.to))
    };

    match *step {
        Step::PanelBegin => session.begin_panel_drag(now),
        Step::PanelUpdate { delta_y } => session.update_panel_drag(delta_y),
        Step::PanelEnd { velocity_y } => {
            return Some(snap_note(session.end_panel_drag(velocity_y, now)));
        }
        Step::PanelExpand => session.expand_panel(now),
        Step::PanelCollapse => session.collapse_panel(now),
        Step::TabBegin => session.begin_tab_drag(now),
        Step::TabUpdate { delta_y } => session.update_tab_drag(delta_y),
        Step::TabEnd { velocity_y } => {
            return Some(snap_note(session.end_tab_drag(velocity_y, now)));
        }
        Step::TabExpand => session.expand_tabs(now),
        Step::TabCollapse => session.collapse_tabs(now),
        Step::MeasureSafeArea { height } => session.measure_safe_area(height, now),
        Step::Resize { width, height } => session.set_geometry(Geometry::new(width, height), now),
        Step::Wait { .. } => {}
        Step::Next => return change_note(session.navigate(Direction::Next, now)),
        Step::Prev => return change_note(session.navigate(Direction::Prev, now)),
        Step::Jump { index } => return change_note(session.jump_to(index, now)),
        Step::TogglePlay => session.toggle_play(now),
        Step::Swipe { translation_x } => {
            session.update_swipe(translation_x);
            return change_note(session.end_swipe(now));
        }
        Step::Scroll { offset } => {
            session.scroll_to(offset);
            return change_note(session.settle_scroll(now));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::dummy_tracks;
    use crate::player::Queue;

    fn session() -> PlayerSession {
        let mut config = Config::default();
        config.geometry.screen_width = 400.0;
        config.geometry.screen_height = 800.0;
        PlayerSession::new(Queue::new(dummy_tracks()), &config)
    }

    fn run(source: &str) -> Vec<StepOutcome> {
        let script = Script::parse(source, Path::new("test.toml")).unwrap();
        let mut s = session();
        script.run(&mut s, Instant::now(), |_, _, _| {})
    }

    #[test]
    fn test_parses_tagged_steps() {
        let script = Script::parse(
            r#"
[setup]
safe_area = 700.0
variant = "classic"

[[step]]
action = "panel_update"
delta_y = -500.0

[[step]]
action = "wait"
ms = 250

[[step]]
action = "swipe"
translation_x = -120.0
"#,
            Path::new("s.toml"),
        )
        .unwrap();

        assert_eq!(script.setup.safe_area, Some(700.0));
        assert_eq!(script.setup.variant, Some(PlayerVariant::Classic));
        assert_eq!(
            script.steps,
            vec![
                Step::PanelUpdate { delta_y: -500.0 },
                Step::Wait { ms: 250 },
                Step::Swipe { translation_x: -120.0 },
            ]
        );
    }

    #[test]
    fn test_unknown_action_is_a_script_error() {
        let err = Script::parse(
            "[[step]]\naction = \"fly\"\n",
            Path::new("bad.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Script { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_missing_field_is_a_script_error() {
        let err = Script::parse(
            "[[step]]\naction = \"panel_update\"\n",
            Path::new("bad.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Script { .. }));
    }

    #[test]
    fn test_drag_and_snap_on_virtual_clock() {
        let outcomes = run(r#"
[[step]]
action = "panel_begin"

[[step]]
action = "panel_update"
delta_y = -500.0

[[step]]
action = "panel_end"
velocity_y = 0.0

[[step]]
action = "wait"
ms = 400
"#);
        assert_eq!(outcomes[1].snapshot.panel_height, 580.0);
        assert_eq!(outcomes[2].note.as_deref(), Some("snap open"));
        assert_eq!(outcomes[3].at, Duration::from_millis(400));
        assert_eq!(outcomes[3].snapshot.panel_height, 800.0);
    }

    #[test]
    fn test_tab_expand_to_620() {
        let outcomes = run(r#"
[setup]
safe_area = 700.0

[[step]]
action = "panel_expand"

[[step]]
action = "tab_expand"

[[step]]
action = "wait"
ms = 600
"#);
        let last = outcomes.last().unwrap();
        assert_eq!(last.snapshot.panel_height, 800.0);
        assert_eq!(last.snapshot.tab_height, 620.0);
    }

    #[test]
    fn test_safe_area_setup_leaves_sheet_closed() {
        let outcomes = run(r#"
[setup]
safe_area = 700.0

[[step]]
action = "wait"
ms = 300
"#);
        assert_eq!(outcomes[0].snapshot.tab_height, 64.0);
        assert_eq!(outcomes[0].snapshot.panel_height, 80.0);
    }

    #[test]
    fn test_play_then_next_pauses() {
        let outcomes = run(r#"
[[step]]
action = "toggle_play"

[[step]]
action = "next"
"#);
        assert!(outcomes[0].snapshot.is_playing);
        assert_eq!(outcomes[1].note.as_deref(), Some("track 0 -> 1"));
        assert!(!outcomes[1].snapshot.is_playing);
        assert_eq!(outcomes[1].snapshot.active_index, Some(1));
    }

    #[test]
    fn test_observer_sees_every_step() {
        let script = Script::parse(
            "[[step]]\naction = \"next\"\n\n[[step]]\naction = \"prev\"\n",
            Path::new("s.toml"),
        )
        .unwrap();
        let mut s = session();
        let mut seen = Vec::new();
        script.run(&mut s, Instant::now(), |outcome, _, _| {
            seen.push(outcome.step.to_string())
        });
        assert_eq!(seen, vec!["next", "prev"]);
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = Script::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("reading script"));
    }
}
