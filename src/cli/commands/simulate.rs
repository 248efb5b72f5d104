//! `simulate`: replay a gesture script and print each step.

use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::model::dummy_tracks;
use crate::player::Queue;
use crate::script::{Script, StepOutcome};
use crate::session::PlayerSession;

pub fn cmd_simulate(config: &Config, path: &Path, print_styles: bool) -> anyhow::Result<()> {
    let script = Script::load(path)?;
    tracing::info!(steps = script.steps.len(), "Running script {:?}", path);

    let mut session = PlayerSession::new(Queue::new(dummy_tracks()), config);
    let mut failed = None;

    script.run(&mut session, Instant::now(), |outcome, session, now| {
        println!("{}", format_outcome(outcome));
        if print_styles && failed.is_none() {
            match serde_json::to_string(&session.styles(now)) {
                Ok(json) => println!("{json}"),
                Err(e) => failed = Some(e),
            }
        }
    });

    if let Some(e) = failed {
        return Err(e.into());
    }
    Ok(())
}

fn format_outcome(outcome: &StepOutcome) -> String {
    let s = &outcome.snapshot;
    let track = s
        .active_index
        .map(|i| i.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut line = format!(
        "{:>6}ms  {:<24} panel={:>6.1} tab={:>6.1} track={} {}",
        outcome.at.as_millis(),
        outcome.step.to_string(),
        s.panel_height,
        s.tab_height,
        track,
        if s.is_playing { "playing" } else { "paused" },
    );
    if let Some(note) = &outcome.note {
        line.push_str("  (");
        line.push_str(note);
        line.push(')');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Step;
    use crate::session::SessionSnapshot;
    use std::time::Duration;

    #[test]
    fn test_format_outcome() {
        let outcome = StepOutcome {
            at: Duration::from_millis(400),
            step: Step::PanelEnd { velocity_y: 0.0 },
            note: Some("snap open".to_string()),
            snapshot: SessionSnapshot {
                panel_height: 800.0,
                tab_height: 64.0,
                active_index: Some(1),
                is_playing: false,
                translated_x: 0.0,
                scroll_x: 0.0,
                progress: 0.0,
            },
        };
        let line = format_outcome(&outcome);
        assert!(line.contains("400ms"));
        assert!(line.contains("panel= 800.0"));
        assert!(line.contains("track=1 paused"));
        assert!(line.ends_with("(snap open)"));
    }
}
