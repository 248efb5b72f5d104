//! `queue`: list the built-in queue.

use crate::format::{format_duration, format_number};
use crate::model::{Track, dummy_tracks};

pub fn cmd_queue() -> anyhow::Result<()> {
    let tracks = dummy_tracks();
    if tracks.is_empty() {
        println!("Queue is empty.");
        return Ok(());
    }

    println!("{:>3}  {:<28} {:<32} {:>6} {:>10}", "#", "Title", "Artists", "Time", "Likes");
    for (i, track) in tracks.iter().enumerate() {
        println!("{}", format_row(i, track));
    }
    let total: u64 = tracks.iter().map(|t| u64::from(t.duration)).sum();
    println!("\n{} tracks, {}", tracks.len(), format_duration(total));
    Ok(())
}

fn format_row(index: usize, track: &Track) -> String {
    let lyrics = if track.has_lyrics() { " ♪" } else { "" };
    format!(
        "{:>3}  {:<28} {:<32} {:>6} {:>10}{}",
        index,
        truncate(&track.name, 28),
        truncate(&track.artist_line(), 32),
        format_duration(u64::from(track.duration)),
        format_number(track.likes),
        lyrics
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("abcdefghij", 5).chars().count(), 5);
    }

    #[test]
    fn test_row_contains_duration() {
        let track = &dummy_tracks()[0];
        let row = format_row(0, track);
        assert!(row.contains(&format_duration(u64::from(track.duration))));
    }
}
