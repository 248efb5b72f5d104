//! Static dummy catalogue used as the initial queue.

use super::{Artist, Track};
use crate::motion::Rgba;

fn track(
    id: &str,
    name: &str,
    artists: &[(&str, &str)],
    duration: u32,
    accent: Option<Rgba>,
    likes: u64,
) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: artists.iter().map(|(id, name)| Artist::new(*id, *name)).collect(),
        cover_image: format!("covers/{id}.jpg"),
        duration,
        accent_color: accent,
        lyrics: None,
        audio: format!("audio/{id}.mp3"),
        likes,
        video: None,
    }
}

/// The in-memory track list the player starts with.
pub fn dummy_tracks() -> Vec<Track> {
    let mut tracks = vec![
        track(
            "t-001",
            "Midnight Transit",
            &[("a-01", "Lumen Drive")],
            214,
            Some(Rgba::from_rgba8(0x3b, 0x2f, 0x63, 0xff)),
            48_200,
        ),
        track(
            "t-002",
            "Paper Satellites",
            &[("a-02", "Okra Fields"), ("a-03", "Mina Sol")],
            187,
            Some(Rgba::from_rgba8(0x8a, 0x3c, 0x24, 0xff)),
            1_350_000,
        ),
        track(
            "t-003",
            "Low Tide Radio",
            &[("a-04", "The Harbour Lights")],
            265,
            None,
            912,
        ),
        track(
            "t-004",
            "Glasshouse",
            &[("a-05", "Vera Anand")],
            3_725,
            Some(Rgba::from_rgba8(0x1f, 0x5c, 0x4a, 0xff)),
            27_000,
        ),
        track(
            "t-005",
            "Static Bloom",
            &[("a-01", "Lumen Drive"), ("a-06", "Kito")],
            198,
            Some(Rgba::from_rgba8(0x6b, 0x1d, 0x3f, 0xff)),
            2_400_000_000,
        ),
    ];

    tracks[0].lyrics = Some(
        "Street lamps count the stations\nI never meant to pass\n".to_string(),
    );
    tracks[1].video = Some("video/t-002.mp4".to_string());
    tracks[3].lyrics = Some("Every pane a little weather\n".to_string());

    tracks
}
