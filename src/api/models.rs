use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub url: String,
    /// Nominal length in seconds. The media element's reported duration wins once known.
    #[serde(default)]
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
    #[serde(default, alias = "artist:")]
    pub artist: String,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Header subtitle: artist and year joined by an em dash, or whichever is present.
    pub fn byline(&self) -> String {
        match (self.artist.trim(), self.year) {
            ("", Some(year)) => year.to_string(),
            (artist, Some(year)) => format!("{artist} — {year}"),
            (artist, None) => artist.to_string(),
        }
    }
}

/// Formats seconds as `m:ss`, flooring both parts.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    let mins = whole / 60;
    let secs = whole % 60;
    format!("{}:{:02}", mins, secs)
}
