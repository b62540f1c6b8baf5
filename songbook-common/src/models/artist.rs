//! Artist record

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::time;

/// An artist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    pub founded_date: NaiveDateTime,
    /// Non-empty, each entry capitalized ("Rock", "Hip hop")
    pub genres: Vec<String>,
}

impl Artist {
    pub fn new(name: impl Into<String>, founded_date: NaiveDateTime, genres: Vec<String>) -> Self {
        Self {
            name: name.into(),
            founded_date,
            genres,
        }
    }

    /// True when every genre in `wanted` is listed for this artist
    pub fn has_all_genres(&self, wanted: &[String]) -> bool {
        wanted.iter().all(|genre| self.genres.contains(genre))
    }
}

impl Record for Artist {
    const KIND: &'static str = "artist";
    const KIND_PLURAL: &'static str = "artists";

    fn apply_update(&mut self, changes: &Self) {
        self.name = changes.name.clone();
        self.founded_date = changes.founded_date;
        self.genres = changes.genres.clone();
    }
}

/// Fixed demo data for the seed menu option
pub fn seeded_artists() -> Vec<Artist> {
    let stamp = |s: &str| time::parse_local_date_time(s).unwrap_or_default();
    let genres = |list: &[&str]| list.iter().map(|g| g.to_string()).collect::<Vec<_>>();
    vec![
        Artist::new("Queen", stamp("1970-06-27T00:00:00"), genres(&["Rock", "Glam rock"])),
        Artist::new("Miles Davis Quintet", stamp("1955-07-01T00:00:00"), genres(&["Jazz"])),
        Artist::new("Nirvana", stamp("1987-01-01T00:00:00"), genres(&["Grunge", "Rock", "Punk"])),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_update_replaces_all_fields() {
        let mut artist = seeded_artists().remove(0);
        let replacement = seeded_artists().remove(1);
        artist.apply_update(&replacement);
        assert_eq!(artist, replacement);
    }

    #[test]
    fn test_has_all_genres() {
        let nirvana = seeded_artists().remove(2);
        assert!(nirvana.has_all_genres(&["Rock".to_string(), "Punk".to_string()]));
        assert!(nirvana.has_all_genres(&[]));
        assert!(!nirvana.has_all_genres(&["Rock".to_string(), "Jazz".to_string()]));
    }
}
