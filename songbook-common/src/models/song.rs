//! Song record

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::time;

/// A song entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    /// 1 (low) to 5 (high)
    pub rating: i64,
    pub genre: String,
    pub explicit: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Song {
    /// Create a new song stamped with the current time
    pub fn new(title: impl Into<String>, rating: i64, genre: impl Into<String>, explicit: bool) -> Self {
        let now = time::now();
        Self::with_timestamps(title, rating, genre, explicit, now, now)
    }

    /// Create a song with explicit timestamps (loading, seeding, fixtures)
    pub fn with_timestamps(
        title: impl Into<String>,
        rating: i64,
        genre: impl Into<String>,
        explicit: bool,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            rating,
            genre: genre.into(),
            explicit,
            created_at,
            updated_at,
        }
    }

    /// Rated 5
    pub fn is_important(&self) -> bool {
        self.rating == 5
    }

    /// Last updated strictly before `cutoff`
    pub fn is_stale(&self, cutoff: NaiveDateTime) -> bool {
        self.updated_at < cutoff
    }
}

impl Record for Song {
    const KIND: &'static str = "song";
    const KIND_PLURAL: &'static str = "songs";

    /// Keeps `created_at`; `updated_at` is refreshed to now
    fn apply_update(&mut self, changes: &Self) {
        self.title = changes.title.clone();
        self.rating = changes.rating;
        self.genre = changes.genre.clone();
        self.explicit = changes.explicit;
        self.updated_at = time::now();
    }
}

/// Fixed demo data for the seed menu option
pub fn seeded_songs() -> Vec<Song> {
    let stamp = |s: &str| time::parse_local_date_time(s).unwrap_or_default();
    vec![
        Song::with_timestamps("Bohemian Rhapsody", 5, "Rock", false, stamp("2022-01-10T09:00:00"), stamp("2022-06-01T18:30:00")),
        Song::with_timestamps("Lose Yourself", 4, "Hip Hop", true, stamp("2022-02-14T12:00:00"), stamp("2023-01-20T08:15:00")),
        Song::with_timestamps("Clair de Lune", 3, "Classical", false, stamp("2021-11-05T21:45:00"), stamp("2021-11-05T21:45:00")),
        Song::with_timestamps("Smells Like Teen Spirit", 4, "Grunge", true, stamp("2023-03-09T11:30:00"), stamp("2023-03-09T11:30:00")),
        Song::with_timestamps("Take Five", 1, "Jazz", false, stamp("2020-07-04T16:00:00"), stamp("2020-08-01T10:00:00")),
    ]
}
