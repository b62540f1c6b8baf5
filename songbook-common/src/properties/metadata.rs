//! Standard property descriptors
//!
//! Single source of truth for every prompt the application shows.

use super::{validators, Coercion, PropertyDescriptor};

/// Every property the song and artist menus prompt for
///
/// # Example: Validating a Property
///
/// ```rust
/// # use songbook_common::properties::PropertyTable;
/// let table = PropertyTable::standard();
/// let genres = table.resolve("artistGenres");
///
/// assert!(genres.validate("rock, pop"));
/// assert!(!genres.validate("rock,,pop"));
/// ```
pub(super) fn standard_descriptors() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor {
            name: "songTitle",
            prompt: "Enter song title",
            error: "Error: song title was invalid. Please enter a string",
            validator: validators::is_non_blank,
            coercion: Coercion::Text,
        },
        PropertyDescriptor {
            name: "songRating",
            prompt: "Enter song rating (1-low, 2, 3, 4, 5-high)",
            error: "Error: song rating was invalid. Please enter an integer between 1 and 5",
            validator: validators::is_song_rating,
            coercion: Coercion::Integer,
        },
        PropertyDescriptor {
            name: "songGenre",
            prompt: "Enter song genre",
            error: "Error: song genre was invalid. Please enter a string",
            validator: validators::is_non_blank,
            coercion: Coercion::Text,
        },
        PropertyDescriptor {
            name: "isSongExplicit",
            prompt: "Enter song explicit status (y/n)",
            error: "Error: song explicit status was invalid. Please enter either 'y' or 'n'",
            validator: validators::is_yes_no,
            coercion: Coercion::Flag,
        },
        PropertyDescriptor {
            name: "artistName",
            prompt: "Enter artist name",
            error: "Error: artist name was invalid. Please enter a string",
            validator: validators::is_non_blank,
            coercion: Coercion::Text,
        },
        PropertyDescriptor {
            name: "artistFoundedDate",
            prompt: "Enter artist founded date (e.g. 2023-03-09T11:30:00)",
            error: "Error: artist founded date was invalid. Please enter a valid date and time (e.g. 2023-03-09T11:30:00)",
            validator: validators::is_local_date_time,
            coercion: Coercion::Timestamp,
        },
        PropertyDescriptor {
            name: "artistGenres",
            prompt: "Enter artist genres (e.g. 'rock, pop, rap')",
            error: "Error: artist genres was invalid. Please enter a comma-separated list of strings",
            validator: validators::is_genre_list,
            coercion: Coercion::GenreList,
        },
        PropertyDescriptor {
            name: "updatedAt",
            prompt: "Enter song updated at (e.g. 2023-03-09T11:30:00)",
            error: "Error: song updated at was invalid. Please enter a valid date and time (e.g. 2023-03-09T11:30:00)",
            validator: validators::is_local_date_time,
            coercion: Coercion::Timestamp,
        },
        PropertyDescriptor {
            name: "createdAt",
            prompt: "Enter song created at (e.g. 2023-03-09T11:30:00)",
            error: "Error: song created at was invalid. Please enter a valid date and time (e.g. 2023-03-09T11:30:00)",
            validator: validators::is_local_date_time,
            coercion: Coercion::Timestamp,
        },
        PropertyDescriptor {
            name: "staleDays",
            prompt: "Show songs that haven't been updated in this many days",
            error: "Error: invalid number of days. Please enter a valid positive integer.",
            validator: validators::is_stale_days,
            coercion: Coercion::Integer,
        },
        PropertyDescriptor {
            name: "songIndex",
            prompt: "Enter song index",
            error: "Error: invalid song index. Please enter a valid positive integer.",
            validator: validators::is_non_negative_integer,
            coercion: Coercion::Integer,
        },
        PropertyDescriptor {
            name: "artistIndex",
            prompt: "Enter artist index",
            error: "Error: invalid artist index. Please enter a valid positive integer.",
            validator: validators::is_non_negative_integer,
            coercion: Coercion::Integer,
        },
        PropertyDescriptor {
            name: "yesNo",
            prompt: "Enter y or n",
            error: "Error: invalid input. Please enter either 'y' or 'n'.",
            validator: validators::is_yes_no,
            coercion: Coercion::Flag,
        },
    ]
}
