//! Filter and sort fields per record kind

use std::cmp::Ordering;

use super::Searchable;
use crate::models::{Artist, Song};
use crate::properties::PropertyValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongField {
    Title,
    Rating,
    Genre,
    Explicit,
    UpdatedAt,
    CreatedAt,
}

impl SongField {
    fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(SongField::Title),
            2 => Some(SongField::Rating),
            3 => Some(SongField::Genre),
            4 => Some(SongField::Explicit),
            5 => Some(SongField::UpdatedAt),
            6 => Some(SongField::CreatedAt),
            _ => None,
        }
    }
}

impl Searchable for Song {
    type Field = SongField;

    const FILTER_CHOICES: &'static str =
        "(1 - Title, 2 - Rating, 3 - Genre, 4 - Explicit, 5 - Updated At, 6 - Created At)";
    const SORT_CHOICES: &'static str = Self::FILTER_CHOICES;
    const INDEX_PROPERTY: &'static str = "songIndex";

    fn filter_field(choice: i64) -> Option<SongField> {
        SongField::from_choice(choice)
    }

    fn sort_field(choice: i64) -> Option<SongField> {
        SongField::from_choice(choice)
    }

    fn filter_property(field: SongField) -> &'static str {
        match field {
            SongField::Title => "songTitle",
            SongField::Rating => "songRating",
            SongField::Genre => "songGenre",
            SongField::Explicit => "isSongExplicit",
            SongField::UpdatedAt => "updatedAt",
            SongField::CreatedAt => "createdAt",
        }
    }

    fn matches(&self, field: SongField, value: &PropertyValue) -> bool {
        match field {
            SongField::Title => value
                .as_text()
                .is_some_and(|needle| self.title.to_lowercase().contains(&needle.to_lowercase())),
            SongField::Rating => value.as_integer() == Some(self.rating),
            SongField::Genre => value.as_text() == Some(self.genre.as_str()),
            SongField::Explicit => value.as_flag() == Some(self.explicit),
            SongField::UpdatedAt => value.as_timestamp() == Some(self.updated_at),
            SongField::CreatedAt => value.as_timestamp() == Some(self.created_at),
        }
    }

    fn compare_by(&self, other: &Self, field: SongField) -> Ordering {
        match field {
            SongField::Title => self.title.cmp(&other.title),
            // highest rated first
            SongField::Rating => other.rating.cmp(&self.rating),
            SongField::Genre => self.genre.cmp(&other.genre),
            SongField::Explicit => self.explicit.cmp(&other.explicit),
            SongField::UpdatedAt => self.updated_at.cmp(&other.updated_at),
            SongField::CreatedAt => self.created_at.cmp(&other.created_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistField {
    Name,
    FoundedDate,
    Genres,
}

impl Searchable for Artist {
    type Field = ArtistField;

    const FILTER_CHOICES: &'static str = "(1 - Name, 2 - Founded Date, 3 - Genres)";
    const SORT_CHOICES: &'static str = "(1 - Name, 2 - Founded Date)";
    const INDEX_PROPERTY: &'static str = "artistIndex";

    fn filter_field(choice: i64) -> Option<ArtistField> {
        match choice {
            1 => Some(ArtistField::Name),
            2 => Some(ArtistField::FoundedDate),
            3 => Some(ArtistField::Genres),
            _ => None,
        }
    }

    /// Genres are filterable but not sortable
    fn sort_field(choice: i64) -> Option<ArtistField> {
        match choice {
            1 => Some(ArtistField::Name),
            2 => Some(ArtistField::FoundedDate),
            _ => None,
        }
    }

    fn filter_property(field: ArtistField) -> &'static str {
        match field {
            ArtistField::Name => "artistName",
            ArtistField::FoundedDate => "artistFoundedDate",
            ArtistField::Genres => "artistGenres",
        }
    }

    fn matches(&self, field: ArtistField, value: &PropertyValue) -> bool {
        match (field, value) {
            (ArtistField::Name, PropertyValue::Text(needle)) => {
                self.name.to_lowercase().contains(&needle.to_lowercase())
            }
            (ArtistField::FoundedDate, PropertyValue::Timestamp(date)) => self.founded_date == *date,
            (ArtistField::Genres, PropertyValue::List(wanted)) => self.has_all_genres(wanted),
            _ => false,
        }
    }

    fn compare_by(&self, other: &Self, field: ArtistField) -> Ordering {
        match field {
            ArtistField::Name => self.name.cmp(&other.name),
            ArtistField::FoundedDate => self.founded_date.cmp(&other.founded_date),
            ArtistField::Genres => self.genres.cmp(&other.genres),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertyTable;

    #[test]
    fn test_choice_mapping() {
        assert_eq!(Song::filter_field(1), Some(SongField::Title));
        assert_eq!(Song::sort_field(6), Some(SongField::CreatedAt));
        assert_eq!(Song::filter_field(0), None);
        assert_eq!(Song::filter_field(7), None);

        assert_eq!(Artist::filter_field(3), Some(ArtistField::Genres));
        assert_eq!(Artist::sort_field(3), None);
    }

    #[test]
    fn test_filter_properties_are_registered() {
        let table = PropertyTable::standard();
        for choice in 1..=6 {
            let field = Song::filter_field(choice).unwrap();
            assert!(table.get(Song::filter_property(field)).is_some());
        }
        for choice in 1..=3 {
            let field = Artist::filter_field(choice).unwrap();
            assert!(table.get(Artist::filter_property(field)).is_some());
        }
        assert!(table.get(Song::INDEX_PROPERTY).is_some());
        assert!(table.get(Artist::INDEX_PROPERTY).is_some());
    }
}
