//! Query pipeline: select → filter → sort over a working copy
//!
//! The pipeline never touches the [`crate::Collection`] it reads from; every
//! stage works on an owned `Vec` that is handed back to the caller.
//!
//! # Stages
//!
//! 1. **Selection** - all records, or (songs only) a hand-picked list
//!    assembled by index with duplicates rejected
//! 2. **Filtering** - zero or more rounds, each keeping only the records that
//!    match one field predicate
//! 3. **Sorting** - zero or one round by one field
//!
//! The pure operations [`apply_filter`] and [`sort_by_field`] are usable on
//! their own; [`QueryPipeline`] adds the interactive prompts around them.

mod fields;
mod pipeline;

pub use fields::{ArtistField, SongField};
pub use pipeline::{QueryPipeline, Selection};

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::Record;
use crate::properties::PropertyValue;
use crate::table::Tabular;

/// A record kind the query pipeline can filter and sort
pub trait Searchable: Record + Tabular {
    /// Field selector shared by filter and sort menus
    type Field: Copy + Debug + PartialEq;

    /// Choices shown when asking for a filter field, e.g. "(1 - Name, 2 - ...)"
    const FILTER_CHOICES: &'static str;
    const SORT_CHOICES: &'static str;

    /// Property read when the user picks an index for this kind
    const INDEX_PROPERTY: &'static str;

    fn filter_field(choice: i64) -> Option<Self::Field>;

    fn sort_field(choice: i64) -> Option<Self::Field>;

    /// Property prompted for to get the value a field is filtered by
    fn filter_property(field: Self::Field) -> &'static str;

    /// Whether this record is kept by a filter on `field` with `value`
    fn matches(&self, field: Self::Field, value: &PropertyValue) -> bool;

    /// Sort order for `field`
    fn compare_by(&self, other: &Self, field: Self::Field) -> Ordering;
}

/// Drop every record that does not match, preserving order
pub fn apply_filter<T: Searchable>(list: &mut Vec<T>, field: T::Field, value: &PropertyValue) {
    list.retain(|item| item.matches(field, value));
}

/// Stable sort by `field`
pub fn sort_by_field<T: Searchable>(list: &mut [T], field: T::Field) {
    list.sort_by(|a, b| a.compare_by(b, field));
}
