//! Index-addressed record collections
//!
//! A [`Collection`] is the ordered, mutable sequence of one record kind.
//! Indices are positions, not identifiers: deleting shifts every later
//! record down by one. Lookups by value use the record's structural
//! equality, so identical records are indistinguishable.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::models::{Record, Song};
use crate::persistence::Persistence;
use crate::{time, Result};

/// Ordered collection of one record kind
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Append; always succeeds
    pub fn add(&mut self, item: T) -> bool {
        self.items.push(item);
        true
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Working copy of every record, in order
    pub fn find_all(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Position check used before every index-based mutation
    pub fn is_valid_index(&self, index: i64) -> bool {
        self.slot(index).is_some()
    }

    /// Raw-line form of [`Self::is_valid_index`], usable as a custom validator
    pub fn is_valid_index_input(&self, raw: &str) -> bool {
        !raw.trim().is_empty()
            && raw
                .trim()
                .parse::<i64>()
                .map_or(false, |index| self.is_valid_index(index))
    }

    pub fn find_by_index(&self, index: i64) -> Option<&T> {
        self.slot(index).map(|i| &self.items[i])
    }

    /// Apply `changes` to the record at `index`; false if the index is invalid
    pub fn update_at(&mut self, index: i64, changes: &T) -> bool {
        match self.slot(index) {
            Some(i) => {
                self.items[i].apply_update(changes);
                debug!(kind = T::KIND, index = i, "Record updated");
                true
            }
            None => false,
        }
    }

    /// Remove and return the record at `index`; later records shift down
    pub fn delete_at(&mut self, index: i64) -> Option<T> {
        let i = self.slot(index)?;
        debug!(kind = T::KIND, index = i, "Record deleted");
        Some(self.items.remove(i))
    }

    /// Remove every record equal to any entry of `batch`; absent entries are ignored
    pub fn remove_batch(&mut self, batch: &[T]) {
        let before = self.items.len();
        self.items.retain(|item| !batch.contains(item));
        debug!(kind = T::KIND, removed = before - self.items.len(), "Batch removed");
    }

    /// First record equal to `wanted`
    pub fn find_by_value(&self, wanted: &T) -> Option<&T> {
        self.items.iter().find(|item| *item == wanted)
    }

    /// Position of the first record equal to `wanted`
    pub fn find_index_by_value(&self, wanted: &T) -> Option<usize> {
        self.items.iter().position(|item| item == wanted)
    }

    pub fn count_where(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.items.iter().filter(|item| predicate(item)).count()
    }

    /// Records matching `predicate`, in order
    pub fn filtered(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.items.iter().filter(|item| predicate(item)).cloned().collect()
    }

    /// Swap in a complete replacement
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Replace the contents from `source`.
    ///
    /// All-or-nothing: on error the current records are kept untouched.
    pub fn load_from(&mut self, source: &dyn Persistence<T>) -> Result<usize> {
        let loaded = source.load()?;
        self.items = loaded;
        Ok(self.items.len())
    }

    pub fn save_to(&self, sink: &dyn Persistence<T>) -> Result<()> {
        sink.save(&self.items)
    }

    fn slot(&self, index: i64) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < self.items.len())
    }
}

impl Collection<Song> {
    /// Mark the song at `index` explicit; false if the index is invalid
    pub fn explicitify_at(&mut self, index: i64) -> bool {
        match self.slot(index) {
            Some(i) => {
                let song = &mut self.items[i];
                song.explicit = true;
                song.updated_at = time::now();
                true
            }
            None => false,
        }
    }

    pub fn safe_songs(&self) -> Vec<Song> {
        self.filtered(|song| !song.explicit)
    }

    pub fn explicit_songs(&self) -> Vec<Song> {
        self.filtered(|song| song.explicit)
    }

    pub fn songs_with_rating(&self, rating: i64) -> Vec<Song> {
        self.filtered(|song| song.rating == rating)
    }

    /// Rated 5
    pub fn important_songs(&self) -> Vec<Song> {
        self.filtered(Song::is_important)
    }

    /// Not updated in the last `days` days, oldest update first
    pub fn stale_songs(&self, days: i64, now: NaiveDateTime) -> Vec<Song> {
        let cutoff = time::stale_cutoff(now, days);
        let mut stale = self.filtered(|song| song.is_stale(cutoff));
        stale.sort_by_key(|song| song.updated_at);
        stale
    }

    pub fn number_of_safe_songs(&self) -> usize {
        self.count_where(|song| !song.explicit)
    }

    pub fn number_of_explicit_songs(&self) -> usize {
        self.count_where(|song| song.explicit)
    }

    pub fn number_of_songs_by_rating(&self, rating: i64) -> usize {
        self.count_where(|song| song.rating == rating)
    }

    pub fn number_of_important_songs(&self) -> usize {
        self.count_where(Song::is_important)
    }

    pub fn number_of_stale_songs(&self, days: i64, now: NaiveDateTime) -> usize {
        let cutoff = time::stale_cutoff(now, days);
        self.count_where(|song| song.is_stale(cutoff))
    }
}
