//! Record models
//!
//! Songs and artists are plain value records: equality is structural over
//! every field, so two records with identical content are indistinguishable
//! for lookups and duplicate checks.

mod artist;
mod song;

pub use artist::{seeded_artists, Artist};
pub use song::{seeded_songs, Song};

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Behaviour shared by every record kind held in a [`crate::Collection`]
pub trait Record: Clone + PartialEq + Debug + Serialize + DeserializeOwned {
    /// Singular noun used in prompts and messages ("song")
    const KIND: &'static str;

    /// Plural noun used in prompts and messages ("songs")
    const KIND_PLURAL: &'static str;

    /// Copy the user-editable fields of `changes` into `self`
    fn apply_update(&mut self, changes: &Self);
}
