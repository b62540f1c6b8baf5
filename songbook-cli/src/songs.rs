//! Song menu actions

use std::io::Write;
use tracing::debug;

use songbook_common::models::seeded_songs;
use songbook_common::query::{QueryPipeline, Selection};
use songbook_common::{table, time, LineSource, PropertyRequest, Result, Song};

use crate::app::{load_collection, save_collection, App};
use crate::menu;

impl<R: LineSource, W: Write> App<R, W> {
    /// Song menu loop; returns on option 0
    pub(crate) fn run_song_menu(&mut self) -> Result<()> {
        debug!("Song menu opened");
        loop {
            self.reader.say(menu::song_menu())?;
            match self.reader.read_menu_option(menu::OPTION_PROMPT)? {
                Some(1) => self.add_song()?,
                Some(2) => self.view_song()?,
                Some(3) => self.update_song()?,
                Some(4) => self.delete_song()?,
                Some(5) => self.explicitify_song()?,
                Some(6) => self.search_songs()?,
                Some(7) => self.remove_multiple_songs()?,
                Some(8) => self.list_songs()?,
                Some(9) => self.load_songs(true)?,
                Some(10) => self.save_songs()?,
                Some(menu::SEED_OPTION) => {
                    debug!("Seeding songs");
                    self.songs.replace_all(seeded_songs());
                }
                Some(0) => return Ok(()),
                other => self.invalid_option(other)?,
            }
        }
    }

    /// Prompt for every song field; `old` supplies keep-on-blank defaults
    fn generate_song(&mut self, old: Option<&Song>) -> Result<Song> {
        let title = self.reader.read_text(
            PropertyRequest::new("songTitle").maybe_old(old.map(|s| s.title.clone())),
        )?;
        let rating = self
            .reader
            .read_integer(PropertyRequest::new("songRating").maybe_old(old.map(|s| s.rating)))?;
        let genre = self.reader.read_text(
            PropertyRequest::new("songGenre").maybe_old(old.map(|s| s.genre.clone())),
        )?;
        let explicit = self.reader.read_flag(
            PropertyRequest::new("isSongExplicit").maybe_old(old.map(|s| s.explicit)),
        )?;
        Ok(Song::new(title, rating, genre, explicit))
    }

    fn add_song(&mut self) -> Result<()> {
        let song = self.generate_song(None)?;
        debug!(?song, "Adding song");
        self.songs.add(song.clone());

        self.reader.say("\nThe following song was added successfully:\n")?;
        self.reader.say(table::render_one(&song))
    }

    fn view_song(&mut self) -> Result<()> {
        QueryPipeline::new(&self.songs).pick_one(&mut self.reader)?;
        Ok(())
    }

    fn update_song(&mut self) -> Result<()> {
        let Some((index, song)) = QueryPipeline::new(&self.songs).pick_one(&mut self.reader)? else {
            return Ok(());
        };

        self.reader.say(
            "\nPlease enter the new details for the song (Enter nothing to keep previous value):",
        )?;
        let changes = self.generate_song(Some(&song))?;

        debug!(index, "Updating song");
        if !self.songs.update_at(index, &changes) {
            return self.reader.say("Update NOT Successful");
        }
        self.reader.say("\nThe song was updated successfully:\n")?;
        if let Some(updated) = self.songs.find_by_index(index) {
            self.reader.say(table::render_one(updated))?;
        }
        Ok(())
    }

    fn delete_song(&mut self) -> Result<()> {
        let Some(index) = QueryPipeline::new(&self.songs)
            .read_index(&mut self.reader, Some("Enter song index to delete: "))?
        else {
            return Ok(());
        };

        match self.songs.delete_at(index) {
            Some(deleted) => self
                .reader
                .say(format!("Delete Successful! Deleted song: {}", deleted.title)),
            None => self.reader.say("Delete NOT Successful"),
        }
    }

    fn explicitify_song(&mut self) -> Result<()> {
        let Some(index) = QueryPipeline::new(&self.songs)
            .read_index(&mut self.reader, Some("Enter song index to explicitify: "))?
        else {
            return Ok(());
        };

        if self.songs.explicitify_at(index) {
            self.reader.say("Explicitify Successful")
        } else {
            self.reader.say("Explicitify Failed")
        }
    }

    fn search_songs(&mut self) -> Result<()> {
        let Some(results) =
            QueryPipeline::new(&self.songs).run(&mut self.reader, Selection::ByIndex)?
        else {
            return Ok(());
        };

        self.reader.say("Here are the songs you wanted to view:")?;
        self.reader.say(table::render_many(&results))
    }

    fn remove_multiple_songs(&mut self) -> Result<()> {
        let Some(selected) =
            QueryPipeline::new(&self.songs).select(&mut self.reader, Selection::ByIndex)?
        else {
            return Ok(());
        };

        self.reader.say("Here are the songs you wanted to remove:")?;
        self.reader.say(table::render_many(&selected))?;

        if !self
            .reader
            .confirm("Are you sure you want to remove these songs? (y/n): ")?
        {
            return self.reader.say("Songs not deleted.");
        }

        debug!(count = selected.len(), "Removing multiple songs");
        self.songs.remove_batch(&selected);
        self.reader.say("Songs deleted.")
    }

    fn list_songs(&mut self) -> Result<()> {
        self.reader.say(menu::list_songs_menu())?;
        let songs = &self.songs;
        let listing = match self.reader.read_menu_option(menu::OPTION_PROMPT)? {
            Some(1) => listing_or(songs.count(), || table::render_all(songs.items()), "No songs stored"),
            Some(2) => listing_or(
                songs.number_of_safe_songs(),
                || table::render_many(&songs.safe_songs()),
                "No safe songs stored",
            ),
            Some(3) => listing_or(
                songs.number_of_explicit_songs(),
                || table::render_many(&songs.explicit_songs()),
                "No explicit songs stored",
            ),
            Some(4) => {
                let rating = self.reader.read_integer(PropertyRequest::new("songRating"))?;
                listing_or(
                    songs.number_of_songs_by_rating(rating),
                    || table::render_many(&songs.songs_with_rating(rating)),
                    "No songs with rating",
                )
            }
            Some(5) => {
                let days = self.reader.read_integer(PropertyRequest::new("staleDays"))?;
                let now = time::now();
                listing_or(
                    songs.number_of_stale_songs(days, now),
                    || table::render_many(&songs.stale_songs(days, now)),
                    "No stale songs stored",
                )
            }
            Some(6) => listing_or(
                songs.number_of_important_songs(),
                || table::render_many(&songs.important_songs()),
                "No important songs stored",
            ),
            Some(0) => return Ok(()),
            _ => "Invalid choice".to_string(),
        };
        self.reader.say(listing)
    }

    pub(crate) fn load_songs(&mut self, show: bool) -> Result<()> {
        load_collection(&mut self.reader, &mut self.songs, self.song_store.as_ref(), show)
    }

    fn save_songs(&mut self) -> Result<()> {
        save_collection(&mut self.reader, &self.songs, self.song_store.as_ref())
    }
}

/// The rendered listing, or `empty` when nothing matches
fn listing_or(count: usize, render: impl FnOnce() -> String, empty: &str) -> String {
    if count == 0 {
        empty.to_string()
    } else {
        render()
    }
}
