//! Artist menu actions

use std::io::Write;
use tracing::debug;

use songbook_common::models::seeded_artists;
use songbook_common::query::{QueryPipeline, Selection};
use songbook_common::{table, Artist, LineSource, PropertyRequest, Result};

use crate::app::{load_collection, save_collection, App};
use crate::menu;

impl<R: LineSource, W: Write> App<R, W> {
    pub(crate) fn run_artist_menu(&mut self) -> Result<()> {
        debug!("Artist menu opened");
        loop {
            self.reader.say(menu::artist_menu())?;
            match self.reader.read_menu_option(menu::OPTION_PROMPT)? {
                Some(1) => self.add_artist()?,
                Some(2) => self.view_artist()?,
                Some(3) => self.update_artist()?,
                Some(4) => self.delete_artist()?,
                Some(5) => self.search_artists()?,
                Some(6) => self.list_artists()?,
                Some(7) => self.load_artists(true)?,
                Some(8) => self.save_artists()?,
                Some(menu::SEED_OPTION) => {
                    debug!("Seeding artists");
                    self.artists.replace_all(seeded_artists());
                }
                Some(0) => return Ok(()),
                other => self.invalid_option(other)?,
            }
        }
    }

    fn generate_artist(&mut self, old: Option<&Artist>) -> Result<Artist> {
        let name = self.reader.read_text(
            PropertyRequest::new("artistName").maybe_old(old.map(|a| a.name.clone())),
        )?;
        let founded_date = self.reader.read_timestamp(
            PropertyRequest::new("artistFoundedDate").maybe_old(old.map(|a| a.founded_date)),
        )?;
        let genres = self.reader.read_list(
            PropertyRequest::new("artistGenres").maybe_old(old.map(|a| a.genres.clone())),
        )?;
        Ok(Artist::new(name, founded_date, genres))
    }

    fn add_artist(&mut self) -> Result<()> {
        let artist = self.generate_artist(None)?;
        debug!(?artist, "Adding artist");
        self.artists.add(artist.clone());

        self.reader.say("\nThe following artist was added successfully:\n")?;
        self.reader.say(table::render_one(&artist))
    }

    fn view_artist(&mut self) -> Result<()> {
        QueryPipeline::new(&self.artists).pick_one(&mut self.reader)?;
        Ok(())
    }

    fn update_artist(&mut self) -> Result<()> {
        let Some((index, artist)) =
            QueryPipeline::new(&self.artists).pick_one(&mut self.reader)?
        else {
            return Ok(());
        };

        self.reader.say(
            "\nPlease enter the new details for the artist (Enter nothing to keep previous value):",
        )?;
        let changes = self.generate_artist(Some(&artist))?;

        debug!(index, "Updating artist");
        if !self.artists.update_at(index, &changes) {
            return self.reader.say("Update NOT Successful");
        }
        self.reader.say("\nThe artist was updated successfully:\n")?;
        self.reader.say(table::render_one(&changes))
    }

    fn delete_artist(&mut self) -> Result<()> {
        let Some(index) = QueryPipeline::new(&self.artists)
            .read_index(&mut self.reader, Some("Enter artist index to delete: "))?
        else {
            return Ok(());
        };

        match self.artists.delete_at(index) {
            Some(deleted) => self
                .reader
                .say(format!("Delete Successful! Deleted artist: {}", deleted.name)),
            None => self.reader.say("Delete NOT Successful"),
        }
    }

    /// Artists always start from the full collection
    fn search_artists(&mut self) -> Result<()> {
        let Some(results) =
            QueryPipeline::new(&self.artists).run(&mut self.reader, Selection::All)?
        else {
            return Ok(());
        };

        self.reader.say("Here are the artists you wanted to view:")?;
        self.reader.say(table::render_many(&results))
    }

    fn list_artists(&mut self) -> Result<()> {
        if self.artists.is_empty() {
            self.reader.say("No artists stored")
        } else {
            self.reader.say(table::render_all(self.artists.items()))
        }
    }

    pub(crate) fn load_artists(&mut self, show: bool) -> Result<()> {
        load_collection(&mut self.reader, &mut self.artists, self.artist_store.as_ref(), show)
    }

    fn save_artists(&mut self) -> Result<()> {
        save_collection(&mut self.reader, &self.artists, self.artist_store.as_ref())
    }
}
