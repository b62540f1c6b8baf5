//! Interactive session: collections, their stores, and the main menu loop

use std::io::{self, Write};
use tracing::{debug, error, info};

use songbook_common::models::{seeded_artists, seeded_songs};
use songbook_common::table::{self, Tabular};
use songbook_common::{
    Artist, Collection, Error, InputReader, LineSource, Persistence, Record, Result, Song,
};

use crate::menu;

/// One interactive session over the song and artist collections
pub struct App<R, W> {
    pub(crate) reader: InputReader<R, W>,
    pub(crate) songs: Collection<Song>,
    pub(crate) artists: Collection<Artist>,
    pub(crate) song_store: Box<dyn Persistence<Song>>,
    pub(crate) artist_store: Box<dyn Persistence<Artist>>,
}

impl<R: LineSource, W: Write> App<R, W> {
    pub fn new(
        reader: InputReader<R, W>,
        song_store: Box<dyn Persistence<Song>>,
        artist_store: Box<dyn Persistence<Artist>>,
    ) -> Self {
        Self {
            reader,
            songs: Collection::new(),
            artists: Collection::new(),
            song_store,
            artist_store,
        }
    }

    pub fn songs(&self) -> &Collection<Song> {
        &self.songs
    }

    pub fn artists(&self) -> &Collection<Artist> {
        &self.artists
    }

    /// Session output, for scripted runs
    pub fn into_output(self) -> W {
        self.reader.into_parts().1
    }

    /// Load both collections without printing their tables
    pub fn load_all(&mut self) -> Result<()> {
        self.load_songs(false)?;
        self.load_artists(false)
    }

    /// Run the main menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        match self.main_loop() {
            Err(Error::InputClosed) => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_loop(&mut self) -> Result<()> {
        loop {
            self.reader.say(menu::main_menu())?;
            match self.reader.read_menu_option(menu::OPTION_PROMPT)? {
                Some(1) => self.run_song_menu()?,
                Some(2) => self.run_artist_menu()?,
                Some(0) => {
                    debug!("Exiting");
                    return Ok(());
                }
                Some(menu::SEED_OPTION) => self.write_seed_files()?,
                other => self.invalid_option(other)?,
            }
        }
    }

    /// Overwrite both data files with the demo set; memory is untouched
    fn write_seed_files(&mut self) -> Result<()> {
        debug!("Writing seed files");
        let written = self
            .song_store
            .save(&seeded_songs())
            .and_then(|_| self.artist_store.save(&seeded_artists()));
        match written {
            Ok(()) => self.reader.say("Seeded files generated"),
            Err(e) => {
                error!(error = %e, "Failed to write seed files");
                self.reader.say(format!("Error writing to file: {}", e))
            }
        }
    }

    pub(crate) fn invalid_option(&mut self, option: Option<i64>) -> Result<()> {
        match option {
            Some(value) => self.reader.say(format!("Invalid option entered: {}", value)),
            None => self.reader.say("Invalid option entered: not a number"),
        }
    }
}

/// Replace `collection` from `store`, reporting the outcome on the session output.
///
/// Failures are reported, never propagated: the collection keeps its
/// previous contents. A missing file during a silent load is a first run
/// and only logged.
pub(crate) fn load_collection<T, R, W>(
    reader: &mut InputReader<R, W>,
    collection: &mut Collection<T>,
    store: &dyn Persistence<T>,
    show: bool,
) -> Result<()>
where
    T: Record + Tabular,
    R: LineSource,
    W: Write,
{
    debug!(kind = T::KIND, "Loading collection");
    match collection.load_from(store) {
        Ok(count) => {
            debug!(kind = T::KIND, count, "Collection replaced");
            reader.say(format!("{}s loaded successfully", T::LABEL))?;
            if show {
                reader.say(table::render_all(collection.items()))?;
            }
        }
        Err(Error::Io(e)) if !show && e.kind() == io::ErrorKind::NotFound => {
            info!(kind = T::KIND, "No saved data yet, starting empty");
        }
        Err(Error::Io(e)) => {
            error!(kind = T::KIND, error = %e, "Failed to read data file");
            reader.say(format!("Error reading from file: {}", e))?;
        }
        Err(e) => {
            error!(kind = T::KIND, error = %e, "Failed to decode data file");
            reader.say(format!(
                "Error loading {}, see debug log for more info",
                T::KIND_PLURAL
            ))?;
        }
    }
    Ok(())
}

/// Write `collection` to `store` and show what was saved
pub(crate) fn save_collection<T, R, W>(
    reader: &mut InputReader<R, W>,
    collection: &Collection<T>,
    store: &dyn Persistence<T>,
) -> Result<()>
where
    T: Record + Tabular,
    R: LineSource,
    W: Write,
{
    debug!(kind = T::KIND, count = collection.count(), "Saving collection");
    match collection.save_to(store) {
        Ok(()) => {
            reader.say(format!("{}s saved successfully:", T::LABEL))?;
            reader.say(table::render_all(collection.items()))
        }
        Err(e) => {
            error!(kind = T::KIND, error = %e, "Failed to save collection");
            reader.say(format!("Error writing to file: {}", e))
        }
    }
}
