//! Interactive query pipeline

use std::io::Write;
use tracing::debug;

use super::{apply_filter, sort_by_field, Searchable};
use crate::input::{InputReader, LineSource, PropertyRequest};
use crate::store::Collection;
use crate::{table, Result};

/// How the working list is seeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every record in the collection
    All,
    /// Offer to hand-pick records by index, falling back to all of them
    ByIndex,
}

/// Read-only query session over one collection
pub struct QueryPipeline<'c, T> {
    collection: &'c Collection<T>,
}

impl<'c, T: Searchable> QueryPipeline<'c, T> {
    pub fn new(collection: &'c Collection<T>) -> Self {
        Self { collection }
    }

    /// Select, filter, then sort.
    ///
    /// `None` means "no results": the collection was empty, nothing was
    /// picked, or filtering removed everything.
    pub fn run<R: LineSource, W: Write>(
        &self,
        reader: &mut InputReader<R, W>,
        selection: Selection,
    ) -> Result<Option<Vec<T>>> {
        let Some(list) = self.select(reader, selection)? else {
            return Ok(None);
        };
        let list = self.filter(reader, list)?;
        if list.is_empty() {
            debug!(kind = T::KIND, "Filtering left no records");
            reader.say(format!("No {} matched the filters.", T::KIND_PLURAL))?;
            return Ok(None);
        }
        Ok(Some(self.sort(reader, list)?))
    }

    /// Print the indexed listing and read a bounds-checked index.
    ///
    /// Prints "No songs found." and returns `None` on an empty collection.
    pub fn read_index<R: LineSource, W: Write>(
        &self,
        reader: &mut InputReader<R, W>,
        prompt: Option<&str>,
    ) -> Result<Option<i64>> {
        if self.collection.is_empty() {
            reader.say(format!("No {} found.", T::KIND_PLURAL))?;
            return Ok(None);
        }
        reader.say(table::render_all(self.collection.items()))?;

        let in_bounds = |raw: &str| self.collection.is_valid_index_input(raw);
        let mut request = PropertyRequest::new(T::INDEX_PROPERTY).validator(&in_bounds);
        if let Some(prompt) = prompt {
            request = request.prompt(prompt);
        }
        Ok(Some(reader.read_integer(request)?))
    }

    /// [`Self::read_index`], then show and return the chosen record
    pub fn pick_one<R: LineSource, W: Write>(
        &self,
        reader: &mut InputReader<R, W>,
    ) -> Result<Option<(i64, T)>> {
        let Some(index) = self.read_index(reader, None)? else {
            return Ok(None);
        };
        let Some(record) = self.collection.find_by_index(index).cloned() else {
            return Ok(None);
        };
        debug!(kind = T::KIND, index, "Record found");

        reader.say(format!("\nThe following {} was found:", T::KIND))?;
        reader.say(table::render_one(&record))?;
        Ok(Some((index, record)))
    }

    /// Seed the working list
    pub fn select<R: LineSource, W: Write>(
        &self,
        reader: &mut InputReader<R, W>,
        selection: Selection,
    ) -> Result<Option<Vec<T>>> {
        if self.collection.is_empty() {
            reader.say(format!("No {} found.", T::KIND_PLURAL))?;
            return Ok(None);
        }
        if selection == Selection::All {
            return Ok(Some(self.collection.find_all()));
        }

        reader.say(table::render_all(self.collection.items()))?;
        let multiple = reader.confirm(&format!(
            "Do you want to search for multiple {} using their index? (y/n): ",
            T::KIND_PLURAL
        ))?;
        if !multiple {
            debug!(kind = T::KIND, "Selecting every record");
            return Ok(Some(self.collection.find_all()));
        }

        let mut list: Vec<T> = Vec::new();
        loop {
            let Some((_, record)) = self.pick_one(reader)? else {
                break;
            };
            if list.contains(&record) {
                reader.say(format!("{} already added to list.", T::LABEL))?;
            } else {
                list.push(record);
            }

            let again = reader.confirm(&format!(
                "Do you want to add another {} to the list using their index? (y/n): ",
                T::KIND
            ))?;
            reader.say("")?;
            if !again {
                break;
            }
        }

        debug!(kind = T::KIND, selected = list.len(), "Selection finished");
        Ok(if list.is_empty() { None } else { Some(list) })
    }

    /// Filter rounds until the user declines or nothing is left
    pub fn filter<R: LineSource, W: Write>(
        &self,
        reader: &mut InputReader<R, W>,
        mut list: Vec<T>,
    ) -> Result<Vec<T>> {
        let plural = T::KIND_PLURAL;
        if !reader.confirm(&format!("Do you want to filter the {}? (y/n): ", plural))? {
            debug!(kind = T::KIND, "Not filtering");
            return Ok(list);
        }

        loop {
            let choice = reader.read_menu_option(&format!(
                "How do you want to filter the {}? {}: ",
                plural,
                T::FILTER_CHOICES
            ))?;
            let Some(field) = choice.and_then(T::filter_field) else {
                reader.say("Error: invalid option. Please enter a valid option.")?;
                continue;
            };

            let value = reader.read(PropertyRequest::new(T::filter_property(field)))?;
            let before = list.len();
            apply_filter(&mut list, field, &value);
            debug!(kind = T::KIND, ?field, before, after = list.len(), "Filter applied");

            if list.is_empty() {
                break;
            }
            let again =
                reader.confirm(&format!("Do you want to filter the {} again? (y/n): ", plural))?;
            reader.say("")?;
            if !again {
                break;
            }
        }
        Ok(list)
    }

    /// Optional single sort; an invalid field asks the whole question again
    pub fn sort<R: LineSource, W: Write>(
        &self,
        reader: &mut InputReader<R, W>,
        mut list: Vec<T>,
    ) -> Result<Vec<T>> {
        let plural = T::KIND_PLURAL;
        loop {
            if !reader.confirm(&format!("Do you want to sort the {}? (y/n): ", plural))? {
                debug!(kind = T::KIND, "Not sorting");
                return Ok(list);
            }

            let choice = reader.read_menu_option(&format!(
                "How do you want to sort the {}? {}: ",
                plural,
                T::SORT_CHOICES
            ))?;
            match choice.and_then(T::sort_field) {
                Some(field) => {
                    sort_by_field(&mut list, field);
                    debug!(kind = T::KIND, ?field, "Sorted");
                    return Ok(list);
                }
                None => reader.say("Error: Invalid option. Please enter a valid option.")?,
            }
        }
    }
}
