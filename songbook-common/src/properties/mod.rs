//! Property descriptor table
//!
//! Single source of truth for how each interactively edited field is
//! prompted for, validated and converted into a typed value.
//!
//! # Architecture
//!
//! Every prompt in the application names a property ("songRating",
//! "artistGenres", ...). The [`PropertyTable`] maps that name to a
//! [`PropertyDescriptor`] holding:
//! - The prompt text (with an optional "(old value)" suffix for updates)
//! - The error text shown after a rejected line
//! - A pure validator over the raw line
//! - A [`Coercion`] rule producing a [`PropertyValue`]
//!
//! The table is an ordinary value: build the standard one with
//! [`PropertyTable::standard`] or a custom set with [`PropertyTable::new`].
//!
//! # Usage
//!
//! ```rust
//! use songbook_common::properties::{PropertyTable, PropertyValue};
//!
//! let table = PropertyTable::standard();
//! let rating = table.resolve("songRating");
//!
//! assert!(rating.validate("4"));
//! assert!(!rating.validate("9"));
//! assert_eq!(rating.coerce("4"), Some(PropertyValue::Integer(4)));
//! ```

use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::fmt;

use crate::time;

mod metadata;
pub mod validators;

/// Typed result of reading one property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    Flag(bool),
    Timestamp(NaiveDateTime),
    List(Vec<String>),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PropertyValue::Flag(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            PropertyValue::Timestamp(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Flag(value)
    }
}

impl From<NaiveDateTime> for PropertyValue {
    fn from(value: NaiveDateTime) -> Self {
        PropertyValue::Timestamp(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::List(value)
    }
}

/// Renders in the same form the matching validator accepts
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Integer(v) => write!(f, "{}", v),
            PropertyValue::Flag(v) => f.write_str(if *v { "y" } else { "n" }),
            PropertyValue::Timestamp(ts) => f.write_str(&time::format_timestamp(ts)),
            PropertyValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// Conversion from a validated raw line into a [`PropertyValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Line kept as typed
    Text,
    /// Decimal integer
    Integer,
    /// First character 'y' => true, 'n' => false (case-insensitive)
    Flag,
    /// ISO-8601 local date-time
    Timestamp,
    /// Comma-separated entries, each trimmed, lower-cased, then capitalized
    GenreList,
}

impl Coercion {
    /// Convert a raw line that already passed validation.
    ///
    /// Returns `None` only when the precondition is violated (a permissive
    /// custom validator let through a line of the wrong shape).
    pub fn coerce(&self, raw: &str) -> Option<PropertyValue> {
        match self {
            Coercion::Text => Some(PropertyValue::Text(raw.to_string())),
            Coercion::Integer => raw.trim().parse().ok().map(PropertyValue::Integer),
            Coercion::Flag => match raw.trim().chars().next()?.to_ascii_lowercase() {
                'y' => Some(PropertyValue::Flag(true)),
                'n' => Some(PropertyValue::Flag(false)),
                _ => None,
            },
            Coercion::Timestamp => time::parse_local_date_time(raw).map(PropertyValue::Timestamp),
            Coercion::GenreList => Some(PropertyValue::List(
                raw.split(',').map(|entry| capitalize(&entry.trim().to_lowercase())).collect(),
            )),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Interactive contract for one named property
///
/// # Validator Signature
///
/// Validators are plain `fn(&str) -> bool` predicates over the raw line.
/// They never panic; a malformed line is simply `false`.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    /// Prompt text without the trailing ": "
    pub prompt: &'static str,
    pub error: &'static str,
    pub validator: fn(&str) -> bool,
    pub coercion: Coercion,
}

impl PropertyDescriptor {
    /// Prompt line, with " (old)" appended when an old value is supplied
    pub fn prompt(&self, old: Option<&PropertyValue>) -> String {
        match old {
            Some(value) => format!("{} ({}): ", self.prompt, value),
            None => format!("{}: ", self.prompt),
        }
    }

    pub fn validate(&self, raw: &str) -> bool {
        (self.validator)(raw)
    }

    pub fn coerce(&self, raw: &str) -> Option<PropertyValue> {
        self.coercion.coerce(raw)
    }
}

/// Property name → descriptor lookup
#[derive(Debug, Clone)]
pub struct PropertyTable {
    descriptors: HashMap<&'static str, PropertyDescriptor>,
}

impl PropertyTable {
    /// Build a table from an explicit descriptor set (later duplicates win)
    pub fn new(descriptors: impl IntoIterator<Item = PropertyDescriptor>) -> Self {
        Self {
            descriptors: descriptors.into_iter().map(|d| (d.name, d)).collect(),
        }
    }

    /// The table of every property the application prompts for
    pub fn standard() -> Self {
        Self::new(metadata::standard_descriptors())
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.descriptors.get(name)
    }

    /// Look up a descriptor that must exist.
    ///
    /// # Panics
    ///
    /// Panics on an unregistered name. Property names are fixed at compile
    /// time, so a miss is a programming error and never depends on user input.
    pub fn resolve(&self, name: &str) -> &PropertyDescriptor {
        self.get(name)
            .unwrap_or_else(|| panic!("Invalid property name: {}", name))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for PropertyTable {
    fn default() -> Self {
        Self::standard()
    }
}
