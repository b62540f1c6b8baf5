//! # Songbook Common Library
//!
//! Shared code for the songbook record manager including:
//! - Song and artist models
//! - Property descriptor table (prompt/validate/coerce contracts)
//! - Validated input reader
//! - Index-addressed collection store
//! - Interactive query pipeline (select, filter, sort)
//! - File persistence and configuration loading
//! - Plain-text table rendering

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod persistence;
pub mod properties;
pub mod query;
pub mod store;
pub mod table;
pub mod time;

pub use error::{Error, Result};
pub use input::{InputReader, LineSource, PropertyRequest};
pub use models::{Artist, Record, Song};
pub use persistence::{FileSerializer, Format, Persistence};
pub use properties::{PropertyTable, PropertyValue};
pub use store::Collection;
