//! Songbook interactive CLI
//!
//! Menu-driven session over the song and artist collections. The binary in
//! `main.rs` only wires configuration, logging and the data files together;
//! everything interactive lives in [`App`] so it can be driven from scripted
//! input in tests.

pub mod app;
mod artists;
pub mod menu;
mod songs;
#[cfg(feature = "line-editing")]
pub mod terminal;

pub use app::App;
