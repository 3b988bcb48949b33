//! Event types for the TUI event loop.
//!
//! Fetches run as spawned tasks; their outcomes come back through these
//! events carrying the page number or generation they were issued for, so
//! the handler can drop anything superseded.

use crossterm::event::KeyEvent;
use holocron_client::{Character, FetchError, Page, Planet};

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize {
        width: u16,
        height: u16,
    },
    PageLoaded {
        page: u32,
        outcome: Result<Page<Character>, FetchError>,
    },
    HomeworldResolved {
        generation: u64,
        outcome: Result<Planet, FetchError>,
    },
}
