//! Reusable widget components.

pub mod fields;
pub mod roster;
pub mod search;

pub use fields::{FieldList, FieldRow};
pub use roster::{Roster, RosterEntry, RosterStyle};
pub use search::SearchBar;
