//! Selection state for the detail overlay.

use crate::error::FetchError;
use crate::types::{Character, Planet};

/// Where the selected character's homeworld stands. `Missing` (no
/// reference on the record) and `Failed` (fetch error) are both settled
/// states; consumers can always tell either apart from `Resolving`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HomeworldState {
    #[default]
    Idle,
    Resolving,
    Resolved(Planet),
    Missing,
    Failed,
}

impl HomeworldState {
    /// Settled either way: a planet, a record without one, or a failed
    /// fetch. Only `Resolving` still has an answer outstanding.
    pub fn is_settled(&self) -> bool {
        !matches!(self, HomeworldState::Resolving)
    }
}

/// Issued when a selection needs a homeworld fetch. The generation inside
/// must accompany the outcome back to [`Session::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveTicket {
    pub generation: u64,
    pub url: String,
}

/// Owns the current selection and its homeworld. The generation counter
/// increments on every `select` and `dismiss`; `apply` writes only on a
/// generation match, so an outcome from a superseded fetch never lands,
/// whatever order the network answers in.
#[derive(Debug, Default)]
pub struct Session {
    selected: Option<Character>,
    homeworld: HomeworldState,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `character` the current selection. Returns a ticket when a
    /// homeworld fetch is needed; a character without a homeworld reference
    /// settles as `Missing` immediately.
    pub fn select(&mut self, character: Character) -> Option<ResolveTicket> {
        self.generation += 1;
        let ticket = character.homeworld.clone().map(|url| ResolveTicket {
            generation: self.generation,
            url,
        });
        self.homeworld = if ticket.is_some() {
            HomeworldState::Resolving
        } else {
            HomeworldState::Missing
        };
        self.selected = Some(character);
        ticket
    }

    /// Accept a resolution outcome. Returns whether it was applied; a
    /// mismatched generation means the selection moved on and the outcome
    /// is discarded, which is not an error.
    pub fn apply(&mut self, generation: u64, outcome: Result<Planet, FetchError>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "stale homeworld outcome discarded"
            );
            return false;
        }
        self.homeworld = match outcome {
            Ok(planet) => HomeworldState::Resolved(planet),
            Err(error) => {
                tracing::debug!(%error, "homeworld unavailable");
                HomeworldState::Failed
            }
        };
        true
    }

    /// Close the overlay. In-flight fetches are not cancelled; bumping the
    /// generation makes their outcomes moot.
    pub fn dismiss(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.homeworld = HomeworldState::Idle;
    }

    pub fn selected(&self) -> Option<&Character> {
        self.selected.as_ref()
    }

    pub fn homeworld(&self) -> &HomeworldState {
        &self.homeworld
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// ============================================================================
// TESTS
// ============================================================================
