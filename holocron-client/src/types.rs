//! Catalog domain types.
//!
//! Wire payloads (`Raw*`) are deserialized exactly as the catalog sends them,
//! then mapped into the validated domain types everything else consumes.
//! Domain values are immutable once parsed.

use crate::error::FetchError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::str::FromStr;

// ============================================================================
// WIRE PAYLOADS
// ============================================================================

/// One page of the `/people/` collection as served by the catalog.
/// Unknown extra fields are ignored; missing required fields fail the parse.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPeoplePage {
    pub count: u64,
    pub results: Vec<RawCharacter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCharacter {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub created: DateTime<Utc>,
    pub films: Vec<String>,
    pub species: Vec<String>,
    pub birth_year: String,
    #[serde(default)]
    pub homeworld: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlanet {
    pub name: String,
    pub terrain: String,
    pub climate: String,
    pub residents: Vec<String>,
}

// ============================================================================
// DOMAIN TYPES
// ============================================================================

/// A catalog character. The catalog serves `height`/`mass` as free-form
/// strings (with "unknown" sentinels), so they stay strings here.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub created: DateTime<Utc>,
    pub film_count: usize,
    pub birth_year: String,
    pub species: Vec<String>,
    /// Homeworld resource URL. `None` when the record carries no usable
    /// reference.
    pub homeworld: Option<String>,
}

impl Character {
    /// Validate a wire record into a domain character. A record without a
    /// name is unusable (it is both the display label and the search key).
    pub fn from_raw(raw: RawCharacter) -> Result<Self, FetchError> {
        if raw.name.trim().is_empty() {
            return Err(FetchError::Payload(
                "character record is missing a name".to_string(),
            ));
        }
        let homeworld = raw.homeworld.filter(|url| !url.trim().is_empty());
        Ok(Self {
            name: raw.name,
            height: raw.height,
            mass: raw.mass,
            created: raw.created,
            film_count: raw.films.len(),
            birth_year: raw.birth_year,
            species: raw.species,
            homeworld,
        })
    }
}

/// A character's place of origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub name: String,
    pub terrain: String,
    pub climate: String,
    pub resident_count: usize,
}

impl Planet {
    pub fn from_raw(raw: RawPlanet) -> Result<Self, FetchError> {
        if raw.name.trim().is_empty() {
            return Err(FetchError::Payload(
                "planet record is missing a name".to_string(),
            ));
        }
        Ok(Self {
            name: raw.name,
            terrain: raw.terrain,
            climate: raw.climate,
            resident_count: raw.residents.len(),
        })
    }
}

/// One served page of a collection. Recomputed per fetch, never mutated.
///
/// `page_size` must be > 0; it comes from validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u32 {
        self.total_count.div_ceil(u64::from(self.page_size)) as u32
    }
}

// ============================================================================
// VIEW FILTERS
// ============================================================================

/// Which attribute the gallery filter keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Homeworld,
    Film,
    Species,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized filter mode: {0}")]
pub struct FilterModeParseError(pub String);

impl FromStr for FilterMode {
    type Err = FilterModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "homeworld" => Ok(FilterMode::Homeworld),
            "film" => Ok(FilterMode::Film),
            "species" => Ok(FilterMode::Species),
            other => Err(FilterModeParseError(other.to_string())),
        }
    }
}

impl FilterMode {
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::Homeworld => "Homeworld",
            FilterMode::Film => "Film",
            FilterMode::Species => "Species",
        }
    }

    pub fn all() -> &'static [FilterMode] {
        &[FilterMode::Homeworld, FilterMode::Film, FilterMode::Species]
    }

    pub fn next(&self) -> FilterMode {
        let all = Self::all();
        let idx = all.iter().position(|m| m == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// Transient UI input driving local list composition. Never cached.
#[derive(Debug, Clone, Default)]
pub struct ViewFilters {
    pub search_text: String,
    pub filter_mode: FilterMode,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_character(name: &str) -> RawCharacter {
        RawCharacter {
            name: name.to_string(),
            height: "172".to_string(),
            mass: "77".to_string(),
            created: Utc::now(),
            films: vec!["films/1".to_string()],
            species: Vec::new(),
            birth_year: "19BBY".to_string(),
            homeworld: Some("planets/1".to_string()),
        }
    }

    #[test]
    fn character_parse_keeps_reference_counts() {
        let mut raw = raw_character("Luke Skywalker");
        raw.films.push("films/2".to_string());
        raw.species.push("species/1".to_string());

        let character = Character::from_raw(raw).unwrap();

        assert_eq!(character.film_count, 2);
        assert_eq!(character.species.len(), 1);
        assert_eq!(character.homeworld.as_deref(), Some("planets/1"));
    }

    #[test]
    fn character_parse_rejects_missing_name() {
        let raw = raw_character("   ");
        assert!(Character::from_raw(raw).is_err());
    }

    #[test]
    fn character_parse_drops_blank_homeworld() {
        let mut raw = raw_character("Droid");
        raw.homeworld = Some("  ".to_string());
        let character = Character::from_raw(raw).unwrap();
        assert!(character.homeworld.is_none());
    }

    #[test]
    fn planet_parse_counts_residents() {
        let raw = RawPlanet {
            name: "Tatooine".to_string(),
            terrain: "desert".to_string(),
            climate: "arid".to_string(),
            residents: vec!["people/1".to_string(), "people/2".to_string()],
        };
        let planet = Planet::from_raw(raw).unwrap();
        assert_eq!(planet.resident_count, 2);
    }

    #[test]
    fn wire_page_parses_catalog_shape() {
        let payload = r#"{
            "count": 82,
            "next": "https://example.test/people/?page=2",
            "results": [{
                "name": "Luke Skywalker",
                "height": "172",
                "mass": "77",
                "created": "2014-12-09T13:50:51.644000Z",
                "films": ["films/1"],
                "species": [],
                "birth_year": "19BBY",
                "homeworld": "planets/1",
                "eye_color": "blue"
            }]
        }"#;
        let page: RawPeoplePage = serde_json::from_str(payload).unwrap();
        assert_eq!(page.count, 82);
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn wire_page_rejects_missing_count() {
        let payload = r#"{ "results": [] }"#;
        assert!(serde_json::from_str::<RawPeoplePage>(payload).is_err());
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page {
            items: Vec::<Character>::new(),
            total_count: 82,
            page_size: 10,
        };
        assert_eq!(page.total_pages(), 9);
    }

    #[test]
    fn total_pages_exact_division() {
        let page = Page {
            items: Vec::<Character>::new(),
            total_count: 80,
            page_size: 10,
        };
        assert_eq!(page.total_pages(), 8);
    }

    #[test]
    fn filter_mode_parses_known_names() {
        assert_eq!("homeworld".parse::<FilterMode>(), Ok(FilterMode::Homeworld));
        assert_eq!(" Film ".parse::<FilterMode>(), Ok(FilterMode::Film));
        assert_eq!("SPECIES".parse::<FilterMode>(), Ok(FilterMode::Species));
    }

    #[test]
    fn filter_mode_rejects_unknown_names() {
        assert!("starships".parse::<FilterMode>().is_err());
    }

    #[test]
    fn filter_mode_cycle_covers_all_modes() {
        let mut mode = FilterMode::Homeworld;
        for _ in 0..FilterMode::all().len() {
            mode = mode.next();
        }
        assert_eq!(mode, FilterMode::Homeworld);
    }
}
