//! Local composition of the visible character list.

use crate::types::{Character, FilterMode, ViewFilters};

/// Derive the visible subsequence of `items` for the given filters: the
/// name must contain the search text case-insensitively and the active
/// filter mode's predicate must hold. Order is preserved; nothing is
/// re-sorted. Pure and cheap enough to rerun on every keystroke.
pub fn compose_view<'a>(items: &'a [Character], filters: &ViewFilters) -> Vec<&'a Character> {
    let needle = filters.search_text.to_lowercase();
    items
        .iter()
        .filter(|character| {
            let matches_search =
                needle.is_empty() || character.name.to_lowercase().contains(&needle);
            let matches_mode = match filters.filter_mode {
                FilterMode::Homeworld => character.homeworld.is_some(),
                FilterMode::Film => character.film_count > 0,
                FilterMode::Species => !character.species.is_empty(),
            };
            matches_search && matches_mode
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn arb_character() -> impl Strategy<Value = Character> {
        (
            "[A-Za-z0-9 -]{1,16}",
            0usize..5,
            0usize..3,
            any::<bool>(),
        )
            .prop_map(|(name, film_count, species, homeworld)| Character {
                name,
                height: "172".to_string(),
                mass: "77".to_string(),
                created: Utc::now(),
                film_count,
                birth_year: "19BBY".to_string(),
                species: (0..species).map(|i| format!("species/{}", i)).collect(),
                homeworld: homeworld.then(|| "planets/1".to_string()),
            })
    }

    fn arb_filters() -> impl Strategy<Value = ViewFilters> {
        (
            "[A-Za-z0-9]{0,4}",
            prop_oneof![
                Just(FilterMode::Homeworld),
                Just(FilterMode::Film),
                Just(FilterMode::Species),
            ],
        )
            .prop_map(|(search_text, filter_mode)| ViewFilters {
                search_text,
                filter_mode,
            })
    }

    fn satisfies(character: &Character, filters: &ViewFilters) -> bool {
        let needle = filters.search_text.to_lowercase();
        let matches_search = needle.is_empty() || character.name.to_lowercase().contains(&needle);
        let matches_mode = match filters.filter_mode {
            FilterMode::Homeworld => character.homeworld.is_some(),
            FilterMode::Film => character.film_count > 0,
            FilterMode::Species => !character.species.is_empty(),
        };
        matches_search && matches_mode
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The visible list is an order-preserving subsequence of the page.
        #[test]
        fn visible_is_a_subsequence(
            items in prop::collection::vec(arb_character(), 0..12),
            filters in arb_filters(),
        ) {
            let visible = compose_view(&items, &filters);
            let mut cursor = 0usize;
            for shown in &visible {
                let position = items[cursor..]
                    .iter()
                    .position(|c| std::ptr::eq(c, *shown));
                prop_assert!(position.is_some());
                cursor += position.unwrap() + 1;
            }
        }

        /// Everything shown satisfies both predicates; nothing satisfying
        /// both is hidden.
        #[test]
        fn predicates_partition_the_page(
            items in prop::collection::vec(arb_character(), 0..12),
            filters in arb_filters(),
        ) {
            let visible = compose_view(&items, &filters);
            for shown in &visible {
                prop_assert!(satisfies(shown, &filters));
            }
            let expected = items.iter().filter(|c| satisfies(c, &filters)).count();
            prop_assert_eq!(visible.len(), expected);
        }
    }
}
