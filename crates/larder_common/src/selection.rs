//! Recipe selection policies
//!
//! The random source is injected so callers can seed it.

use crate::matcher::{filter_by_allergies, find_matching_recipes};
use crate::query::Query;
use crate::recipe::Recipe;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// At most one recipe per selected cuisine, in selection order.
///
/// Each cuisine is matched and allergy-filtered independently; a cuisine
/// with no survivors contributes nothing.
pub fn select_per_cuisine<'a, R: Rng + ?Sized>(
    recipes: &'a [Recipe],
    query: &Query,
    rng: &mut R,
) -> Vec<&'a Recipe> {
    let mut selected = Vec::new();

    for cuisine in &query.cuisines {
        let matching = find_matching_recipes(recipes, &query.ingredients, Some(cuisine));
        let safe = filter_by_allergies(matching, &query.allergies);
        debug!(cuisine = %cuisine, candidates = safe.len(), "Cuisine filtered");

        if let Some(chosen) = safe.choose(rng) {
            selected.push(*chosen);
        }
    }

    selected
}

/// Uniform choice over the whole collection; `None` when it is empty
pub fn random_recipe<'a, R: Rng + ?Sized>(recipes: &'a [Recipe], rng: &mut R) -> Option<&'a Recipe> {
    recipes.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dataset() -> Vec<Recipe> {
        vec![
            Recipe::new(1, "italian", &["garlic", "olive oil"]),
            Recipe::new(2, "mexican", &["cumin", "lime"]),
            Recipe::new(3, "italian", &["garlic", "tomatoes", "basil"]),
            Recipe::new(4, "mexican", &["garlic", "black beans"]),
        ]
    }

    #[test]
    fn test_one_recipe_per_cuisine_in_order() {
        let recipes = dataset();
        let query = Query::from_raw(vec!["Mexican".into(), "Italian".into()], "garlic", "");
        let mut rng = StdRng::seed_from_u64(7);

        let picked = select_per_cuisine(&recipes, &query, &mut rng);
        assert_eq!(picked.len(), 2);
        assert!(picked[0].cuisine_matches("mexican"));
        assert!(picked[1].cuisine_matches("italian"));
    }

    #[test]
    fn test_cuisine_without_survivors_is_skipped() {
        let recipes = dataset();
        let query = Query::from_raw(vec!["Mexican".into(), "Italian".into()], "garlic", "black beans");
        let mut rng = StdRng::seed_from_u64(1);

        let picked = select_per_cuisine(&recipes, &query, &mut rng);
        assert_eq!(picked.len(), 1);
        assert!(picked[0].cuisine_matches("italian"));
    }

    #[test]
    fn test_no_cuisines_selects_nothing() {
        let recipes = dataset();
        let query = Query::from_raw(Vec::new(), "garlic", "");
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_per_cuisine(&recipes, &query, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_choice() {
        let recipes = dataset();
        let query = Query::from_raw(vec!["italian".into()], "garlic", "");

        let first = select_per_cuisine(&recipes, &query, &mut StdRng::seed_from_u64(42));
        let second = select_per_cuisine(&recipes, &query, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_recipe() {
        let recipes = dataset();
        let mut rng = StdRng::seed_from_u64(3);
        let chosen = random_recipe(&recipes, &mut rng).unwrap();
        assert!(recipes.contains(chosen));

        assert!(random_recipe(&[], &mut rng).is_none());
    }
}
