//! Matching engine
//!
//! Ingredient matching is fuzzy (partial similarity over the threshold),
//! allergy matching is exact string equality after lower-casing.
//! Both are pure functions of their inputs.

use crate::recipe::Recipe;
use crate::similarity::is_match;
use std::collections::HashSet;

/// Recipes with at least one ingredient matching any query term.
///
/// `query_ingredients` are expected trimmed and lower-cased. A `cuisine`
/// of `None` or `Some("")` disables the cuisine filter. Input order is kept.
pub fn find_matching_recipes<'a>(
    recipes: &'a [Recipe],
    query_ingredients: &[String],
    cuisine: Option<&str>,
) -> Vec<&'a Recipe> {
    let cuisine = cuisine.filter(|c| !c.is_empty());

    recipes
        .iter()
        .filter(|recipe| cuisine.map_or(true, |c| recipe.cuisine_matches(c)))
        .filter(|recipe| {
            query_ingredients.iter().any(|term| {
                recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| is_match(term, ingredient))
            })
        })
        .collect()
}

/// Drop recipes containing any listed allergen.
///
/// `allergy_text` is comma-separated. Empty text returns the input as is.
pub fn filter_by_allergies<'a>(recipes: Vec<&'a Recipe>, allergy_text: &str) -> Vec<&'a Recipe> {
    if allergy_text.is_empty() {
        return recipes;
    }
    let allergies = parse_allergies(allergy_text);

    recipes
        .into_iter()
        .filter(|recipe| {
            !recipe
                .ingredients
                .iter()
                .any(|ingredient| allergies.contains(&ingredient.to_lowercase()))
        })
        .collect()
}

/// Lower-cased allergy terms, split on commas exactly as typed.
/// Surrounding spaces stay part of a term.
pub fn parse_allergies(allergy_text: &str) -> HashSet<String> {
    allergy_text
        .to_lowercase()
        .split(',')
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Recipe> {
        vec![
            Recipe::new(1, "italian", &["garlic", "olive oil"]),
            Recipe::new(2, "mexican", &["cumin", "lime"]),
        ]
    }

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_garlic_in_italian() {
        let recipes = sample();
        let found = find_matching_recipes(&recipes, &terms(&["garlic"]), Some("italian"));
        assert_eq!(found, vec![&recipes[0]]);
    }

    #[test]
    fn test_cuisine_filter_is_case_insensitive() {
        let recipes = sample();
        let found = find_matching_recipes(&recipes, &terms(&["lime"]), Some("Mexican"));
        assert_eq!(found, vec![&recipes[1]]);

        let none = find_matching_recipes(&recipes, &terms(&["lime"]), Some("italian"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_no_cuisine_searches_everything() {
        let recipes = sample();
        let found = find_matching_recipes(&recipes, &terms(&["lime", "garlic"]), None);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, recipes[0].id);

        let blank = find_matching_recipes(&recipes, &terms(&["lime"]), Some(""));
        assert_eq!(blank, vec![&recipes[1]]);
    }

    #[test]
    fn test_recipe_accepted_once_for_multiple_terms() {
        let recipes = sample();
        let found = find_matching_recipes(&recipes, &terms(&["garlic", "olive oil"]), None);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_empty_ingredients_never_match() {
        let recipes = vec![Recipe::new(9, "italian", &[])];
        assert!(find_matching_recipes(&recipes, &terms(&["garlic"]), None).is_empty());
        assert!(find_matching_recipes(&recipes, &[], None).is_empty());
    }

    #[test]
    fn test_empty_query_term_never_matches() {
        let recipes = sample();
        assert!(find_matching_recipes(&recipes, &terms(&[""]), None).is_empty());
    }

    #[test]
    fn test_allergy_removes_recipe() {
        let recipes = sample();
        let all: Vec<&Recipe> = recipes.iter().collect();
        let kept = filter_by_allergies(all, "lime");
        assert_eq!(kept, vec![&recipes[0]]);
    }

    #[test]
    fn test_blank_allergies_is_identity() {
        let recipes = sample();
        let all: Vec<&Recipe> = recipes.iter().collect();
        assert_eq!(filter_by_allergies(all.clone(), ""), all);
    }

    #[test]
    fn test_allergy_match_is_exact_not_fuzzy() {
        let recipes = vec![Recipe::new(3, "thai", &["Peanut Butter", "rice"])];
        let all: Vec<&Recipe> = recipes.iter().collect();

        // "peanut" is a substring of the ingredient but not equal to it
        assert_eq!(filter_by_allergies(all.clone(), "peanut").len(), 1);
        assert!(filter_by_allergies(all, "PEANUT BUTTER, shellfish").is_empty());
    }

    #[test]
    fn test_parse_allergies_keeps_spacing() {
        let parsed = parse_allergies("Milk, eggs,,");
        assert_eq!(parsed.len(), 3);
        assert!(parsed.contains("milk"));
        assert!(parsed.contains(" eggs"));
        assert!(parsed.contains(""));
    }

    #[test]
    fn test_allergy_terms_compare_untrimmed() {
        let recipes = vec![
            Recipe::new(1, "french", &["eggs", "flour"]),
            Recipe::new(2, "french", &[" eggs"]),
        ];
        let all: Vec<&Recipe> = recipes.iter().collect();

        // " eggs" after the comma is its own exact term
        let kept = filter_by_allergies(all, "milk, eggs");
        assert_eq!(kept, vec![&recipes[0]]);
    }
}
