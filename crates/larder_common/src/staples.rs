//! Cupboard staples - the ten most common ingredients in the dataset

pub const CUPBOARD_STAPLES: [&str; 10] = [
    "salt",
    "onions",
    "olive oil",
    "water",
    "garlic",
    "sugar",
    "garlic cloves",
    "butter",
    "ground black pepper",
    "all-purpose flour",
];

/// Ingredient text pre-filled into the finder when staples are carried over
pub fn staples_as_ingredients(selected: &[String]) -> String {
    selected.join(", ")
}
