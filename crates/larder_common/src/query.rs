//! Per-request finder query

/// Everything the finder collects from the user for one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Selected cuisine labels, in selection order
    pub cuisines: Vec<String>,

    /// Trimmed, lower-cased ingredient terms
    pub ingredients: Vec<String>,

    /// Raw comma-separated allergy text
    pub allergies: String,
}

impl Query {
    pub fn from_raw(cuisines: Vec<String>, ingredients_text: &str, allergies_text: &str) -> Self {
        Self {
            cuisines,
            ingredients: parse_ingredients(ingredients_text),
            allergies: allergies_text.to_string(),
        }
    }
}

/// Split comma-separated ingredient text into trimmed, lower-cased terms.
/// Blank input yields a single empty term, which matches nothing.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingredients() {
        assert_eq!(
            parse_ingredients(" Garlic, OLIVE oil ,lime"),
            vec!["garlic", "olive oil", "lime"]
        );
    }

    #[test]
    fn test_blank_input_is_single_empty_term() {
        assert_eq!(parse_ingredients(""), vec![""]);
    }

    #[test]
    fn test_from_raw_keeps_allergy_text() {
        let query = Query::from_raw(vec!["Italian".into()], "garlic", "Milk, eggs");
        assert_eq!(query.cuisines, vec!["Italian"]);
        assert_eq!(query.ingredients, vec!["garlic"]);
        assert_eq!(query.allergies, "Milk, eggs");
    }
}
