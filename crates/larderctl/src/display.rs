//! Display - terminal rendering for every page
//!
//! All output is built as strings here and written by the caller, so the
//! session and one-shot commands render identically.

use larder_common::config::ColorMode;
use larder_common::Recipe;
use owo_colors::OwoColorize;

/// Renders pages with or without ANSI styling
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    use_color: bool,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Resolve color from config, the --no-color flag, and the terminal
    pub fn from_mode(mode: ColorMode, no_color: bool) -> Self {
        let use_color = !no_color
            && match mode {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => console::colors_enabled(),
            };
        Self { use_color }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    pub fn title(&self, title: &str) -> String {
        let line = format!("━━ {} ━━", title);
        if self.use_color {
            format!("{}\n", line.cyan().bold())
        } else {
            format!("{}\n", line)
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.use_color {
            format!("{}\n", text.bold())
        } else {
            format!("{}\n", text)
        }
    }

    pub fn hint(&self, text: &str) -> String {
        if self.use_color {
            format!("{}\n", text.dimmed())
        } else {
            format!("{}\n", text)
        }
    }

    pub fn warning(&self, text: &str) -> String {
        if self.use_color {
            format!("{}\n", text.yellow())
        } else {
            format!("{}\n", text)
        }
    }

    /// `  1) item` lines
    pub fn numbered(&self, items: &[impl AsRef<str>]) -> String {
        let mut output = String::new();
        for (i, item) in items.iter().enumerate() {
            let num = format!("{:>3})", i + 1);
            if self.use_color {
                output.push_str(&format!("{} {}\n", num.green(), item.as_ref()));
            } else {
                output.push_str(&format!("{} {}\n", num, item.as_ref()));
            }
        }
        output
    }

    pub fn recipe(&self, recipe: &Recipe) -> String {
        let mut output = String::new();
        let id = recipe.display_id();
        if self.use_color {
            output.push_str(&format!("• {}: {}\n", id.bold(), recipe.display_cuisine()));
        } else {
            output.push_str(&format!("• {}: {}\n", id, recipe.display_cuisine()));
        }
        output.push_str("  Ingredients:\n");
        for ingredient in &recipe.ingredients {
            output.push_str(&format!("    - {}\n", ingredient));
        }
        output
    }

    /// Finder outcome: one block per chosen recipe, or the no-results help
    pub fn finder_results(&self, recipes: &[&Recipe]) -> String {
        if recipes.is_empty() {
            let mut output = self.warning("Very sorry, no recipes found!");
            output.push_str(&self.hint("Make sure you're selecting a cuisine."));
            output.push_str(&self.hint("Try simplifying your inputs."));
            return output;
        }

        let mut output = self.heading("Your matching recipes:");
        for recipe in recipes {
            output.push_str(&self.recipe(recipe));
            output.push('\n');
        }
        output
    }

    pub fn random_result(&self, recipe: Option<&Recipe>) -> String {
        match recipe {
            Some(recipe) => {
                let mut output = self.heading("Here's a random recipe:");
                output.push_str(&self.recipe(recipe));
                output
            }
            None => self.warning("No recipes found in the database."),
        }
    }

    pub fn prompt(&self, text: &str) -> String {
        if self.use_color {
            format!("{} ", text.bold())
        } else {
            format!("{} ", text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_block() {
        let recipe = Recipe::new(1, "italian", &["garlic", "olive oil"]);
        let text = Renderer::plain().recipe(&recipe);
        assert_eq!(text, "• 1: italian\n  Ingredients:\n    - garlic\n    - olive oil\n");
    }

    #[test]
    fn test_no_results_help() {
        let text = Renderer::plain().finder_results(&[]);
        assert!(text.contains("Very sorry, no recipes found!"));
        assert!(text.contains("Make sure you're selecting a cuisine."));
        assert!(text.contains("Try simplifying your inputs."));
    }

    #[test]
    fn test_random_empty() {
        let text = Renderer::plain().random_result(None);
        assert_eq!(text, "No recipes found in the database.\n");
    }

    #[test]
    fn test_numbered_list() {
        let text = Renderer::plain().numbered(&["salt", "sugar"]);
        assert_eq!(text, "  1) salt\n  2) sugar\n");
    }

    #[test]
    fn test_color_mode_never_and_flag() {
        let recipe = Recipe::new(5, "greek", &[]);
        let never = Renderer::from_mode(ColorMode::Never, false).recipe(&recipe);
        assert!(!never.contains('\u{1b}'));

        let flagged = Renderer::from_mode(ColorMode::Always, true).recipe(&recipe);
        assert!(!flagged.contains('\u{1b}'));

        let always = Renderer::from_mode(ColorMode::Always, false).recipe(&recipe);
        assert!(always.contains('\u{1b}'));
    }
}
