//! Session - line-oriented interactive driver
//!
//! Reads user input, turns it into view events, and renders pages. The
//! dataset is reloaded from disk on every page visit.

use anyhow::{Context, Result};
use larder_common::dataset::load_recipes;
use larder_common::recipe::cuisine_options;
use larder_common::selection::{random_recipe, select_per_cuisine};
use larder_common::staples::{staples_as_ingredients, CUPBOARD_STAPLES};
use larder_common::Query;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::display::Renderer;
use crate::views::{transition, Event, View};

/// Settings shared by the session and one-shot commands
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub dataset: PathBuf,
    pub renderer: Renderer,
    /// Pre-fill the finder with staples picked on the staples page
    pub carry_staples: bool,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    settings: SessionSettings,
    rng: StdRng,
    view: View,
    carried_staples: Option<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: SessionSettings, rng: StdRng) -> Self {
        Self {
            input,
            output,
            settings,
            rng,
            view: View::Home,
            carried_staples: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        while self.view != View::Exit {
            let event = self.step()?;
            let next = transition(self.view, &event);
            debug!(from = ?self.view, ?event, to = ?next, "View transition");
            self.view = next;
        }
        self.write("Goodbye!\n")
    }

    /// Render the current view and collect one event from it
    pub fn step(&mut self) -> Result<Event> {
        match self.view {
            View::Home => self.home(),
            View::RecipeFinder => self.finder(),
            View::RandomRecipe => self.random(),
            View::CupboardStaples => self.staples(),
            View::Exit => Ok(Event::Quit),
        }
    }

    fn home(&mut self) -> Result<Event> {
        let page = format!(
            "\n{}{}",
            self.settings.renderer.title(View::Home.title()),
            self.settings.renderer.numbered(&[
                View::RecipeFinder.title(),
                View::RandomRecipe.title(),
                View::CupboardStaples.title(),
            ])
        );
        self.write(&page)?;
        self.write(&self.settings.renderer.hint("  q) Quit"))?;

        let Some(choice) = self.ask("Choose a page:")? else {
            return Ok(Event::Quit);
        };
        let event = match choice.to_lowercase().as_str() {
            "1" | "finder" | "recipe finder" => Event::OpenFinder,
            "2" | "random" | "random recipe" => Event::OpenRandom,
            "3" | "staples" | "cupboard staples" => Event::OpenStaples,
            "q" | "quit" | "exit" => Event::Quit,
            other => {
                let msg = format!("Unknown choice: '{}'", other);
                self.write(&self.settings.renderer.warning(&msg))?;
                Event::Back
            }
        };
        Ok(event)
    }

    fn finder(&mut self) -> Result<Event> {
        let recipes = load_recipes(&self.settings.dataset);
        let renderer = self.settings.renderer;

        let options = cuisine_options(&recipes);
        let mut page = format!("\n{}", renderer.title(View::RecipeFinder.title()));
        page.push_str(&renderer.heading("Select cuisines:"));
        page.push_str(&renderer.numbered(&options));
        self.write(&page)?;

        let Some(raw_cuisines) = self.ask("Cuisines (numbers or names, comma-separated):")? else {
            return Ok(Event::Quit);
        };
        let cuisines = parse_choices(&raw_cuisines, &options);

        let prefill = self.carried_staples.take();
        let ingredient_prompt = match &prefill {
            Some(staples) => format!("Enter ingredients separated by commas [{}]:", staples),
            None => "Enter ingredients separated by commas:".to_string(),
        };
        let Some(mut ingredients) = self.ask(&ingredient_prompt)? else {
            return Ok(Event::Quit);
        };
        if ingredients.is_empty() {
            if let Some(staples) = prefill {
                ingredients = staples;
            }
        }

        let Some(allergies) =
            self.ask("Enter your allergies separated by commas, if none - leave blank:")?
        else {
            return Ok(Event::Quit);
        };

        let query = Query::from_raw(cuisines, &ingredients, &allergies);
        debug!(?query, "Finder query");
        let chosen = select_per_cuisine(&recipes, &query, &mut self.rng);
        self.write(&renderer.finder_results(&chosen))?;

        self.wait_for_back()
    }

    fn random(&mut self) -> Result<Event> {
        let recipes = load_recipes(&self.settings.dataset);
        let renderer = self.settings.renderer;

        let mut page = format!("\n{}", renderer.title(View::RandomRecipe.title()));
        page.push_str(&renderer.random_result(random_recipe(&recipes, &mut self.rng)));
        self.write(&page)?;

        self.wait_for_back()
    }

    fn staples(&mut self) -> Result<Event> {
        let renderer = self.settings.renderer;
        let mut page = format!("\n{}", renderer.title(View::CupboardStaples.title()));
        page.push_str(&renderer.heading("Select your cupboard staples:"));
        page.push_str(&renderer.numbered(&CUPBOARD_STAPLES));
        self.write(&page)?;

        let Some(raw) = self.ask("Staples (numbers or names, 'b' to go back):")? else {
            return Ok(Event::Quit);
        };
        if matches!(raw.to_lowercase().as_str(), "b" | "back") {
            return Ok(Event::Back);
        }

        let selected = parse_choices(&raw, &CUPBOARD_STAPLES);
        if selected.is_empty() {
            self.write(&renderer.warning("Please select at least one staple."))?;
        } else if self.settings.carry_staples {
            self.carried_staples = Some(staples_as_ingredients(&selected));
        } else {
            debug!(?selected, "Staples selected; not carried into the finder");
        }
        Ok(Event::StaplesChosen(selected.len()))
    }

    fn wait_for_back(&mut self) -> Result<Event> {
        match self.ask("Press Enter to go back.")? {
            Some(_) => Ok(Event::Back),
            None => Ok(Event::Quit),
        }
    }

    /// Prompt and read one trimmed line; `None` on end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let prompt = self.settings.renderer.prompt(prompt);
        self.write(&prompt)?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("Failed to write output")
    }
}

/// Resolve a comma-separated selection against a list of options.
///
/// Tokens may be 1-based positions or option names (case-insensitive).
/// Unknown tokens are skipped; order of first mention is kept, repeats dropped.
pub fn parse_choices(raw: &str, options: &[impl AsRef<str>]) -> Vec<String> {
    let mut chosen: Vec<String> = Vec::new();

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let hit = match token.parse::<usize>() {
            Ok(n) if n >= 1 => options.get(n - 1).map(|o| o.as_ref()),
            Ok(_) => None,
            Err(_) => options
                .iter()
                .map(|o| o.as_ref())
                .find(|o| o.eq_ignore_ascii_case(token)),
        };

        match hit {
            Some(option) if !chosen.iter().any(|c| c == option) => chosen.push(option.to_string()),
            Some(_) => {}
            None => debug!(token, "Ignoring unknown selection"),
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices_numbers_and_names() {
        let options = ["Greek", "Italian", "Mexican"];
        assert_eq!(
            parse_choices("3, greek ,2", &options),
            vec!["Mexican", "Greek", "Italian"]
        );
    }

    #[test]
    fn test_parse_choices_skips_unknown_and_repeats() {
        let options = ["salt", "sugar"];
        assert_eq!(parse_choices("0, 9, pepper, 1, salt,", &options), vec!["salt"]);
        assert!(parse_choices("", &options).is_empty());
    }
}
