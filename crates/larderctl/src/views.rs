//! Views - the finite set of pages and how events move between them
//!
//! `transition` is pure and total; the session does all I/O.

/// A page the session can be showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    RecipeFinder,
    RandomRecipe,
    CupboardStaples,
    Exit,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Larder Recipe Finder",
            View::RecipeFinder => "Recipe Finder",
            View::RandomRecipe => "Random Recipe",
            View::CupboardStaples => "Cupboard Staples",
            View::Exit => "Goodbye",
        }
    }
}

/// Something the user did on the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenFinder,
    OpenRandom,
    OpenStaples,
    /// Number of staples selected
    StaplesChosen(usize),
    Back,
    Quit,
}

/// currentView x event -> nextView
pub fn transition(current: View, event: &Event) -> View {
    match (current, event) {
        (View::Exit, _) => View::Exit,
        (_, Event::Quit) => View::Exit,
        (_, Event::Back) => View::Home,

        (View::Home, Event::OpenFinder) => View::RecipeFinder,
        (View::Home, Event::OpenRandom) => View::RandomRecipe,
        (View::Home, Event::OpenStaples) => View::CupboardStaples,

        (View::CupboardStaples, Event::StaplesChosen(0)) => View::CupboardStaples,
        (View::CupboardStaples, Event::StaplesChosen(_)) => View::RecipeFinder,

        (view, _) => view,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VIEWS: [View; 5] = [
        View::Home,
        View::RecipeFinder,
        View::RandomRecipe,
        View::CupboardStaples,
        View::Exit,
    ];

    #[test]
    fn test_home_menu() {
        assert_eq!(transition(View::Home, &Event::OpenFinder), View::RecipeFinder);
        assert_eq!(transition(View::Home, &Event::OpenRandom), View::RandomRecipe);
        assert_eq!(transition(View::Home, &Event::OpenStaples), View::CupboardStaples);
    }

    #[test]
    fn test_back_always_goes_home() {
        for view in ALL_VIEWS.into_iter().filter(|v| *v != View::Exit) {
            assert_eq!(transition(view, &Event::Back), View::Home);
        }
    }

    #[test]
    fn test_quit_and_exit_are_terminal() {
        for view in ALL_VIEWS {
            assert_eq!(transition(view, &Event::Quit), View::Exit);
            assert_eq!(transition(View::Exit, &Event::OpenFinder), View::Exit);
        }
    }

    #[test]
    fn test_staples_redirect_to_finder() {
        assert_eq!(
            transition(View::CupboardStaples, &Event::StaplesChosen(3)),
            View::RecipeFinder
        );
        assert_eq!(
            transition(View::CupboardStaples, &Event::StaplesChosen(0)),
            View::CupboardStaples
        );
    }

    #[test]
    fn test_menu_events_ignored_off_home() {
        assert_eq!(transition(View::RandomRecipe, &Event::OpenFinder), View::RandomRecipe);
        assert_eq!(transition(View::RecipeFinder, &Event::StaplesChosen(2)), View::RecipeFinder);
    }
}
