//! Path → view mapping driven by browser history.
//!
//! The app root owns the only [`RouteState`]. It is seeded from the current
//! location and after that changes only when the history fires a navigation
//! event (back/forward). In-page `#anchor` links never come through here.

use std::rc::Rc;

use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Privacy,
    Terms,
}

impl View {
    /// Exact, case-sensitive match; anything unknown is the landing page.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/privacy" => View::Privacy,
            "/terms" => View::Terms,
            _ => View::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::Privacy => "/privacy",
            View::Terms => "/terms",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteState {
    current_path: String,
}

impl RouteState {
    pub fn new(path: impl Into<String>) -> Self {
        Self { current_path: path.into() }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn view(&self) -> View {
        View::from_path(&self.current_path)
    }
}

pub enum RouteAction {
    Navigated(String),
}

impl Reducible for RouteState {
    type Action = RouteAction;

    fn reduce(self: Rc<Self>, action: RouteAction) -> Rc<Self> {
        match action {
            RouteAction::Navigated(path) if path == self.current_path => self,
            RouteAction::Navigated(path) => Rc::new(RouteState::new(path)),
        }
    }
}

fn location_path(history: &BrowserHistory) -> String {
    history.location().path().to_string()
}

/// Route state for the app root, kept in sync with history navigation for
/// as long as the calling component is mounted.
#[hook]
pub fn use_route() -> UseReducerHandle<RouteState> {
    let route = use_reducer(|| RouteState::new(location_path(&BrowserHistory::new())));

    {
        let route = route.clone();
        use_effect_with_deps(
            move |_| {
                let history = BrowserHistory::new();
                let listener = history.listen({
                    let history = history.clone();
                    move || {
                        let path = location_path(&history);
                        log::debug!("history navigated to {}", path);
                        route.dispatch(RouteAction::Navigated(path));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_paths_resolve_to_their_views() {
        assert_eq!(View::from_path("/privacy"), View::Privacy);
        assert_eq!(View::from_path("/terms"), View::Terms);
        assert_eq!(View::from_path("/"), View::Home);
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        for path in ["/xyz", "", "/Privacy", "/TERMS", "/privacy/", "/terms?x=1", "privacy"] {
            assert_eq!(View::from_path(path), View::Home, "{path:?}");
        }
    }

    #[test]
    fn view_paths_round_trip() {
        for view in [View::Home, View::Privacy, View::Terms] {
            assert_eq!(View::from_path(view.path()), view);
        }
    }

    #[test]
    fn navigation_replaces_state() {
        let state = Rc::new(RouteState::new("/"));
        let next = state.clone().reduce(RouteAction::Navigated("/terms".into()));
        assert_eq!(next.current_path(), "/terms");
        assert_eq!(next.view(), View::Terms);
        assert_eq!(state.view(), View::Home);
    }

    #[test]
    fn navigation_to_same_path_keeps_state() {
        let state = Rc::new(RouteState::new("/privacy"));
        let next = state.clone().reduce(RouteAction::Navigated("/privacy".into()));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
