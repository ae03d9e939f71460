use std::sync::Arc;

use tracing::{debug, warn};

use super::route::{Resolution, Route};
use crate::library::model::{Entity, Snapshot};

/// Where a cleared search sends the sidebar back to.
pub const DEFAULT_CATALOGUE_ROUTE: Route = Route::Movies;

/// How the front-end presents drill-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneTopology {
    /// Sidebar, content and detail visible side by side.
    #[default]
    Split,
    /// A single linear stack of pages.
    Stack,
}

#[derive(Debug, Clone)]
pub enum NavMessage {
    SelectSidebar(Route),
    SelectDetail(Route),
    Push(Route),
    Pop,
    /// Drill into `route` the way the topology presents it.
    Open(Route),
    Back,
    Reconcile(Entity),
    ApplySnapshot(Arc<Snapshot>),
    SetSearchQuery(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Pop {
    Removed(Route),
    AtRoot,
}

/// What an update changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transition {
    pub sidebar_changed: bool,
    pub content_changed: bool,
    pub detail_changed: bool,
    pub stack_changed: bool,
    pub popped: Option<Pop>,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        !(self.sidebar_changed || self.content_changed || self.detail_changed || self.stack_changed)
    }
}

/// Selection state of one window.
#[derive(Debug, Clone)]
pub struct NavigationState {
    topology: PaneTopology,
    sidebar_selection: Route,
    content_selection: Route,
    detail_selection: Route,
    navigation_stack: Vec<Route>,
    navigation_subtitle: String,
    search_query: String,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(PaneTopology::default())
    }
}

impl NavigationState {
    pub fn new(topology: PaneTopology) -> Self {
        Self {
            topology,
            sidebar_selection: Route::Start,
            content_selection: Route::Start,
            detail_selection: Route::Start,
            navigation_stack: Vec::new(),
            navigation_subtitle: String::new(),
            search_query: String::new(),
        }
    }

    pub fn topology(&self) -> PaneTopology {
        self.topology
    }

    pub fn sidebar_selection(&self) -> &Route {
        &self.sidebar_selection
    }

    pub fn content_selection(&self) -> &Route {
        &self.content_selection
    }

    pub fn detail_selection(&self) -> &Route {
        &self.detail_selection
    }

    pub fn navigation_stack(&self) -> &[Route] {
        &self.navigation_stack
    }

    pub fn navigation_subtitle(&self) -> &str {
        &self.navigation_subtitle
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn select_sidebar(&mut self, route: Route) -> Transition {
        self.update(NavMessage::SelectSidebar(route))
    }

    pub fn select_detail(&mut self, route: Route) -> Transition {
        self.update(NavMessage::SelectDetail(route))
    }

    pub fn push(&mut self, route: Route) -> Transition {
        self.update(NavMessage::Push(route))
    }

    pub fn pop(&mut self) -> Pop {
        self.update(NavMessage::Pop).popped.unwrap_or(Pop::AtRoot)
    }

    pub fn reconcile(&mut self, entity: Entity) -> Transition {
        self.update(NavMessage::Reconcile(entity))
    }

    pub fn apply_snapshot(&mut self, snapshot: Arc<Snapshot>) -> Transition {
        self.update(NavMessage::ApplySnapshot(snapshot))
    }

    pub fn update(&mut self, msg: NavMessage) -> Transition {
        let mut transition = Transition::default();

        match msg {
            NavMessage::SelectSidebar(route) => {
                debug!(?route, "nav_select_sidebar");
                transition.sidebar_changed = self.sidebar_selection != route;
                transition.content_changed = self.content_selection != route;
                transition.detail_changed = self.detail_selection != route;
                transition.stack_changed = !self.navigation_stack.is_empty();

                self.sidebar_selection = route.clone();
                self.content_selection = route.clone();
                self.detail_selection = route;
                self.navigation_stack.clear();
            }
            NavMessage::SelectDetail(route) => {
                debug!(?route, "nav_select_detail");
                transition.detail_changed = self.set_detail(route);
            }
            NavMessage::Push(route) => {
                transition.stack_changed = self.push_route(route);
            }
            NavMessage::Pop => {
                let popped = match self.navigation_stack.pop() {
                    Some(route) => Pop::Removed(route),
                    None => Pop::AtRoot,
                };
                transition.stack_changed = matches!(popped, Pop::Removed(_));
                transition.popped = Some(popped);
            }
            NavMessage::Open(route) => match self.topology {
                PaneTopology::Split => {
                    transition.detail_changed = self.set_detail(route);
                }
                PaneTopology::Stack => {
                    transition.stack_changed = self.push_route(route.clone());
                    transition.detail_changed = self.set_detail(route);
                }
            },
            NavMessage::Back => match self.topology {
                PaneTopology::Split => {
                    let content = self.content_selection.clone();
                    transition.detail_changed = self.set_detail(content);
                }
                PaneTopology::Stack => {
                    let popped = match self.navigation_stack.pop() {
                        Some(route) => Pop::Removed(route),
                        None => Pop::AtRoot,
                    };
                    if matches!(popped, Pop::Removed(_)) {
                        transition.stack_changed = true;
                        let top = self
                            .navigation_stack
                            .last()
                            .cloned()
                            .unwrap_or_else(|| self.content_selection.clone());
                        transition.detail_changed = self.set_detail(top);
                    }
                    transition.popped = Some(popped);
                }
            },
            NavMessage::Reconcile(entity) => {
                self.map_routes(&mut transition, |route| route.refreshed_with(&entity));
            }
            NavMessage::ApplySnapshot(snapshot) => {
                self.map_routes(&mut transition, |route| match route.resolve(&snapshot) {
                    Resolution::Present(fresh) => Some(fresh),
                    Resolution::Missing(fallback) => {
                        warn!(?route, ?fallback, "nav_entity_missing");
                        Some(fallback)
                    }
                });
                self.dedup_stack();
            }
            NavMessage::SetSearchQuery(query) => {
                self.search_query = query;
            }
        }

        self.refresh_subtitle();
        transition
    }

    fn set_detail(&mut self, route: Route) -> bool {
        let changed = !self.detail_selection.same_payload(&route);
        self.detail_selection = route;
        changed
    }

    fn push_route(&mut self, route: Route) -> bool {
        if self.navigation_stack.last() == Some(&route) {
            return false;
        }
        self.navigation_stack.push(route);
        true
    }

    /// Rewrites every held route through `f`, recording which panes moved.
    fn map_routes(&mut self, transition: &mut Transition, f: impl Fn(&Route) -> Option<Route>) {
        let apply = |slot: &mut Route| -> bool {
            match f(slot) {
                Some(next) if !slot.same_payload(&next) => {
                    *slot = next;
                    true
                }
                _ => false,
            }
        };

        transition.sidebar_changed |= apply(&mut self.sidebar_selection);
        transition.content_changed |= apply(&mut self.content_selection);
        transition.detail_changed |= apply(&mut self.detail_selection);
        for route in &mut self.navigation_stack {
            transition.stack_changed |= apply(route);
        }
    }

    /// Fallbacks can collapse neighbouring stack entries onto the same route.
    fn dedup_stack(&mut self) {
        self.navigation_stack.dedup();
    }

    fn refresh_subtitle(&mut self) {
        self.navigation_subtitle = self.detail_selection.navigation_subtitle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{fixture, model::MediaId};

    fn alien() -> Route {
        Route::Movie(fixture::snapshot().movie(MediaId(1)).cloned().unwrap())
    }

    #[test]
    fn starts_at_start() {
        let state = NavigationState::default();
        assert_eq!(state.sidebar_selection(), &Route::Start);
        assert_eq!(state.navigation_subtitle(), "");
        assert!(state.navigation_stack().is_empty());
    }

    #[test]
    fn sidebar_selection_reanchors_other_panes() {
        let mut state = NavigationState::default();
        state.select_detail(alien());
        state.push(Route::TvShows);

        let transition = state.select_sidebar(Route::Movies);
        assert!(transition.sidebar_changed && transition.stack_changed);
        assert_eq!(state.content_selection(), &Route::Movies);
        assert_eq!(state.detail_selection(), &Route::Movies);
        assert!(state.navigation_stack().is_empty());
        assert_eq!(state.navigation_subtitle(), "");
    }

    #[test]
    fn detail_selection_recomputes_subtitle_only() {
        let mut state = NavigationState::default();
        state.select_sidebar(Route::Movies);

        state.select_detail(alien());
        assert_eq!(state.navigation_subtitle(), "Alien");
        assert_eq!(state.sidebar_selection(), &Route::Movies);
        assert_eq!(state.content_selection(), &Route::Movies);

        state.select_detail(Route::UpNext);
        assert_eq!(state.navigation_subtitle(), "");
    }

    #[test]
    fn pushing_the_top_again_is_a_noop() {
        let mut state = NavigationState::default();
        assert!(state.push(alien()).stack_changed);
        assert!(!state.push(alien()).stack_changed);
        assert_eq!(state.navigation_stack().len(), 1);

        state.push(Route::TvShows);
        state.push(alien());
        assert_eq!(state.navigation_stack().len(), 3);
    }

    #[test]
    fn pop_past_root_stays_put() {
        let mut state = NavigationState::default();
        state.select_sidebar(Route::TvShows);
        let before = state.clone();

        assert_eq!(state.pop(), Pop::AtRoot);
        assert_eq!(state.sidebar_selection(), before.sidebar_selection());
        assert_eq!(state.detail_selection(), before.detail_selection());
        assert!(state.navigation_stack().is_empty());

        state.push(Route::UpNext);
        assert_eq!(state.pop(), Pop::Removed(Route::UpNext));
    }

    #[test]
    fn reconcile_refreshes_payload_but_keeps_selection() {
        let mut state = NavigationState::default();
        state.select_sidebar(Route::Movies);
        state.select_detail(alien());

        let mut fresh = fixture::snapshot().movie(MediaId(1)).cloned().unwrap();
        fresh.playcount = 4;
        let transition = state.reconcile(Entity::Movie(fresh));

        assert!(transition.detail_changed);
        assert!(!transition.content_changed);
        assert!(matches!(state.detail_selection(), Route::Movie(m) if m.playcount == 4));
        assert_eq!(state.navigation_subtitle(), "Alien");
    }

    #[test]
    fn reconcile_updates_subtitle_when_title_changes() {
        let mut state = NavigationState::default();
        state.select_detail(alien());

        let mut fresh = fixture::snapshot().movie(MediaId(1)).cloned().unwrap();
        fresh.title = "Alien (Director's Cut)".into();
        state.reconcile(Entity::Movie(fresh));

        assert_eq!(state.navigation_subtitle(), "Alien (Director's Cut)");
    }

    #[test]
    fn reconcile_ignores_unrelated_entities() {
        let mut state = NavigationState::default();
        state.select_detail(alien());

        let transition = state.reconcile(Entity::Movie(fixture::movie(3, "Blade Runner")));
        assert!(transition.is_noop());
    }

    #[test]
    fn open_and_back_follow_topology() {
        let mut split = NavigationState::new(PaneTopology::Split);
        split.select_sidebar(Route::Movies);
        split.update(NavMessage::Open(alien()));
        assert_eq!(split.detail_selection(), &alien());
        assert!(split.navigation_stack().is_empty());
        split.update(NavMessage::Back);
        assert_eq!(split.detail_selection(), &Route::Movies);

        let mut stack = NavigationState::new(PaneTopology::Stack);
        stack.select_sidebar(Route::TvShows);
        let show = Route::TvShow(fixture::tvshow(200, "Severance"));
        stack.update(NavMessage::Open(show.clone()));
        stack.update(NavMessage::Open(alien()));
        assert_eq!(stack.navigation_stack().len(), 2);

        stack.update(NavMessage::Back);
        assert_eq!(stack.detail_selection(), &show);
        stack.update(NavMessage::Back);
        assert_eq!(stack.detail_selection(), &Route::TvShows);
        let transition = stack.update(NavMessage::Back);
        assert_eq!(transition.popped, Some(Pop::AtRoot));
        assert!(transition.is_noop());
    }

    #[test]
    fn vanished_detail_falls_back_to_parent() {
        let mut state = NavigationState::default();
        state.select_sidebar(Route::Movies);
        state.select_detail(alien());

        let mut snapshot = fixture::snapshot();
        snapshot.movies.retain(|m| m.id != MediaId(1));
        let transition = state.update(NavMessage::ApplySnapshot(Arc::new(snapshot)));

        assert!(transition.detail_changed);
        assert!(matches!(state.detail_selection(), Route::MovieSet(s) if s.id == MediaId(100)));
        assert_eq!(state.navigation_subtitle(), "Alien Collection");
        assert_eq!(state.content_selection(), &Route::Movies);
    }

    #[test]
    fn fallback_collapses_duplicate_stack_entries() {
        let mut state = NavigationState::new(PaneTopology::Stack);
        state.select_sidebar(Route::TvShows);
        state.push(Route::TvShow(fixture::tvshow(201, "Andor")));
        state.push(Route::Seasons(fixture::tvshow(200, "Severance")));
        state.push(Route::TvShows);

        let mut snapshot = fixture::snapshot();
        snapshot.tvshows.retain(|s| s.id != MediaId(200));
        state.update(NavMessage::ApplySnapshot(Arc::new(snapshot)));

        assert_eq!(
            state.navigation_stack(),
            &[Route::TvShow(fixture::tvshow(201, "Andor")), Route::TvShows]
        );
    }
}
