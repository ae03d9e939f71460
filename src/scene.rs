//! Per-window owner of the interaction core.
//!
//! A [`Scene`] owns the navigation state, the pane load states, one gesture
//! accumulator per connected controller and the search debouncer. Events are
//! handled one at a time, in arrival order, and every event re-evaluates the
//! panes before returning.

use std::{collections::HashMap, sync::Arc, time::Duration};

use flume::Sender;
use tracing::{debug, info};

use crate::{
    config::Config,
    event::Event,
    input::{ControllerId, Direction, GestureAccumulator, GestureConfig},
    library::{ConnectorStatus, LibraryProvider, SearchResults, model::Snapshot},
    nav::{DEFAULT_CATALOGUE_ROUTE, NavMessage, NavigationState, Route, SIDEBAR, route::Resolution},
    pane::{PaneLoadState, PaneState},
    search::SearchDebouncer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Sidebar,
    Content,
    Detail,
}

pub struct Scene {
    nav: NavigationState,
    library: Arc<dyn LibraryProvider>,
    snapshot: Arc<Snapshot>,
    status: ConnectorStatus,
    content: PaneState,
    detail: PaneState,
    gesture_config: GestureConfig,
    gestures: HashMap<ControllerId, GestureAccumulator>,
    search: SearchDebouncer,
    search_delay: Duration,
    selection_delay: Duration,
    search_results: Option<SearchResults>,
    search_fallback: Route,
    focus: Pane,
    sidebar_cursor: usize,
    content_cursor: usize,
    detail_cursor: usize,
}

impl Scene {
    pub fn new(library: Arc<dyn LibraryProvider>, event_tx: Sender<Event>, config: &Config) -> Self {
        let search = SearchDebouncer::new(library.clone(), event_tx);

        Self {
            nav: NavigationState::new(config.topology),
            snapshot: library.snapshot(),
            status: library.status(),
            library,
            content: PaneState::default(),
            detail: PaneState::default(),
            gesture_config: config.gesture,
            gestures: HashMap::new(),
            search,
            search_delay: config.search_delay,
            selection_delay: config.selection_delay,
            search_results: None,
            search_fallback: DEFAULT_CATALOGUE_ROUTE,
            focus: Pane::Sidebar,
            sidebar_cursor: 0,
            content_cursor: 0,
            detail_cursor: 0,
        }
    }

    /// Where the sidebar goes when a search is cleared while showing results.
    pub fn with_search_fallback(mut self, route: Route) -> Self {
        self.search_fallback = route;
        self
    }

    /// Runs the first evaluation of every pane. Until then they read
    /// [`PaneLoadState::Loading`].
    pub fn start(&mut self) {
        self.snapshot = self.library.snapshot();
        self.status = self.library.status();
        info!(status = self.status.as_str(), "scene_start");
        self.refresh();
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn content(&self) -> &PaneState {
        &self.content
    }

    pub fn detail(&self) -> &PaneState {
        &self.detail
    }

    pub fn status(&self) -> ConnectorStatus {
        self.status
    }

    pub fn search_results(&self) -> Option<&SearchResults> {
        self.search_results.as_ref()
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn cursor(&self, pane: Pane) -> usize {
        match pane {
            Pane::Sidebar => self.sidebar_cursor,
            Pane::Content => self.content_cursor,
            Pane::Detail => self.detail_cursor,
        }
    }

    pub fn has_controller(&self, id: ControllerId) -> bool {
        self.gestures.contains_key(&id)
    }

    /// Handles one event to completion. Returns the direction that was
    /// applied, if the event produced one.
    pub fn handle(&mut self, event: Event) -> Option<Direction> {
        match event {
            Event::LibraryUpdated(snapshot) => {
                debug!(taken_at = ?snapshot.taken_at, "scene_library_updated");
                self.snapshot = snapshot.clone();
                if let Some(results) = &mut self.search_results {
                    results.items = results
                        .items
                        .iter()
                        .filter_map(|route| match route.resolve(&snapshot) {
                            Resolution::Present(fresh) => Some(fresh),
                            Resolution::Missing(_) => None,
                        })
                        .collect();
                }
                self.nav.apply_snapshot(snapshot);
            }
            Event::EntityUpdated(entity) => {
                if let Some(results) = &mut self.search_results {
                    for route in results.items.iter_mut() {
                        if let Some(fresh) = route.refreshed_with(&entity) {
                            *route = fresh;
                        }
                    }
                }
                self.nav.reconcile(entity);
            }
            Event::ConnectorStatusChanged(status) => {
                info!(status = status.as_str(), "scene_connector_status");
                self.status = status;
            }
            Event::ControllerConnected(id) => {
                debug!(controller = id.0, "scene_controller_connected");
                self.gestures
                    .insert(id, GestureAccumulator::new(self.gesture_config));
                return None;
            }
            Event::ControllerDisconnected(id) => {
                debug!(controller = id.0, "scene_controller_disconnected");
                self.gestures.remove(&id);
                return None;
            }
            Event::Axis(id, sample) => {
                let direction = self.gestures.get_mut(&id)?.feed(sample)?;
                self.navigate(direction);
                return Some(direction);
            }
            Event::Direction(direction) => {
                self.navigate(direction);
                return Some(direction);
            }
            Event::SelectSidebar(route) => self.select_sidebar(route),
            Event::Open(route) => {
                self.nav.update(NavMessage::Open(route));
                self.detail_cursor = 0;
            }
            Event::Back => self.back(),
            Event::QueryChanged(query) => {
                // results move the sidebar unless it already shows them
                let delay = if self.nav.sidebar_selection() == &Route::Search {
                    self.search_delay
                } else {
                    self.selection_delay
                };
                self.nav.update(NavMessage::SetSearchQuery(query.clone()));
                self.search.on_query_changed(query, delay);
                return None;
            }
            Event::SearchResults {
                generation,
                results,
            } => {
                if !self.search.is_current(generation) {
                    debug!(generation, "scene_stale_search_results");
                    return None;
                }
                info!(
                    query = results.query.as_str(),
                    hits = results.items.len(),
                    "scene_search_results"
                );
                self.search_results = Some(results);
                self.select_sidebar(Route::Search);
            }
            Event::SearchCleared { generation } => {
                if !self.search.is_current(generation) {
                    return None;
                }
                self.search_results = None;
                if self.nav.sidebar_selection() == &Route::Search {
                    self.select_sidebar(self.search_fallback.clone());
                }
            }
        }

        self.refresh();
        None
    }

    fn select_sidebar(&mut self, route: Route) {
        if let Some(index) = SIDEBAR.iter().position(|r| r == &route) {
            self.sidebar_cursor = index;
        }
        self.nav.select_sidebar(route);
        self.content_cursor = 0;
        self.detail_cursor = 0;
    }

    fn navigate(&mut self, direction: Direction) {
        debug!(?direction, focus = ?self.focus, "scene_navigate");

        match (self.focus, direction) {
            (Pane::Sidebar, Direction::Up) => {
                if self.sidebar_cursor > 0 {
                    self.select_sidebar(SIDEBAR[self.sidebar_cursor - 1].clone());
                }
            }
            (Pane::Sidebar, Direction::Down) => {
                if let Some(route) = SIDEBAR.get(self.sidebar_cursor + 1) {
                    self.select_sidebar(route.clone());
                }
            }
            (Pane::Sidebar, Direction::Right) => {
                if !self.content.items().is_empty() {
                    self.focus = Pane::Content;
                }
            }
            (Pane::Sidebar, Direction::Left) => {}

            (Pane::Content, Direction::Up) => {
                self.content_cursor = self.content_cursor.saturating_sub(1);
            }
            (Pane::Content, Direction::Down) => {
                self.content_cursor = step(self.content_cursor, self.content.items().len());
            }
            (Pane::Content, Direction::Right) => {
                if let Some(route) = self.content.items().get(self.content_cursor).cloned() {
                    self.nav.update(NavMessage::Open(route));
                    self.detail_cursor = 0;
                    self.refresh();
                    if !self.detail.items().is_empty() {
                        self.focus = Pane::Detail;
                    }
                }
            }
            (Pane::Content, Direction::Left) => {
                self.focus = Pane::Sidebar;
            }

            (Pane::Detail, Direction::Up) => {
                self.detail_cursor = self.detail_cursor.saturating_sub(1);
            }
            (Pane::Detail, Direction::Down) => {
                self.detail_cursor = step(self.detail_cursor, self.detail.items().len());
            }
            (Pane::Detail, Direction::Right) => {
                if let Some(route) = self.detail.items().get(self.detail_cursor).cloned() {
                    self.nav.update(NavMessage::Open(route));
                    self.detail_cursor = 0;
                }
            }
            (Pane::Detail, Direction::Left) => self.back(),
        }

        self.refresh();
    }

    fn back(&mut self) {
        self.nav.update(NavMessage::Back);
        self.detail_cursor = 0;
        if self.focus == Pane::Detail
            && self.nav.detail_selection() == self.nav.content_selection()
        {
            self.focus = Pane::Content;
        }
    }

    /// Re-evaluates both panes against the current snapshot and status.
    fn refresh(&mut self) {
        let search = self.search_results.as_ref();
        self.content.refresh(
            self.nav.content_selection(),
            self.status,
            &self.snapshot,
            search,
        );
        self.detail.refresh(
            self.nav.detail_selection(),
            self.status,
            &self.snapshot,
            search,
        );

        self.content_cursor = clamp(self.content_cursor, self.content.items().len());
        self.detail_cursor = clamp(self.detail_cursor, self.detail.items().len());
        if self.focus == Pane::Detail && self.detail.load() != PaneLoadState::Ready {
            self.focus = Pane::Content;
        }
    }
}

fn step(cursor: usize, len: usize) -> usize {
    if cursor + 1 < len { cursor + 1 } else { cursor }
}

fn clamp(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}
