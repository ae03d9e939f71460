use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;
use async_trait::async_trait;
use flume::Sender;
use nucleo_matcher::{
    Config, Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};
use tracing::debug;

use super::{
    model::{Entity, Snapshot},
    provider::{LibraryProvider, SearchResults},
    status::ConnectorStatus,
};
use crate::{error::LibraryError, event::events::Event, nav::route::Route};

/// Library provider backed by an in-process snapshot.
///
/// Snapshots are swapped atomically; every change is broadcast to
/// subscribers as an [`Event`].
pub struct MemoryLibrary {
    snapshot: ArcSwap<Snapshot>,
    status: ArcSwap<ConnectorStatus>,
    subscribers: Mutex<Vec<Sender<Event>>>,
    queries: Mutex<Vec<String>>,
}

impl MemoryLibrary {
    pub fn new(snapshot: Snapshot, status: ConnectorStatus) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(snapshot),
            status: ArcSwap::from_pointee(status),
            subscribers: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, tx: Sender<Event>) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }
    }

    pub fn replace(&self, snapshot: Snapshot) {
        let snapshot = Arc::new(snapshot);
        self.snapshot.store(snapshot.clone());
        self.publish(Event::LibraryUpdated(snapshot));
    }

    /// Replaces one entity in the current snapshot and publishes both the
    /// refreshed entity and the new snapshot.
    pub fn update(&self, entity: Entity) {
        let mut next = Snapshot::clone(&self.snapshot.load_full());
        match &entity {
            Entity::Movie(m) => replace_where(&mut next.movies, m, |x| x.id == m.id),
            Entity::MovieSet(s) => replace_where(&mut next.movie_sets, s, |x| x.id == s.id),
            Entity::TvShow(s) => replace_where(&mut next.tvshows, s, |x| x.id == s.id),
            Entity::Season(s) => replace_where(&mut next.seasons, s, |x| x.id == s.id),
            Entity::Episode(e) => replace_where(&mut next.episodes, e, |x| x.id == e.id),
            Entity::Artist(a) => replace_where(&mut next.artists, a, |x| x.id == a.id),
            Entity::MusicVideo(v) => replace_where(&mut next.music_videos, v, |x| x.id == v.id),
        }
        next.taken_at = std::time::SystemTime::now();

        self.publish(Event::EntityUpdated(entity));
        self.replace(next);
    }

    pub fn set_status(&self, status: ConnectorStatus) {
        self.status.store(Arc::new(status));
        self.publish(Event::ConnectorStatusChanged(status));
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }

    fn publish(&self, event: Event) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        }
    }
}

fn replace_where<T: Clone>(items: &mut im::Vector<T>, item: &T, matches: impl Fn(&T) -> bool) {
    if let Some(index) = items.iter().position(matches) {
        items.set(index, item.clone());
    }
}

#[async_trait]
impl LibraryProvider for MemoryLibrary {
    fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot.load_full()
    }

    fn status(&self) -> ConnectorStatus {
        **self.status.load()
    }

    async fn search(&self, query: &str) -> Result<SearchResults, LibraryError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }

        if !self.status().is_loaded() {
            return Err(LibraryError::Offline);
        }

        let snapshot = self.snapshot();
        let candidates = snapshot
            .movies
            .iter()
            .map(|m| (m.title.as_str(), Route::Movie(m.clone())))
            .chain(
                snapshot
                    .movie_sets
                    .iter()
                    .map(|s| (s.title.as_str(), Route::MovieSet(s.clone()))),
            )
            .chain(
                snapshot
                    .tvshows
                    .iter()
                    .map(|s| (s.title.as_str(), Route::TvShow(s.clone()))),
            )
            .chain(
                snapshot
                    .artists
                    .iter()
                    .map(|a| (a.name.as_str(), Route::MusicVideoArtist(a.clone()))),
            )
            .chain(
                snapshot
                    .music_videos
                    .iter()
                    .map(|v| (v.title.as_str(), Route::MusicVideo(v.clone()))),
            );

        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
        let mut buf = Vec::new();

        let mut scored: Vec<(u32, Route)> = candidates
            .filter_map(|(title, route)| {
                pattern
                    .score(Utf32Str::new(title, &mut buf), &mut matcher)
                    .map(|score| (score, route))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        debug!(query, hits = scored.len(), "memory_library_search");

        Ok(SearchResults {
            query: query.to_string(),
            items: scored.into_iter().map(|(_, route)| route).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{fixture, model::MediaId};

    #[tokio::test]
    async fn search_matches_titles_across_kinds() {
        let library = MemoryLibrary::new(fixture::snapshot(), ConnectorStatus::Loaded);
        let results = library.search("alien").await.unwrap();

        assert_eq!(results.query, "alien");
        assert!(results.items.contains(&Route::Movie(fixture::movie(1, "Alien"))));
        assert!(
            results
                .items
                .iter()
                .all(|r| !matches!(r, Route::TvShow(_)))
        );
    }

    #[tokio::test]
    async fn search_fails_while_offline() {
        let library = MemoryLibrary::new(fixture::snapshot(), ConnectorStatus::Offline);
        assert!(matches!(
            library.search("alien").await,
            Err(LibraryError::Offline)
        ));
        assert_eq!(library.queries(), vec!["alien".to_string()]);
    }

    #[test]
    fn update_publishes_entity_and_snapshot() {
        let library = MemoryLibrary::new(fixture::snapshot(), ConnectorStatus::Loaded);
        let (tx, rx) = flume::unbounded();
        library.subscribe(tx);

        let mut movie = library.snapshot().movie(MediaId(1)).cloned().unwrap();
        movie.playcount = 2;
        library.update(Entity::Movie(movie));

        assert!(matches!(rx.try_recv(), Ok(Event::EntityUpdated(Entity::Movie(m))) if m.playcount == 2));
        assert!(matches!(rx.try_recv(), Ok(Event::LibraryUpdated(_))));
        assert_eq!(library.snapshot().movie(MediaId(1)).unwrap().playcount, 2);
    }
}
