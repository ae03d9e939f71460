use std::{cmp::Reverse, collections::HashMap};

use tracing::debug;

use crate::{
    library::{
        ConnectorStatus, SearchResults,
        model::{Episode, MediaId, MusicVideoAlbum, Snapshot},
    },
    nav::route::Route,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneLoadState {
    #[default]
    Loading,
    Empty,
    Ready,
    Offline,
}

/// The whole loading rule. `Loading` is never produced here; it is only
/// the value a pane holds before its first evaluation.
pub fn evaluate<T>(status: ConnectorStatus, items: &[T]) -> PaneLoadState {
    if !status.is_loaded() {
        PaneLoadState::Offline
    } else if items.is_empty() {
        PaneLoadState::Empty
    } else {
        PaneLoadState::Ready
    }
}

/// The items a list view shows for `route`, or `None` when the route is a
/// single-item page rather than a list.
pub fn list_items(
    route: &Route,
    snapshot: &Snapshot,
    search: Option<&SearchResults>,
) -> Option<Vec<Route>> {
    let items = match route {
        Route::Movies => all_movies(snapshot),
        Route::UnwatchedMovies => {
            let mut movies: Vec<_> = snapshot.movies.iter().filter(|m| m.playcount == 0).collect();
            movies.sort_by_key(|m| Reverse(m.date_added));
            movies.into_iter().cloned().map(Route::Movie).collect()
        }
        Route::MovieSet(set) => {
            let mut movies: Vec<_> = snapshot
                .movies
                .iter()
                .filter(|m| m.set_id == Some(set.id))
                .collect();
            movies.sort_by_cached_key(|m| sort_key(m.sort_title.as_deref(), &m.title));
            movies.into_iter().cloned().map(Route::Movie).collect()
        }
        Route::MoviePlaylists => snapshot
            .playlists
            .iter()
            .cloned()
            .map(Route::MoviePlaylist)
            .collect(),
        Route::TvShows => {
            let mut shows: Vec<_> = snapshot.tvshows.iter().collect();
            shows.sort_by_cached_key(|s| sort_key(s.sort_title.as_deref(), &s.title));
            shows.into_iter().cloned().map(Route::TvShow).collect()
        }
        Route::TvShow(show) | Route::Seasons(show) => {
            let mut seasons: Vec<_> = snapshot
                .seasons
                .iter()
                .filter(|s| s.tvshow_id == show.id)
                .collect();
            seasons.sort_by_key(|s| s.number);
            seasons.into_iter().cloned().map(Route::Season).collect()
        }
        Route::Season(season) => {
            let mut episodes: Vec<_> = snapshot
                .episodes
                .iter()
                .filter(|e| e.tvshow_id == season.tvshow_id && e.season == season.number)
                .collect();
            episodes.sort_by_key(|e| e.episode);
            episodes.into_iter().cloned().map(Route::Episode).collect()
        }
        Route::UpNext => up_next(snapshot),
        Route::MusicVideos => {
            let mut artists: Vec<_> = snapshot.artists.iter().collect();
            artists.sort_by_cached_key(|a| a.name.to_lowercase());
            artists.into_iter().cloned().map(Route::MusicVideoArtist).collect()
        }
        Route::MusicVideoArtist(artist) => artist_items(snapshot, artist.id),
        Route::MusicVideoAlbum(album) => snapshot
            .music_videos
            .iter()
            .filter(|v| v.artist_id == album.artist_id && v.album.as_deref() == Some(album.title.as_str()))
            .cloned()
            .map(Route::MusicVideo)
            .collect(),
        Route::Search => search.map(|s| s.items.clone()).unwrap_or_default(),
        _ => return None,
    };

    Some(items)
}

fn sort_key(sort_title: Option<&str>, title: &str) -> String {
    sort_title.unwrap_or(title).to_lowercase()
}

/// Movies outside any set, merged with the sets themselves.
fn all_movies(snapshot: &Snapshot) -> Vec<Route> {
    let mut items: Vec<(String, Route)> = snapshot
        .movies
        .iter()
        .filter(|m| m.set_id.and_then(|id| snapshot.movie_set(id)).is_none())
        .map(|m| {
            (
                sort_key(m.sort_title.as_deref(), &m.title),
                Route::Movie(m.clone()),
            )
        })
        .chain(
            snapshot
                .movie_sets
                .iter()
                .map(|s| (s.title.to_lowercase(), Route::MovieSet(s.clone()))),
        )
        .collect();
    items.sort_by(|a, b| a.0.cmp(&b.0));
    items.into_iter().map(|(_, route)| route).collect()
}

/// Albums of an artist in first-seen order, then their loose videos.
fn artist_items(snapshot: &Snapshot, artist_id: MediaId) -> Vec<Route> {
    let mut albums: Vec<Route> = Vec::new();
    let mut loose: Vec<Route> = Vec::new();

    for video in snapshot.music_videos.iter().filter(|v| v.artist_id == artist_id) {
        match &video.album {
            Some(title) => {
                let album = Route::MusicVideoAlbum(MusicVideoAlbum {
                    artist_id,
                    title: title.clone(),
                });
                if !albums.contains(&album) {
                    albums.push(album);
                }
            }
            None => loose.push(Route::MusicVideo(video.clone())),
        }
    }

    albums.extend(loose);
    albums
}

/// The next unwatched episode of every show that has been started, most
/// recently watched show first. Specials are skipped.
fn up_next(snapshot: &Snapshot) -> Vec<Route> {
    let mut by_show: HashMap<MediaId, Vec<&Episode>> = HashMap::new();
    for episode in snapshot.episodes.iter().filter(|e| e.season > 0) {
        by_show.entry(episode.tvshow_id).or_default().push(episode);
    }

    let mut next: Vec<(i64, usize, &Episode)> = Vec::new();
    for (order, show) in snapshot.tvshows.iter().enumerate() {
        let Some(episodes) = by_show.get_mut(&show.id) else {
            continue;
        };
        episodes.sort_by_key(|e| (e.season, e.episode));

        let Some(last_watched) = episodes.iter().rposition(|e| e.playcount > 0) else {
            continue;
        };
        let recency = episodes.iter().filter_map(|e| e.last_played).max().unwrap_or(0);
        if let Some(episode) = episodes[last_watched + 1..]
            .iter()
            .copied()
            .find(|e| e.playcount == 0)
        {
            next.push((recency, order, episode));
        }
    }

    next.sort_by_key(|(recency, order, _)| (Reverse(*recency), *order));
    next.into_iter()
        .map(|(_, _, episode)| Route::Episode(episode.clone()))
        .collect()
}

/// Load state and items of one list-backed pane.
#[derive(Debug, Clone, Default)]
pub struct PaneState {
    load: PaneLoadState,
    items: Vec<Route>,
    is_list: bool,
}

impl PaneState {
    pub fn load(&self) -> PaneLoadState {
        self.load
    }

    pub fn items(&self) -> &[Route] {
        &self.items
    }

    pub fn is_list(&self) -> bool {
        self.is_list
    }

    /// Re-runs the loading rule from scratch for `route`.
    pub fn refresh(
        &mut self,
        route: &Route,
        status: ConnectorStatus,
        snapshot: &Snapshot,
        search: Option<&SearchResults>,
    ) -> PaneLoadState {
        match list_items(route, snapshot, search) {
            Some(items) => {
                self.load = evaluate(status, &items);
                self.items = items;
                self.is_list = true;
            }
            None => {
                self.load = evaluate(status, std::slice::from_ref(route));
                self.items.clear();
                self.is_list = false;
            }
        }

        debug!(?route, load = ?self.load, items = self.items.len(), "pane_refresh");
        self.load
    }
}
