use uuid::Uuid;

use crate::library::model::{
    Artist, Entity, Episode, Host, MediaId, Movie, MovieSet, MusicVideo, MusicVideoAlbum,
    PlaylistFile, Season, Snapshot, TvShow,
};

/// A navigable destination.
///
/// Routes compare by variant and entity id only: two routes wrapping
/// different snapshots of the same movie are equal. Use
/// [`Route::same_payload`] when content equality matters.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub enum Route {
    // General
    #[default]
    Start,
    Favourites,
    Search,
    Settings,
    HostSettings(Host),

    // Movies
    Movies,
    Movie(Movie),
    MovieSet(MovieSet),
    UnwatchedMovies,
    MoviePlaylists,
    MoviePlaylist(PlaylistFile),

    // TV
    TvShows,
    TvShow(TvShow),
    Seasons(TvShow),
    Season(Season),
    Episode(Episode),
    UpNext,

    // Music videos
    MusicVideoArtist(Artist),
    MusicVideos,
    MusicVideo(MusicVideo),
    MusicVideoAlbum(MusicVideoAlbum),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Media(MediaId),
    Album(MediaId, String),
    Host(Uuid),
    File(String),
}

impl Route {
    /// The id of the entity this route wraps, if any.
    pub fn entity_key(&self) -> Option<EntityKey> {
        match self {
            Route::HostSettings(h) => Some(EntityKey::Host(h.id)),
            Route::Movie(m) => Some(EntityKey::Media(m.id)),
            Route::MovieSet(s) => Some(EntityKey::Media(s.id)),
            Route::MoviePlaylist(p) => Some(EntityKey::File(p.file.clone())),
            Route::TvShow(s) | Route::Seasons(s) => Some(EntityKey::Media(s.id)),
            Route::Season(s) => Some(EntityKey::Media(s.id)),
            Route::Episode(e) => Some(EntityKey::Media(e.id)),
            Route::MusicVideoArtist(a) => Some(EntityKey::Media(a.id)),
            Route::MusicVideo(v) => Some(EntityKey::Media(v.id)),
            Route::MusicVideoAlbum(a) => Some(EntityKey::Album(a.artist_id, a.title.clone())),
            _ => None,
        }
    }

    /// True when both routes carry exactly the same payload, not just the same id.
    pub fn same_payload(&self, other: &Route) -> bool {
        match (self, other) {
            (Route::HostSettings(a), Route::HostSettings(b)) => a == b,
            (Route::Movie(a), Route::Movie(b)) => a == b,
            (Route::MovieSet(a), Route::MovieSet(b)) => a == b,
            (Route::MoviePlaylist(a), Route::MoviePlaylist(b)) => a == b,
            (Route::TvShow(a), Route::TvShow(b)) | (Route::Seasons(a), Route::Seasons(b)) => a == b,
            (Route::Season(a), Route::Season(b)) => a == b,
            (Route::Episode(a), Route::Episode(b)) => a == b,
            (Route::MusicVideoArtist(a), Route::MusicVideoArtist(b)) => a == b,
            (Route::MusicVideo(a), Route::MusicVideo(b)) => a == b,
            (Route::MusicVideoAlbum(a), Route::MusicVideoAlbum(b)) => a == b,
            _ => self == other,
        }
    }

    /// Returns this route carrying `entity` when both refer to the same item.
    ///
    /// The variant never changes; a `Seasons` route refreshed with a show
    /// stays a `Seasons` route.
    pub fn refreshed_with(&self, entity: &Entity) -> Option<Route> {
        match (self, entity) {
            (Route::Movie(old), Entity::Movie(new)) if old.id == new.id => {
                Some(Route::Movie(new.clone()))
            }
            (Route::MovieSet(old), Entity::MovieSet(new)) if old.id == new.id => {
                Some(Route::MovieSet(new.clone()))
            }
            (Route::TvShow(old), Entity::TvShow(new)) if old.id == new.id => {
                Some(Route::TvShow(new.clone()))
            }
            (Route::Seasons(old), Entity::TvShow(new)) if old.id == new.id => {
                Some(Route::Seasons(new.clone()))
            }
            (Route::Season(old), Entity::Season(new)) if old.id == new.id => {
                Some(Route::Season(new.clone()))
            }
            (Route::Episode(old), Entity::Episode(new)) if old.id == new.id => {
                Some(Route::Episode(new.clone()))
            }
            (Route::MusicVideoArtist(old), Entity::Artist(new)) if old.id == new.id => {
                Some(Route::MusicVideoArtist(new.clone()))
            }
            (Route::MusicVideo(old), Entity::MusicVideo(new)) if old.id == new.id => {
                Some(Route::MusicVideo(new.clone()))
            }
            _ => None,
        }
    }

    /// The catalogue entity wrapped by this route, if it is one the library
    /// tracks.
    pub fn entity(&self) -> Option<Entity> {
        match self {
            Route::Movie(m) => Some(Entity::Movie(m.clone())),
            Route::MovieSet(s) => Some(Entity::MovieSet(s.clone())),
            Route::TvShow(s) | Route::Seasons(s) => Some(Entity::TvShow(s.clone())),
            Route::Season(s) => Some(Entity::Season(s.clone())),
            Route::Episode(e) => Some(Entity::Episode(e.clone())),
            Route::MusicVideoArtist(a) => Some(Entity::Artist(a.clone())),
            Route::MusicVideo(v) => Some(Entity::MusicVideo(v.clone())),
            _ => None,
        }
    }

    /// Brings this route in line with `snapshot`.
    ///
    /// A route whose entity is still present picks up the fresh payload. A
    /// route whose entity has gone falls back to its parent, walking up until
    /// something present (or a plain list route) is found.
    pub fn resolve(&self, snapshot: &Snapshot) -> Resolution {
        if let Route::MusicVideoAlbum(album) = self {
            if snapshot.has_album(album) {
                return Resolution::Present(self.clone());
            }
            return Resolution::Missing(
                match snapshot.artist(album.artist_id) {
                    Some(artist) => Route::MusicVideoArtist(artist.clone()),
                    None => Route::MusicVideos,
                },
            );
        }

        let Some(entity) = self.entity() else {
            return Resolution::Present(self.clone());
        };

        if let Some(fresh) = snapshot.refreshed(&entity) {
            let route = self.refreshed_with(&fresh).unwrap_or_else(|| self.clone());
            return Resolution::Present(route);
        }

        Resolution::Missing(self.parent(snapshot))
    }

    fn parent(&self, snapshot: &Snapshot) -> Route {
        match self {
            Route::Movie(movie) => movie
                .set_id
                .and_then(|id| snapshot.movie_set(id))
                .map(|set| Route::MovieSet(set.clone()))
                .unwrap_or(Route::Movies),
            Route::MovieSet(_) => Route::Movies,
            Route::TvShow(_) | Route::Seasons(_) => Route::TvShows,
            Route::Season(season) => snapshot
                .tvshow(season.tvshow_id)
                .map(|show| Route::Seasons(show.clone()))
                .unwrap_or(Route::TvShows),
            Route::Episode(episode) => {
                if let Some(season) = snapshot.season_of(episode.tvshow_id, episode.season) {
                    Route::Season(season.clone())
                } else if let Some(show) = snapshot.tvshow(episode.tvshow_id) {
                    Route::TvShow(show.clone())
                } else {
                    Route::TvShows
                }
            }
            Route::MusicVideo(video) => snapshot
                .artist(video.artist_id)
                .map(|artist| Route::MusicVideoArtist(artist.clone()))
                .unwrap_or(Route::MusicVideos),
            Route::MusicVideoArtist(_) => Route::MusicVideos,
            other => other.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Resolution {
    Present(Route),
    Missing(Route),
}

impl Resolution {
    pub fn into_route(self) -> Route {
        match self {
            Resolution::Present(route) | Resolution::Missing(route) => route,
        }
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.entity_key() == other.entity_key()
    }
}

impl Eq for Route {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::fixture;

    #[test]
    fn routes_compare_by_identity_not_payload() {
        let movie = fixture::movie(1, "Alien");
        let mut watched = movie.clone();
        watched.playcount = 3;

        let a = Route::Movie(movie);
        let b = Route::Movie(watched);
        assert_eq!(a, b);
        assert!(!a.same_payload(&b));
    }

    #[test]
    fn variant_is_part_of_identity() {
        let show = fixture::tvshow(7, "Severance");
        assert_ne!(Route::TvShow(show.clone()), Route::Seasons(show));
        assert_ne!(Route::Movies, Route::TvShows);
        assert_eq!(Route::Search, Route::Search);
    }

    #[test]
    fn refresh_keeps_variant() {
        let show = fixture::tvshow(7, "Severance");
        let mut renamed = show.clone();
        renamed.title = "Severance (2022)".into();

        let refreshed = Route::Seasons(show)
            .refreshed_with(&Entity::TvShow(renamed.clone()))
            .unwrap();
        assert!(matches!(&refreshed, Route::Seasons(s) if s.title == renamed.title));
    }

    #[test]
    fn refresh_ignores_other_entities() {
        let route = Route::Movie(fixture::movie(1, "Alien"));
        assert!(route.refreshed_with(&Entity::Movie(fixture::movie(2, "Aliens"))).is_none());
        assert!(route.refreshed_with(&Entity::TvShow(fixture::tvshow(1, "Alien"))).is_none());
    }

    #[test]
    fn missing_movie_falls_back_to_its_set() {
        let snapshot = fixture::snapshot();
        let mut orphan = fixture::movie(999, "Gone");
        orphan.set_id = Some(MediaId(100));

        match Route::Movie(orphan).resolve(&snapshot) {
            Resolution::Missing(Route::MovieSet(set)) => assert_eq!(set.id, MediaId(100)),
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn missing_episode_falls_back_to_season_then_show() {
        let snapshot = fixture::snapshot();
        let mut episode = fixture::episode(999, 200, 1, 9);
        assert!(matches!(
            Route::Episode(episode.clone()).resolve(&snapshot),
            Resolution::Missing(Route::Season(s)) if s.number == 1
        ));

        episode.season = 42;
        assert!(matches!(
            Route::Episode(episode).resolve(&snapshot),
            Resolution::Missing(Route::TvShow(s)) if s.id == MediaId(200)
        ));
    }

    #[test]
    fn present_entity_picks_up_fresh_payload() {
        let snapshot = fixture::snapshot();
        let mut stale = snapshot.movie(MediaId(1)).cloned().unwrap();
        stale.playcount = 99;

        let route = Route::Movie(stale).resolve(&snapshot).into_route();
        assert!(matches!(route, Route::Movie(m) if m.playcount == 0));
    }

    #[test]
    fn list_routes_resolve_to_themselves() {
        let snapshot = Snapshot::default();
        assert!(matches!(
            Route::UpNext.resolve(&snapshot),
            Resolution::Present(Route::UpNext)
        ));
    }
}
