use std::time::SystemTime;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MediaId(pub u64);

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seconds since the Unix epoch, as reported by the library.
pub type Timestamp = i64;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Movie {
    pub id: MediaId,
    pub set_id: Option<MediaId>,
    pub title: String,
    pub sort_title: Option<String>,
    pub playcount: u32,
    pub date_added: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieSet {
    pub id: MediaId,
    pub title: String,
    pub playcount: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TvShow {
    pub id: MediaId,
    pub title: String,
    pub sort_title: Option<String>,
    pub playcount: u32,
    pub date_added: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Season {
    pub id: MediaId,
    pub tvshow_id: MediaId,
    pub number: u32,
    pub title: String,
    pub playcount: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Episode {
    pub id: MediaId,
    pub tvshow_id: MediaId,
    pub season: u32,
    pub episode: u32,
    pub title: String,
    pub playcount: u32,
    pub date_added: Timestamp,
    pub last_played: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Artist {
    pub id: MediaId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MusicVideo {
    pub id: MediaId,
    pub artist_id: MediaId,
    pub album: Option<String>,
    pub title: String,
    pub playcount: u32,
    pub date_added: Timestamp,
}

/// Music video albums have no library id of their own; they are keyed by
/// artist and album title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MusicVideoAlbum {
    pub artist_id: MediaId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaylistFile {
    pub file: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Host {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub port: u16,
}

impl Host {
    pub fn new(name: impl Into<String>, address: impl Into<String>, port: u16) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            port,
        }
    }
}

/// A refreshed catalogue entity, as delivered for reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Movie(Movie),
    MovieSet(MovieSet),
    TvShow(TvShow),
    Season(Season),
    Episode(Episode),
    Artist(Artist),
    MusicVideo(MusicVideo),
}

/// Immutable view of the whole catalogue at one point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub taken_at: SystemTime,
    pub movies: im::Vector<Movie>,
    pub movie_sets: im::Vector<MovieSet>,
    pub tvshows: im::Vector<TvShow>,
    pub seasons: im::Vector<Season>,
    pub episodes: im::Vector<Episode>,
    pub artists: im::Vector<Artist>,
    pub music_videos: im::Vector<MusicVideo>,
    pub playlists: im::Vector<PlaylistFile>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            taken_at: SystemTime::UNIX_EPOCH,
            movies: im::Vector::new(),
            movie_sets: im::Vector::new(),
            tvshows: im::Vector::new(),
            seasons: im::Vector::new(),
            episodes: im::Vector::new(),
            artists: im::Vector::new(),
            music_videos: im::Vector::new(),
            playlists: im::Vector::new(),
        }
    }
}

impl Snapshot {
    pub fn movie(&self, id: MediaId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn movie_set(&self, id: MediaId) -> Option<&MovieSet> {
        self.movie_sets.iter().find(|s| s.id == id)
    }

    pub fn tvshow(&self, id: MediaId) -> Option<&TvShow> {
        self.tvshows.iter().find(|s| s.id == id)
    }

    pub fn season(&self, id: MediaId) -> Option<&Season> {
        self.seasons.iter().find(|s| s.id == id)
    }

    pub fn season_of(&self, tvshow_id: MediaId, number: u32) -> Option<&Season> {
        self.seasons
            .iter()
            .find(|s| s.tvshow_id == tvshow_id && s.number == number)
    }

    pub fn episode(&self, id: MediaId) -> Option<&Episode> {
        self.episodes.iter().find(|e| e.id == id)
    }

    pub fn artist(&self, id: MediaId) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }

    pub fn music_video(&self, id: MediaId) -> Option<&MusicVideo> {
        self.music_videos.iter().find(|v| v.id == id)
    }

    pub fn has_album(&self, album: &MusicVideoAlbum) -> bool {
        self.music_videos
            .iter()
            .any(|v| v.artist_id == album.artist_id && v.album.as_deref() == Some(album.title.as_str()))
    }

    /// Looks up the current version of `entity` by id.
    pub fn refreshed(&self, entity: &Entity) -> Option<Entity> {
        match entity {
            Entity::Movie(m) => self.movie(m.id).cloned().map(Entity::Movie),
            Entity::MovieSet(s) => self.movie_set(s.id).cloned().map(Entity::MovieSet),
            Entity::TvShow(s) => self.tvshow(s.id).cloned().map(Entity::TvShow),
            Entity::Season(s) => self.season(s.id).cloned().map(Entity::Season),
            Entity::Episode(e) => self.episode(e.id).cloned().map(Entity::Episode),
            Entity::Artist(a) => self.artist(a.id).cloned().map(Entity::Artist),
            Entity::MusicVideo(v) => self.music_video(v.id).cloned().map(Entity::MusicVideo),
        }
    }
}
