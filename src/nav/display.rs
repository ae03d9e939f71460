use ratatui::style::Color;

use super::route::Route;
use crate::util::colors;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayInfo {
    pub title: String,
    pub subtitle: Option<String>,
    pub loading_message: String,
    pub empty_message: String,
    pub icon: &'static str,
    pub color: Color,
}

impl Default for DisplayInfo {
    fn default() -> Self {
        Self {
            title: "Details".into(),
            subtitle: None,
            loading_message: "Loading details…".into(),
            empty_message: "Nothing to show".into(),
            icon: "◇",
            color: colors::NEUTRAL,
        }
    }
}

impl DisplayInfo {
    fn new(title: impl Into<String>, icon: &'static str, color: Color) -> Self {
        let title = title.into();
        Self {
            loading_message: format!("Loading {}…", title.to_lowercase()),
            empty_message: format!("No {} found", title.to_lowercase()),
            title,
            icon,
            color,
            subtitle: None,
        }
    }

    fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    fn messages(mut self, loading: impl Into<String>, empty: impl Into<String>) -> Self {
        self.loading_message = loading.into();
        self.empty_message = empty.into();
        self
    }
}

impl Route {
    pub fn display_info(&self) -> DisplayInfo {
        match self {
            Route::Start => DisplayInfo::new("Start", "⌂", colors::PRIMARY)
                .messages("Connecting to host…", "Nothing recently added"),
            Route::Favourites => DisplayInfo::new("Favourites", "♥", colors::FAVOURITES)
                .messages("Loading favourites…", "You have no favourites yet"),
            Route::Search => DisplayInfo::new("Search", "⌕", colors::PRIMARY)
                .messages("Searching…", "No results"),
            Route::Settings => DisplayInfo::new("Settings", "⚙", colors::SETTINGS),
            Route::HostSettings(host) => DisplayInfo::new(host.name.clone(), "⚙", colors::SETTINGS)
                .subtitle(format!("{}:{}", host.address, host.port)),

            Route::Movies => DisplayInfo::new("Movies", "▣", colors::MOVIES),
            Route::Movie(movie) => DisplayInfo::new(movie.title.clone(), "▣", colors::MOVIES)
                .subtitle(watched_label(movie.playcount))
                .messages("Loading movie…", "Movie not found"),
            Route::MovieSet(set) => DisplayInfo::new(set.title.clone(), "▤", colors::MOVIES)
                .subtitle("Movie set")
                .messages("Loading movies…", "This set has no movies"),
            Route::UnwatchedMovies => DisplayInfo::new("Unwatched Movies", "▣", colors::MOVIES)
                .messages("Loading movies…", "You have watched all your movies"),
            Route::MoviePlaylists => DisplayInfo::new("Movie Playlists", "☰", colors::MOVIES)
                .messages("Loading playlists…", "There are no movie playlists"),
            Route::MoviePlaylist(playlist) => {
                DisplayInfo::new(playlist.title.clone(), "☰", colors::MOVIES)
                    .subtitle("Movie playlist")
                    .messages("Loading playlist…", "This playlist is empty")
            }

            Route::TvShows => DisplayInfo::new("TV Shows", "▢", colors::TV),
            Route::TvShow(show) => DisplayInfo::new(show.title.clone(), "▢", colors::TV)
                .subtitle(watched_label(show.playcount))
                .messages("Loading seasons…", "This show has no seasons"),
            Route::Seasons(show) => DisplayInfo::new("Seasons", "▢", colors::TV)
                .subtitle(show.title.clone())
                .messages("Loading seasons…", "This show has no seasons"),
            Route::Season(season) => DisplayInfo::new(season.title.clone(), "▢", colors::TV)
                .messages("Loading episodes…", "This season has no episodes"),
            Route::Episode(episode) => DisplayInfo::new(episode.title.clone(), "▷", colors::TV)
                .subtitle(format!("S{:02}E{:02}", episode.season, episode.episode))
                .messages("Loading episode…", "Episode not found"),
            Route::UpNext => DisplayInfo::new("Up Next", "▷", colors::TV)
                .messages("Loading episodes…", "There is nothing up next"),

            Route::MusicVideoArtist(artist) => {
                DisplayInfo::new(artist.name.clone(), "♪", colors::MUSIC_VIDEOS)
                    .subtitle("Artist")
                    .messages("Loading music videos…", "This artist has no music videos")
            }
            Route::MusicVideos => DisplayInfo::new("Music Videos", "♪", colors::MUSIC_VIDEOS),
            Route::MusicVideo(video) => {
                DisplayInfo::new(video.title.clone(), "♪", colors::MUSIC_VIDEOS)
                    .subtitle(video.album.clone().unwrap_or_default())
                    .messages("Loading music video…", "Music video not found")
            }
            Route::MusicVideoAlbum(album) => {
                DisplayInfo::new(album.title.clone(), "♫", colors::MUSIC_VIDEOS)
                    .subtitle("Album")
                    .messages("Loading music videos…", "This album has no music videos")
            }
        }
    }

    /// The title shown in the window's title bar while this route is the
    /// detail selection. Only routes naming a single item or the search
    /// produce one.
    pub fn navigation_subtitle(&self) -> String {
        match self {
            Route::Movie(_)
            | Route::MovieSet(_)
            | Route::TvShow(_)
            | Route::MusicVideoArtist(_)
            | Route::Search => self.display_info().title,
            _ => String::new(),
        }
    }
}

fn watched_label(playcount: u32) -> &'static str {
    if playcount > 0 { "Watched" } else { "Unwatched" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{fixture, model::MovieSet};

    fn every_route() -> Vec<Route> {
        let snapshot = fixture::snapshot();
        vec![
            Route::Start,
            Route::Favourites,
            Route::Search,
            Route::Settings,
            Route::HostSettings(crate::library::model::Host::new("Living room", "10.0.0.2", 8080)),
            Route::Movies,
            Route::Movie(snapshot.movies[0].clone()),
            Route::MovieSet(MovieSet::default()),
            Route::UnwatchedMovies,
            Route::MoviePlaylists,
            Route::MoviePlaylist(snapshot.playlists[0].clone()),
            Route::TvShows,
            Route::TvShow(snapshot.tvshows[0].clone()),
            Route::Seasons(snapshot.tvshows[0].clone()),
            Route::Season(snapshot.seasons[0].clone()),
            Route::Episode(snapshot.episodes[0].clone()),
            Route::UpNext,
            Route::MusicVideoArtist(snapshot.artists[0].clone()),
            Route::MusicVideos,
            Route::MusicVideo(snapshot.music_videos[0].clone()),
            Route::MusicVideoAlbum(Default::default()),
        ]
    }

    #[test]
    fn display_info_is_total_and_pure() {
        for route in every_route() {
            let first = route.display_info();
            assert_eq!(first, route.display_info(), "{route:?}");
            assert!(!first.loading_message.is_empty());
            assert!(!first.empty_message.is_empty());
        }
    }

    #[test]
    fn subtitle_only_for_titled_routes() {
        let snapshot = fixture::snapshot();
        assert_eq!(
            Route::Movie(snapshot.movies[0].clone()).navigation_subtitle(),
            "Alien"
        );
        assert_eq!(
            Route::MovieSet(snapshot.movie_sets[0].clone()).navigation_subtitle(),
            "Alien Collection"
        );
        assert_eq!(Route::Search.navigation_subtitle(), "Search");
        assert_eq!(
            Route::Seasons(snapshot.tvshows[0].clone()).navigation_subtitle(),
            ""
        );
        assert_eq!(Route::Movies.navigation_subtitle(), "");
        assert_eq!(
            Route::Episode(snapshot.episodes[0].clone()).navigation_subtitle(),
            ""
        );
    }

    #[test]
    fn placeholder_reads_details() {
        assert_eq!(DisplayInfo::default().title, "Details");
    }
}
