pub mod display;
pub mod route;
pub mod state;

pub use display::DisplayInfo;
pub use route::Route;
pub use state::{DEFAULT_CATALOGUE_ROUTE, NavMessage, NavigationState, PaneTopology, Pop, Transition};

/// Entries offered in the sidebar, top to bottom.
pub const SIDEBAR: [Route; 10] = [
    Route::Start,
    Route::Search,
    Route::Favourites,
    Route::Movies,
    Route::UnwatchedMovies,
    Route::MoviePlaylists,
    Route::TvShows,
    Route::UpNext,
    Route::MusicVideos,
    Route::Settings,
];
