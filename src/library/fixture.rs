//! A small, fixed catalogue for the demo front-end and tests.

use std::time::SystemTime;

use super::model::{
    Artist, Episode, MediaId, Movie, MovieSet, MusicVideo, PlaylistFile, Season, Snapshot, TvShow,
};

pub fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id: MediaId(id),
        title: title.to_string(),
        date_added: id as i64,
        ..Default::default()
    }
}

pub fn tvshow(id: u64, title: &str) -> TvShow {
    TvShow {
        id: MediaId(id),
        title: title.to_string(),
        date_added: id as i64,
        ..Default::default()
    }
}

pub fn season(id: u64, tvshow: u64, number: u32) -> Season {
    Season {
        id: MediaId(id),
        tvshow_id: MediaId(tvshow),
        number,
        title: format!("Season {number}"),
        playcount: 0,
    }
}

pub fn episode(id: u64, tvshow: u64, season: u32, number: u32) -> Episode {
    Episode {
        id: MediaId(id),
        tvshow_id: MediaId(tvshow),
        season,
        episode: number,
        title: format!("Episode {season}x{number:02}"),
        date_added: id as i64,
        ..Default::default()
    }
}

pub fn music_video(id: u64, artist: u64, album: Option<&str>, title: &str) -> MusicVideo {
    MusicVideo {
        id: MediaId(id),
        artist_id: MediaId(artist),
        album: album.map(str::to_string),
        title: title.to_string(),
        date_added: id as i64,
        ..Default::default()
    }
}

pub fn snapshot() -> Snapshot {
    let mut alien = movie(1, "Alien");
    alien.set_id = Some(MediaId(100));
    let mut aliens = movie(2, "Aliens");
    aliens.set_id = Some(MediaId(100));
    let mut blade_runner = movie(3, "Blade Runner");
    blade_runner.playcount = 1;
    let arrival = movie(4, "Arrival");

    let mut pilot = episode(400, 200, 1, 1);
    pilot.playcount = 1;
    pilot.last_played = Some(1_000);
    let mut andor_pilot = episode(410, 201, 1, 1);
    andor_pilot.playcount = 1;
    andor_pilot.last_played = Some(2_000);

    Snapshot {
        taken_at: SystemTime::now(),
        movies: im::vector![alien, aliens, blade_runner, arrival],
        movie_sets: im::vector![MovieSet {
            id: MediaId(100),
            title: "Alien Collection".into(),
            playcount: 0,
        }],
        tvshows: im::vector![tvshow(200, "Severance"), tvshow(201, "Andor")],
        seasons: im::vector![season(300, 200, 1), season(301, 200, 2), season(302, 201, 1)],
        episodes: im::vector![
            pilot,
            episode(401, 200, 1, 2),
            episode(402, 200, 1, 3),
            episode(403, 200, 2, 1),
            andor_pilot,
            episode(411, 201, 1, 2),
        ],
        artists: im::vector![
            Artist {
                id: MediaId(500),
                name: "Radiohead".into(),
            },
            Artist {
                id: MediaId(501),
                name: "Björk".into(),
            },
        ],
        music_videos: im::vector![
            music_video(600, 500, Some("In Rainbows"), "Nude"),
            music_video(601, 500, Some("OK Computer"), "Karma Police"),
            music_video(602, 501, None, "Army of Me"),
            music_video(603, 500, Some("In Rainbows"), "Jigsaw Falling into Place"),
        ],
        playlists: im::vector![PlaylistFile {
            file: "special://profile/playlists/video/sci-fi.xsp".into(),
            title: "Sci-Fi".into(),
        }],
    }
}
