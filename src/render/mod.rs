//! Thin adapter over the template engine.
//!
//! Four embedded minijinja templates, one per page kind. Each render
//! function is a pure mapping from page data to an HTML string; all file
//! placement is the dashboard builder's concern.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::error::Result;
use crate::model::Track;

static INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
static ARTIST_TEMPLATE: &str = include_str!("../../templates/artist.html");
static ALBUM_TEMPLATE: &str = include_str!("../../templates/album.html");
static TRACK_TEMPLATE: &str = include_str!("../../templates/track.html");

/// One entry in the top-level artist grid.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistCard {
    pub name: String,
    /// Sanitized folder name; the template appends "/index.html".
    pub link: String,
}

/// One entry in an artist's album grid.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumCard {
    pub name: String,
    pub link: String,
    pub track_count: usize,
}

/// One row in an album's track table.
#[derive(Debug, Clone, Serialize)]
pub struct SongRow {
    pub title: String,
    /// Sanitized file stem; the template appends ".html".
    pub link: String,
    pub duration: String,
    pub codec: String,
    pub bitrate: String,
}

/// Pre-loaded template environment.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        // Template names keep the .html suffix so minijinja auto-escapes.
        env.add_template("index.html", INDEX_TEMPLATE)?;
        env.add_template("artist.html", ARTIST_TEMPLATE)?;
        env.add_template("album.html", ALBUM_TEMPLATE)?;
        env.add_template("track.html", TRACK_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn index(&self, artists: &[ArtistCard]) -> Result<String> {
        Ok(self
            .env
            .get_template("index.html")?
            .render(context! { artists })?)
    }

    pub fn artist(&self, artist: &str, albums: &[AlbumCard]) -> Result<String> {
        Ok(self
            .env
            .get_template("artist.html")?
            .render(context! { artist, albums })?)
    }

    pub fn album(
        &self,
        artist: &str,
        album: &str,
        songs: &[SongRow],
        track_count: usize,
    ) -> Result<String> {
        Ok(self
            .env
            .get_template("album.html")?
            .render(context! { artist, album, songs, track_count })?)
    }

    pub fn track(&self, track: &Track) -> Result<String> {
        Ok(self
            .env
            .get_template("track.html")?
            .render(context! { track })?)
    }
}
