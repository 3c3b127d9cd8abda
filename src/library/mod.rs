//! Library normalization: scan, deduplicate, and resolve compilations.
//!
//! The scan is one linear pass: enumerate audio files, read each one into
//! a [`Track`], and group into a [`Library`]. A second, separate pass
//! rewrites `album_artist` for albums that turn out to be compilations.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::debug;

use crate::config::LibraryConfig;
use crate::error::{Error, Result};
use crate::metadata;
use crate::model::{Library, Track, VARIOUS_ARTISTS};
use crate::scanner;

/// Scan `root` and produce the grouped library plus a flat list of all
/// distinct tracks, both with the compilation rule applied.
///
/// Individual unreadable files are skipped. A missing root directory is
/// an error.
pub fn build_library(root: &Path, settings: &LibraryConfig) -> Result<(Library, Vec<Track>)> {
    if !root.is_dir() {
        return Err(Error::not_found(root));
    }

    let tracks = scanner::collect_audio_files(root, &settings.extensions)
        .into_iter()
        .filter_map(|path| match metadata::read(&path) {
            Ok(track) => Some(track),
            Err(e) => {
                debug!(target: "library::scan", path = %path.display(), error = %e, "Skipping file");
                None
            }
        });

    Ok(normalize(tracks))
}

/// Group tracks into a library, deduplicating per artist/album bucket,
/// then apply the compilation rule to both the grouped and flat views.
pub fn normalize<I>(tracks: I) -> (Library, Vec<Track>)
where
    I: IntoIterator<Item = Track>,
{
    let mut library = Library::default();
    let mut flat: Vec<Track> = Vec::new();
    // album name -> distinct contributing artists, across the whole scan
    let mut album_artists: HashMap<String, HashSet<String>> = HashMap::new();

    for track in tracks {
        album_artists
            .entry(track.album.clone())
            .or_default()
            .insert(track.artist.clone());

        if library.insert(track.clone()) {
            flat.push(track);
        }
    }

    let compilations = compilation_albums(&album_artists);
    apply_compilation_rule(&mut library, &mut flat, &compilations);

    (library, flat)
}

/// Pass 1 result: album names that count as compilations.
///
/// An album qualifies when more than one distinct artist contributed to
/// it, or when one contributor is itself tagged "Various Artists". The
/// join is on album name alone, across all artists.
fn compilation_albums(album_artists: &HashMap<String, HashSet<String>>) -> HashSet<String> {
    album_artists
        .iter()
        .filter(|(_, artists)| artists.len() > 1 || artists.contains(VARIOUS_ARTISTS))
        .map(|(album, _)| album.clone())
        .collect()
}

/// Pass 2: rewrite `album_artist` on every track of a compilation album.
fn apply_compilation_rule(
    library: &mut Library,
    flat: &mut [Track],
    compilations: &HashSet<String>,
) {
    for artist in library.artists_mut() {
        for album in &mut artist.albums {
            if compilations.contains(&album.name) {
                for track in &mut album.tracks {
                    track.album_artist = VARIOUS_ARTISTS.to_string();
                }
            }
        }
    }
    for track in flat {
        if compilations.contains(&track.album) {
            track.album_artist = VARIOUS_ARTISTS.to_string();
        }
    }
}
