//! Site tree builder.
//!
//! Materializes the page hierarchy under the output root:
//!
//! ```text
//! <root>/index.html
//! <root>/<artist>/index.html
//! <root>/<artist>/<album>/index.html
//! <root>/<artist>/<album>/<title>.html
//! <root>/dashboard_manifest.json
//! ```
//!
//! The top-level index merges additively across runs via the manifest;
//! every deeper page is overwritten unconditionally.

pub mod manifest;

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, ResultExt};
use crate::model::Library;
use crate::render::{AlbumCard, ArtistCard, Renderer, SongRow};

pub use manifest::{ArtistEntry, Manifest};

/// Page counts from one build, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub index_entries: usize,
    pub artist_pages: usize,
    pub album_pages: usize,
    pub track_pages: usize,
}

/// Replace every character outside `[A-Za-z0-9_-]` with `_`.
///
/// Collisions between distinct names are not resolved; the later page
/// write wins.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Merge previously published artist entries with the current scan.
///
/// Prior entries come first in their published order, then newly
/// discovered artists in scan order. Identity is the sanitized link, so
/// an artist republished under the same link is never duplicated.
/// Artists vanished from the current scan are retained.
fn merge_artist_entries(prior: &[ArtistEntry], library: &Library) -> Vec<ArtistEntry> {
    let mut merged: Vec<ArtistEntry> = Vec::new();
    for entry in prior {
        if !merged.iter().any(|m| m.link == entry.link) {
            merged.push(entry.clone());
        }
    }
    for artist in library.artists() {
        let link = sanitize_name(&artist.name);
        if !merged.iter().any(|m| m.link == link) {
            merged.push(ArtistEntry {
                name: artist.name.clone(),
                link,
            });
        }
    }
    merged
}

/// Render the whole dashboard for `library` into `output_root`.
///
/// Any folder or page write failure is fatal; already-written pages are
/// left in place. The manifest is saved last, marking the run complete.
pub fn build(library: &Library, output_root: &Path, renderer: &Renderer) -> Result<BuildSummary> {
    fs::create_dir_all(output_root)
        .with_context(format!("Failed to create output root: {}", output_root.display()))?;

    let prior = Manifest::load(output_root).unwrap_or_default();
    if !prior.artists.is_empty() {
        debug!(target: "dashboard", prior = prior.artists.len(), "Merging into existing index");
    }
    let entries = merge_artist_entries(&prior.artists, library);

    let mut summary = BuildSummary {
        index_entries: entries.len(),
        ..BuildSummary::default()
    };

    let cards: Vec<ArtistCard> = entries
        .iter()
        .map(|e| ArtistCard {
            name: e.name.clone(),
            link: e.link.clone(),
        })
        .collect();
    write_page(&output_root.join("index.html"), &renderer.index(&cards)?)?;

    for artist in library.artists() {
        let artist_dir = output_root.join(sanitize_name(&artist.name));
        fs::create_dir_all(&artist_dir)
            .with_context(format!("Failed to create directory: {}", artist_dir.display()))?;

        let albums: Vec<AlbumCard> = artist
            .albums
            .iter()
            .map(|album| AlbumCard {
                name: album.name.clone(),
                link: sanitize_name(&album.name),
                track_count: album.tracks.len(),
            })
            .collect();
        write_page(
            &artist_dir.join("index.html"),
            &renderer.artist(&artist.name, &albums)?,
        )?;
        summary.artist_pages += 1;

        for album in &artist.albums {
            let album_dir = artist_dir.join(sanitize_name(&album.name));
            fs::create_dir_all(&album_dir)
                .with_context(format!("Failed to create directory: {}", album_dir.display()))?;

            let songs: Vec<SongRow> = album
                .tracks
                .iter()
                .map(|t| SongRow {
                    title: t.title.clone(),
                    link: sanitize_name(&t.title),
                    duration: t.duration.clone(),
                    codec: t.codec.clone(),
                    bitrate: t.bitrate.clone(),
                })
                .collect();
            write_page(
                &album_dir.join("index.html"),
                &renderer.album(&artist.name, &album.name, &songs, album.tracks.len())?,
            )?;
            summary.album_pages += 1;

            for track in &album.tracks {
                let file = format!("{}.html", sanitize_name(&track.title));
                write_page(&album_dir.join(file), &renderer.track(track)?)?;
                summary.track_pages += 1;
            }
        }
    }

    let manifest = Manifest {
        artists: entries,
        generated_at: Some(chrono::Utc::now().to_rfc3339()),
    };
    manifest.save(output_root)?;

    info!(
        target: "dashboard",
        artists = summary.artist_pages,
        albums = summary.album_pages,
        tracks = summary.track_pages,
        "Dashboard written"
    );
    Ok(summary)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(format!("Failed to write page: {}", path.display()))
}
