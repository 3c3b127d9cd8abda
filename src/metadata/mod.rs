//! Audio file metadata reading.
//!
//! Uses the lofty crate for format-independent tag and stream-info
//! access. Missing tag fields fall back to defaults; missing stream info
//! surfaces as an "N/A" marker rather than an error.

pub mod codec;
pub mod format;

use std::fs;
use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag};

use crate::error::{Error, Result};
use crate::model::{Track, UNKNOWN_ALBUM, UNKNOWN_ALBUM_ARTIST, UNKNOWN_ARTIST};

pub use codec::codec_name;
pub use format::{channel_layout, format_duration, format_size};

/// Read one audio file into a display-ready [`Track`].
///
/// Errors here mean "this file is not usable audio"; the caller treats
/// them as skippable.
pub fn read(path: &Path) -> Result<Track> {
    let tagged_file = Probe::open(path)
        .map_err(|e| Error::metadata(path, e.to_string()))?
        .read()
        .map_err(|e| Error::metadata(path, e.to_string()))?;

    // Primary tag, or fall back to the first available tag
    let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());

    let title = tag
        .and_then(|t| t.title().map(|s| s.to_string()))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default_title(path));

    let artist = tag_field(tag, |t| t.artist().map(|s| s.to_string()), UNKNOWN_ARTIST);
    let album = tag_field(tag, |t| t.album().map(|s| s.to_string()), UNKNOWN_ALBUM);
    let album_artist = tag_field(
        tag,
        |t| t.get_string(&ItemKey::AlbumArtist).map(String::from),
        UNKNOWN_ALBUM_ARTIST,
    );

    let properties = tagged_file.properties();

    let bitrate = match properties.audio_bitrate().or_else(|| properties.overall_bitrate()) {
        Some(kbps) => format!("{kbps} kbps"),
        None => "N/A kbps".to_string(),
    };
    let sample_rate = match properties.sample_rate() {
        Some(hz) => format!("{hz} Hz"),
        None => "N/A Hz".to_string(),
    };
    let duration = format_duration(properties.duration().as_secs());
    let channels = channel_layout(properties.channels()).to_string();
    let codec = codec_name(tagged_file.file_type(), path);
    let file_size = format_size(fs::metadata(path)?.len());

    Ok(Track {
        title,
        artist,
        album,
        album_artist,
        bitrate,
        sample_rate,
        duration,
        codec,
        file_size,
        channels,
    })
}

/// Fall back to the file's base name (without extension) when a title
/// tag is missing.
fn default_title(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown Title")
        .to_string()
}

fn tag_field(
    tag: Option<&Tag>,
    get: impl Fn(&Tag) -> Option<String>,
    default: &str,
) -> String {
    tag.and_then(|t| get(t))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
