//! Display codec names for supported containers.

use std::fs::File;
use std::path::Path;

use lofty::config::ParseOptions;
use lofty::file::{AudioFile, FileType};
use lofty::mp4::{Mp4Codec, Mp4File};

/// Resolve a display codec name for a probed file.
///
/// Most containers map one-to-one to a codec name. MP4 multiplexes
/// several codecs, so the container is inspected for its internal codec
/// identifier; identifiers other than AAC and ALAC get a generic label.
pub fn codec_name(file_type: FileType, path: &Path) -> String {
    match file_type {
        FileType::Mp4 => mp4_codec_name(path),
        FileType::Mpeg => "MP3".to_string(),
        FileType::Flac => "FLAC".to_string(),
        FileType::Wav => "WAV".to_string(),
        other => format!("{other:?}"),
    }
}

/// The generic probe flattens MP4 properties into format-independent
/// stream info, so the file is re-read as an MP4 to reach the codec box.
fn mp4_codec_name(path: &Path) -> String {
    let Ok(mut file) = File::open(path) else {
        return "Unknown Codec".to_string();
    };
    let Ok(mp4) = Mp4File::read_from(&mut file, ParseOptions::new()) else {
        return "Unknown Codec".to_string();
    };
    match mp4.properties().codec() {
        Mp4Codec::AAC => "AAC".to_string(),
        Mp4Codec::ALAC => "ALAC".to_string(),
        _ => "Unknown Codec".to_string(),
    }
}
