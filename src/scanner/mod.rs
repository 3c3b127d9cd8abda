//! Filesystem traversal for audio files.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Check if a path has one of the configured audio extensions
/// (case-insensitive).
pub fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext {
        Some(ext) => extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)),
        None => false,
    }
}

/// Recursively collect audio files under `root`, in walk order.
///
/// Unreadable directory entries are skipped.
pub fn collect_audio_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_audio_file(e.path(), extensions))
        .map(|e| e.path().to_path_buf())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn default_extensions() -> Vec<String> {
        crate::config::LibraryConfig::default().extensions
    }

    #[test]
    fn test_is_audio_file_case_insensitive() {
        let exts = default_extensions();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &exts));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &exts));
        assert!(is_audio_file(Path::new("/tmp/a.flac"), &exts));
        assert!(is_audio_file(Path::new("/tmp/a.m4a"), &exts));
        assert!(!is_audio_file(Path::new("/tmp/a.ogg"), &exts));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &exts));
        assert!(!is_audio_file(Path::new("/tmp/a"), &exts));
    }

    #[test]
    fn test_collect_audio_files_recurses_and_filters() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        File::create(root.join("song.mp3")).unwrap();
        File::create(root.join("music.flac")).unwrap();
        File::create(root.join("notes.txt")).unwrap(); // ignored
        File::create(root.join("cover.png")).unwrap(); // ignored
        File::create(root.join("UPPERCASE.M4A")).unwrap(); // found (case-insensitive)

        let subdir = root.join("subdir");
        std::fs::create_dir(&subdir).unwrap();
        File::create(subdir.join("track.wav")).unwrap();
        File::create(subdir.join("ignore.doc")).unwrap(); // ignored

        let paths = collect_audio_files(root, &default_extensions());
        assert_eq!(paths.len(), 4);

        let file_names: Vec<String> = paths
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();

        assert!(file_names.contains(&"song.mp3".to_string()));
        assert!(file_names.contains(&"music.flac".to_string()));
        assert!(file_names.contains(&"track.wav".to_string()));
        assert!(file_names.contains(&"UPPERCASE.M4A".to_string()));
        assert!(!file_names.contains(&"notes.txt".to_string()));
    }

    #[test]
    fn test_collect_audio_files_missing_root_is_empty() {
        let paths = collect_audio_files(Path::new("/nonexistent/music"), &default_extensions());
        assert!(paths.is_empty());
    }
}
