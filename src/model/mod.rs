//! Core data models for the music dashboard.
//!
//! Defines [`Track`] (one audio file, with all fields pre-formatted for
//! display) and [`Library`] (the artist -> album -> track grouping).
//! Buckets are `Vec`-backed so insertion order is preserved, matching the
//! order tracks were discovered on disk.

use serde::Serialize;

/// Marker written into `album_artist` when an album turns out to be a
/// compilation (more than one contributing artist).
pub const VARIOUS_ARTISTS: &str = "Various Artists";

/// Fallback when a file carries no artist tag.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Fallback when a file carries no album tag.
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Fallback when a file carries no album-artist tag.
pub const UNKNOWN_ALBUM_ARTIST: &str = "Unknown Album Artist";

/// A single audio track with display-ready metadata.
///
/// All fields are already formatted strings; the dashboard templates use
/// them verbatim. Structural equality across every field is the identity
/// used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Rewritten to [`VARIOUS_ARTISTS`] by the compilation pass.
    pub album_artist: String,
    /// e.g. "320 kbps", or "N/A kbps" when the decoder exposes no bitrate
    pub bitrate: String,
    /// e.g. "44100 Hz", or "N/A Hz"
    pub sample_rate: String,
    /// "H:MM:SS" for tracks of an hour or longer, else "M:SS"
    pub duration: String,
    pub codec: String,
    /// "X.XX GB" or "X.XX MB" (binary units)
    pub file_size: String,
    /// "Mono" or "Stereo"
    pub channels: String,
}

/// All tracks of one album, in discovery order.
#[derive(Debug, Clone)]
pub struct AlbumBucket {
    pub name: String,
    pub tracks: Vec<Track>,
}

/// All albums of one artist, in discovery order.
#[derive(Debug, Clone)]
pub struct ArtistBucket {
    pub name: String,
    pub albums: Vec<AlbumBucket>,
}

/// The artist -> album -> track grouping produced by a scan.
#[derive(Debug, Clone, Default)]
pub struct Library {
    artists: Vec<ArtistBucket>,
}

impl Library {
    /// Insert a track into its artist/album bucket.
    ///
    /// Returns `false` without inserting when a structurally identical
    /// track is already present in that bucket.
    pub fn insert(&mut self, track: Track) -> bool {
        let artist_idx = match self.artists.iter().position(|a| a.name == track.artist) {
            Some(i) => i,
            None => {
                self.artists.push(ArtistBucket {
                    name: track.artist.clone(),
                    albums: Vec::new(),
                });
                self.artists.len() - 1
            }
        };
        let artist = &mut self.artists[artist_idx];

        let album_idx = match artist.albums.iter().position(|a| a.name == track.album) {
            Some(i) => i,
            None => {
                artist.albums.push(AlbumBucket {
                    name: track.album.clone(),
                    tracks: Vec::new(),
                });
                artist.albums.len() - 1
            }
        };
        let album = &mut artist.albums[album_idx];

        if album.tracks.contains(&track) {
            return false;
        }
        album.tracks.push(track);
        true
    }

    /// Artists in discovery order.
    pub fn artists(&self) -> &[ArtistBucket] {
        &self.artists
    }

    /// Mutable access for the compilation rewrite pass.
    pub fn artists_mut(&mut self) -> &mut [ArtistBucket] {
        &mut self.artists
    }

    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    pub fn track_count(&self) -> usize {
        self.artists
            .iter()
            .flat_map(|a| &a.albums)
            .map(|al| al.tracks.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn test_track(title: &str, artist: &str, album: &str) -> Track {
    Track {
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        album_artist: UNKNOWN_ALBUM_ARTIST.to_string(),
        bitrate: "320 kbps".to_string(),
        sample_rate: "44100 Hz".to_string(),
        duration: "3:25".to_string(),
        codec: "MP3".to_string(),
        file_size: "7.84 MB".to_string(),
        channels: "Stereo".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_groups_by_artist_then_album() {
        let mut library = Library::default();
        assert!(library.insert(test_track("One", "Alice", "First")));
        assert!(library.insert(test_track("Two", "Alice", "First")));
        assert!(library.insert(test_track("Three", "Alice", "Second")));
        assert!(library.insert(test_track("Four", "Bob", "First")));

        assert_eq!(library.artist_count(), 2);
        assert_eq!(library.track_count(), 4);

        let alice = &library.artists()[0];
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.albums.len(), 2);
        assert_eq!(alice.albums[0].tracks.len(), 2);
    }

    #[test]
    fn insert_rejects_structural_duplicates_in_same_bucket() {
        let mut library = Library::default();
        assert!(library.insert(test_track("One", "Alice", "First")));
        assert!(!library.insert(test_track("One", "Alice", "First")));
        assert_eq!(library.track_count(), 1);
    }

    #[test]
    fn insert_allows_same_title_in_different_buckets() {
        let mut library = Library::default();
        assert!(library.insert(test_track("One", "Alice", "First")));
        assert!(library.insert(test_track("One", "Bob", "First")));
        assert_eq!(library.track_count(), 2);
    }

    #[test]
    fn any_field_difference_defeats_dedup() {
        let mut library = Library::default();
        let a = test_track("One", "Alice", "First");
        let mut b = a.clone();
        b.bitrate = "128 kbps".to_string();
        assert!(library.insert(a));
        assert!(library.insert(b));
        assert_eq!(library.track_count(), 2);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut library = Library::default();
        for artist in ["Zeta", "Alpha", "Mid"] {
            library.insert(test_track("Song", artist, "Album"));
        }
        let names: Vec<&str> = library.artists().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }
}
