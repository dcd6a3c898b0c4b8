use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::ids::AlbumId;
use crate::domain::song::Song;

/// Álbum: lista ordenada de canciones publicada bajo un mismo título.
///
/// El orden de `songs` es el orden de las pistas y se respeta al añadir el
/// álbum a una [`Playlist`](crate::domain::playlist::Playlist).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
  id: AlbumId,
  title: String,
  songs: Vec<Song>,
}

impl Album {
  pub fn new(id: impl Into<AlbumId>, title: impl Into<String>, songs: Vec<Song>) -> Self {
    Album { id: id.into(), title: title.into(), songs }
  }

  pub fn id(&self) -> &AlbumId {
    &self.id
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn songs(&self) -> &[Song] {
    &self.songs
  }

  pub fn len(&self) -> usize {
    self.songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }

  /// Duración total sumando todas las pistas.
  pub fn total_duration(&self) -> Duration {
    self.songs.iter().map(Song::duration).sum()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::domain::artist::{Artist, ArtistProfile, GroupArtist};
  use pretty_assertions::assert_eq;

  #[test]
  fn total_duration_sums_tracks() {
    let artist: Arc<Artist> = Arc::new(GroupArtist::new(ArtistProfile::new("a", 2001, "Duo", "FR"), Vec::new()).into());
    let album = Album::new(
      "al1",
      "Discovery",
      vec![
        Song::new("1", "One", Duration::from_secs(200), artist.clone(), Vec::new()),
        Song::new("2", "Two", Duration::from_secs(100), artist, Vec::new()),
      ],
    );

    assert_eq!(album.len(), 2);
    assert_eq!(album.total_duration(), Duration::from_secs(300));
  }

  #[test]
  fn empty_album_has_zero_duration() {
    let album = Album::new("al2", "Silence", Vec::new());

    assert!(album.is_empty());
    assert_eq!(album.total_duration(), Duration::ZERO);
  }
}
