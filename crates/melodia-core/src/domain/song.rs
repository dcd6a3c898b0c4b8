use std::{sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};

use crate::domain::artist::Artist;
use crate::domain::genre::Genre;
use crate::domain::ids::SongId;
use crate::domain::playlist::Playlist;

/// Canción del catálogo.
///
/// El artista se comparte (`Arc`): varias canciones pueden apuntar al mismo
/// [`Artist`] sin duplicarlo.
///
/// La igualdad es estructural: dos canciones son iguales si coinciden `id`,
/// título, duración, artista y la lista de géneros **en el mismo orden**.
/// Esta igualdad es la que usan [`Song::count_playlists`] y las búsquedas
/// dentro de una [`Playlist`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  id: SongId,
  title: String,
  duration: Duration,
  artist: Arc<Artist>,
  genres: Vec<Genre>,
}

impl Song {
  pub fn new(
    id: impl Into<SongId>,
    title: impl Into<String>,
    duration: Duration,
    artist: Arc<Artist>,
    genres: Vec<Genre>,
  ) -> Self {
    Song { id: id.into(), title: title.into(), duration, artist, genres }
  }

  pub fn id(&self) -> &SongId {
    &self.id
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn duration(&self) -> Duration {
    self.duration
  }

  pub fn artist(&self) -> &Arc<Artist> {
    &self.artist
  }

  /// Géneros de la canción. Puede contener repetidos.
  pub fn genres(&self) -> &[Genre] {
    &self.genres
  }

  pub fn has_genre(&self, genre: &Genre) -> bool {
    self.genres.contains(genre)
  }

  /// `true` si la canción tiene al menos uno de los géneros dados.
  pub fn has_any_genre(&self, genres: &[Genre]) -> bool {
    genres.iter().any(|g| self.has_genre(g))
  }

  /// Cuenta en cuántas de las playlists dadas aparece esta canción.
  ///
  /// Una playlist cuenta una sola vez aunque contenga la canción repetida.
  pub fn count_playlists<'a>(&self, playlists: impl IntoIterator<Item = &'a Playlist>) -> usize {
    playlists.into_iter().filter(|p| p.songs().contains(self)).count()
  }
}
