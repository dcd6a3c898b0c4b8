use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::domain::album::Album;
use crate::domain::genre::Genre;
use crate::domain::ids::{PlaylistId, UserId};
use crate::domain::song::Song;
use crate::domain::user::{LikeState, User, UserRef};

/// Lo que se puede añadir a una playlist: una canción suelta o un álbum entero.
///
/// Normalmente no se construye a mano; [`Playlist::add_to_playlist`] acepta
/// cualquier cosa convertible (`Song`, `&Song`, `Album`, `&Album`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistItem {
  Song(Song),
  Album(Album),
}

impl From<Song> for PlaylistItem {
  fn from(song: Song) -> Self {
    PlaylistItem::Song(song)
  }
}

impl From<&Song> for PlaylistItem {
  fn from(song: &Song) -> Self {
    PlaylistItem::Song(song.clone())
  }
}

impl From<Album> for PlaylistItem {
  fn from(album: Album) -> Self {
    PlaylistItem::Album(album)
  }
}

impl From<&Album> for PlaylistItem {
  fn from(album: &Album) -> Self {
    PlaylistItem::Album(album.clone())
  }
}

/// Playlist de un usuario.
///
/// - `songs`: lista ordenada y mutable; admite canciones repetidas.
/// - `owner`: usuario propietario (por id).
/// - `liked_by`: usuarios a los que les gusta la playlist (id + username).
///
/// `liked_by` es la fuente de verdad de los "me gusta": la lista
/// [`User::liked_playlists`] sólo refleja lo que se decide aquí. Sólo
/// [`User::like`] y [`User::unlike`] la modifican.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
  id: PlaylistId,
  songs: Vec<Song>,
  owner: UserId,
  liked_by: Vec<UserRef>,
}

impl Playlist {
  pub fn new<'a>(
    id: impl Into<PlaylistId>,
    songs: Vec<Song>,
    owner: &User,
    liked_by: impl IntoIterator<Item = &'a User>,
  ) -> Self {
    Playlist {
      id: id.into(),
      songs,
      owner: owner.id().clone(),
      liked_by: liked_by.into_iter().map(UserRef::from).collect(),
    }
  }

  pub fn id(&self) -> &PlaylistId {
    &self.id
  }

  pub fn owner(&self) -> &UserId {
    &self.owner
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

  pub fn total_duration(&self) -> Duration {
    self.songs.iter().map(Song::duration).sum()
  }

  /// Usuarios a los que les gusta la playlist, en orden de llegada.
  pub fn likes(&self) -> &[UserRef] {
    &self.liked_by
  }

  pub fn total_likes(&self) -> usize {
    self.liked_by.len()
  }

  pub fn is_liked_by(&self, user: &User) -> bool {
    self.liked_by.contains(&UserRef::from(user))
  }

  /// Añade una canción, o todas las canciones de un álbum en su orden, al
  /// final de la playlist. No se comprueban duplicados.
  pub fn add_to_playlist(&mut self, item: impl Into<PlaylistItem>) {
    match item.into() {
      PlaylistItem::Song(song) => {
        debug!(playlist = %self.id, song = %song.id(), "adding song to playlist");
        self.songs.push(song);
      }
      PlaylistItem::Album(album) => {
        debug!(playlist = %self.id, album = %album.id(), tracks = album.len(), "adding album to playlist");
        self.songs.extend_from_slice(album.songs());
      }
    }
  }

  /// Elimina **todas** las canciones cuyo id coincide con `id`.
  ///
  /// Devuelve cuántas se eliminaron; si no hay coincidencias no hace nada.
  pub fn remove_by_id(&mut self, id: impl AsRef<str>) -> usize {
    let id = id.as_ref();
    let before = self.songs.len();
    self.songs.retain(|s| s.id().as_str() != id);
    let removed = before - self.songs.len();

    debug!(playlist = %self.id, song = id, removed, "removed songs by id");
    removed
  }

  /// Devuelve una playlist nueva sin las canciones que tengan alguno de los
  /// géneros dados. La playlist original no se modifica.
  ///
  /// El resultado conserva `id` y propietario; los "me gusta" no se copian.
  pub fn exclude(&self, genres: &[Genre]) -> Playlist {
    let songs: Vec<Song> = self.songs.iter().filter(|s| !s.has_any_genre(genres)).cloned().collect();

    trace!(playlist = %self.id, kept = songs.len(), dropped = self.songs.len() - songs.len(), "excluded genres");

    Playlist { id: self.id.clone(), songs, owner: self.owner.clone(), liked_by: Vec::new() }
  }

  pub(crate) fn toggle_like(&mut self, user: &UserRef) -> LikeState {
    if self.liked_by.contains(user) {
      self.liked_by.retain(|u| u != user);
      LikeState::NotLiked
    } else {
      self.liked_by.push(user.clone());
      LikeState::Liked
    }
  }

  /// Quita el "me gusta" del usuario. Devuelve `true` si lo tenía.
  pub(crate) fn remove_like(&mut self, user: &UserRef) -> bool {
    let before = self.liked_by.len();
    self.liked_by.retain(|u| u != user);
    before != self.liked_by.len()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::domain::artist::{Artist, ArtistProfile, GroupArtist};
  use pretty_assertions::assert_eq;
  use rstest::{fixture, rstest};

  fn rock() -> Genre {
    Genre::new("1", "Rock")
  }

  fn pop() -> Genre {
    Genre::new("2", "Pop")
  }

  fn jazz() -> Genre {
    Genre::new("3", "Jazz")
  }

  fn song(id: &str, genres: Vec<Genre>) -> Song {
    let artist: Arc<Artist> =
      Arc::new(GroupArtist::new(ArtistProfile::new("a", 2000, "Band", "UK"), Vec::new()).into());
    Song::new(id, format!("Song {id}"), Duration::from_secs(180), artist, genres)
  }

  #[fixture]
  fn owner() -> User {
    User::new("u1", "user1", Vec::new())
  }

  #[fixture]
  fn playlist(owner: User) -> Playlist {
    Playlist::new("p1", vec![song("1", vec![rock(), jazz()]), song("2", vec![pop()])], &owner, [&owner])
  }

  #[rstest]
  fn adding_a_song_appends_it(mut playlist: Playlist) {
    let extra = song("3", vec![jazz()]);
    playlist.add_to_playlist(&extra);

    assert_eq!(playlist.len(), 3);
    assert_eq!(playlist.songs().last(), Some(&extra));
  }

  #[rstest]
  fn adding_the_same_song_twice_keeps_both(mut playlist: Playlist) {
    let extra = song("3", vec![jazz()]);
    playlist.add_to_playlist(&extra);
    playlist.add_to_playlist(extra);

    assert_eq!(playlist.len(), 4);
  }

  #[rstest]
  fn adding_an_album_appends_tracks_in_order(mut playlist: Playlist) {
    let album = Album::new("al", "Live", vec![song("10", vec![]), song("11", vec![]), song("12", vec![])]);
    playlist.add_to_playlist(&album);

    let ids: Vec<&str> = playlist.songs().iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, ["1", "2", "10", "11", "12"]);
  }

  #[rstest]
  fn adding_an_empty_album_is_a_no_op(mut playlist: Playlist) {
    playlist.add_to_playlist(Album::new("al", "Nothing", Vec::new()));
    assert_eq!(playlist.len(), 2);
  }

  #[rstest]
  fn remove_by_id_removes_every_match(mut playlist: Playlist) {
    playlist.add_to_playlist(song("2", vec![pop()]));

    assert_eq!(playlist.remove_by_id("2"), 2);
    assert!(playlist.songs().iter().all(|s| s.id().as_str() != "2"));
    assert_eq!(playlist.len(), 1);
  }

  #[rstest]
  fn remove_by_unknown_id_is_a_no_op(mut playlist: Playlist) {
    assert_eq!(playlist.remove_by_id("404"), 0);
    assert_eq!(playlist.len(), 2);
  }

  #[rstest]
  fn exclude_filters_without_mutating(playlist: Playlist) {
    let filtered = playlist.exclude(&[rock()]);

    assert_eq!(filtered.songs(), &[song("2", vec![pop()])]);
    assert_eq!(filtered.id(), playlist.id());
    assert_eq!(filtered.owner(), playlist.owner());
    assert_eq!(filtered.total_likes(), 0);
    assert_eq!(playlist.len(), 2);
  }

  #[rstest]
  fn exclude_with_no_genres_keeps_everything(playlist: Playlist) {
    assert_eq!(playlist.exclude(&[]).songs(), playlist.songs());
  }

  #[rstest]
  fn exclude_matches_any_of_the_genres(playlist: Playlist) {
    assert!(playlist.exclude(&[pop(), jazz()]).is_empty());
  }

  #[rstest]
  fn total_duration_sums_songs(playlist: Playlist) {
    assert_eq!(playlist.total_duration(), Duration::from_secs(360));
  }

  #[rstest]
  fn toggle_like_flips_state(mut playlist: Playlist) {
    let id = UserRef { id: UserId::from("u2"), username: "user2".into() };

    assert_eq!(playlist.toggle_like(&id), LikeState::Liked);
    assert_eq!(playlist.total_likes(), 2);
    assert_eq!(playlist.toggle_like(&id), LikeState::NotLiked);
    assert_eq!(playlist.total_likes(), 1);
  }
}
