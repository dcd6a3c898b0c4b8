use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDate;
use melodia_config::LoggingConfig;
use melodia_core::StreamingApp;
use melodia_core::domain::{Album, Artist, ArtistProfile, Genre, GroupArtist, Playlist, Song, SoloArtist, User};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(cfg: &LoggingConfig) {
  // RUST_LOG gana sobre la sección [logging]
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.filter));

  tracing_subscriber::fmt().with_env_filter(filter).with_ansi(cfg.ansi).init();
}

fn birth_date(y: i32, m: u32, d: u32) -> anyhow::Result<NaiveDate> {
  NaiveDate::from_ymd_opt(y, m, d).with_context(|| format!("invalid date {y}-{m}-{d}"))
}

fn main() -> anyhow::Result<()> {
  let logging = LoggingConfig::load().context("failed to load [logging] config")?;
  init_tracing(&logging);

  let rock = Genre::new("1", "Rock");
  let pop = Genre::new("2", "Pop");
  let jazz = Genre::new("3", "Jazz");

  let john = SoloArtist::new(ArtistProfile::new("1", 1990, "John Doe", "USA"), "John", "Doe", birth_date(1970, 5, 15)?);
  let jane =
    SoloArtist::new(ArtistProfile::new("2", 2000, "Jane Smith", "UK"), "Jane", "Smith", birth_date(1980, 3, 20)?);
  let rockers = ArtistProfile::new("3", 2010, "The Rockers", "USA");
  let group: Arc<Artist> = Arc::new(GroupArtist::new(rockers, vec![john.clone(), jane.clone()]).into());
  let artist1: Arc<Artist> = Arc::new(john.into());
  let artist2: Arc<Artist> = Arc::new(jane.into());

  info!(group = group.name(), members = group.members().len(), "artists ready");

  let song1 =
    Song::new("1", "Rock Anthem", Duration::from_secs(4 * 60), artist1.clone(), vec![rock.clone(), jazz.clone()]);
  let song2 = Song::new("2", "Pop Hit", Duration::from_secs(3 * 60), artist2, vec![pop]);
  let song3 = Song::new("3", "Jazz Vibes", Duration::from_secs(5 * 60), artist1, vec![jazz]);
  let live = Song::new("4", "Rockers Live", Duration::from_secs(7 * 60), group, vec![rock.clone()]);

  let mut app = StreamingApp::new(vec![User::new("1", "user1", Vec::new()), User::new("2", "user2", Vec::new())]);
  app.register_user(User::new("3", "user3", Vec::new()))?;

  let user1 = app.users()[0].clone();
  let user2 = app.users()[1].clone();

  let mut playlist1 = Playlist::new("1", vec![song1.clone(), song2.clone()], &user1, [&user2, &user1]);
  let mut playlist2 = Playlist::new("2", vec![song2.clone(), song3.clone()], &user2, []);
  info!(playlist = %playlist1.id(), likes = playlist1.total_likes(), "seeded playlist");

  app.like(user1.id(), &mut playlist1)?;
  app.like(user1.id(), &mut playlist2)?;
  info!(playlist1 = playlist1.total_likes(), playlist2 = playlist2.total_likes(), "likes after toggling");

  playlist1.add_to_playlist(&song3);
  playlist2.add_to_playlist(&song3);
  info!(song = song3.title(), playlists = song3.count_playlists([&playlist1, &playlist2]), "membership");

  playlist2.add_to_playlist(Album::new("1", "The Rockers Live", vec![live]));
  info!(playlist = %playlist2.id(), songs = playlist2.len(), duration = ?playlist2.total_duration(), "album added");

  let removed = playlist1.remove_by_id("2");
  info!(playlist = %playlist1.id(), removed, songs = playlist1.len(), "removed by id");

  let without_rock = playlist2.exclude(&[rock]);
  let titles: Vec<&str> = without_rock.songs().iter().map(Song::title).collect();
  info!(playlist = %without_rock.id(), ?titles, "playlist without rock");

  Ok(())
}
