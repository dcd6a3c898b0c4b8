pub mod album;
pub mod artist;
pub mod genre;
pub mod ids;
pub mod playlist;
pub mod song;
pub mod user;

pub use album::Album;
pub use artist::{Artist, ArtistProfile, GroupArtist, SoloArtist};
pub use genre::Genre;
pub use ids::{AlbumId, ArtistId, GenreId, PlaylistId, SongId, UserId};
pub use playlist::{Playlist, PlaylistItem};
pub use song::Song;
pub use user::{LikeState, User, UserRef};
