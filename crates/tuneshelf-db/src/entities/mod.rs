pub mod album;
pub mod artist;
pub mod billing_history;
pub mod country;
pub mod follow;
pub mod genre;
pub mod listening_history;
pub mod playlist;
pub mod playlist_song;
pub mod registry;
pub mod song;
pub mod song_artist;
pub mod song_genre;
pub mod song_like;
pub mod user;

pub mod prelude {
    pub use super::album::Entity as Album;
    pub use super::artist::Entity as Artist;
    pub use super::billing_history::Entity as BillingHistory;
    pub use super::country::Entity as Country;
    pub use super::follow::Entity as Follow;
    pub use super::genre::Entity as Genre;
    pub use super::listening_history::Entity as ListeningHistory;
    pub use super::playlist::Entity as Playlist;
    pub use super::playlist_song::Entity as PlaylistSong;
    pub use super::song::Entity as Song;
    pub use super::song_artist::Entity as SongArtist;
    pub use super::song_genre::Entity as SongGenre;
    pub use super::song_like::Entity as SongLike;
    pub use super::user::Entity as User;
}
