pub use sea_orm_migration::prelude::*;

mod lifecycle;
mod m20250901_000001_create_countries;
mod m20250901_000002_create_users;
mod m20250901_000003_create_artists;
mod m20250901_000004_create_albums;
mod m20250901_000005_create_genres;
mod m20250901_000006_create_songs;
mod m20250901_000007_create_playlists;
mod m20250901_000008_create_billing_history;
mod m20250901_000009_create_listening_history;
mod m20250901_000010_create_song_artists;
mod m20250901_000011_create_song_genres;
mod m20250901_000012_create_playlist_songs;
mod m20250901_000013_create_song_likes;
mod m20250901_000014_create_follows;

pub use lifecycle::{create_all, drop_all, init_db};

/// One migration per catalog table, in the same order as
/// `tuneshelf_db::entities::registry::TABLES`.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_countries::Migration),
            Box::new(m20250901_000002_create_users::Migration),
            Box::new(m20250901_000003_create_artists::Migration),
            Box::new(m20250901_000004_create_albums::Migration),
            Box::new(m20250901_000005_create_genres::Migration),
            Box::new(m20250901_000006_create_songs::Migration),
            Box::new(m20250901_000007_create_playlists::Migration),
            Box::new(m20250901_000008_create_billing_history::Migration),
            Box::new(m20250901_000009_create_listening_history::Migration),
            Box::new(m20250901_000010_create_song_artists::Migration),
            Box::new(m20250901_000011_create_song_genres::Migration),
            Box::new(m20250901_000012_create_playlist_songs::Migration),
            Box::new(m20250901_000013_create_song_likes::Migration),
            Box::new(m20250901_000014_create_follows::Migration),
        ]
    }
}
