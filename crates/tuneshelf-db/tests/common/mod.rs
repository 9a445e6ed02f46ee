// Shared test utilities for integration tests
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, Schema, Set};
use std::path::Path;
use tuneshelf_db::entities::prelude::*;
use tuneshelf_db::entities::{album, artist, genre, playlist, song, user};
use tuneshelf_db::{DatabaseConfig, FixedClock};

pub fn test_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

pub fn test_clock() -> FixedClock {
    FixedClock(test_instant())
}

/// Open a fresh SQLite file under `dir` with every table built straight
/// from the entity definitions.
pub async fn fresh_store(dir: &Path) -> DatabaseConnection {
    let url = format!("sqlite://{}?mode=rwc", dir.join("catalog.db").display());
    let db = tuneshelf_db::connect(&DatabaseConfig::with_url(url))
        .await
        .unwrap();

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let statements = [
        schema.create_table_from_entity(Country),
        schema.create_table_from_entity(User),
        schema.create_table_from_entity(Artist),
        schema.create_table_from_entity(Album),
        schema.create_table_from_entity(Genre),
        schema.create_table_from_entity(Song),
        schema.create_table_from_entity(Playlist),
        schema.create_table_from_entity(BillingHistory),
        schema.create_table_from_entity(ListeningHistory),
        schema.create_table_from_entity(SongArtist),
        schema.create_table_from_entity(SongGenre),
        schema.create_table_from_entity(PlaylistSong),
        schema.create_table_from_entity(SongLike),
        schema.create_table_from_entity(Follow),
    ];
    for stmt in &statements {
        db.execute(backend.build(stmt)).await.unwrap();
    }
    db
}

/// One of everything a link can point at.
pub struct Fixture {
    pub user: user::Model,
    pub artist: artist::Model,
    pub album: album::Model,
    pub song: song::Model,
    pub genre: genre::Model,
    pub playlist: playlist::Model,
}

pub async fn fixture(db: &DatabaseConnection) -> Fixture {
    let at = test_instant();

    let user = user::ActiveModel {
        username: Set("jane_d".to_string()),
        email: Set("jane@example.com".to_string()),
        password: Set("pwd".to_string()),
        is_premium: Set(false),
        country_id: Set(None),
        created_at: Set(at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let artist = artist::ActiveModel {
        name: Set("Taylor Swift".to_string()),
        bio: Set("An American pop and country music superstar.".to_string()),
        created_at: Set(at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let release_date = NaiveDate::from_ymd_opt(2014, 10, 27).unwrap();
    let album = album::ActiveModel {
        title: Set("1989".to_string()),
        release_date: Set(release_date),
        artist_id: Set(artist.id),
        cover_image_url: Set("/img/1989.jpg".to_string()),
        created_at: Set(at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let song = song::ActiveModel {
        title: Set("Style".to_string()),
        album_id: Set(album.id),
        duration_seconds: Set(231),
        track_number: Set(3),
        release_date: Set(release_date),
        popularity_score: Set(96),
        created_at: Set(at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let genre = genre::ActiveModel {
        name: Set("Pop".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let playlist = playlist::ActiveModel {
        name: Set("Top Hits".to_string()),
        description: Set(Some("Hits terkini".to_string())),
        user_id: Set(user.id),
        is_public: Set(false),
        created_at: Set(at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    Fixture {
        user,
        artist,
        album,
        song,
        genre,
        playlist,
    }
}
