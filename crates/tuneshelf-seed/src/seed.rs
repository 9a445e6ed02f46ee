//! Populates a fresh catalog store with the sample scenario.

use chrono::{Duration, NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, Set, TransactionTrait,
};
use std::collections::HashMap;
use tuneshelf_db::entities::{
    album, artist, billing_history, country, genre, listening_history, playlist, song, user,
};
use tuneshelf_db::{links, CatalogError, Clock};

use crate::scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOptions {
    /// Drop and recreate every table before seeding.
    pub drop_and_recreate: bool,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            drop_and_recreate: true,
        }
    }
}

/// Rows written per table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub countries: usize,
    pub users: usize,
    pub billing_history: usize,
    pub genres: usize,
    pub artists: usize,
    pub albums: usize,
    pub songs: usize,
    pub song_artists: usize,
    pub song_genres: usize,
    pub song_likes: usize,
    pub follows: usize,
    pub listening_history: usize,
    pub playlists: usize,
    pub playlist_songs: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.countries
            + self.users
            + self.billing_history
            + self.genres
            + self.artists
            + self.albums
            + self.songs
            + self.song_artists
            + self.song_genres
            + self.song_likes
            + self.follows
            + self.listening_history
            + self.playlists
            + self.playlist_songs
    }
}

/// Seed the store with the sample catalog.
///
/// With `drop_and_recreate` the schema is wiped first. Without it, seeding a
/// store that already holds the scenario fails on the first unique name
/// ("Indonesia"). Every row goes through a single transaction, so a failure
/// leaves the store exactly as it was after the schema step.
pub async fn run_seed(
    db: &DatabaseConnection,
    clock: &dyn Clock,
    options: SeedOptions,
) -> Result<SeedSummary, CatalogError> {
    tuneshelf_migration::init_db(db, options.drop_and_recreate).await?;

    let txn = db.begin().await?;
    let summary = populate(&txn, clock).await?;
    txn.commit().await?;

    tracing::info!(rows = summary.total(), "catalog seeded");
    Ok(summary)
}

/// Name → id for rows inserted so far.
struct Ids {
    kind: &'static str,
    by_name: HashMap<&'static str, i32>,
}

impl Ids {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            by_name: HashMap::new(),
        }
    }

    fn insert(&mut self, name: &'static str, id: i32) {
        self.by_name.insert(name, id);
    }

    fn get(&self, name: &str) -> Result<i32, CatalogError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| unknown(self.kind, name))
    }
}

fn unknown(kind: &str, name: &str) -> CatalogError {
    CatalogError::Database(DbErr::Custom(format!(
        "seed data references unknown {kind} {name:?}"
    )))
}

fn date((y, m, d): (i32, u32, u32)) -> Result<NaiveDate, CatalogError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| unknown("date", &format!("{y}-{m}-{d}")))
}

async fn populate<C>(db: &C, clock: &dyn Clock) -> Result<SeedSummary, CatalogError>
where
    C: ConnectionTrait,
{
    let now = clock.now();
    let mut summary = SeedSummary::default();

    let mut countries = Ids::new("country");
    for &name in scenario::COUNTRIES {
        let row = country::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        countries.insert(name, row.id);
        summary.countries += 1;
    }

    let mut users = Ids::new("user");
    for seed in scenario::USERS {
        let country_id = match seed.country {
            Some(name) => Some(countries.get(name)?),
            None => None,
        };
        let row = user::ActiveModel {
            username: Set(seed.username.to_string()),
            email: Set(seed.email.to_string()),
            password: Set(seed.password.to_string()),
            is_premium: Set(seed.is_premium),
            country_id: Set(country_id),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
        users.insert(seed.username, row.id);
        summary.users += 1;
    }

    for seed in scenario::BILLING {
        billing_history::ActiveModel {
            user_id: Set(users.get(seed.username)?),
            billed_amount: Set(seed.billed_amount),
            due_date: Set(date(seed.due)?.and_time(NaiveTime::MIN)),
            is_paid: Set(seed.is_paid),
            ..Default::default()
        }
        .insert(db)
        .await?;
        summary.billing_history += 1;
    }

    let mut genres = Ids::new("genre");
    for &name in scenario::GENRES {
        let row = genre::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        genres.insert(name, row.id);
        summary.genres += 1;
    }

    let mut artists = Ids::new("artist");
    for seed in scenario::ARTISTS {
        let row = artist::ActiveModel {
            name: Set(seed.name.to_string()),
            bio: Set(seed.bio.to_string()),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
        artists.insert(seed.name, row.id);
        summary.artists += 1;
    }

    let mut albums = Ids::new("album");
    let mut album_release = HashMap::new();
    for seed in scenario::ALBUMS {
        let release_date = date(seed.released)?;
        let row = album::ActiveModel {
            title: Set(seed.title.to_string()),
            release_date: Set(release_date),
            artist_id: Set(artists.get(seed.artist)?),
            cover_image_url: Set(seed.cover_image_url.to_string()),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
        albums.insert(seed.title, row.id);
        album_release.insert(seed.title, release_date);
        summary.albums += 1;
    }

    let mut songs = Ids::new("song");
    for seed in scenario::SONGS {
        let release_date = album_release
            .get(seed.album)
            .copied()
            .ok_or_else(|| unknown("album", seed.album))?;
        let row = song::ActiveModel {
            title: Set(seed.title.to_string()),
            album_id: Set(albums.get(seed.album)?),
            duration_seconds: Set(seed.duration_seconds),
            track_number: Set(seed.track_number),
            release_date: Set(release_date),
            popularity_score: Set(seed.popularity_score),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
        songs.insert(seed.title, row.id);
        summary.songs += 1;
    }

    for seed in scenario::SONGS {
        let song_id = songs.get(seed.title)?;
        for name in seed.artists {
            links::link_song_artist(db, song_id, artists.get(name)?, None).await?;
            summary.song_artists += 1;
        }
        for name in seed.genres {
            links::link_song_genre(db, song_id, genres.get(name)?).await?;
            summary.song_genres += 1;
        }
    }

    for (username, title) in scenario::LIKES {
        links::like_song(db, clock, users.get(username)?, songs.get(title)?).await?;
        summary.song_likes += 1;
    }
    for (username, name) in scenario::FOLLOWS {
        links::follow_artist(db, clock, users.get(username)?, artists.get(name)?).await?;
        summary.follows += 1;
    }

    for seed in scenario::LISTENS {
        listening_history::ActiveModel {
            song_id: Set(songs.get(seed.song)?),
            user_id: Set(users.get(seed.username)?),
            played_at: Set(now - Duration::minutes(seed.minutes_ago)),
            device_info: Set(seed.device_info.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        summary.listening_history += 1;
    }

    for seed in scenario::PLAYLISTS {
        let row = playlist::ActiveModel {
            name: Set(seed.name.to_string()),
            description: Set(seed.description.map(str::to_owned)),
            user_id: Set(users.get(seed.owner)?),
            is_public: Set(seed.is_public),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
        summary.playlists += 1;

        for (position, title) in (1..).zip(seed.songs) {
            links::add_song_to_playlist(db, clock, row.id, songs.get(title)?, position).await?;
            summary.playlist_songs += 1;
        }
    }

    tracing::debug!(?summary, "seed rows staged");
    Ok(summary)
}
