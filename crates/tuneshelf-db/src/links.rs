//! Many-to-many link creation.
//!
//! Each relationship has exactly one function that writes its link row.
//! Nothing else in the workspace inserts into the link tables, so the
//! stored pair is the only record of the relationship.

use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use crate::clock::Clock;
use crate::entities::{follow, playlist_song, song_artist, song_genre, song_like};
use crate::error::CatalogError;

/// Credit `artist_id` on `song_id`, optionally with a role such as "featuring".
pub async fn link_song_artist<C>(
    db: &C,
    song_id: i32,
    artist_id: i32,
    role: Option<&str>,
) -> Result<song_artist::Model, CatalogError>
where
    C: ConnectionTrait,
{
    let link = song_artist::ActiveModel {
        song_id: Set(song_id),
        artist_id: Set(artist_id),
        role: Set(role.map(str::to_owned)),
    }
    .insert(db)
    .await?;

    tracing::debug!(song_id, artist_id, "linked song to artist");
    Ok(link)
}

pub async fn link_song_genre<C>(
    db: &C,
    song_id: i32,
    genre_id: i32,
) -> Result<song_genre::Model, CatalogError>
where
    C: ConnectionTrait,
{
    let link = song_genre::ActiveModel {
        song_id: Set(song_id),
        genre_id: Set(genre_id),
    }
    .insert(db)
    .await?;

    tracing::debug!(song_id, genre_id, "tagged song with genre");
    Ok(link)
}

/// Put `song_id` at `position` in `playlist_id`.
///
/// A song appears at most once per playlist; adding it again is a
/// constraint violation.
pub async fn add_song_to_playlist<C>(
    db: &C,
    clock: &dyn Clock,
    playlist_id: i32,
    song_id: i32,
    position: i32,
) -> Result<playlist_song::Model, CatalogError>
where
    C: ConnectionTrait,
{
    let entry = playlist_song::ActiveModel {
        playlist_id: Set(playlist_id),
        song_id: Set(song_id),
        position: Set(position),
        added_at: Set(clock.now()),
    }
    .insert(db)
    .await?;

    tracing::debug!(playlist_id, song_id, position, "added song to playlist");
    Ok(entry)
}

pub async fn like_song<C>(
    db: &C,
    clock: &dyn Clock,
    user_id: i32,
    song_id: i32,
) -> Result<song_like::Model, CatalogError>
where
    C: ConnectionTrait,
{
    let like = song_like::ActiveModel {
        song_id: Set(song_id),
        user_id: Set(user_id),
        liked_at: Set(clock.now()),
    }
    .insert(db)
    .await?;

    tracing::debug!(user_id, song_id, "user liked song");
    Ok(like)
}

pub async fn follow_artist<C>(
    db: &C,
    clock: &dyn Clock,
    user_id: i32,
    artist_id: i32,
) -> Result<follow::Model, CatalogError>
where
    C: ConnectionTrait,
{
    let follow = follow::ActiveModel {
        user_id: Set(user_id),
        artist_id: Set(artist_id),
        followed_at: Set(clock.now()),
    }
    .insert(db)
    .await?;

    tracing::debug!(user_id, artist_id, "user followed artist");
    Ok(follow)
}
