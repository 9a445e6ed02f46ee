use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "songs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub album_id: i32,
    pub duration_seconds: i32,
    pub track_number: i32,
    pub release_date: Date,
    pub popularity_score: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::album::Entity",
        from = "Column::AlbumId",
        to = "super::album::Column::Id",
        on_delete = "Cascade"
    )]
    Album,
    #[sea_orm(has_many = "super::listening_history::Entity")]
    ListeningHistory,
    #[sea_orm(has_many = "super::playlist_song::Entity")]
    PlaylistSong,
    #[sea_orm(has_many = "super::song_artist::Entity")]
    SongArtist,
    #[sea_orm(has_many = "super::song_genre::Entity")]
    SongGenre,
    #[sea_orm(has_many = "super::song_like::Entity")]
    SongLike,
}

impl Related<super::album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Album.def()
    }
}

impl Related<super::listening_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListeningHistory.def()
    }
}

impl Related<super::playlist_song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlaylistSong.def()
    }
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::song_artist::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::song_artist::Relation::Song.def().rev())
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::song_genre::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::song_genre::Relation::Song.def().rev())
    }
}

/// Users who liked this song, through `song_likes`.
impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::song_like::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::song_like::Relation::Song.def().rev())
    }
}

/// Playlists containing this song, through `playlist_songs`.
impl Related<super::playlist::Entity> for Entity {
    fn to() -> RelationDef {
        super::playlist_song::Relation::Playlist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::playlist_song::Relation::Song.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
