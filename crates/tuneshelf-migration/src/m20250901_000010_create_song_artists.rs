use sea_orm_migration::prelude::*;

use super::m20250901_000003_create_artists::Artists;
use super::m20250901_000006_create_songs::Songs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SongArtists::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SongArtists::SongId).integer().not_null())
                    .col(ColumnDef::new(SongArtists::ArtistId).integer().not_null())
                    .col(ColumnDef::new(SongArtists::Role).string().null())
                    .primary_key(
                        Index::create()
                            .col(SongArtists::SongId)
                            .col(SongArtists::ArtistId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_artists_song_id")
                            .from(SongArtists::Table, SongArtists::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_artists_artist_id")
                            .from(SongArtists::Table, SongArtists::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SongArtists::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SongArtists {
    Table,
    SongId,
    ArtistId,
    Role,
}
