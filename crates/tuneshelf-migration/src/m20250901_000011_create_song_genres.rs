use sea_orm_migration::prelude::*;

use super::m20250901_000005_create_genres::Genres;
use super::m20250901_000006_create_songs::Songs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SongGenres::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SongGenres::SongId).integer().not_null())
                    .col(ColumnDef::new(SongGenres::GenreId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(SongGenres::SongId)
                            .col(SongGenres::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_genres_song_id")
                            .from(SongGenres::Table, SongGenres::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_genres_genre_id")
                            .from(SongGenres::Table, SongGenres::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SongGenres::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SongGenres {
    Table,
    SongId,
    GenreId,
}
