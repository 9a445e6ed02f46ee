use sea_orm_migration::prelude::*;

use super::m20250901_000002_create_users::Users;
use super::m20250901_000006_create_songs::Songs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListeningHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ListeningHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ListeningHistory::SongId).integer().not_null())
                    .col(ColumnDef::new(ListeningHistory::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(ListeningHistory::PlayedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ListeningHistory::DeviceInfo)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listening_history_song_id")
                            .from(ListeningHistory::Table, ListeningHistory::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listening_history_user_id")
                            .from(ListeningHistory::Table, ListeningHistory::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_listening_history_user_id")
                    .table(ListeningHistory::Table)
                    .col(ListeningHistory::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_listening_history_played_at")
                    .table(ListeningHistory::Table)
                    .col(ListeningHistory::PlayedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListeningHistory::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ListeningHistory {
    Table,
    Id,
    SongId,
    UserId,
    PlayedAt,
    DeviceInfo,
}
