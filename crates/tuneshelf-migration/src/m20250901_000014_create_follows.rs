use sea_orm_migration::prelude::*;

use super::m20250901_000002_create_users::Users;
use super::m20250901_000003_create_artists::Artists;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follows::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Follows::UserId).integer().not_null())
                    .col(ColumnDef::new(Follows::ArtistId).integer().not_null())
                    .col(ColumnDef::new(Follows::FollowedAt).date_time().not_null())
                    // One follow per pair
                    .primary_key(
                        Index::create()
                            .col(Follows::UserId)
                            .col(Follows::ArtistId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_user_id")
                            .from(Follows::Table, Follows::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_artist_id")
                            .from(Follows::Table, Follows::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Follows::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Follows {
    Table,
    UserId,
    ArtistId,
    FollowedAt,
}
