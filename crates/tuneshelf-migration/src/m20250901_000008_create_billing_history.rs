use sea_orm_migration::prelude::*;

use super::m20250901_000002_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillingHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BillingHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BillingHistory::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(BillingHistory::BilledAmount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingHistory::DueDate)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillingHistory::IsPaid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_billing_history_user_id")
                            .from(BillingHistory::Table, BillingHistory::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_billing_history_user_id")
                    .table(BillingHistory::Table)
                    .col(BillingHistory::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BillingHistory::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BillingHistory {
    Table,
    Id,
    UserId,
    BilledAmount,
    DueDate,
    IsPaid,
}
