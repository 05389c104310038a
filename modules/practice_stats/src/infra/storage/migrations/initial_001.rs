use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PracticeLogs {
    Table,
    UserId,
    LogDate,
    TotalTime,
    Notes,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Badges {
    Table,
    UserId,
    BadgeType,
    EarnedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PracticeLogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PracticeLogs::UserId).uuid().not_null())
                    .col(ColumnDef::new(PracticeLogs::LogDate).string().not_null())
                    .col(ColumnDef::new(PracticeLogs::TotalTime).string().null())
                    .col(ColumnDef::new(PracticeLogs::Notes).text().null())
                    .col(
                        ColumnDef::new(PracticeLogs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PracticeLogs::UserId)
                            .col(PracticeLogs::LogDate),
                    )
                    .to_owned(),
            )
            .await?;

        // (user_id, badge_type) uniqueness is what makes concurrent awards safe.
        manager
            .create_table(
                Table::create()
                    .table(Badges::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Badges::UserId).uuid().not_null())
                    .col(ColumnDef::new(Badges::BadgeType).string().not_null())
                    .col(
                        ColumnDef::new(Badges::EarnedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().col(Badges::UserId).col(Badges::BadgeType))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Badges::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PracticeLogs::Table).to_owned())
            .await
    }
}
