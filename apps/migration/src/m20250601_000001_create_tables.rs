//! Initial schema: submissions, streaks, and logs.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Submissions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Submissions::Kind).string().not_null())
                    .col(ColumnDef::new(Submissions::ArtistName).string().not_null())
                    .col(ColumnDef::new(Submissions::Email).string().not_null())
                    .col(ColumnDef::new(Submissions::Genre).string().not_null())
                    .col(ColumnDef::new(Submissions::Bio).text().not_null())
                    .col(ColumnDef::new(Submissions::PortfolioUrl).string())
                    .col(ColumnDef::new(Submissions::TrackUrl).string().not_null())
                    .col(ColumnDef::new(Submissions::PhotoKey).string())
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submissions_submitted_at")
                    .table(Submissions::Table)
                    .col(Submissions::SubmittedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Streaks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Streaks::UserId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Streaks::Count).integer().not_null())
                    .col(ColumnDef::new(Streaks::LastReadDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Logs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Logs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Logs::Level).string().not_null())
                    .col(ColumnDef::new(Logs::Target).string().not_null())
                    .col(ColumnDef::new(Logs::Message).text().not_null())
                    .col(
                        ColumnDef::new(Logs::LoggedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_logs_logged_at")
                    .table(Logs::Table)
                    .col(Logs::LoggedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Logs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Streaks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Submissions {
    Table,
    Id,
    Kind,
    ArtistName,
    Email,
    Genre,
    Bio,
    PortfolioUrl,
    TrackUrl,
    PhotoKey,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum Streaks {
    Table,
    UserId,
    Count,
    LastReadDate,
}

#[derive(DeriveIden)]
enum Logs {
    Table,
    Id,
    Level,
    Target,
    Message,
    LoggedAt,
}
