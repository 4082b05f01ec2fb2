use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tickets::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Tickets::TicketNumber)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Tickets::EventId).uuid().not_null())
                    .col(
                        ColumnDef::new(Tickets::BuyerName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tickets::BuyerEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tickets::BuyerPhone).string_len(50))
                    .col(ColumnDef::new(Tickets::Price).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(Tickets::QrCode)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Tickets::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Tickets::UsedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Tickets::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(Tickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Tickets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_event_id")
                            .from(Tickets::Table, Tickets::EventId)
                            .to(Events::Table, Events::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_created_by")
                            .from(Tickets::Table, Tickets::CreatedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================
        // PERFORMANCE INDEXES
        // ============================================

        // 1. qr_code is covered by its unique index (scan hot path).

        // 2. Listing is newest-first with optional status / event filters
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_tickets_created_at
                ON tickets (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_tickets_status
                ON tickets (status);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_tickets_event_id
                ON tickets (event_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_tickets_created_at;
                DROP INDEX IF EXISTS idx_tickets_status;
                DROP INDEX IF EXISTS idx_tickets_event_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tickets {
    Table,
    Id,
    TicketNumber,
    EventId,
    BuyerName,
    BuyerEmail,
    BuyerPhone,
    Price,
    QrCode,
    Status,
    UsedAt,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
