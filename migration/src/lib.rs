pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users_table;
mod m20250601_000002_create_refresh_tokens_table;
mod m20250601_000003_create_events_table;
mod m20250601_000004_create_tickets_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users_table::Migration),
            Box::new(m20250601_000002_create_refresh_tokens_table::Migration),
            Box::new(m20250601_000003_create_events_table::Migration),
            Box::new(m20250601_000004_create_tickets_table::Migration),
        ]
    }
}
