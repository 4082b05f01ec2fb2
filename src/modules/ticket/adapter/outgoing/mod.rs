pub mod event_repository_postgres;
pub mod sea_orm_entity;
pub mod ticket_query_postgres;
pub mod ticket_repository_postgres;

pub use event_repository_postgres::EventRepositoryPostgres;
pub use ticket_query_postgres::TicketQueryPostgres;
pub use ticket_repository_postgres::TicketRepositoryPostgres;
