pub mod jwt;
pub mod refresh_token_repository_postgres;
pub mod sea_orm_entity;
pub mod security;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use refresh_token_repository_postgres::RefreshTokenRepositoryPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
