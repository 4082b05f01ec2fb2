pub mod auth;

pub use auth::{AdminAccess, AuthenticatedStaff, SalesAccess, ScannerAccess};
