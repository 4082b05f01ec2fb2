pub mod entities;
pub mod identity;
