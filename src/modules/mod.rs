pub mod auth;
pub mod email;
pub mod qr;
pub mod ticket;
