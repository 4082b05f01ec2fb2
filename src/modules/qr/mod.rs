pub mod adapter;
pub mod application;

pub use application::qr_image_url;
