pub mod image;

pub use image::qr_image_url;
