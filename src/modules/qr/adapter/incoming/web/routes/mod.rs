pub mod mark_used_qr;
pub mod validate_qr;

pub use mark_used_qr::{mark_used_qr_handler, MarkUsedQrDto};
pub use validate_qr::{validate_qr_handler, ValidateQrDto, ValidateQrResponse};
