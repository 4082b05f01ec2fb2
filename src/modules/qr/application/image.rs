/// External render URL for a QR bearer token. Embedded in ticket emails and
/// issuance responses so clients never have to generate the image themselves.
/// Purely cosmetic; scanning decisions always go through the stored token.
pub fn qr_image_url(token: &str, size: u32) -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size={size}x{size}&data={}",
        urlencoding::encode(token)
    )
}
