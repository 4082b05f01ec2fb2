use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

const TICKET_NUMBER_PREFIX: &str = "NBL-";
const QR_PREFIX: &str = "NEBULA";
const BASE36_UPPER: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Freshly generated identifiers for a ticket about to be persisted.
///
/// Uniqueness is NOT checked here; the store's unique constraints are the
/// authority, and a collision surfaces to the caller as a duplicate-entry
/// conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketIdentity {
    /// Human-readable, e.g. `NBL-12345678ABCD`
    pub ticket_number: String,
    /// Bearer secret printed into the QR image, e.g. `NEBULA-1717286400000-a1b2c3d4e`
    pub qr_code: String,
}

impl TicketIdentity {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let now_ms = Utc::now().timestamp_millis();
        Self {
            ticket_number: ticket_number(now_ms, &mut rng),
            qr_code: qr_code(now_ms, &mut rng),
        }
    }
}

fn ticket_number<R: Rng>(now_ms: i64, rng: &mut R) -> String {
    let millis = now_ms.to_string();
    let tail = if millis.len() > 8 {
        &millis[millis.len() - 8..]
    } else {
        &millis
    };

    let random: String = (0..4)
        .map(|_| BASE36_UPPER[rng.gen_range(0..BASE36_UPPER.len())] as char)
        .collect();

    format!("{}{}{}", TICKET_NUMBER_PREFIX, tail, random)
}

fn qr_code<R: Rng>(now_ms: i64, rng: &mut R) -> String {
    let random: String = rng
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();

    format!("{}-{}-{}", QR_PREFIX, now_ms, random)
}
