pub mod guests;
pub mod topics;

use chrono::Utc;

pub(crate) fn timestamp_now() -> String {
    Utc::now().to_rfc3339()
}
