use chrono::{DateTime, Utc};

/// Time source for token issuance and expiry checks.
///
/// Injected so tests can drive expiry deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
