pub mod clock;
pub mod config;
pub mod email;
pub mod http;
pub mod persistence;

// Re-export commonly used adapters for convenience
pub use clock::SystemClock;
pub use email::{MockEmailClient, PostmarkEmailClient};
pub use persistence::{
    HashMapTokenStore, HashMapUserStore, PostgresTokenStore, PostgresUserStore,
};
