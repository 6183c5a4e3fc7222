pub mod helpers;
pub mod service;
pub mod tracing;

pub use service::RegistrationService;
