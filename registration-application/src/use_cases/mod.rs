pub mod confirm;
pub mod register;

// Re-export for convenience
pub use confirm::{ConfirmError, ConfirmOutcome, ConfirmUseCase};
pub use register::{RegisterError, RegisterUseCase};
