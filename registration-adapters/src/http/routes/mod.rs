pub mod confirm;
pub mod error;
pub mod register;

pub use confirm::{CONFIRMED_MESSAGE, ConfirmParams, REISSUED_MESSAGE, confirm};
pub use error::ApiError;
pub use register::{RegisterRequest, register};
