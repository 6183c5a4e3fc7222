pub mod use_cases;

pub use use_cases::{
    confirm::{ConfirmError, ConfirmOutcome, ConfirmUseCase},
    register::{RegisterError, RegisterUseCase},
};
