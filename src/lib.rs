pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use crate::core::check_digit::compute_check_digit;
pub use crate::core::format::{format_input, punctuate, strip_non_digits};
pub use crate::core::generator::{complete, generate, Generator};
pub use crate::core::validator::{check, validate, Rejection};
pub use domain::model::{CanonicalForm, Cpf};
pub use domain::ports::DigitSource;
pub use utils::error::{CpfError, Result};
