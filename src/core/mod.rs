pub mod check_digit;
pub mod format;
pub mod generator;
pub mod validator;
