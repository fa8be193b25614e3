pub mod error;
pub mod prompt;
pub mod sanitize;
pub mod validate;
