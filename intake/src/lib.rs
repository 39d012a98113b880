// Statement intake library: upload validation and locale-aware formatting of extracted
// banking data.

pub mod config;
pub mod data;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod validation;

pub use error::{FileRejection, FormatError, IntakeError};
pub use formatting::{
    format_amount_with_sign, format_date, format_number, format_statement, rules_for, summarize,
};
pub use validation::{validate_file, FileValidator, UploadPolicy};
