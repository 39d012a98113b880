// Models shared between the intake library and anything that displays its output.
pub mod models;
pub mod utils;

pub use models::{
    DateFormat, FormattedStatement, FormattedTransaction, LocaleFormatRules, StandardizedStatement,
    StandardizedTransaction, StatementSummary, SupportedLocale, UploadedFile, ValidationOutcome,
};
