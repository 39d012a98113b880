// Locale-aware rendering of extracted banking data
pub mod locale_format;
pub mod rules;
pub mod statement;

pub use locale_format::{
    format_amount_with_sign, format_date, format_decimal, format_number, format_signed_decimal,
    parse_amount, try_format_date, try_format_number,
};
pub use rules::rules_for;
pub use statement::{format_statement, format_transaction, summarize};
