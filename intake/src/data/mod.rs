// Statement input and output on disk
pub mod csv_export;
pub mod statement_loader;

pub use csv_export::{export_transactions_csv, write_transactions_csv};
pub use statement_loader::{load_statement, read_statement};
