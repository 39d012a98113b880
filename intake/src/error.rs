use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV export error: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },

    #[error("Statement data error: {0}")]
    StatementError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Why an upload was turned away. The display text is the message surfaced to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileRejection {
    #[error("The selected file is empty")]
    Empty,

    #[error("Only PDF files are supported")]
    UnsupportedType { mime_type: String },

    #[error("File size exceeds the {} MB limit", .limit_bytes / crate::config::BYTES_PER_MIB)]
    TooLarge { size_bytes: u64, limit_bytes: u64 },
}

/// Raised only by the strict formatting variants; the lenient ones pass the input through instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Not an ISO date (YYYY-MM-DD): '{0}'")]
    MalformedDate(String),

    #[error("Not a numeric amount: '{0}'")]
    MalformedAmount(String),
}
