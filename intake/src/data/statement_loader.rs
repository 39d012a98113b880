// Reads standardized statements as produced by the extraction step.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use shared::models::StandardizedStatement;

use crate::error::IntakeError;

pub fn load_statement(path: impl AsRef<Path>) -> Result<StandardizedStatement, IntakeError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        IntakeError::StatementError(format!(
            "Failed to open statement file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let statement = read_statement(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        transactions = statement.transactions.len(),
        "Loaded standardized statement"
    );
    Ok(statement)
}

pub fn read_statement<R: Read>(reader: R) -> Result<StandardizedStatement, IntakeError> {
    let statement: StandardizedStatement = serde_json::from_reader(reader)?;
    Ok(statement)
}
