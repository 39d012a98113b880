// Writes formatted transactions as CSV. Locales that use ',' as the decimal separator get ';' as
// the field delimiter so amounts don't need quoting.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use shared::models::{FormattedStatement, SupportedLocale};

use crate::error::IntakeError;
use crate::formatting::rules_for;

const HEADER: [&str; 5] = ["Date", "Description", "Amount", "Balance", "Category"];

pub fn delimiter_for(locale: SupportedLocale) -> u8 {
    if rules_for(locale).decimal_separator == ',' {
        b';'
    } else {
        b','
    }
}

pub fn write_transactions_csv<W: Write>(
    writer: W,
    statement: &FormattedStatement,
) -> Result<(), IntakeError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter_for(statement.locale))
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for transaction in &statement.transactions {
        wtr.write_record([
            transaction.date.as_str(),
            transaction.description.as_str(),
            transaction.amount.as_str(),
            transaction.balance.as_deref().unwrap_or(""),
            transaction.category.as_deref().unwrap_or(""),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_transactions_csv(
    path: impl AsRef<Path>,
    statement: &FormattedStatement,
) -> Result<(), IntakeError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_transactions_csv(file, statement)?;
    tracing::info!(
        path = %path.display(),
        rows = statement.transactions.len(),
        locale = %statement.locale,
        "Exported formatted transactions"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::format_statement;
    use shared::models::{StandardizedStatement, StandardizedTransaction};
    use tempfile::NamedTempFile;

    fn statement() -> StandardizedStatement {
        StandardizedStatement {
            transactions: vec![
                StandardizedTransaction {
                    date: "2025-12-05".to_string(),
                    description: "Salary".to_string(),
                    amount: "2000.50".to_string(),
                    balance: Some("3000.50".to_string()),
                    category: None,
                },
                StandardizedTransaction {
                    date: "2025-12-06".to_string(),
                    description: "Market; weekly".to_string(),
                    amount: "-100.50".to_string(),
                    balance: None,
                    category: Some("Food".to_string()),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_portuguese_export_uses_semicolons() {
        let formatted = format_statement(&statement(), SupportedLocale::Pt);
        let mut buffer = Vec::new();
        write_transactions_csv(&mut buffer, &formatted).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Date;Description;Amount;Balance;Category");
        assert_eq!(lines[1], "05/12/2025;Salary;+2.000,50;3.000,50;");
        assert_eq!(lines[2], "06/12/2025;\"Market; weekly\";-100,50;;Food");
    }

    #[test]
    fn test_english_export_quotes_grouped_amounts() {
        let formatted = format_statement(&statement(), SupportedLocale::En);
        let mut buffer = Vec::new();
        write_transactions_csv(&mut buffer, &formatted).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Date,Description,Amount,Balance,Category");
        assert_eq!(lines[1], "12/05/2025,Salary,\"+2,000.50\",\"3,000.50\",");
    }

    #[test]
    fn test_export_to_file_round_trips_through_reader() {
        let formatted = format_statement(&statement(), SupportedLocale::Pt);
        let tmp_file = NamedTempFile::new().unwrap();
        export_transactions_csv(tmp_file.path(), &formatted).unwrap();

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(tmp_file.path())
            .unwrap();
        let amounts: Vec<String> = rdr
            .records()
            .map(|r| r.unwrap().get(2).unwrap().to_string())
            .collect();
        assert_eq!(amounts, vec!["+2.000,50", "-100,50"]);
    }
}
