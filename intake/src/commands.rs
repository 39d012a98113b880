// Subcommand implementations for the statement-intake binary.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use shared::models::{SupportedLocale, UploadedFile};
use shared::utils::format_bytes;
use statement_intake::config::IntakeSettings;
use statement_intake::data::{export_transactions_csv, load_statement};
use statement_intake::formatting::{format_statement, rules_for};
use statement_intake::validation::{inspect_path, FileValidator, UploadPolicy};

/// Returns the process exit code: 0 when accepted, 1 when rejected.
pub fn run_validate(
    settings: &IntakeSettings,
    file: &Path,
    mime_type: Option<String>,
) -> Result<i32> {
    let inspected =
        inspect_path(file).with_context(|| format!("Cannot inspect '{}'", file.display()))?;
    let uploaded = match mime_type {
        Some(mime_type) => UploadedFile::new(mime_type, inspected.size_bytes),
        None => inspected,
    };
    tracing::info!(
        path = %file.display(),
        mime_type = %uploaded.mime_type,
        size = %format_bytes(uploaded.size_bytes),
        "Validating upload"
    );

    let outcome = FileValidator::new(UploadPolicy::from(settings)).validate(&uploaded);
    println!("{}", serde_json::to_string(&outcome)?);
    Ok(if outcome.success { 0 } else { 1 })
}

pub fn run_format(
    settings: &IntakeSettings,
    statement_path: &Path,
    locale: Option<&str>,
    csv: Option<&PathBuf>,
) -> Result<()> {
    let locale = resolve_locale(settings, locale);
    let statement = load_statement(statement_path)?;
    let formatted = format_statement(&statement, locale);

    if let Some(csv_path) = csv {
        export_transactions_csv(csv_path, &formatted)
            .with_context(|| format!("Cannot write CSV to '{}'", csv_path.display()))?;
    }
    println!("{}", serde_json::to_string_pretty(&formatted)?);
    Ok(())
}

pub fn run_rules(settings: &IntakeSettings, locale: Option<&str>) -> Result<()> {
    let locale = resolve_locale(settings, locale);
    let output = serde_json::json!({
        "locale": locale,
        "rules": rules_for(locale),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn run_size(bytes: u64) {
    println!("{}", format_bytes(bytes));
}

fn resolve_locale(settings: &IntakeSettings, requested: Option<&str>) -> SupportedLocale {
    match requested {
        Some(code) => {
            let locale = SupportedLocale::resolve(code);
            if SupportedLocale::from_code(code).is_none() {
                tracing::warn!(
                    requested = code,
                    fallback = %locale,
                    "Unsupported locale, using default"
                );
            }
            locale
        }
        None => settings.display.default_locale,
    }
}
