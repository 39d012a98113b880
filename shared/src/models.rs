use serde::{Deserialize, Serialize};
use std::fmt;

/// Display locales the formatter knows about.
/// Anything else falls back to [`SupportedLocale::default`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLocale {
    #[default]
    En,
    Pt,
}

impl SupportedLocale {
    pub const ALL: [SupportedLocale; 2] = [SupportedLocale::En, SupportedLocale::Pt];

    pub fn code(&self) -> &'static str {
        match self {
            SupportedLocale::En => "en",
            SupportedLocale::Pt => "pt",
        }
    }

    /// Exact match on the locale code, `None` when the code is not supported.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Like [`SupportedLocale::from_code`] but never fails: unknown codes resolve to the default
    /// locale.
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl From<&str> for SupportedLocale {
    fn from(code: &str) -> Self {
        SupportedLocale::resolve(code)
    }
}

impl fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DateFormat {
    #[serde(rename = "dd/mm/yyyy")]
    DayMonthYear,
    #[serde(rename = "mm/dd/yyyy")]
    MonthDayYear,
}

/// Date ordering and numeric separators for one locale.
/// `decimal_separator` and `thousand_separator` are always different symbols.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocaleFormatRules {
    pub date_format: DateFormat,
    pub decimal_separator: char,
    pub thousand_separator: char,
}

/// Metadata of an uploaded document. Only inspected, never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationOutcome {
    pub fn accepted() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

// Canonical records as returned by the extraction step: ISO dates and period-decimal amounts.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardizedTransaction {
    pub date: String,
    pub description: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardizedStatement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_holder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_balance: Option<String>,
    #[serde(default)]
    pub transactions: Vec<StandardizedTransaction>,
}

// Display-ready counterparts, every value already rendered for one locale.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTransaction {
    pub date: String,
    pub description: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementSummary {
    pub transaction_count: usize,
    pub total_credits: String,
    pub total_debits: String,
    pub net_change: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_date: Option<String>,
    pub unparsed_amounts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedStatement {
    pub locale: SupportedLocale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_holder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_balance: Option<String>,
    pub transactions: Vec<FormattedTransaction>,
    pub summary: StatementSummary,
}
