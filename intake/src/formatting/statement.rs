// Applies the locale formatter field by field to a whole extracted statement.
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{
    FormattedStatement, FormattedTransaction, StandardizedStatement, StandardizedTransaction,
    StatementSummary, SupportedLocale,
};

use super::locale_format::{
    format_amount_with_sign, format_date, format_decimal, format_number, format_signed_decimal,
    is_iso_date, parse_amount,
};

pub fn format_transaction(
    transaction: &StandardizedTransaction,
    locale: SupportedLocale,
) -> FormattedTransaction {
    FormattedTransaction {
        date: format_date(&transaction.date, locale),
        description: transaction.description.clone(),
        amount: format_amount_with_sign(&transaction.amount, locale),
        balance: transaction.balance.as_deref().map(|b| format_number(b, locale)),
        category: transaction.category.clone(),
    }
}

/// Never fails: fields that are not in canonical shape are carried over unchanged.
pub fn format_statement(
    statement: &StandardizedStatement,
    locale: SupportedLocale,
) -> FormattedStatement {
    let transactions: Vec<FormattedTransaction> = statement
        .transactions
        .iter()
        .map(|t| format_transaction(t, locale))
        .collect();
    let summary = summarize(statement, locale);

    tracing::debug!(
        locale = %locale,
        transactions = transactions.len(),
        unparsed_amounts = summary.unparsed_amounts,
        "Formatted statement"
    );

    FormattedStatement {
        locale,
        bank_name: statement.bank_name.clone(),
        account_holder: statement.account_holder.clone(),
        account_number: statement.account_number.clone(),
        currency: statement.currency.clone(),
        period_start: statement.period_start.as_deref().map(|d| format_date(d, locale)),
        period_end: statement.period_end.as_deref().map(|d| format_date(d, locale)),
        opening_balance: statement.opening_balance.as_deref().map(|b| format_number(b, locale)),
        closing_balance: statement.closing_balance.as_deref().map(|b| format_number(b, locale)),
        transactions,
        summary,
    }
}

/// Credit/debit totals and the covered date range.
///
/// Totals use exact decimal arithmetic and clamp at the `Decimal` range instead of overflowing.
/// Amounts that cannot be parsed are counted but left out of the totals; dates only count when
/// they are well-formed ISO dates that exist in the calendar.
pub fn summarize(statement: &StandardizedStatement, locale: SupportedLocale) -> StatementSummary {
    let mut credits = Decimal::ZERO;
    let mut debits = Decimal::ZERO;
    let mut unparsed_amounts = 0;
    let mut first: Option<NaiveDate> = None;
    let mut last: Option<NaiveDate> = None;

    for transaction in &statement.transactions {
        match parse_amount(&transaction.amount) {
            Some(value) if value > Decimal::ZERO => credits = clamped_add(credits, value),
            Some(value) => debits = clamped_add(debits, value),
            None => {
                tracing::warn!(
                    amount = %transaction.amount,
                    "Unparsable transaction amount left out of totals"
                );
                unparsed_amounts += 1;
            }
        }

        if let Some(date) = parse_calendar_date(&transaction.date) {
            first = Some(first.map_or(date, |f| f.min(date)));
            last = Some(last.map_or(date, |l| l.max(date)));
        }
    }

    StatementSummary {
        transaction_count: statement.transactions.len(),
        total_credits: format_decimal(credits, locale),
        total_debits: format_decimal(debits, locale),
        net_change: format_signed_decimal(clamped_add(credits, debits), locale),
        first_date: first.map(|d| format_date(&d.format("%Y-%m-%d").to_string(), locale)),
        last_date: last.map(|d| format_date(&d.format("%Y-%m-%d").to_string(), locale)),
        unparsed_amounts,
    }
}

fn clamped_add(total: Decimal, value: Decimal) -> Decimal {
    total.checked_add(value).unwrap_or_else(|| {
        tracing::warn!(total = %total, value = %value, "Statement total overflowed, clamping");
        if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if !is_iso_date(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
