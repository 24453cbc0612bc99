//! Value formatting shared by the CLI and the TUI

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

use crate::models::{Currency, Invoice, InvoiceStatus, Money};

/// Format an amount in en-US style: symbol prefix, comma grouping, two decimals
pub fn format_currency(amount: Money, currency: Currency) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = amount.abs();
    format!(
        "{}{}{}.{:02}",
        sign,
        currency.symbol(),
        abs.units().to_formatted_string(&Locale::en),
        abs.cents_part()
    )
}

/// Dashboard revenue figure: dollar sign, grouping, cents only when non-zero
///
/// The total adds amounts across currencies without conversion.
pub fn format_total_revenue(total: Money) -> String {
    let sign = if total.is_negative() { "-" } else { "" };
    let abs = total.abs();
    let units = abs.units().to_formatted_string(&Locale::en);
    if abs.cents_part() == 0 {
        format!("{}${}", sign, units)
    } else {
        format!("{}${}.{:02}", sign, units, abs.cents_part())
    }
}

/// `June 10, 2024`
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `Jun 10, 2024`
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Status badge text; an em dash for records without a status
pub fn status_label(status: Option<InvoiceStatus>) -> String {
    match status {
        Some(status) => status.to_string(),
        None => "\u{2014}".to_string(),
    }
}

/// Due date relative to `today`
pub fn due_phrase(invoice: &Invoice, today: NaiveDate) -> String {
    match invoice.days_until_due(today) {
        0 => "Due today".to_string(),
        1 => "Due in 1 day".to_string(),
        -1 => "1 day overdue".to_string(),
        days if days > 0 => format!("Due in {} days", days),
        days => format!("{} days overdue", -days),
    }
}
