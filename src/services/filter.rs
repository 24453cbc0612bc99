//! Invoice filtering
//!
//! Combines the list view's free-text search, status filter and per-column
//! substring filters. Every active criterion must pass (AND); the free-text
//! search alone is an OR across customer, project and invoice number.
//! Output keeps the input order.

use std::fmt;
use std::str::FromStr;

use crate::models::{Invoice, InvoiceStatus};

/// Status selector of the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(InvoiceStatus),
}

impl StatusFilter {
    /// Check an invoice's status against this filter
    ///
    /// An invoice without a status only passes [`StatusFilter::All`].
    pub fn matches(&self, status: Option<InvoiceStatus>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == Some(*wanted),
        }
    }

    /// Cycle all → pending → paid → overdue → all
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Only(InvoiceStatus::Pending),
            Self::Only(InvoiceStatus::Pending) => Self::Only(InvoiceStatus::Paid),
            Self::Only(InvoiceStatus::Paid) => Self::Only(InvoiceStatus::Overdue),
            Self::Only(InvoiceStatus::Overdue) => Self::All,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<InvoiceStatus>().map(Self::Only)
    }
}

/// Columns that carry their own substring filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    InvoiceNumber,
    Customer,
    Project,
    Amount,
    Date,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        Self::InvoiceNumber,
        Self::Customer,
        Self::Project,
        Self::Amount,
        Self::Date,
    ];

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvoiceNumber => "Invoice #",
            Self::Customer => "Customer",
            Self::Project => "Project",
            Self::Amount => "Amount",
            Self::Date => "Date",
        }
    }

    /// The text of `invoice` this column filter is matched against
    pub fn text_of(&self, invoice: &Invoice) -> String {
        match self {
            Self::InvoiceNumber => invoice.invoice_number.as_str().to_string(),
            Self::Customer => invoice.customer.clone(),
            Self::Project => invoice.project.clone(),
            Self::Amount => invoice.amount.to_plain_string(),
            Self::Date => invoice.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Per-column substring patterns; an empty pattern matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFilters {
    pub invoice_number: String,
    pub customer: String,
    pub project: String,
    pub amount: String,
    pub date: String,
}

impl FieldFilters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::InvoiceNumber => &self.invoice_number,
            FilterField::Customer => &self.customer,
            FilterField::Project => &self.project,
            FilterField::Amount => &self.amount,
            FilterField::Date => &self.date,
        }
    }

    pub fn get_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::InvoiceNumber => &mut self.invoice_number,
            FilterField::Customer => &mut self.customer,
            FilterField::Project => &mut self.project,
            FilterField::Amount => &mut self.amount,
            FilterField::Date => &mut self.date,
        }
    }

    pub fn set(&mut self, field: FilterField, pattern: impl Into<String>) {
        *self.get_mut(field) = pattern.into();
    }

    /// Check whether any column has a pattern
    pub fn is_active(&self) -> bool {
        FilterField::ALL.iter().any(|f| !self.get(*f).is_empty())
    }

    fn matches(&self, invoice: &Invoice) -> bool {
        FilterField::ALL.iter().all(|field| {
            let pattern = self.get(*field);
            pattern.is_empty() || contains_ignore_case(&field.text_of(invoice), pattern)
        })
    }
}

/// The complete set of list filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub status: StatusFilter,
    pub fields: FieldFilters,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Restrict to a single status
    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    /// Set one column filter
    pub fn field(mut self, field: FilterField, pattern: impl Into<String>) -> Self {
        self.fields.set(field, pattern);
        self
    }

    /// Check whether any criterion narrows the result
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.status != StatusFilter::All || self.fields.is_active()
    }

    /// Check a single invoice against every criterion
    pub fn matches(&self, invoice: &Invoice) -> bool {
        self.matches_search(invoice)
            && self.status.matches(invoice.status)
            && self.fields.matches(invoice)
    }

    fn matches_search(&self, invoice: &Invoice) -> bool {
        let term = self.search_term.as_str();
        term.is_empty()
            || contains_ignore_case(&invoice.customer, term)
            || contains_ignore_case(&invoice.project, term)
            || contains_ignore_case(invoice.invoice_number.as_str(), term)
    }
}

/// Select the invoices matching `criteria`, preserving their order
pub fn filter_invoices<'a>(invoices: &'a [Invoice], criteria: &FilterCriteria) -> Vec<&'a Invoice> {
    invoices.iter().filter(|inv| criteria.matches(inv)).collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, InvoiceId, InvoiceNumber, Money};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn invoice(
        seq: u32,
        customer: &str,
        project: &str,
        cents: i64,
        date: &str,
        status: Option<InvoiceStatus>,
    ) -> Invoice {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Invoice {
            id: InvoiceId::from_string(seq.to_string()),
            invoice_number: InvoiceNumber::from_sequence(seq),
            customer: customer.into(),
            project: project.into(),
            amount: Money::from_cents(cents),
            currency: Currency::Usd,
            description: String::new(),
            date,
            due_date: date,
            status,
        }
    }

    fn sample() -> Vec<Invoice> {
        vec![
            invoice(1, "Acme Corporation", "Website Redesign", 550000, "2024-06-10", Some(InvoiceStatus::Paid)),
            invoice(2, "Tech Solutions Ltd", "Mobile App Development", 1200000, "2024-06-08", Some(InvoiceStatus::Pending)),
            invoice(3, "Digital Marketing Co", "SEO Optimization", 280000, "2024-06-05", Some(InvoiceStatus::Overdue)),
        ]
    }

    fn numbers(result: &[&Invoice]) -> Vec<String> {
        result.iter().map(|i| i.invoice_number.to_string()).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let invoices = sample();
        let result = filter_invoices(&invoices, &FilterCriteria::new());
        assert_eq!(numbers(&result), vec!["INV-001", "INV-002", "INV-003"]);
        assert!(!FilterCriteria::new().is_active());
    }

    #[test]
    fn test_status_filter_paid() {
        let invoices = sample();
        let criteria = FilterCriteria::new().status(InvoiceStatus::Paid);
        let result = filter_invoices(&invoices, &criteria);
        assert_eq!(numbers(&result), vec!["INV-001"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let invoices = sample();
        let criteria = FilterCriteria::new().search("acme");
        let result = filter_invoices(&invoices, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].customer, "Acme Corporation");
    }

    #[test]
    fn test_search_covers_project_and_number() {
        let invoices = sample();
        assert_eq!(
            numbers(&filter_invoices(&invoices, &FilterCriteria::new().search("MOBILE"))),
            vec!["INV-002"]
        );
        assert_eq!(
            numbers(&filter_invoices(&invoices, &FilterCriteria::new().search("inv-003"))),
            vec!["INV-003"]
        );
    }

    #[test]
    fn test_amount_filter_is_substring_of_plain_number() {
        let invoices = vec![
            invoice(1, "A", "P", 550000, "2024-06-10", None),
            invoice(2, "B", "P", 150000, "2024-06-10", None),
            invoice(3, "C", "P", 60000, "2024-06-10", None),
        ];
        let criteria = FilterCriteria::new().field(FilterField::Amount, "5");
        assert_eq!(
            numbers(&filter_invoices(&invoices, &criteria)),
            vec!["INV-001", "INV-002"]
        );
    }

    #[test]
    fn test_date_filter() {
        let invoices = sample();
        let criteria = FilterCriteria::new().field(FilterField::Date, "06-0");
        assert_eq!(
            numbers(&filter_invoices(&invoices, &criteria)),
            vec!["INV-002", "INV-003"]
        );
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let invoices = sample();
        let criteria = FilterCriteria::new()
            .search("o")
            .status(InvoiceStatus::Overdue)
            .field(FilterField::Customer, "digital");
        assert_eq!(numbers(&filter_invoices(&invoices, &criteria)), vec!["INV-003"]);

        let none = FilterCriteria::new()
            .search("acme")
            .status(InvoiceStatus::Pending);
        assert!(filter_invoices(&invoices, &none).is_empty());
    }

    #[test]
    fn test_missing_status_only_matches_all() {
        let invoices = vec![invoice(1, "A", "P", 100, "2024-01-01", None)];
        assert_eq!(filter_invoices(&invoices, &FilterCriteria::new()).len(), 1);
        for status in InvoiceStatus::ALL {
            let criteria = FilterCriteria::new().status(status);
            assert!(filter_invoices(&invoices, &criteria).is_empty());
        }
    }

    #[test]
    fn test_status_filter_parse_and_cycle() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "paid".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(InvoiceStatus::Paid)
        );
        assert!("bogus".parse::<StatusFilter>().is_err());

        let mut filter = StatusFilter::All;
        for _ in 0..4 {
            filter = filter.next();
        }
        assert_eq!(filter, StatusFilter::All);
    }

    #[test]
    fn test_is_active() {
        assert!(FilterCriteria::new().search("x").is_active());
        assert!(FilterCriteria::new().status(InvoiceStatus::Paid).is_active());
        assert!(FilterCriteria::new().field(FilterField::Project, "x").is_active());
    }

    fn arb_invoice() -> impl Strategy<Value = Invoice> {
        (
            1u32..500,
            "[A-Za-z ]{0,12}",
            "[A-Za-z ]{0,12}",
            0i64..10_000_000,
            0u32..365,
            prop::option::of(prop::sample::select(InvoiceStatus::ALL.to_vec())),
        )
            .prop_map(|(seq, customer, project, cents, offset, status)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(offset as i64);
                Invoice {
                    id: InvoiceId::new(),
                    invoice_number: InvoiceNumber::from_sequence(seq),
                    customer,
                    project,
                    amount: Money::from_cents(cents),
                    currency: Currency::Eur,
                    description: String::new(),
                    date,
                    due_date: date,
                    status,
                }
            })
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            "[a-z0-9]{0,2}",
            prop::sample::select(vec![
                StatusFilter::All,
                StatusFilter::Only(InvoiceStatus::Pending),
                StatusFilter::Only(InvoiceStatus::Paid),
                StatusFilter::Only(InvoiceStatus::Overdue),
            ]),
            "[0-9]{0,2}",
            "[a-z]{0,1}",
        )
            .prop_map(|(search, status, amount, customer)| FilterCriteria {
                search_term: search,
                status,
                fields: FieldFilters {
                    amount,
                    customer,
                    ..FieldFilters::default()
                },
            })
    }

    proptest! {
        #[test]
        fn prop_empty_criteria_is_identity(invoices in prop::collection::vec(arb_invoice(), 0..20)) {
            let result: Vec<Invoice> = filter_invoices(&invoices, &FilterCriteria::new())
                .into_iter()
                .cloned()
                .collect();
            prop_assert_eq!(result, invoices);
        }

        #[test]
        fn prop_filter_is_idempotent(
            invoices in prop::collection::vec(arb_invoice(), 0..20),
            criteria in arb_criteria(),
        ) {
            let once: Vec<Invoice> = filter_invoices(&invoices, &criteria).into_iter().cloned().collect();
            let twice: Vec<Invoice> = filter_invoices(&once, &criteria).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_filter_preserves_order(
            invoices in prop::collection::vec(arb_invoice(), 0..20),
            criteria in arb_criteria(),
        ) {
            let positions: Vec<usize> = filter_invoices(&invoices, &criteria)
                .into_iter()
                .map(|hit| invoices.iter().position(|inv| std::ptr::eq(inv, hit)).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
