//! Invoice form validation
//!
//! The form is a typed record of raw text inputs. Validation checks every
//! field and reports all failures at once in a [`FormErrors`] record of the
//! same shape; only a fully valid form becomes an [`InvoiceDraft`].

use chrono::NaiveDate;

use crate::models::money::MoneyParseError;
use crate::models::{Currency, Invoice, InvoiceDraft, InvoiceStatus, Money};

/// Description stored when the lenient form is submitted without one
pub const DESCRIPTION_PLACEHOLDER: &str = "No description provided";

const DATE_FORMAT: &str = "%Y-%m-%d";

const AMOUNT_TOO_LARGE: &str = "Amount must be at most 1,000,000,000,000";

/// Fields of the invoice form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Customer,
    Project,
    Amount,
    Currency,
    Description,
    Date,
    DueDate,
    Status,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        Self::Customer,
        Self::Project,
        Self::Amount,
        Self::Currency,
        Self::Description,
        Self::Date,
        Self::DueDate,
        Self::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Project => "Project",
            Self::Amount => "Amount",
            Self::Currency => "Currency",
            Self::Description => "Description",
            Self::Date => "Invoice Date",
            Self::DueDate => "Due Date",
            Self::Status => "Status",
        }
    }

    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the field is free text (as opposed to a picker)
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Currency | Self::Status)
    }
}

/// Rules that vary between form configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
    pub require_description: bool,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            require_description: true,
        }
    }
}

/// Raw form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceForm {
    pub customer: String,
    pub project: String,
    pub amount: String,
    pub currency: Currency,
    pub description: String,
    pub date: String,
    pub due_date: String,
    pub status: InvoiceStatus,
}

/// Per-field error messages, shaped like [`InvoiceForm`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub customer: Option<String>,
    pub project: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub due_date: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// The error for `field`, if any
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Customer => self.customer.as_deref(),
            FormField::Project => self.project.as_deref(),
            FormField::Amount => self.amount.as_deref(),
            FormField::Description => self.description.as_deref(),
            FormField::Date => self.date.as_deref(),
            FormField::DueDate => self.due_date.as_deref(),
            FormField::Currency | FormField::Status => None,
        }
    }

    /// All errors in field order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        FormField::ALL
            .iter()
            .filter_map(move |f| self.get(*f).map(|msg| (*f, msg)))
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.iter().map(|(_, msg)| msg).collect();
        f.write_str(&messages.join("; "))
    }
}

impl InvoiceForm {
    /// An empty form for a new invoice, dated `today`
    pub fn new(today: NaiveDate, currency: Currency) -> Self {
        Self {
            customer: String::new(),
            project: String::new(),
            amount: String::new(),
            currency,
            description: String::new(),
            date: today.format(DATE_FORMAT).to_string(),
            due_date: String::new(),
            status: InvoiceStatus::default(),
        }
    }

    /// A form pre-populated from an existing invoice
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            customer: invoice.customer.clone(),
            project: invoice.project.clone(),
            amount: invoice.amount.to_string(),
            currency: invoice.currency,
            description: invoice.description.clone(),
            date: invoice.date.format(DATE_FORMAT).to_string(),
            due_date: invoice.due_date.format(DATE_FORMAT).to_string(),
            status: invoice.status.unwrap_or_default(),
        }
    }

    /// Mutable access to a text field; `None` for pickers
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Customer => Some(&mut self.customer),
            FormField::Project => Some(&mut self.project),
            FormField::Amount => Some(&mut self.amount),
            FormField::Description => Some(&mut self.description),
            FormField::Date => Some(&mut self.date),
            FormField::DueDate => Some(&mut self.due_date),
            FormField::Currency | FormField::Status => None,
        }
    }

    /// Display text of any field
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Customer => self.customer.clone(),
            FormField::Project => self.project.clone(),
            FormField::Amount => self.amount.clone(),
            FormField::Currency => format!("{} ({})", self.currency.code(), self.currency.symbol()),
            FormField::Description => self.description.clone(),
            FormField::Date => self.date.clone(),
            FormField::DueDate => self.due_date.clone(),
            FormField::Status => self.status.to_string(),
        }
    }

    /// Check every field and build a draft, or report every failing field
    pub fn validate(&self, rules: FormRules) -> Result<InvoiceDraft, FormErrors> {
        let mut errors = FormErrors::default();

        let customer = self.customer.trim();
        if customer.is_empty() {
            errors.customer = Some("Customer is required".into());
        }

        let project = self.project.trim();
        if project.is_empty() {
            errors.project = Some("Project is required".into());
        }

        let amount = match Money::parse(&self.amount) {
            Ok(amount) if amount > Money::MAX => {
                errors.amount = Some(AMOUNT_TOO_LARGE.into());
                None
            }
            Ok(amount) if amount.is_positive() => Some(amount),
            Ok(_) => {
                errors.amount = Some("Amount must be greater than 0".into());
                None
            }
            Err(MoneyParseError::OutOfRange(_)) => {
                errors.amount = Some(AMOUNT_TOO_LARGE.into());
                None
            }
            Err(_) if self.amount.trim().is_empty() => {
                errors.amount = Some("Amount must be greater than 0".into());
                None
            }
            Err(_) => {
                errors.amount = Some("Amount must be a number".into());
                None
            }
        };

        let description = self.description.trim();
        if rules.require_description && description.is_empty() {
            errors.description = Some("Description is required".into());
        }

        let date = parse_date(&self.date, "Invoice date", &mut errors.date);
        let due_date = parse_date(&self.due_date, "Due date", &mut errors.due_date);

        match (amount, date, due_date) {
            (Some(amount), Some(date), Some(due_date)) if errors.is_empty() => Ok(InvoiceDraft {
                customer: customer.to_string(),
                project: project.to_string(),
                amount,
                currency: self.currency,
                description: if description.is_empty() {
                    DESCRIPTION_PLACEHOLDER.to_string()
                } else {
                    description.to_string()
                },
                date,
                due_date,
                status: self.status,
            }),
            _ => Err(errors),
        }
    }

    /// Validate and hand the draft to `on_submit`; on failure nothing is called
    pub fn submit<F>(&self, rules: FormRules, on_submit: F) -> Result<(), FormErrors>
    where
        F: FnOnce(InvoiceDraft),
    {
        let draft = self.validate(rules)?;
        on_submit(draft);
        Ok(())
    }
}

fn parse_date(raw: &str, label: &str, error: &mut Option<String>) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        *error = Some(format!("{} is required", label));
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            *error = Some(format!("{} must be YYYY-MM-DD", label));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceId, InvoiceNumber};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn filled() -> InvoiceForm {
        InvoiceForm {
            customer: "  Acme Corporation ".into(),
            project: "Website Redesign".into(),
            amount: "5500".into(),
            currency: Currency::Usd,
            description: "Complete website redesign".into(),
            date: "2024-06-10".into(),
            due_date: "2024-07-10".into(),
            status: InvoiceStatus::Pending,
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let form = InvoiceForm::new(today(), Currency::Gbp);
        assert_eq!(form.date, "2024-06-10");
        assert!(form.due_date.is_empty());
        assert_eq!(form.currency, Currency::Gbp);
        assert_eq!(form.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_valid_form_builds_trimmed_draft() {
        let draft = filled().validate(FormRules::default()).unwrap();
        assert_eq!(draft.customer, "Acme Corporation");
        assert_eq!(draft.amount, Money::from_cents(550000));
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
    }

    #[test]
    fn test_zero_amount_is_rejected_without_submit() {
        let mut form = filled();
        form.amount = "0".into();

        let mut created = 0;
        let result = form.submit(FormRules::default(), |_| created += 1);

        let errors = result.unwrap_err();
        assert_eq!(errors.amount.as_deref(), Some("Amount must be greater than 0"));
        assert_eq!(created, 0);
    }

    #[test]
    fn test_huge_amount_is_reported_on_the_field() {
        let mut form = filled();
        for text in ["92233720368547759", "1000000000000.01"] {
            form.amount = text.into();
            let errors = form.validate(FormRules::default()).unwrap_err();
            assert_eq!(errors.amount.as_deref(), Some(AMOUNT_TOO_LARGE));
            assert!(errors.customer.is_none());
        }

        form.amount = "1000000000000".into();
        assert_eq!(form.validate(FormRules::default()).unwrap().amount, Money::MAX);
    }

    #[test]
    fn test_valid_submit_invokes_callback_once() {
        let mut submitted = Vec::new();
        filled()
            .submit(FormRules::default(), |draft| submitted.push(draft))
            .unwrap();
        assert_eq!(submitted.len(), 1);
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let form = InvoiceForm {
            customer: "   ".into(),
            project: String::new(),
            amount: "abc".into(),
            currency: Currency::Usd,
            description: " ".into(),
            date: String::new(),
            due_date: "10/07/2024".into(),
            status: InvoiceStatus::Paid,
        };
        let errors = form.validate(FormRules::default()).unwrap_err();

        let fields: Vec<FormField> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                FormField::Customer,
                FormField::Project,
                FormField::Amount,
                FormField::Description,
                FormField::Date,
                FormField::DueDate,
            ]
        );
        assert_eq!(errors.amount.as_deref(), Some("Amount must be a number"));
        assert_eq!(errors.due_date.as_deref(), Some("Due date must be YYYY-MM-DD"));
    }

    #[test]
    fn test_lenient_description_gets_placeholder() {
        let mut form = filled();
        form.description = String::new();

        assert!(form.validate(FormRules::default()).is_err());

        let lenient = FormRules {
            require_description: false,
        };
        let draft = form.validate(lenient).unwrap();
        assert_eq!(draft.description, DESCRIPTION_PLACEHOLDER);
    }

    #[test]
    fn test_due_date_before_issue_date_is_accepted() {
        let mut form = filled();
        form.due_date = "2024-01-01".into();
        assert!(form.validate(FormRules::default()).is_ok());
    }

    #[test]
    fn test_from_invoice_round_trips_through_validation() {
        let draft = filled().validate(FormRules::default()).unwrap();
        let invoice = Invoice::from_draft(InvoiceId::new(), InvoiceNumber::from_sequence(9), draft.clone());

        let form = InvoiceForm::from_invoice(&invoice);
        assert_eq!(form.amount, "5500.00");
        assert_eq!(form.validate(FormRules::default()).unwrap(), draft);
    }

    #[test]
    fn test_field_navigation_wraps() {
        assert_eq!(FormField::Status.next(), FormField::Customer);
        assert_eq!(FormField::Customer.prev(), FormField::Status);
        assert!(!FormField::Currency.is_text());
        assert!(FormField::DueDate.is_text());
    }

    #[test]
    fn test_errors_display_joins_messages() {
        let errors = FormErrors {
            customer: Some("Customer is required".into()),
            amount: Some("Amount must be greater than 0".into()),
            ..FormErrors::default()
        };
        assert_eq!(
            errors.to_string(),
            "Customer is required; Amount must be greater than 0"
        );
    }
}
