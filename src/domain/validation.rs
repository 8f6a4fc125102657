use super::form::{FormData, FormField};
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

static PHONE_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$"));
static EMAIL_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+"));
static ACCOUNT_NUMBER_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$"));

fn matches(regex: &LazyLock<Result<Regex, regex::Error>>, value: &str) -> bool {
    match regex.as_ref() {
        Ok(regex) => regex.is_match(value),
        Err(e) => {
            tracing::error!(error = %e, "validation pattern failed to compile");
            false
        }
    }
}

/// True when `value` is written only with the characters of a decimal
/// literal: sign, digits, `.` and an exponent marker.
fn is_numeric_literal(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

/// Parses a payout amount the way a numeric input field would: surrounding
/// whitespace is ignored and scientific notation is accepted.
///
/// Returns `None` for anything that is not a decimal literal, and for
/// literals outside the range `Decimal` can hold.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if !is_numeric_literal(value) {
        return None;
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

// Only the sign matters here, so `f64` covers literals too large or too
// small for `Decimal`.
fn is_positive_amount(value: &str) -> bool {
    let value = value.trim();
    is_numeric_literal(value) && value.parse::<f64>().is_ok_and(|amount| amount > 0.0)
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn is_phone_number(value: &str) -> bool {
    matches(&PHONE_REGEX, value)
}

fn is_email(value: &str) -> bool {
    matches(&EMAIL_REGEX, value)
}

fn is_account_number(value: &str) -> bool {
    matches(&ACCOUNT_NUMBER_REGEX, value)
}

/// A single validation rule: the field it guards, the predicate its value
/// must satisfy and the message shown when it does not.
pub struct Rule {
    pub field: FormField,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

/// Every rule the form enforces. The transaction type has no rule; it always
/// holds one of its options.
pub const RULES: &[Rule] = &[
    Rule {
        field: FormField::Amount,
        check: is_positive_amount,
        message: "Amount must be a positive number.",
    },
    Rule {
        field: FormField::CustomerName,
        check: is_present,
        message: "Customer name is required.",
    },
    Rule {
        field: FormField::CustomerPhoneNumber,
        check: is_phone_number,
        message: "Phone number must be 10 digits.",
    },
    Rule {
        field: FormField::CustomerEmail,
        check: is_email,
        message: "Valid email is required.",
    },
    Rule {
        field: FormField::DestinationBank,
        check: is_present,
        message: "Destination bank is required.",
    },
    Rule {
        field: FormField::AccountNumber,
        check: is_account_number,
        message: "Account number must be numeric.",
    },
    Rule {
        field: FormField::BeneficiaryLocation,
        check: is_present,
        message: "Beneficiary location is required.",
    },
    Rule {
        field: FormField::Ifsc,
        check: is_present,
        message: "IFSC code is required.",
    },
    Rule {
        field: FormField::Reference,
        check: is_present,
        message: "Reference ID is required.",
    },
];

/// Field-level validation messages. An empty set means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Runs every rule against `form` and collects the failures.
///
/// Rules are evaluated independently; a failing rule never stops the others.
pub fn validate(form: &FormData) -> ValidationErrors {
    let errors = RULES
        .iter()
        .filter(|rule| !(rule.check)(form.value(rule.field)))
        .map(|rule| (rule.field, rule.message.to_string()))
        .collect();
    ValidationErrors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_form() -> FormData {
        FormData {
            amount: "1500.50".to_string(),
            customer_name: "Asha Rao".to_string(),
            customer_phone_number: "9876543210".to_string(),
            customer_email: "asha@example.in".to_string(),
            destination_bank: "HDFC Bank".to_string(),
            account_number: "50100012345678".to_string(),
            beneficiary_location: "Pune".to_string(),
            ifsc: "HDFC0000123".to_string(),
            reference: "INV-2024-001".to_string(),
            ..FormData::default()
        }
    }

    fn error_for(field: FormField, value: &str) -> Option<String> {
        let mut form = valid_form();
        form.set(field, value).unwrap();
        validate(&form).get(field).map(str::to_string)
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_rule() {
        let errors = validate(&FormData::new());
        assert_eq!(errors.len(), RULES.len());
        assert!(!errors.contains(FormField::TransactionType));
        assert_eq!(
            errors.get(FormField::Ifsc),
            Some("IFSC code is required.")
        );
    }

    #[test]
    fn test_only_violated_fields_are_reported() {
        let mut form = valid_form();
        form.customer_email = "not-an-email".to_string();
        form.account_number = "12A34".to_string();

        let errors = validate(&form);
        let fields: Vec<FormField> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![FormField::CustomerEmail, FormField::AccountNumber]
        );
    }

    #[test]
    fn test_amount_rule() {
        for bad in ["0", "-5", "", "   ", "abc", "0.0000", "1_000", "-1e30", "inf", "0x10"] {
            assert!(
                error_for(FormField::Amount, bad).is_some(),
                "expected error for {bad:?}"
            );
        }
        for good in [
            "1",
            " 25 ",
            "0.01",
            "1e3",
            "99999999999999999999999999999",
            "1e30",
            "0.000000000000000000000000000001",
        ] {
            assert!(
                error_for(FormField::Amount, good).is_none(),
                "unexpected error for {good:?}"
            );
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100.25"), Some(dec!(100.25)));
        assert_eq!(parse_amount("1.5e2"), Some(dec!(150)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("twelve"), None);
        assert_eq!(parse_amount("1_000"), None);
    }

    #[test]
    fn test_phone_rule() {
        assert!(error_for(FormField::CustomerPhoneNumber, "12345").is_some());
        assert!(error_for(FormField::CustomerPhoneNumber, "12345678901").is_some());
        assert!(error_for(FormField::CustomerPhoneNumber, "12345 67890").is_some());
        assert!(error_for(FormField::CustomerPhoneNumber, "١٢٣٤٥٦٧٨٩٠").is_some());
        assert!(error_for(FormField::CustomerPhoneNumber, "1234567890").is_none());
    }

    #[test]
    fn test_email_rule() {
        assert!(error_for(FormField::CustomerEmail, "not-an-email").is_some());
        assert!(error_for(FormField::CustomerEmail, "a@b").is_some());
        assert!(error_for(FormField::CustomerEmail, "a@b.co").is_none());
        // Deliberately permissive: surrounding text is tolerated.
        assert!(error_for(FormField::CustomerEmail, "mail: a@b.co").is_none());
    }

    #[test]
    fn test_account_number_rule() {
        assert!(error_for(FormField::AccountNumber, "12A34").is_some());
        assert!(error_for(FormField::AccountNumber, "").is_some());
        assert!(error_for(FormField::AccountNumber, " 12345").is_some());
        assert!(error_for(FormField::AccountNumber, "12345").is_none());
    }

    #[test]
    fn test_required_text_fields_are_trimmed() {
        for field in [
            FormField::CustomerName,
            FormField::DestinationBank,
            FormField::BeneficiaryLocation,
            FormField::Ifsc,
            FormField::Reference,
        ] {
            assert!(error_for(field, " \t ").is_some(), "{field} should be required");
            assert!(error_for(field, " x ").is_none());
        }
    }

    #[test]
    fn test_errors_serialize_by_wire_name() {
        let mut form = valid_form();
        form.reference.clear();
        let json = serde_json::to_value(validate(&form)).unwrap();
        assert_eq!(json, serde_json::json!({"reference": "Reference ID is required."}));
    }
}
