use crate::error::{PayoutError, Result};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Identifies one input of the payout form.
///
/// The string form of each variant is the field's wire name, i.e. the key it
/// carries in the JSON payload and the column header accepted in batch files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum FormField {
    Amount,
    CustomerName,
    CustomerPhoneNumber,
    CustomerEmail,
    TransactionType,
    DestinationBank,
    AccountNumber,
    BeneficiaryLocation,
    Ifsc,
    Reference,
}

impl FormField {
    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Amount => "Amount",
            FormField::CustomerName => "Customer Name",
            FormField::CustomerPhoneNumber => "Customer Phone Number",
            FormField::CustomerEmail => "Customer Email",
            FormField::TransactionType => "Transaction Type",
            FormField::DestinationBank => "Destination Bank",
            FormField::AccountNumber => "Account Number",
            FormField::BeneficiaryLocation => "Beneficiary Location",
            FormField::Ifsc => "IFSC",
            FormField::Reference => "Reference",
        }
    }

    pub fn wire_name(&self) -> &'static str {
        self.into()
    }
}

/// Bank transfer rail used for the payout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum TransactionType {
    #[default]
    Neft,
    Imps,
    Rtgs,
    Upi,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// The values currently entered in the form.
///
/// Everything except the transaction type is kept as the raw string the user
/// typed; validation happens separately and never rewrites these values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub amount: String,
    pub customer_name: String,
    pub customer_phone_number: String,
    pub customer_email: String,
    pub transaction_type: TransactionType,
    pub destination_bank: String,
    pub account_number: String,
    pub beneficiary_location: String,
    pub ifsc: String,
    pub reference: String,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `field` as it would be displayed.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Amount => &self.amount,
            FormField::CustomerName => &self.customer_name,
            FormField::CustomerPhoneNumber => &self.customer_phone_number,
            FormField::CustomerEmail => &self.customer_email,
            FormField::TransactionType => self.transaction_type.as_str(),
            FormField::DestinationBank => &self.destination_bank,
            FormField::AccountNumber => &self.account_number,
            FormField::BeneficiaryLocation => &self.beneficiary_location,
            FormField::Ifsc => &self.ifsc,
            FormField::Reference => &self.reference,
        }
    }

    /// Overwrites a single field, leaving the others untouched.
    ///
    /// Free-text fields accept any string. The transaction type only accepts
    /// one of its options and reports anything else as
    /// [`PayoutError::UnknownOption`], leaving the previous selection in place.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let slot = match field {
            FormField::TransactionType => {
                self.transaction_type =
                    value
                        .trim()
                        .parse()
                        .map_err(|_| PayoutError::UnknownOption {
                            field: field.wire_name().to_string(),
                            value: value.clone(),
                        })?;
                return Ok(());
            }
            FormField::Amount => &mut self.amount,
            FormField::CustomerName => &mut self.customer_name,
            FormField::CustomerPhoneNumber => &mut self.customer_phone_number,
            FormField::CustomerEmail => &mut self.customer_email,
            FormField::DestinationBank => &mut self.destination_bank,
            FormField::AccountNumber => &mut self.account_number,
            FormField::BeneficiaryLocation => &mut self.beneficiary_location,
            FormField::Ifsc => &mut self.ifsc,
            FormField::Reference => &mut self.reference,
        };
        *slot = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_field_wire_names() {
        let names: Vec<&str> = FormField::iter().map(|f| f.wire_name()).collect();
        assert_eq!(
            names,
            vec![
                "amount",
                "customerName",
                "customerPhoneNumber",
                "customerEmail",
                "transactionType",
                "destinationBank",
                "accountNumber",
                "beneficiaryLocation",
                "ifsc",
                "reference",
            ]
        );
        assert_eq!(
            "CUSTOMEREMAIL".parse::<FormField>().unwrap(),
            FormField::CustomerEmail
        );
        assert!("iban".parse::<FormField>().is_err());
    }

    #[test]
    fn test_new_form_defaults_to_neft() {
        let form = FormData::new();
        assert_eq!(form.transaction_type, TransactionType::Neft);
        assert_eq!(form.value(FormField::TransactionType), "NEFT");
        assert_eq!(form.value(FormField::Amount), "");
    }

    #[test]
    fn test_set_overwrites_only_that_field() {
        let mut form = FormData::new();
        form.set(FormField::CustomerName, "Asha").unwrap();
        form.set(FormField::Ifsc, "HDFC0000123").unwrap();
        form.set(FormField::CustomerName, "Asha Rao").unwrap();

        assert_eq!(form.customer_name, "Asha Rao");
        assert_eq!(form.ifsc, "HDFC0000123");
        assert_eq!(form.reference, "");
    }

    #[test]
    fn test_set_transaction_type() {
        let mut form = FormData::new();
        form.set(FormField::TransactionType, "upi").unwrap();
        assert_eq!(form.transaction_type, TransactionType::Upi);

        let result = form.set(FormField::TransactionType, "SWIFT");
        assert!(matches!(result, Err(PayoutError::UnknownOption { .. })));
        assert_eq!(form.transaction_type, TransactionType::Upi);
    }

    #[test]
    fn test_form_serializes_with_wire_names() {
        let mut form = FormData::new();
        form.set(FormField::CustomerPhoneNumber, "9876543210").unwrap();
        let json = serde_json::to_value(&form).unwrap();

        assert_eq!(json["customerPhoneNumber"], "9876543210");
        assert_eq!(json["transactionType"], "NEFT");
        assert_eq!(json.as_object().unwrap().len(), 10);
    }
}
