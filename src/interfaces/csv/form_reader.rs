use crate::domain::form::FormField;
use crate::error::{PayoutError, Result};
use std::io::Read;

/// The field values of one batch row, in column order.
pub type FormRow = Vec<(FormField, String)>;

/// Reads pre-filled payout forms from a CSV source.
///
/// The header row names the fields by their wire names (case-insensitive).
/// Columns may be omitted and rows may be short; missing values simply leave
/// the form's defaults in place. A blank `transactionType` cell counts as
/// missing, so the row keeps the default selection.
pub struct FormReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> FormReader<R> {
    /// Creates a new `FormReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Resolves the header row and returns a lazy iterator over the rows.
    ///
    /// Fails up front when a header does not name a form field.
    pub fn rows(mut self) -> Result<impl Iterator<Item = Result<FormRow>>> {
        let fields = self
            .reader
            .headers()?
            .iter()
            .map(|header| {
                header
                    .parse::<FormField>()
                    .map_err(|_| PayoutError::UnknownField(header.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(self
            .reader
            .into_records()
            .map(move |record| -> Result<FormRow> {
                let record = record?;
                Ok(fields
                    .iter()
                    .copied()
                    .zip(record.iter())
                    .filter(|(field, value)| {
                        !(*field == FormField::TransactionType && value.is_empty())
                    })
                    .map(|(field, value)| (field, value.to_string()))
                    .collect())
            }))
    }
}
