use super::form_reader::FormRow;
use crate::application::form::SubmitOutcome;
use crate::application::shell::{FORM_ROUTE, Shell};
use crate::domain::ports::PayoutGateway;
use crate::error::Result;
use crate::interfaces::terminal::render::render_banner;
use std::io::Write;

/// Tally of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub invalid: usize,
    pub skipped: usize,
}

/// Submits each row through a freshly mounted form, one at a time.
///
/// Outcomes go to `output` as `row N: ...`; rows that cannot be read or
/// applied are reported on `errors` and skipped.
pub async fn run_batch<G, I, W, E>(
    shell: &Shell<G>,
    rows: I,
    mut output: W,
    mut errors: E,
) -> Result<BatchSummary>
where
    G: PayoutGateway + Clone,
    I: IntoIterator<Item = Result<FormRow>>,
    W: Write,
    E: Write,
{
    let mut summary = BatchSummary::default();

    for (index, row) in rows.into_iter().enumerate() {
        let number = index + 1;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                writeln!(errors, "Error reading row {number}: {e}")?;
                summary.skipped += 1;
                continue;
            }
        };

        let mut form = shell.mount(FORM_ROUTE)?;
        if let Err(e) = row
            .into_iter()
            .try_for_each(|(field, value)| form.change(field, value))
        {
            writeln!(errors, "Error applying row {number}: {e}")?;
            summary.skipped += 1;
            continue;
        }

        match form.submit().await? {
            SubmitOutcome::Invalid => {
                let problems: Vec<String> = form
                    .state()
                    .errors()
                    .iter()
                    .map(|(field, message)| format!("{field}: {message}"))
                    .collect();
                writeln!(output, "row {number}: invalid ({})", problems.join(", "))?;
                summary.invalid += 1;
            }
            outcome => {
                if let Some(banner) = form.view().banner {
                    writeln!(output, "row {number}: {}", render_banner(&banner))?;
                }
                if outcome == SubmitOutcome::Succeeded {
                    summary.succeeded += 1;
                } else {
                    summary.failed += 1;
                }
            }
        }
    }

    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        invalid = summary.invalid,
        skipped = summary.skipped,
        "batch finished"
    );
    Ok(summary)
}
