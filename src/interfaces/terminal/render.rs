use crate::application::view::{Banner, FieldView, FormView};

const BUSY_INDICATOR: &str = "...";

fn render_field(field: &FieldView) -> String {
    let mut text = if field.options.is_empty() {
        format!("{}: {}\n", field.label, field.value)
    } else {
        format!(
            "{}: {} [{}]\n",
            field.label,
            field.value,
            field.options.join(" | ")
        )
    };
    if let Some(error) = &field.error {
        text.push_str(&format!("  ! {error}\n"));
    }
    text
}

/// Renders the form as plain text, one input per line with its error (if
/// any) on the line beneath it.
pub fn render(view: &FormView) -> String {
    let mut out = format!("{}\n{}\n", view.title, "=".repeat(view.title.len()));
    for field in &view.fields {
        out.push_str(&render_field(field));
    }

    out.push_str(&match view.submit.label() {
        Some(label) => format!("[ {label} ]\n"),
        None => format!("[ {BUSY_INDICATOR} ] (disabled)\n"),
    });

    if let Some(banner) = &view.banner {
        out.push_str(&render_banner(banner));
        out.push('\n');
    }
    out
}

pub fn render_banner(banner: &Banner) -> String {
    match banner {
        Banner::Success(text) => format!("[success] {text}"),
        Banner::Error(text) => format!("[error] {text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{FormData, FormField};
    use crate::domain::payout::ApiResponse;
    use crate::domain::validation::{ValidationErrors, validate};
    use serde_json::json;

    #[test]
    fn test_render_errors_beneath_fields() {
        let mut form = FormData::new();
        form.set(FormField::Amount, "0").unwrap();
        let errors = validate(&form);
        let text = render(&FormView::build(&form, &errors, None, false));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Payout Form");
        assert_eq!(lines[2], "Amount: 0");
        assert_eq!(lines[3], "  ! Amount must be a positive number.");
        assert!(text.contains("Transaction Type: NEFT [NEFT | IMPS | RTGS | UPI]"));
        assert!(text.contains("[ Submit ]"));
        assert!(!text.contains("[success]"));
    }

    #[test]
    fn test_render_busy_and_banner() {
        let form = FormData::new();
        let busy = render(&FormView::build(&form, &ValidationErrors::new(), None, true));
        assert!(busy.contains("[ ... ] (disabled)"));
        assert!(!busy.contains("[ Submit ]"));

        let failed = ApiResponse::Failure(json!({"message": "bad account"}));
        let text = render(&FormView::build(
            &form,
            &ValidationErrors::new(),
            Some(&failed),
            false,
        ));
        assert!(text.ends_with("[error] Error: {\"message\":\"bad account\"}\n"));
    }
}
