use crate::domain::form::{FormData, FormField, TransactionType};
use crate::domain::payout::ApiResponse;
use crate::domain::validation::ValidationErrors;
use strum::IntoEnumIterator;

pub const FORM_TITLE: &str = "Payout Form";
pub const SUBMIT_LABEL: &str = "Submit";
pub const SUCCESS_MESSAGE: &str = "Payout initiated successfully!";

/// One labelled input as it should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
    /// Selectable options; empty for free-text inputs.
    pub options: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitView {
    pub disabled: bool,
    pub busy: bool,
}

impl SubmitView {
    /// The caption shown on the control, `None` while the busy indicator
    /// replaces it.
    pub fn label(&self) -> Option<&'static str> {
        (!self.busy).then_some(SUBMIT_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn text(&self) -> &str {
        match self {
            Banner::Success(text) | Banner::Error(text) => text,
        }
    }
}

impl From<&ApiResponse> for Banner {
    fn from(response: &ApiResponse) -> Self {
        match response {
            ApiResponse::Success(_) => Banner::Success(SUCCESS_MESSAGE.to_string()),
            ApiResponse::Failure(data) => Banner::Error(format!("Error: {data}")),
        }
    }
}

/// Everything observable about the form at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub submit: SubmitView,
    pub banner: Option<Banner>,
}

impl FormView {
    pub fn build(
        form: &FormData,
        errors: &ValidationErrors,
        response: Option<&ApiResponse>,
        submitting: bool,
    ) -> Self {
        let fields = FormField::iter()
            .map(|field| FieldView {
                field,
                label: field.label(),
                value: form.value(field).to_string(),
                error: errors.get(field).map(str::to_string),
                options: match field {
                    FormField::TransactionType => {
                        TransactionType::iter().map(|t| t.as_str()).collect()
                    }
                    _ => Vec::new(),
                },
            })
            .collect();

        Self {
            title: FORM_TITLE,
            fields,
            submit: SubmitView {
                disabled: submitting,
                busy: submitting,
            },
            banner: response.map(Banner::from),
        }
    }

    pub fn field(&self, field: FormField) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }
}
