//! Contact page and form submission.
//!
//! Submissions are validated and logged. There is no outbound mail delivery;
//! the call center phone number is the primary conversion path and the form
//! exists as a secondary channel.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::filters;
use crate::state::AppState;

/// Contact form payload.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: ContactForm,
    pub error: Option<String>,
    pub submitted: bool,
    pub phone: String,
    pub phone_raw: String,
}

/// Display the contact page.
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    ContactTemplate {
        form: ContactForm::default(),
        error: None,
        submitted: false,
        phone: state.config().contact_phone.clone(),
        phone_raw: state.config().contact_phone_raw(),
    }
}

/// Handle a contact form submission.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> impl IntoResponse {
    let error = validate(&form);

    if error.is_none() {
        tracing::info!(
            name = %form.name,
            email = %form.email,
            "Contact form submission"
        );
    }

    let submitted = error.is_none();
    ContactTemplate {
        form: if submitted { ContactForm::default() } else { form },
        error,
        submitted,
        phone: state.config().contact_phone.clone(),
        phone_raw: state.config().contact_phone_raw(),
    }
}

/// Validate a submission. Returns a user-facing message for the first
/// problem found.
fn validate(form: &ContactForm) -> Option<String> {
    if form.name.trim().is_empty() {
        return Some("Please enter your name.".to_string());
    }
    let email = form.email.trim();
    if email.is_empty() || !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Some("Please enter a valid email address.".to_string());
    }
    if form.message.trim().is_empty() {
        return Some("Please enter a message.".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            phone: String::new(),
            message: "Which plans are available near Albany?".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate(&valid_form()).is_none());
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let mut form = valid_form();
        form.name = "  ".to_string();
        assert!(validate(&form).is_some());

        let mut form = valid_form();
        form.message = String::new();
        assert!(validate(&form).is_some());
    }

    #[test]
    fn test_bad_email_is_rejected() {
        for email in ["", "no-at-sign", "@example.com", "user@"] {
            let mut form = valid_form();
            form.email = email.to_string();
            assert!(validate(&form).is_some(), "accepted {email:?}");
        }
    }
}
