pub const CONTACT_FORM_ID: &str = "contactForm";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
    pub form_id: String,
    pub name_field: String,
    pub email_field: String,
    pub phone_field: String,
    pub message_field: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: CONTACT_FORM_ID.to_string(),
            name_field: "name".to_string(),
            email_field: "email".to_string(),
            phone_field: "phone".to_string(),
            message_field: "message".to_string(),
        }
    }
}

/// The contact form as seen by the submit handler.
pub trait ContactForm {
    /// Current value of the field with the given id; missing fields read as empty.
    fn field_value(&self, field_id: &str) -> String;

    /// Blocking acknowledgment shown to the visitor.
    fn acknowledge(&self, message: &str);

    fn reset(&self);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn read<F: ContactForm + ?Sized>(form: &F, config: &FormConfig) -> Self {
        Self {
            name: form.field_value(&config.name_field),
            email: form.field_value(&config.email_field),
            phone: form.field_value(&config.phone_field),
            message: form.field_value(&config.message_field),
        }
    }

    pub fn acknowledgment(&self) -> String {
        format!(
            "Thank you, {}! Your message has been received. We'll get back to you soon at {}.",
            self.name, self.email
        )
    }
}

/// Reads the form, acknowledges the submission and resets the form. Nothing is sent
/// anywhere.
pub fn handle_submit<F: ContactForm + ?Sized>(form: &F, config: &FormConfig) -> ContactSubmission {
    let submission = ContactSubmission::read(form, config);
    form.acknowledge(&submission.acknowledgment());
    form.reset();
    submission
}
