use askama::Template;

/// HTML body of the confirmation email.
#[derive(Template)]
#[template(path = "confirmation_email.html")]
pub struct ConfirmationEmailTemplate<'a> {
    pub name: &'a str,
    pub confirmation_url: &'a str,
}
