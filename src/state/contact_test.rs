use super::*;

fn filled() -> ContactSubmission {
    ContactSubmission {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello & welcome".to_owned(),
        message: "Line one\nLine two".to_owned(),
    }
}

// =============================================================
// ContactSubmission
// =============================================================

#[test]
fn filled_submission_validates() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn first_empty_field_is_reported() {
    let submission = ContactSubmission { email: String::new(), message: String::new(), ..filled() };
    assert_eq!(submission.validate(), Err(ContactError::MissingField(ContactField::Email)));
}

#[test]
fn whitespace_counts_as_content() {
    let submission = ContactSubmission { subject: " ".to_owned(), ..filled() };
    assert_eq!(submission.validate(), Ok(()));
}

#[test]
fn body_names_the_sender() {
    assert_eq!(filled().body(), "From: Ada Lovelace (ada@example.com)\n\nMessage:\nLine one\nLine two");
}

#[test]
fn mailto_percent_encodes_subject_and_body() {
    let uri = filled().mailto("charles@example.com");
    assert_eq!(
        uri,
        "mailto:charles@example.com?subject=Hello%20%26%20welcome\
         &body=From%3A%20Ada%20Lovelace%20%28ada%40example.com%29%0A%0AMessage%3A%0ALine%20one%0ALine%20two"
    );
}

#[test]
fn error_message_names_field() {
    let err = ContactError::MissingField(ContactField::Message);
    assert_eq!(err.to_string(), "contact form field `message` is empty");
}

// =============================================================
// ContactForm
// =============================================================

#[test]
fn invalid_submit_alerts_without_handoff() {
    let mut form = ContactForm::new(&ContactConfig::default());
    let mut out = Vec::new();
    let submission = ContactSubmission { message: String::new(), ..filled() };
    form.submit(&submission, &mut out);
    assert_eq!(out, vec![Effect::PreventDefault, Effect::Alert("Please fill in all fields.".to_owned())]);
    assert_eq!(form.handoffs(), 0);
}

#[test]
fn valid_submit_navigates_and_schedules_reset() {
    let mut form = ContactForm::new(&ContactConfig::default());
    let mut out = Vec::new();
    form.submit(&filled(), &mut out);
    assert_eq!(out[0], Effect::PreventDefault);
    assert!(matches!(&out[1], Effect::Navigate(uri) if uri.starts_with("mailto:charles@example.com?subject=")));
    assert_eq!(out[2], Effect::SetTimeout { timer: Timer::FormReset, delay_ms: 100 });
    assert_eq!(form.handoffs(), 1);
}

#[test]
fn reset_clears_form_and_thanks_sender() {
    let form = ContactForm::new(&ContactConfig::default());
    let mut out = Vec::new();
    form.reset(&mut out);
    assert_eq!(
        out,
        vec![
            Effect::ResetForm,
            Effect::Alert("Thank you for your message! I'll be in touch soon.".to_owned()),
        ]
    );
}
