use std::sync::Arc;
use std::time::Duration;

use leptos::{ev::SubmitEvent, html, prelude::*};
use serde::Serialize;
use thiserror::Error;

use super::content::{EMAIL, LOCATION, SOCIAL_LINKS};
use super::icons::{Icon, IconGlyph};
use super::reveal::{reveal_class, use_reveal};

/// Fixed duration of the stand-in delivery, long enough that the submitting
/// state is actually visible.
const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Field-scoped validation messages; `None` means the field passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

/// Synchronous field validation run before any submission. Every failing
/// field carries its own message; any failure blocks the submit.
pub fn validate(input: &ContactFormInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if input.name.is_empty() {
        errors.name = Some("Name is required");
    }
    if input.email.is_empty() {
        errors.email = Some("Email is required");
    } else if !is_valid_email(&input.email) {
        errors.email = Some("Invalid email address");
    }
    if input.subject.is_empty() {
        errors.subject = Some("Subject is required");
    }
    if input.message.is_empty() {
        errors.message = Some("Message is required");
    } else if input.message.chars().count() < MIN_MESSAGE_LEN {
        errors.message = Some("Message must be at least 10 characters");
    }
    if errors.is_clean() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Accepts `local@domain.tld` shapes: non-empty local part, a dotted domain,
/// and an alphabetic suffix of at least two characters.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, suffix)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && suffix.len() >= 2 && suffix.chars().all(|c| c.is_ascii_alphabetic())
}

/// Submission lifecycle: idle until a validated submit, then submitting,
/// then success or error. The next attempt resets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("delivery endpoint rejected the message")]
    Rejected,
    #[error("delivery endpoint is unreachable")]
    Unreachable,
}

/// External collaborator that carries a validated message off the page.
///
/// The shipped implementation is [`SimulatedDelivery`], which never performs
/// network I/O. A real deployment must supply a mail- or API-backed
/// implementation of this trait with the same contract: one call per
/// validated submission, success or failure as the result.
pub trait ContactDelivery: Send + Sync {
    fn deliver(&self, message: &ContactFormInput) -> Result<(), DeliveryError>;
}

/// Stand-in collaborator used until a backend exists: logs the payload it
/// would have sent and reports success.
pub struct SimulatedDelivery;

impl ContactDelivery for SimulatedDelivery {
    fn deliver(&self, message: &ContactFormInput) -> Result<(), DeliveryError> {
        match serde_json::to_string(message) {
            Ok(payload) => log::info!("form submitted: {payload}"),
            Err(err) => log::warn!("form payload not serializable: {err}"),
        }
        Ok(())
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let (errors, set_errors) = signal(FieldErrors::default());
    let (status, set_status) = signal(SubmissionStatus::default());

    let delivery: StoredValue<Arc<dyn ContactDelivery>> =
        StoredValue::new(Arc::new(SimulatedDelivery));

    let read_input = move || ContactFormInput {
        name: name_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default(),
        email: email_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default(),
        subject: subject_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default(),
        message: message_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default(),
    };

    let clear_fields = move || {
        for input in [name_ref, email_ref, subject_ref] {
            if let Some(el) = input.get_untracked() {
                el.set_value("");
            }
        }
        if let Some(el) = message_ref.get_untracked() {
            el.set_value("");
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // one submission in flight at a time; the button is also disabled
        if status.get_untracked().is_in_flight() {
            return;
        }
        let input = read_input();
        match validate(&input) {
            Err(field_errors) => {
                set_errors.set(field_errors);
                // an invalid attempt clears any stale banner but never
                // starts a submission
                set_status.set(SubmissionStatus::Idle);
            }
            Ok(()) => {
                set_errors.set(FieldErrors::default());
                set_status.set(SubmissionStatus::Submitting);
                set_timeout(
                    move || match delivery.with_value(|d| d.deliver(&input)) {
                        Ok(()) => {
                            clear_fields();
                            set_status.set(SubmissionStatus::Success);
                        }
                        Err(err) => {
                            log::warn!("contact delivery failed: {err}");
                            set_status.set(SubmissionStatus::Error);
                        }
                    },
                    SUBMIT_DELAY,
                );
            }
        }
    };

    let field_error = move |message: Option<&'static str>| {
        message.map(|msg| {
            view! {
                <p class="mt-1 text-sm text-red-600 dark:text-red-400 flex items-center gap-1">
                    <IconGlyph icon=Icon::Warning />
                    {msg}
                </p>
            }
        })
    };

    let input_class = "w-full px-4 py-3 border border-gray-300 dark:border-dark-600 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent bg-white dark:bg-dark-700 text-gray-900 dark:text-gray-100 transition-colors duration-200";

    view! {
        <section node_ref=section_ref id="contact" class="section-padding bg-white dark:bg-dark-800">
            <div class="container-custom">
                <div class=move || reveal_class("text-center mb-16", revealed.get())>
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-gray-100 mb-4">
                        "Get In Touch"
                    </h2>
                    <div class="w-24 h-1 bg-primary-600 mx-auto mb-8"></div>
                    <p class="text-lg text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        "Have a project in mind or want to discuss opportunities? "
                        "I'd love to hear from you. Let's create something amazing together."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div class=move || reveal_class("", revealed.get())>
                        <h3 class="text-2xl font-semibold text-gray-900 dark:text-gray-100 mb-8">
                            "Let's Connect"
                        </h3>
                        <div class="space-y-6 mb-8">
                            <a
                                href=format!("mailto:{EMAIL}")
                                class="flex items-center gap-4 p-4 rounded-lg hover:bg-gray-50 dark:hover:bg-dark-700 transition-colors duration-200"
                            >
                                <div class="p-3 bg-primary-100 dark:bg-primary-900 rounded-lg">
                                    <IconGlyph icon=Icon::Email />
                                </div>
                                <div>
                                    <h4 class="font-semibold text-gray-900 dark:text-gray-100">"Email"</h4>
                                    <p class="text-gray-600 dark:text-gray-300">{EMAIL}</p>
                                </div>
                            </a>
                            <div class="flex items-center gap-4 p-4 rounded-lg">
                                <div class="p-3 bg-primary-100 dark:bg-primary-900 rounded-lg">
                                    <IconGlyph icon=Icon::Location />
                                </div>
                                <div>
                                    <h4 class="font-semibold text-gray-900 dark:text-gray-100">"Location"</h4>
                                    <p class="text-gray-600 dark:text-gray-300">{LOCATION}</p>
                                </div>
                            </div>
                        </div>

                        <div>
                            <h4 class="text-lg font-semibold text-gray-900 dark:text-gray-100 mb-4">
                                "Follow Me"
                            </h4>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.name
                                                class="p-3 bg-gray-100 dark:bg-dark-700 rounded-lg text-gray-600 dark:text-gray-400 hover:text-primary-600 transition-all duration-200 text-2xl"
                                            >
                                                <IconGlyph icon=social.icon />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="mt-8 p-6 bg-green-50 dark:bg-green-900/20 rounded-lg border border-green-200 dark:border-green-800">
                            <div class="flex items-center gap-3 mb-2">
                                <div class="w-3 h-3 bg-green-500 rounded-full animate-pulse"></div>
                                <h4 class="font-semibold text-green-800 dark:text-green-200">
                                    "Available for Work"
                                </h4>
                            </div>
                            <p class="text-green-700 dark:text-green-300 text-sm">
                                "I'm currently available for new projects and opportunities. "
                                "Let's discuss how I can help bring your ideas to life."
                            </p>
                        </div>
                    </div>

                    <div class=move || reveal_class("", revealed.get())>
                        <form class="space-y-6" on:submit=on_submit>
                            <div>
                                <label for="name" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                    "Full Name *"
                                </label>
                                <input
                                    node_ref=name_ref
                                    type="text"
                                    id="name"
                                    placeholder="Your full name"
                                    class=input_class
                                />
                                {move || field_error(errors.get().name)}
                            </div>
                            <div>
                                <label for="email" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                    "Email Address *"
                                </label>
                                <input
                                    node_ref=email_ref
                                    type="text"
                                    id="email"
                                    placeholder="your.email@example.com"
                                    class=input_class
                                />
                                {move || field_error(errors.get().email)}
                            </div>
                            <div>
                                <label for="subject" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                    "Subject *"
                                </label>
                                <input
                                    node_ref=subject_ref
                                    type="text"
                                    id="subject"
                                    placeholder="What's this about?"
                                    class=input_class
                                />
                                {move || field_error(errors.get().subject)}
                            </div>
                            <div>
                                <label for="message" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                    "Message *"
                                </label>
                                <textarea
                                    node_ref=message_ref
                                    id="message"
                                    rows="6"
                                    placeholder="Tell me about your project or how I can help..."
                                    class=format!("{input_class} resize-none")
                                ></textarea>
                                {move || field_error(errors.get().message)}
                            </div>

                            <button
                                type="submit"
                                disabled=move || status.get().is_in_flight()
                                class="w-full flex items-center justify-center gap-3 px-8 py-4 bg-primary-600 text-white rounded-lg hover:bg-primary-700 disabled:bg-gray-400 disabled:cursor-not-allowed transition-colors duration-200 font-medium text-lg"
                            >
                                {move || {
                                    if status.get().is_in_flight() {
                                        view! {
                                            <div class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                                            "Sending..."
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <IconGlyph icon=Icon::Send />
                                            "Send Message"
                                        }
                                            .into_any()
                                    }
                                }}
                            </button>

                            {move || match status.get() {
                                SubmissionStatus::Success => {
                                    Some(
                                        view! {
                                            <div class="flex items-center gap-3 p-4 bg-green-50 dark:bg-green-900/20 border border-green-200 dark:border-green-800 rounded-lg">
                                                <IconGlyph icon=Icon::Check />
                                                <p class="text-green-800 dark:text-green-200">
                                                    "Thank you! Your message has been sent successfully. I'll get back to you soon."
                                                </p>
                                            </div>
                                        }
                                            .into_any(),
                                    )
                                }
                                SubmissionStatus::Error => {
                                    Some(
                                        view! {
                                            <div class="flex items-center gap-3 p-4 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg">
                                                <IconGlyph icon=Icon::Warning />
                                                <p class="text-red-800 dark:text-red-200">
                                                    "Sorry, there was an error sending your message. Please try again."
                                                </p>
                                            </div>
                                        }
                                            .into_any(),
                                    )
                                }
                                _ => None,
                            }}
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ContactFormInput {
        ContactFormInput {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "I have a project for you.".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(validate(&valid_input()), Ok(()));
    }

    #[test]
    fn test_empty_name_reports_only_name() {
        let mut input = valid_input();
        input.name.clear();
        let errors = validate(&input).unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
        assert!(errors.subject.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn test_empty_email_reports_only_email() {
        let mut input = valid_input();
        input.email.clear();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.email, Some("Email is required"));
        assert!(errors.name.is_none());
        assert!(errors.subject.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn test_empty_subject_reports_only_subject() {
        let mut input = valid_input();
        input.subject.clear();
        let errors = validate(&input).unwrap_err();
        assert!(errors.subject.is_some());
        assert!(errors.name.is_none());
        assert!(errors.email.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn test_empty_message_reports_only_message() {
        let mut input = valid_input();
        input.message.clear();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.message, Some("Message is required"));
        assert!(errors.name.is_none());
        assert!(errors.email.is_none());
        assert!(errors.subject.is_none());
    }

    #[test]
    fn test_all_fields_empty_reports_all_fields() {
        let errors = validate(&ContactFormInput::default()).unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.subject.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn test_email_shapes() {
        for ok in [
            "name@example.com",
            "first.last+tag@sub.example.co",
            "a_b-c@domain.org",
        ] {
            assert!(is_valid_email(ok), "should accept {ok}");
        }
        for bad in [
            "plainaddress",
            "missing-at.example.com",
            "user@example",
            "user@.com",
            "user@example.",
            "user@example.c",
            "user@exam ple.com",
            "user@@example.com",
            "@example.com",
            "user@example.c0m",
        ] {
            assert!(!is_valid_email(bad), "should reject {bad}");
        }
    }

    #[test]
    fn test_message_length_boundary() {
        let mut input = valid_input();
        input.message = "123456789".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.message, Some("Message must be at least 10 characters"));

        input.message = "1234567890".to_string();
        assert_eq!(validate(&input), Ok(()));
    }

    #[test]
    fn test_invalid_input_never_reaches_delivery() {
        // the submit handler only calls the collaborator on Ok(())
        let mut input = valid_input();
        input.email = "not-an-email".to_string();
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_status_default_and_in_flight() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert!(SubmissionStatus::Submitting.is_in_flight());
        for settled in [
            SubmissionStatus::Idle,
            SubmissionStatus::Success,
            SubmissionStatus::Error,
        ] {
            assert!(!settled.is_in_flight());
        }
    }

    #[test]
    fn test_simulated_delivery_reports_success() {
        let outcome = SimulatedDelivery.deliver(&valid_input());
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_delivery_payload_serializes_all_fields() {
        let payload = serde_json::to_string(&valid_input()).unwrap();
        for key in ["name", "email", "subject", "message"] {
            assert!(payload.contains(key));
        }
    }
}
