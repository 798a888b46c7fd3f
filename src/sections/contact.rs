use log::{info, warn};
use thiserror::Error;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::toast::use_toaster;
use crate::config::{CONTACT_EMAIL, SOCIAL_LINKS};
use crate::content::SectionId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name.")]
    MissingName,
    #[error("Please add an email address so I can reply.")]
    MissingEmail,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Please write a message.")]
    MissingMessage,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    /// A `mailto:` link that opens the visitor's mail client with the
    /// message prefilled.
    pub fn mailto_href(&self, to: &str) -> String {
        let subject = format!("Portfolio contact from {}", self.name.trim());
        let body = format!(
            "{}\n\n{} <{}>",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

/// Something shaped like `local@domain.tld`; the mail client does the rest.
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactMessage::default);
    let toaster = use_toaster();

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactMessage {
                name: input.value(),
                ..(*form).clone()
            });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactMessage {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactMessage {
                message: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                toaster.error("Message not sent", err.to_string());
                return;
            }
            let href = form.mailto_href(CONTACT_EMAIL);
            match window().map(|w| w.location().set_href(&href)) {
                Some(Ok(())) => {
                    info!("Opened mail client for contact message");
                    toaster.success("Message ready", "Your mail app has the message. Hit send there and I'll get back to you soon.");
                    form.set(ContactMessage::default());
                }
                _ => {
                    warn!("Could not open mail client");
                    toaster.error("Message not sent", format!("Please write to {} directly.", CONTACT_EMAIL));
                }
            }
        })
    };

    html! {
        <section id={SectionId::Contact.anchor()} class="section section-muted">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">{"Get in Touch"}</h2>
                    <div class="contact-grid">
                        <div class="card">
                            <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                                <input
                                    class="input"
                                    placeholder="Name"
                                    value={form.name.clone()}
                                    oninput={on_name}
                                />
                                <input
                                    class="input"
                                    type="email"
                                    placeholder="Email"
                                    value={form.email.clone()}
                                    oninput={on_email}
                                />
                                <textarea
                                    class="input contact-message"
                                    placeholder="Message"
                                    value={form.message.clone()}
                                    oninput={on_message}
                                />
                                <button type="submit" class="btn btn-primary btn-block">{"Send Message"}</button>
                            </form>
                        </div>
                        <div>
                            <h3 class="contact-subtitle">{"Connect With Me"}</h3>
                            <div class="contact-links">
                                {
                                    SOCIAL_LINKS.iter().map(|(label, href)| html! {
                                        <a key={*label} class="btn btn-outline contact-link" href={*href} target="_blank" rel="noopener noreferrer">
                                            {*label}
                                        </a>
                                    }).collect::<Html>()
                                }
                                <a class="btn btn-outline contact-link" href={format!("mailto:{}", CONTACT_EMAIL)}>
                                    {"Email"}
                                </a>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-message {
                    min-height: 150px;
                    resize: vertical;
                }
                .contact-subtitle {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .contact-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-link {
                    justify-content: flex-start;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            message: body.into(),
        }
    }

    #[test]
    fn complete_message_passes() {
        assert_eq!(message("Ada", "ada@example.com", "Hi!").validate(), Ok(()));
    }

    #[test]
    fn reports_first_missing_field() {
        assert_eq!(message(" ", "", "").validate(), Err(ContactError::MissingName));
        assert_eq!(message("Ada", "  ", "").validate(), Err(ContactError::MissingEmail));
        assert_eq!(message("Ada", "ada@example.com", "\n").validate(), Err(ContactError::MissingMessage));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "ada@.com", "a da@example.com", "a@b@c.com"] {
            assert!(!looks_like_email(bad), "{} should be rejected", bad);
        }
        assert_eq!(message("Ada", "ada@", "Hi").validate(), Err(ContactError::InvalidEmail));
        assert!(looks_like_email("first.last+tag@mail.example.co.uk"));
    }

    #[test]
    fn mailto_is_url_encoded() {
        let href = message("Ada Lovelace", "ada@example.com", "Hello & welcome").mailto_href("me@site.dev");
        assert_eq!(
            href,
            "mailto:me@site.dev?subject=Portfolio%20contact%20from%20Ada%20Lovelace\
             &body=Hello%20%26%20welcome%0A%0AAda%20Lovelace%20%3Cada%40example.com%3E"
        );
    }
}
