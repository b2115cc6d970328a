//! Newsletter signup: email validation, submit-control state, subscribe
//! round-trip.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlInputElement};

use crate::backend::GalleryBackend;
use crate::dom;
use crate::notify::Notifier;
use crate::widgets::WidgetHost;

/// Shape check for an email address: one `@` with a non-empty local part,
/// a domain with an interior dot, and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let domain: Vec<char> = domain.chars().collect();
    if domain.len() < 3 {
        return false;
    }
    // The dot must be interior: "a@.b" and "a@b." are both out.
    domain[1..domain.len() - 1].contains(&'.')
}

/// Wire the signup form: reject bad addresses with a toast, disable the
/// submit control for the duration of the request, report the outcome.
pub fn install<B, W>(doc: &Document, backend: Rc<B>, notifier: Notifier<W>)
where
    B: GalleryBackend + 'static,
    W: WidgetHost + 'static,
{
    let Some(form) = doc.get_element_by_id("newsletterForm") else {
        return;
    };
    let form2 = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let Some(input) = dom::query(&form2, r#"input[type="email"]"#)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let email = input.value().trim().to_string();
        if !is_valid_email(&email) {
            notifier.error("Please enter a valid email address");
            let _ = input.focus();
            return;
        }
        let Some(button) = dom::query(&form2, r#"button[type="submit"]"#)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            return;
        };
        let original_label = button.text_content().unwrap_or_default();
        button.set_disabled(true);
        button.set_text_content(Some("Subscribing..."));

        let backend = Rc::clone(&backend);
        let notifier = notifier.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match backend.subscribe(&email).await {
                Ok(()) => {
                    notifier.success("Successfully subscribed to newsletter!");
                    input.set_value("");
                }
                Err(e) => {
                    log::error!("Newsletter subscription failed: {e}");
                    notifier.error("Subscription failed. Please try again.");
                }
            }
            // The control comes back on both outcomes.
            button.set_disabled(false);
            button.set_text_content(Some(&original_label));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_addresses_pass() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn missing_at_sign_fails() {
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn whitespace_anywhere_fails() {
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email("user@example .com"));
        assert!(!is_valid_email(" user@example.com"));
    }

    #[test]
    fn empty_local_part_fails() {
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn domain_needs_an_interior_dot() {
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@ab"));
    }

    #[test]
    fn second_at_sign_fails() {
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@host@example.com"));
    }

    #[test]
    fn multibyte_addresses_do_not_panic() {
        assert!(is_valid_email("ユーザ@例え.com"));
        assert!(!is_valid_email("ユーザ@例え"));
    }
}
