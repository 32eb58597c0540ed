//! Outbound contact links. The messaging app is opaque to us; we only
//! assemble the link.

use wasm_bindgen_futures::JsFuture;
use web_sys::window;

use crate::error::{describe, UiError};

pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

pub fn default_whatsapp_link() -> String {
    whatsapp_link(crate::config::whatsapp_number(), crate::config::whatsapp_message())
}

pub fn mailto_link(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        email,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub const CORE_VALUE: &str =
    "I specialize in crafting high-CTR thumbnails that help creators like you stand out and grow faster.";

pub fn pitch_message(name: &str, cta: &str) -> String {
    format!(
        "Hi {},\n\n{} {}\n\nWould you like to try a thumbnail that increases CTR for your next video?",
        name, CORE_VALUE, cta
    )
}

pub async fn copy_text(text: &str) -> Result<(), UiError> {
    let window = window().ok_or(UiError::Dom("window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| UiError::Clipboard(describe(&err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_text_is_percent_encoded() {
        assert_eq!(
            whatsapp_link("919430198982", "Hi Aamir, pricing & turnaround?"),
            "https://wa.me/919430198982?text=Hi%20Aamir%2C%20pricing%20%26%20turnaround%3F"
        );
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let link = mailto_link("contact@sohel.video", "Project brief", "Line one\nLine two");
        assert_eq!(
            link,
            "mailto:contact@sohel.video?subject=Project%20brief&body=Line%20one%0ALine%20two"
        );
    }

    #[test]
    fn pitch_carries_name_and_cta() {
        let pitch = pitch_message("Creator", "Recent Work: [link]");
        assert!(pitch.starts_with("Hi Creator,\n\n"));
        assert!(pitch.contains(CORE_VALUE));
        assert!(pitch.contains("Recent Work: [link]"));
    }
}
