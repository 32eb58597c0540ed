//! Fire-and-forget click attribution for visitors arriving from an email
//! link (`?rid=...`). Nothing here may surface an error to the page.

use chrono::{SecondsFormat, Utc};
use gloo_net::http::Request;
use serde::Serialize;
use url::Url;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlImageElement};

use crate::config;
use crate::error::{describe, UiError};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClickPayload {
    pub rid: String,
    pub utm_source: &'static str,
    pub utm_medium: &'static str,
    pub utm_campaign: &'static str,
    pub timestamp: String,
}

impl ClickPayload {
    pub fn new(rid: impl Into<String>, timestamp: String) -> Self {
        Self {
            rid: rid.into(),
            utm_source: "email",
            utm_medium: "drip",
            utm_campaign: "portfolio",
            timestamp,
        }
    }

    /// `application/x-www-form-urlencoded` body for the beacon.
    pub fn form_body(&self) -> String {
        [
            ("rid", self.rid.as_str()),
            ("utm_source", self.utm_source),
            ("utm_medium", self.utm_medium),
            ("utm_campaign", self.utm_campaign),
            ("timestamp", self.timestamp.as_str()),
        ]
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

pub fn rid_from_href(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    let rid = url
        .query_pairs()
        .find(|(key, _)| key == "rid")
        .map(|(_, value)| value.trim().to_string())?;
    (!rid.is_empty()).then_some(rid)
}

pub fn current_rid() -> Option<String> {
    window()
        .and_then(|w| w.location().href().ok())
        .and_then(|href| rid_from_href(&href))
}

/// Unique bases in first-seen order, without a trailing slash.
pub fn script_bases<'a>(candidates: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut bases: Vec<String> = Vec::new();
    for candidate in candidates {
        let candidate = candidate.trim();
        if candidate.is_empty() || bases.iter().any(|b| b == candidate.trim_end_matches('/')) {
            continue;
        }
        bases.push(candidate.trim_end_matches('/').to_string());
    }
    bases
}

pub fn image_beacon_url(base: &str, rid: &str, timestamp_ms: i64) -> String {
    format!(
        "{}?action=track&rid={}&via=landing-page&_t={}",
        base,
        urlencoding::encode(rid),
        timestamp_ms
    )
}

fn send_beacon(payload: &ClickPayload) -> Result<bool, UiError> {
    let window = window().ok_or(UiError::Dom("window"))?;
    window
        .navigator()
        .send_beacon_with_opt_str(&config::click_log_url(), Some(&payload.form_body()))
        .map_err(|err| UiError::Network(describe(&err)))
}

async fn post_json(payload: &ClickPayload) -> Result<(), UiError> {
    let response = Request::post(&config::click_log_url())
        .json(payload)
        .map_err(|e| UiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| UiError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(UiError::Network(format!("click log returned {}", response.status())))
    }
}

fn fire_image_beacon(url: String) -> Result<(), UiError> {
    let img = HtmlImageElement::new().map_err(|_| UiError::Dom("img"))?;
    let ok_url = url.clone();
    let fail_url = url.clone();
    let onload = Closure::once_into_js(move || gloo_console::log!("beacon ok:", ok_url));
    let onerror = Closure::once_into_js(move || log::debug!("beacon failed: {}", fail_url));
    img.set_onload(Some(onload.unchecked_ref()));
    img.set_onerror(Some(onerror.unchecked_ref()));
    img.set_src(&url);
    Ok(())
}

/// Reports a landing-page visit. Beacon first, JSON POST if the beacon was
/// refused, then one image ping per configured script.
pub fn report_click(rid: String) {
    let payload = ClickPayload::new(rid.clone(), Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

    wasm_bindgen_futures::spawn_local(async move {
        match send_beacon(&payload) {
            Ok(true) => {
                log::debug!("click beacon queued");
                return;
            }
            Ok(false) => log::debug!("click beacon refused, posting instead"),
            Err(err) => log::debug!("click beacon unavailable: {}", err),
        }
        if let Err(err) = post_json(&payload).await {
            log::warn!("click log failed: {}", err);
        }
    });

    let timestamp_ms = Utc::now().timestamp_millis();
    for base in script_bases(config::tracking_script_candidates()) {
        if let Err(err) = fire_image_beacon(image_beacon_url(&base, &rid, timestamp_ms)) {
            log::warn!("tracking ping not sent: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rid_read_from_query() {
        assert_eq!(
            rid_from_href("https://site.test/portfolio?utm=x&rid=ab%2012").as_deref(),
            Some("ab 12")
        );
        assert_eq!(rid_from_href("https://site.test/portfolio"), None);
        assert_eq!(rid_from_href("https://site.test/portfolio?rid="), None);
        assert_eq!(rid_from_href("not a url"), None);
    }

    #[test]
    fn form_body_is_url_encoded_in_order() {
        let payload = ClickPayload::new("r&1", "2024-05-01T10:00:00.000Z".to_string());
        assert_eq!(
            payload.form_body(),
            "rid=r%261&utm_source=email&utm_medium=drip&utm_campaign=portfolio&timestamp=2024-05-01T10%3A00%3A00.000Z"
        );
    }

    #[test]
    fn json_payload_carries_campaign_fields() {
        let payload = ClickPayload::new("42", "t".to_string());
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json["utm_medium"], "drip");
        assert_eq!(json["rid"], "42");
    }

    #[test]
    fn script_bases_are_deduped_and_trimmed() {
        let bases = script_bases(vec![
            "https://a.test/exec/",
            " ",
            "https://a.test/exec",
            "https://b.test/exec",
        ]);
        assert_eq!(bases, vec!["https://a.test/exec", "https://b.test/exec"]);
    }

    #[test]
    fn image_beacon_query() {
        assert_eq!(
            image_beacon_url("https://a.test/exec", "r 1", 1700000000000),
            "https://a.test/exec?action=track&rid=r%201&via=landing-page&_t=1700000000000"
        );
    }
}
