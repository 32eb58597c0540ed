#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

const DEFAULT_WHATSAPP_NUMBER: &str = "916202009606";
const DEFAULT_WHATSAPP_MESSAGE: &str =
    "Hi Sohel, interested in your editing services. Please share pricing & turnaround.";
const DEFAULT_DESIGNER_NUMBER: &str = "919905689072";
const DEFAULT_DESIGNER_MESSAGE: &str =
    "Hi Aamir, I'm interested in your thumbnail design services. Could you share pricing and turnaround?";
const DEFAULT_CONTACT_EMAIL: &str = "contact@sohel.video";
const DEFAULT_TRACKING_SCRIPT: &str =
    "https://script.google.com/macros/s/AKfycbxN9U9Py6E4f1gU0HeuTW-DOdn2avbSKH_tX1--WClbUyn4Fi1ldZahS76y_CmpM3cd9w/exec";

pub const CLICK_LOG_PATH: &str = "/api/logClick";

pub fn click_log_url() -> String {
    format!("{}{}", get_backend_url(), CLICK_LOG_PATH)
}

fn baked(value: Option<&'static str>, default: &'static str) -> &'static str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default)
}

pub fn whatsapp_number() -> &'static str {
    baked(option_env!("WHATSAPP_NUMBER"), DEFAULT_WHATSAPP_NUMBER)
}

pub fn whatsapp_message() -> &'static str {
    baked(option_env!("WHATSAPP_MESSAGE"), DEFAULT_WHATSAPP_MESSAGE)
}

pub fn designer_whatsapp_number() -> &'static str {
    baked(option_env!("DESIGNER_WHATSAPP_NUMBER"), DEFAULT_DESIGNER_NUMBER)
}

pub fn designer_whatsapp_message() -> &'static str {
    baked(option_env!("DESIGNER_WHATSAPP_MESSAGE"), DEFAULT_DESIGNER_MESSAGE)
}

pub fn contact_email() -> &'static str {
    baked(option_env!("CONTACT_EMAIL"), DEFAULT_CONTACT_EMAIL)
}

/// Every configured tracking script base, list first, then the single
/// variable, then the built-in default.
pub fn tracking_script_candidates() -> Vec<&'static str> {
    let mut candidates: Vec<&'static str> = option_env!("APPS_SCRIPT_URLS")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .collect();
    if let Some(single) = option_env!("APPS_SCRIPT_URL").map(str::trim).filter(|u| !u.is_empty()) {
        candidates.push(single);
    }
    candidates.push(DEFAULT_TRACKING_SCRIPT);
    candidates
}

/// Comma-separated image list overriding the built-in portfolio.
pub fn portfolio_images_override() -> Option<&'static str> {
    option_env!("PORTFOLIO_IMAGES").filter(|v| !v.trim().is_empty())
}
