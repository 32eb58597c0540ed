use wasm_bindgen::JsCast;
use web_sys::{window, FocusOptions, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::icons::{CloseIcon, WhatsAppIcon};
use crate::prefs::{use_capabilities, MotionPreference};

/// Brings the section with `id` into view and moves keyboard focus to it.
/// Falls back to hash navigation when the element is missing.
pub fn scroll_to_section(id: &str, motion: MotionPreference) {
    let Some(window) = window() else {
        return;
    };
    let element = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    let Some(element) = element else {
        if let Err(err) = window.location().set_hash(id) {
            log::debug!("hash navigation failed: {:?}", err);
        }
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if motion.is_reduced() { ScrollBehavior::Auto } else { ScrollBehavior::Smooth });
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);

    if !element.has_attribute("tabindex") {
        if let Err(err) = element.set_attribute("tabindex", "-1") {
            log::debug!("could not make section {} focusable: {:?}", id, err);
        }
    }
    let focus = FocusOptions::new();
    focus.set_prevent_scroll(true);
    if let Err(err) = element.focus_with_options(&focus) {
        log::debug!("could not focus section {}: {:?}", id, err);
    }
}

#[derive(Properties, PartialEq)]
pub struct QuickActionsProps {
    pub whatsapp_link: String,
    #[prop_or(AttrValue::Static("showcase-section"))]
    pub target_id: AttrValue,
}

#[function_component(QuickActions)]
pub fn quick_actions(props: &QuickActionsProps) -> Html {
    let open = use_state(|| false);
    let motion = use_capabilities().motion;

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let to_showcase = {
        let open = open.clone();
        let target = props.target_id.clone();
        Callback::from(move |_: MouseEvent| {
            scroll_to_section(&target, motion);
            open.set(false);
        })
    };

    html! {
        <div class="quick-actions">
            <style>
                {r#"
                .quick-actions { position: fixed; right: 1.5rem; bottom: 1.5rem; z-index: 50; display: flex; flex-direction: column; align-items: center; gap: 0.75rem; }
                .quick-actions .tray { display: flex; flex-direction: column; gap: 0.75rem; transition: opacity 0.2s ease, transform 0.2s ease; }
                .quick-actions .tray.closed { opacity: 0; pointer-events: none; transform: translateY(12px); }
                .quick-actions .qa-btn { width: 48px; height: 48px; border-radius: 999px; border: none; display: flex; align-items: center; justify-content: center; box-shadow: 0 10px 24px rgba(0,0,0,0.2); cursor: pointer; background: #fff; color: #111827; }
                .quick-actions .qa-btn.whatsapp { background: #22c55e; color: #fff; }
                .quick-actions .qa-main { width: 56px; height: 56px; border-radius: 999px; border: none; background: #ef4444; color: #fff; font-size: 1.6rem; cursor: pointer; box-shadow: 0 20px 40px rgba(0,0,0,0.3); }
                .reduce-motion .quick-actions .tray { transition: none; }
                "#}
            </style>
            <div class={classes!("tray", (!*open).then_some("closed"))}>
                <button class="qa-btn" onclick={to_showcase} aria-label="Open showcase" title="Showcase">{"▶"}</button>
                <a class="qa-btn whatsapp" href={props.whatsapp_link.clone()} target="_blank" rel="noopener noreferrer"
                    aria-label="Contact on WhatsApp" title="WhatsApp">
                    <WhatsAppIcon size={18} />
                </a>
            </div>
            <button class="qa-main" onclick={toggle} aria-expanded={(*open).to_string()}
                aria-label={if *open { "Close quick actions" } else { "Open quick actions" }}>
                if *open { <CloseIcon size={22} /> } else { {"+"} }
            </button>
        </div>
    }
}
