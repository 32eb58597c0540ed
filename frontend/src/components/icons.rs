use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(20)]
    pub size: u32,
}

#[function_component(WhatsAppIcon)]
pub fn whatsapp_icon(props: &IconProps) -> Html {
    html! {
        <svg width={props.size.to_string()} height={props.size.to_string()} viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M21 12.1a9 9 0 1 0-2.6 6.2L21 21l-1.7-5.4A8.9 8.9 0 0 0 21 12.1z" />
        </svg>
    }
}

#[function_component(PlayIcon)]
pub fn play_icon(props: &IconProps) -> Html {
    html! {
        <svg width={props.size.to_string()} height={props.size.to_string()} viewBox="0 0 24 24" aria-hidden="true">
            <path d="M8 5v14l11-7z" fill="currentColor" />
        </svg>
    }
}

#[function_component(ChevronLeft)]
pub fn chevron_left(props: &IconProps) -> Html {
    html! {
        <svg width={props.size.to_string()} height={props.size.to_string()} viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M15 18l-6-6 6-6" />
        </svg>
    }
}

#[function_component(ChevronRight)]
pub fn chevron_right(props: &IconProps) -> Html {
    html! {
        <svg width={props.size.to_string()} height={props.size.to_string()} viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M9 18l6-6-6-6" />
        </svg>
    }
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    html! {
        <svg width={props.size.to_string()} height={props.size.to_string()} viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M18 6L6 18M6 6l12 12" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct BenefitIconProps {
    pub name: &'static str,
}

/// Glyphs for the benefit cards, keyed by name.
#[function_component(BenefitIcon)]
pub fn benefit_icon(props: &BenefitIconProps) -> Html {
    let glyph = match props.name {
        "chart" => html! {
            <>
                <rect x="3" y="6" width="3" height="11" rx="0.5" />
                <rect x="9" y="2" width="3" height="15" rx="0.5" />
                <rect x="15" y="9" width="3" height="8" rx="0.5" />
            </>
        },
        "clock" => html! {
            <>
                <circle cx="12" cy="12" r="8" fill="none" stroke="currentColor" stroke-width="1.6" />
                <path d="M12 7v6l4 2" stroke="currentColor" stroke-width="1.6" fill="none" stroke-linecap="round" />
            </>
        },
        "cursor" => html! { <path d="M3 3l13 9-4 1 1 5-10-15z" fill="currentColor" /> },
        "bulb" => html! {
            <path d="M9 18h6M10 22h4M12 2a7 7 0 0 0-4 12.7V16h8v-1.3A7 7 0 0 0 12 2z"
                stroke="currentColor" stroke-width="1.6" fill="none" stroke-linecap="round" />
        },
        "dollar" => html! {
            <path d="M12 1v22M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"
                stroke="currentColor" stroke-width="1.6" fill="none" stroke-linecap="round" />
        },
        _ => html! {
            <>
                <circle cx="9" cy="7" r="4" fill="none" stroke="currentColor" stroke-width="1.6" />
                <path d="M1 21v-2a4 4 0 0 1 4-4h8a4 4 0 0 1 4 4v2" stroke="currentColor" stroke-width="1.6" fill="none" />
            </>
        },
    };
    html! {
        <div class="icon-box">
            <svg viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">{glyph}</svg>
        </div>
    }
}
