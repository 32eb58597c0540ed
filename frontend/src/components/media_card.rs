use yew::prelude::*;

use crate::components::icons::PlayIcon;
use crate::media::{
    use_resolved_thumbnail, use_viewport_gate, MountConfig, PlayRequest, ResolvedMediaIdentifier, ThumbnailTier,
};

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub identifier: ResolvedMediaIdentifier,
    pub title: String,
    #[prop_or_default]
    pub description: Option<String>,
    #[prop_or_default]
    pub eager: bool,
    #[prop_or(ThumbnailTier::MaxRes)]
    pub preferred: ThumbnailTier,
    pub on_play: Callback<PlayRequest>,
    /// Off when a parent container owns the tab stop.
    #[prop_or(true)]
    pub focusable: bool,
}

/// Poster card for one video. Nothing is fetched until the card nears the
/// viewport; a click hands the video to the page's player.
#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let node = use_node_ref();
    let gate = use_viewport_gate(node.clone(), MountConfig { eager: props.eager });
    let thumbnail = use_resolved_thumbnail(props.identifier.clone(), props.preferred, gate.should_mount());

    let onclick = {
        let on_play = props.on_play.clone();
        let request = PlayRequest::new(props.identifier.clone(), props.title.clone());
        Callback::from(move |_: MouseEvent| on_play.emit(request.clone()))
    };

    let variant = props.identifier.variant;
    let poster = match thumbnail {
        Some(resolved) => html! {
            <img
                class={classes!("video-card-poster", gate.is_loaded().then_some("loaded"))}
                src={resolved.url}
                alt={props.title.clone()}
                decoding="async"
                onload={gate.on_loaded.reform(|_: Event| ())}
            />
        },
        None => html! { <div class="video-card-skeleton" aria-hidden="true"></div> },
    };

    html! {
        <div ref={node} class={classes!("video-card", variant.aspect_class())}>
            <button
                class="video-card-button focus-ring"
                tabindex={(!props.focusable).then_some("-1")}
                {onclick}
                aria-label={format!("Play {}", props.title)}>
                <div class="video-card-frame" style={format!("padding-bottom: {};", variant.aspect_padding())}>
                    { poster }
                    <span class="video-card-badge">{ variant.label() }</span>
                    <span class="video-card-play"><PlayIcon size={28} /></span>
                </div>
            </button>
            if let Some(description) = &props.description {
                <p class="video-card-description">{ description }</p>
            }
        </div>
    }
}
