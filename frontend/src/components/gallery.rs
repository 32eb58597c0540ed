use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::icons::{ChevronLeft, ChevronRight};
use crate::components::media_card::VideoCard;
use crate::data::showcase::{montage_description, ShowcaseVideo};
use crate::media::gallery::{is_activation_key, nearest_item, page_strip, Direction};
use crate::media::PlayRequest;
use crate::prefs::use_capabilities;

#[derive(Properties, PartialEq)]
pub struct MediaStripProps {
    pub label: String,
    pub videos: Vec<ShowcaseVideo>,
    pub on_play: Callback<PlayRequest>,
    /// Attach a rotating description under each card.
    #[prop_or_default]
    pub describe: bool,
    #[prop_or_default]
    pub eager_first: bool,
}

/// Horizontally scrolling row of video cards, paged by the arrow buttons
/// or the left/right keys while the row has focus. The row is a single
/// tab stop; Enter plays the card nearest the scroll position.
#[function_component(MediaStrip)]
pub fn media_strip(props: &MediaStripProps) -> Html {
    let strip = use_node_ref();
    let motion = use_capabilities().motion;

    let page = {
        let strip = strip.clone();
        move |direction: Direction| {
            if let Some(element) = strip.cast::<Element>() {
                page_strip(&element, direction, motion);
            }
        }
    };

    let play_nearest = {
        let strip = strip.clone();
        let videos = props.videos.clone();
        let on_play = props.on_play.clone();
        move || {
            let Some(track) = strip.cast::<HtmlElement>() else {
                return;
            };
            let children = track.children();
            let offsets: Vec<i32> = (0..children.length())
                .filter_map(|i| children.item(i))
                .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
                .map(|child| child.offset_left() - track.offset_left())
                .collect();
            let picked = nearest_item(track.scroll_left(), &offsets).and_then(|i| videos.get(i));
            if let Some(video) = picked {
                on_play.emit(PlayRequest::new(video.identifier.clone(), video.title()));
            }
        }
    };

    let onkeydown = {
        let page = page.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            if let Some(direction) = Direction::from_key(&key) {
                e.prevent_default();
                page(direction);
            } else if is_activation_key(&key) {
                e.prevent_default();
                play_nearest();
            }
        })
    };
    let back = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page(Direction::Back))
    };
    let forward = Callback::from(move |_: MouseEvent| page(Direction::Forward));

    if props.videos.is_empty() {
        return html! { <p class="strip-empty">{"No videos match."}</p> };
    }

    html! {
        <div class="media-strip">
            <style>
                {r#"
                .media-strip { position: relative; }
                .strip-track { display: flex; gap: 1rem; overflow-x: auto; scroll-snap-type: x mandatory; padding: 0.5rem 0; scrollbar-width: none; }
                .strip-track::-webkit-scrollbar { display: none; }
                .strip-track:focus-visible { box-shadow: 0 0 0 3px rgba(99, 102, 241, 0.18); border-radius: 10px; }
                .strip-item { flex: 0 0 auto; width: 320px; scroll-snap-align: start; }
                .strip-item.aspect-9-16 { width: 200px; }
                .strip-arrow { position: absolute; top: 40%; z-index: 2; border: none; border-radius: 999px; width: 40px; height: 40px; background: rgba(255,255,255,0.9); box-shadow: 0 8px 24px rgba(0,0,0,0.18); cursor: pointer; }
                .strip-arrow.back { left: -12px; }
                .strip-arrow.forward { right: -12px; }
                .video-card-button { display: block; width: 100%; border: none; padding: 0; background: none; cursor: pointer; }
                .video-card-frame { position: relative; height: 0; overflow: hidden; border-radius: 14px; background: #111827; }
                .video-card-poster, .video-card-skeleton { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                .video-card-poster { opacity: 0; transition: opacity 0.3s ease; }
                .video-card-poster.loaded { opacity: 1; }
                .video-card-skeleton { background: linear-gradient(90deg, #1f2937, #374151, #1f2937); }
                .video-card-badge { position: absolute; left: 10px; top: 10px; font-size: 0.7rem; font-weight: 700; padding: 0.2rem 0.5rem; border-radius: 999px; background: rgba(0,0,0,0.6); color: #fff; }
                .video-card-play { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #fff; }
                .video-card-description { margin-top: 0.5rem; font-size: 0.85rem; color: #4b5563; }
                .reduce-motion .video-card-poster { transition: none; }
                "#}
            </style>
            <button class="strip-arrow back" onclick={back} aria-label={format!("Scroll {} back", props.label)}>
                <ChevronLeft />
            </button>
            <div ref={strip} class="strip-track" tabindex="0" role="region" aria-label={props.label.clone()} {onkeydown}>
                { for props.videos.iter().enumerate().map(|(i, video)| html! {
                    <div key={video.identifier.id.clone()} class={classes!("strip-item", video.identifier.variant.aspect_class())}>
                        <VideoCard
                            identifier={video.identifier.clone()}
                            title={video.title()}
                            description={props.describe.then(|| montage_description(i).to_string())}
                            eager={props.eager_first && i == 0}
                            on_play={props.on_play.clone()}
                            focusable={false}
                        />
                    </div>
                }) }
            </div>
            <button class="strip-arrow forward" onclick={forward} aria-label={format!("Scroll {} forward", props.label)}>
                <ChevronRight />
            </button>
        </div>
    }
}
