use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::media::{use_viewport_gate, MountConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFit {
    #[default]
    Cover,
    /// Full width, natural height.
    Auto,
}

impl ImageFit {
    fn style(&self) -> &'static str {
        match self {
            ImageFit::Cover => "object-fit: cover; width: 100%; height: 100%;",
            ImageFit::Auto => "width: 100%; height: auto;",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressiveImageProps {
    pub src: String,
    /// Tiny blurred copy shown until the full image has loaded.
    pub placeholder: String,
    #[prop_or_default]
    pub srcset: Option<String>,
    #[prop_or_default]
    pub sizes: Option<AttrValue>,
    #[prop_or_default]
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub eager: bool,
    #[prop_or_default]
    pub fit: ImageFit,
    #[prop_or_default]
    pub fallback_src: Option<String>,
}

#[function_component(ProgressiveImage)]
pub fn progressive_image(props: &ProgressiveImageProps) -> Html {
    let node = use_node_ref();
    let gate = use_viewport_gate(node.clone(), MountConfig { eager: props.eager });

    let onload = gate.on_loaded.reform(|_: Event| ());
    let onerror = {
        let fallback = props.fallback_src.clone();
        let on_loaded = gate.on_loaded.clone();
        Callback::from(move |e: Event| {
            let Some(fallback) = fallback.as_deref() else {
                return;
            };
            if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
                // swap once; a failing fallback must not loop
                if img.src() != fallback {
                    img.set_src(fallback);
                    return;
                }
            }
            on_loaded.emit(());
        })
    };

    html! {
        <div ref={node} class={classes!("progressive", props.class.clone())}>
            <style>
                {r#"
                .progressive { position: relative; overflow: hidden; }
                .progressive-placeholder { position: absolute; inset: 0; filter: blur(12px); transform: scale(1.05); }
                .progressive-full { position: relative; opacity: 0; transition: opacity 0.4s ease; }
                .progressive-full.loaded { opacity: 1; }
                .reduce-motion .progressive-full { transition: none; }
                "#}
            </style>
            if !gate.is_loaded() {
                <img class="progressive-placeholder" src={props.placeholder.clone()} alt="" aria-hidden="true"
                    style={props.fit.style()} />
            }
            if gate.should_mount() {
                <img
                    class={classes!("progressive-full", gate.is_loaded().then_some("loaded"))}
                    src={props.src.clone()}
                    srcset={props.srcset.clone()}
                    sizes={props.sizes.clone()}
                    alt={props.alt.clone()}
                    loading={if props.eager { "eager" } else { "lazy" }}
                    decoding="async"
                    style={props.fit.style()}
                    {onload}
                    {onerror}
                />
            }
        </div>
    }
}
