use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::gallery::MediaStrip;
use crate::components::icons::{BenefitIcon, PlayIcon, WhatsAppIcon};
use crate::components::media_modal::MediaModal;
use crate::components::quick_actions::{scroll_to_section, QuickActions};
use crate::config;
use crate::contact::{default_whatsapp_link, mailto_link};
use crate::data::showcase::{self, CategoryFilter, CategoryKey, BENEFITS};
use crate::media::modal::embed_url;
use crate::media::{use_media_modal, use_viewport_gate, EmbedParams, ModalHandle, MountConfig, PlayRequest};
use crate::prefs::use_capabilities;

#[derive(Properties, PartialEq)]
struct HeroProps {
    modal: ModalHandle,
}

/// Muted looping reel of the first catalogue video.
#[function_component(HeroReel)]
fn hero_reel(props: &HeroProps) -> Html {
    let node = use_node_ref();
    let gate = use_viewport_gate(node.clone(), MountConfig { eager: true });
    let motion = use_capabilities().motion;

    let Some(hero) = showcase::hero_video() else {
        return html! { <div class="hero-empty">{"No hero video available"}</div> };
    };
    let id = hero.identifier.id.clone();

    let play = {
        let modal = props.modal.clone();
        let request = PlayRequest::new(hero.identifier.clone(), "Showreel");
        Callback::from(move |_: MouseEvent| modal.open(request.clone()))
    };
    let to_showcase = Callback::from(move |_: MouseEvent| scroll_to_section("showcase-section", motion));

    html! {
        <section id="hero" class="hero">
            <div class="hero-copy">
                <span class="category-pill">{"Realtor Video Editor"}</span>
                <h1>{"Cinematic Video Editing That Sells Homes Faster"}</h1>
                <p>{"From viral reels to aerial lifestyle highlights: editing that helps listings stand out. Fast, professional, realtor-focused."}</p>
                <div class="hero-actions">
                    <button class="primary" onclick={play}><PlayIcon size={18} />{"Play reel"}</button>
                    <button onclick={to_showcase}>{"See showcase"}</button>
                </div>
            </div>
            <div ref={node} class="hero-reel shadow-3d">
                if gate.should_mount() {
                    <iframe
                        src={EmbedParams::hero().url(&embed_url(&id), &id)}
                        title="Showreel"
                        allow="autoplay; encrypted-media; picture-in-picture"
                        frameborder="0"
                        onload={gate.on_loaded.reform(|_: Event| ())}
                    />
                }
            </div>
        </section>
    }
}

#[function_component(Benefits)]
fn benefits() -> Html {
    html! {
        <section id="benefits" class="benefits">
            <h2>{"Why agents work with me"}</h2>
            <div class="benefit-grid">
                { for BENEFITS.iter().map(|b| html! {
                    <div key={b.number} class="card-deep benefit">
                        <BenefitIcon name={b.icon} />
                        <span class="benefit-number">{ b.number }</span>
                        <h3>{ b.title }</h3>
                        <p>{ b.body }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ShowcaseProps {
    on_play: Callback<PlayRequest>,
}

#[function_component(Showcase)]
fn showcase_section(props: &ShowcaseProps) -> Html {
    let filter = use_state(CategoryFilter::default);
    let query = use_state(String::new);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let pill = |value: CategoryFilter, label: &'static str| {
        let filter_handle = filter.clone();
        let active = *filter == value;
        html! {
            <button
                class={classes!("filter-pill", active.then_some("active"))}
                aria-pressed={active.to_string()}
                onclick={Callback::from(move |_: MouseEvent| filter_handle.set(value))}
            >
                { label }
            </button>
        }
    };

    html! {
        <section id="showcase-section" class="showcase">
            <div class="showcase-head">
                <h2>{"Showcase"}</h2>
                <div class="filters">
                    { pill(CategoryFilter::All, "All") }
                    { for CategoryKey::ALL.iter().map(|key| pill(CategoryFilter::Only(*key), key.title())) }
                    <input
                        type="search"
                        class="search focus-ring"
                        placeholder="Search videos"
                        aria-label="Search videos"
                        value={(*query).clone()}
                        oninput={on_search}
                    />
                </div>
            </div>
            { for showcase::CATALOGUE.iter().filter(|c| filter.includes(c.key)).enumerate().map(|(i, category)| {
                let videos: Vec<_> = showcase::search(category, &query).into_iter().cloned().collect();
                html! {
                    <div key={category.key.slug()} id={category.key.section_id()} class="category">
                        <div class="category-head">
                            <h3>{ category.key.title() }</h3>
                            <p>{ category.key.tagline() }</p>
                        </div>
                        <MediaStrip
                            label={category.key.title().to_string()}
                            {videos}
                            on_play={props.on_play.clone()}
                            describe={category.key == CategoryKey::Montages}
                            eager_first={i == 0}
                        />
                    </div>
                }
            }) }
        </section>
    }
}

#[function_component(PortfolioVideo)]
pub fn portfolio_video() -> Html {
    let modal = use_media_modal();
    let whatsapp = default_whatsapp_link();
    let email = mailto_link(
        config::contact_email(),
        "Video editing enquiry",
        "Hi Sohel, I'd like to talk about a property video.",
    );

    let on_play = {
        let modal = modal.clone();
        Callback::from(move |request: PlayRequest| modal.open(request))
    };

    html! {
        <div class="portfolio-video">
            <style>
                {r#"
                .portfolio-video { --section-vertical: 32px; background: #f9fafb; color: #111827; min-height: 100vh; }
                @media (min-width: 640px) { .portfolio-video { --section-vertical: 64px; } }
                @media (min-width: 1024px) { .portfolio-video { --section-vertical: 80px; } }
                .portfolio-video section { max-width: 1280px; margin: 0 auto; padding: var(--section-vertical) 1.5rem; }
                .pv-nav { position: sticky; top: 0; z-index: 40; display: flex; align-items: center; justify-content: space-between; height: 64px; padding: 0 1.5rem; background: rgba(255,255,255,0.8); backdrop-filter: blur(4px); border-bottom: 1px solid #f3f4f6; }
                .pv-nav .links { display: flex; gap: 2rem; font-size: 0.9rem; }
                .pv-nav .links a { color: #374151; text-decoration: none; }
                .pv-nav .whatsapp { display: inline-flex; align-items: center; gap: 0.5rem; background: #4f46e5; color: #fff; padding: 0.5rem 1rem; border-radius: 999px; text-decoration: none; font-weight: 600; }
                .hero { display: grid; gap: 2.5rem; align-items: center; }
                @media (min-width: 1024px) { .hero { grid-template-columns: 1fr 1fr; } }
                .hero h1 { font-size: 2.5rem; font-weight: 800; line-height: 1.1; margin-top: 1rem; }
                .hero-actions { margin-top: 1.5rem; display: flex; gap: 0.75rem; }
                .hero-actions button { display: inline-flex; align-items: center; gap: 0.4rem; padding: 0.7rem 1.2rem; border-radius: 999px; border: 1px solid #e5e7eb; background: #fff; cursor: pointer; }
                .hero-actions button.primary { background: #111827; color: #fff; border-color: #111827; }
                .hero-reel { position: relative; height: 0; padding-bottom: 56.25%; border-radius: 18px; overflow: hidden; background: #000; }
                .hero-reel iframe { position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none; }
                .shadow-3d { box-shadow: 0 40px 120px rgba(0, 0, 0, 0.6); }
                .card-deep { background: #fff; padding: 1rem; border-radius: 14px; box-shadow: 0 28px 80px rgba(0, 0, 0, 0.12); }
                .category-pill { display: inline-block; font-weight: 700; font-size: 0.75rem; padding: 0.35rem 0.6rem; border-radius: 999px; background: linear-gradient(90deg, #eef2ff, #fff7ed); color: #3730a3; }
                .benefit-grid { margin-top: 1.5rem; display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
                .benefit-number { float: right; color: #9ca3af; font-weight: 700; }
                .icon-box { width: 40px; height: 40px; border-radius: 10px; display: flex; align-items: center; justify-content: center; background: #eef2ff; color: #4f46e5; fill: currentColor; }
                .showcase-head { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 1rem; }
                .filters { display: flex; flex-wrap: wrap; gap: 0.5rem; align-items: center; }
                .filter-pill { border: 1px solid #e5e7eb; background: #fff; border-radius: 999px; padding: 0.35rem 0.8rem; cursor: pointer; font-size: 0.85rem; }
                .filter-pill.active { background: #111827; color: #fff; border-color: #111827; }
                .search { border: 1px solid #e5e7eb; border-radius: 999px; padding: 0.4rem 0.9rem; min-width: 200px; }
                .category { margin-top: 2.5rem; }
                .category-head p { color: #6b7280; font-size: 0.9rem; }
                .contact { text-align: center; }
                .contact-actions { margin-top: 1rem; display: flex; justify-content: center; gap: 0.75rem; }
                .contact-actions a { padding: 0.7rem 1.2rem; border-radius: 999px; border: 1px solid #e5e7eb; text-decoration: none; color: inherit; }
                .focus-ring:focus-visible { box-shadow: 0 0 0 3px rgba(99, 102, 241, 0.18); border-radius: 10px; }
                .reduce-motion * { scroll-behavior: auto !important; }
                "#}
            </style>

            <nav class="pv-nav">
                <a href="#hero"><strong>{"Sohel"}</strong></a>
                <div class="links">
                    <a href="#benefits">{"Benefits"}</a>
                    <a href="#showcase-section">{"Showcase"}</a>
                    <a href="#contact">{"Contact"}</a>
                </div>
                <a class="whatsapp" href={whatsapp.clone()} target="_blank" rel="noreferrer">
                    <WhatsAppIcon size={16} />{"WhatsApp"}
                </a>
            </nav>

            <HeroReel modal={modal.clone()} />
            <Benefits />
            <Showcase {on_play} />

            <section id="contact" class="contact">
                <h2>{"Ready to list faster?"}</h2>
                <p>{"Send the raw footage and a deadline; I'll send back a cut that sells."}</p>
                <div class="contact-actions">
                    <a href={whatsapp.clone()} target="_blank" rel="noopener noreferrer">{"Message on WhatsApp"}</a>
                    <a href={email}>{ config::contact_email() }</a>
                </div>
            </section>

            <MediaModal modal={modal} contact_link={whatsapp.clone()} />
            <QuickActions whatsapp_link={whatsapp} />
        </div>
    }
}
