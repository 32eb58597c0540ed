use web_sys::{window, Element};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icons::{ChevronLeft, ChevronRight, CloseIcon, WhatsAppIcon};
use crate::components::notice::{use_notice, NoticeKind, NoticeView};
use crate::components::progressive_image::{ImageFit, ProgressiveImage};
use crate::config;
use crate::contact::{copy_text, pitch_message, whatsapp_link, CORE_VALUE};
use crate::data::designs::{self, broken_image_fallback, srcset, transform_url, Lightbox, PREFETCH_COUNT};
use crate::media::gallery::Direction;
use crate::prefs::{load_theme, store_theme};
use crate::tracking;

const CASE_STUDIES: [(&str, &str); 3] = [
    ("Gaming Channel", "32% CTR uplift after 4 thumbnails, focused on facial expression and bold text."),
    ("Tech Reviews", "Click-through improved by 28% with bright accent colors and a simpler visual hierarchy."),
    ("Lifestyle Vlogs", "Double-tap style thumbnails and consistent branding led to faster viewer recognition."),
];

/// Adds `<link rel="preload">` hints for the first images and returns them
/// so they can be removed again.
fn preload_hints(images: &[String]) -> Vec<Element> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Some(head) = document.head() else {
        return Vec::new();
    };
    images
        .iter()
        .take(PREFETCH_COUNT)
        .filter_map(|src| {
            let link = document.create_element("link").ok()?;
            link.set_attribute("rel", "preload").ok()?;
            link.set_attribute("as", "image").ok()?;
            link.set_attribute("href", &transform_url(src, 1200)).ok()?;
            head.append_child(&link).ok()?;
            Some(link)
        })
        .collect()
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let images = use_memo(|_| designs::images(), ());
    let theme = use_state(load_theme);
    let menu_open = use_state(|| false);
    let lightbox = use_state(Lightbox::closed);
    let notice = use_notice();
    let whatsapp = whatsapp_link(config::designer_whatsapp_number(), config::designer_whatsapp_message());

    {
        use_effect_with_deps(
            move |theme| {
                if let Err(err) = store_theme(*theme) {
                    log::debug!("theme not persisted: {}", err);
                }
                || ()
            },
            *theme,
        );
    }

    use_effect_with_deps(
        move |_| {
            if let Some(rid) = tracking::current_rid() {
                tracking::report_click(rid);
            }
            || ()
        },
        (),
    );

    {
        let images = images.clone();
        use_effect_with_deps(
            move |_| {
                let hints = preload_hints(&images);
                move || hints.iter().for_each(Element::remove)
            },
            (),
        );
    }

    {
        let lightbox = lightbox.clone();
        let len = images.len();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if lightbox.active().is_none() {
                return;
            }
            let key = e.key();
            if key == "Escape" {
                lightbox.set(Lightbox::closed());
            } else if let Some(direction) = Direction::from_key(&key) {
                e.prevent_default();
                lightbox.set(match direction {
                    Direction::Back => lightbox.previous(len),
                    Direction::Forward => lightbox.next(len),
                });
            }
        });
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let copy_pitch = {
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match copy_text(&pitch_message("Creator", "Recent Work: [link]")).await {
                    Ok(()) => notice.show(NoticeKind::Success, "Copied"),
                    Err(err) => {
                        log::warn!("{}", err);
                        notice.show(NoticeKind::Failure, "Unable to copy");
                    }
                }
            });
        })
    };
    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.set(Lightbox::closed()))
    };
    let step = |direction: Direction| {
        let lightbox = lightbox.clone();
        let len = images.len();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            lightbox.set(match direction {
                Direction::Back => lightbox.previous(len),
                Direction::Forward => lightbox.next(len),
            });
        })
    };

    let hero = images.first().map(|first| html! {
        <ProgressiveImage
            src={transform_url(first, 1400)}
            srcset={srcset(first, &[400, 800, 1400])}
            sizes="100vw"
            placeholder={transform_url(first, 60)}
            alt="Featured thumbnail"
            eager=true
            fit={ImageFit::Auto}
        />
    });

    html! {
        <div class={classes!("thumb-portfolio", theme.root_class())}>
            <style>
                {r#"
                .thumb-portfolio { --accent: #ff3b3b; min-height: 100vh; background: var(--bg); color: var(--text); }
                .thumb-portfolio.light-mode { --bg: #ffffff; --text: #0b0b0d; --muted: #334155; --card-bg: rgba(255,255,255,0.9); --card-border: rgba(0,0,0,0.06); }
                .thumb-portfolio.dark-mode { --bg: #07070a; --text: #f5f5f7; --muted: #cbd5e1; --card-bg: rgba(18,18,24,0.9); --card-border: rgba(255,255,255,0.08); }
                .tp-nav { position: sticky; top: 0; z-index: 50; backdrop-filter: blur(4px); border-bottom: 1px solid var(--card-border); }
                .tp-nav .bar { max-width: 1280px; margin: 0 auto; height: 64px; padding: 0 1.5rem; display: flex; align-items: center; justify-content: space-between; }
                .tp-nav .links { display: flex; gap: 1.5rem; }
                .tp-nav a { color: var(--text); text-decoration: none; }
                .tp-nav .actions { display: flex; align-items: center; gap: 0.75rem; }
                .pill-btn { display: inline-flex; align-items: center; gap: 0.4rem; border: 1px solid var(--card-border); background: var(--card-bg); color: var(--text); border-radius: 999px; padding: 0.45rem 0.9rem; cursor: pointer; text-decoration: none; font-size: 0.85rem; }
                .pill-btn.accent { background: var(--accent); border-color: var(--accent); color: #fff; font-weight: 600; }
                .menu-toggle { display: none; }
                .mobile-menu { padding: 1rem 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; background: var(--card-bg); }
                @media (max-width: 768px) { .tp-nav .links, .tp-nav .desktop-only { display: none; } .menu-toggle { display: inline-flex; } }
                .tp-hero { max-width: 1280px; margin: 0 auto; padding: 3rem 1.5rem; display: grid; gap: 2rem; align-items: center; }
                @media (min-width: 1024px) { .tp-hero { grid-template-columns: 5fr 7fr; } }
                .tp-hero h1 { font-size: 3rem; font-weight: 800; line-height: 1.05; }
                .tp-hero .value { margin-top: 1rem; color: var(--accent); font-weight: 700; }
                .tp-hero .cta { margin-top: 1.5rem; display: flex; flex-wrap: wrap; gap: 0.75rem; align-items: center; }
                .hero-thumb { border-radius: 24px; overflow: hidden; min-height: 320px; background: var(--card-bg); border: 1px solid var(--card-border); }
                .stats { margin-top: 2rem; display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; max-width: 28rem; }
                .stats .num { font-size: 1.4rem; font-weight: 800; }
                .stats .lbl { font-size: 0.75rem; color: var(--muted); }
                .tp-gallery { max-width: 1280px; margin: 0 auto; padding: 0 1.5rem 4rem; }
                .tile-grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); }
                .tile { position: relative; display: block; width: 100%; height: 13rem; padding: 0; border: none; border-radius: 14px; overflow: hidden; background: var(--card-bg); cursor: pointer; transition: transform 0.2s ease; }
                .tile:hover { transform: scale(1.02); }
                .tile .progressive { width: 100%; height: 100%; }
                .tile-title { position: absolute; left: 12px; bottom: 10px; color: #fff; font-weight: 700; text-shadow: 0 2px 8px rgba(0,0,0,0.6); }
                .cases { margin-top: 3rem; display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
                .case { padding: 1.5rem; border-radius: 18px; background: var(--card-bg); border: 1px solid var(--card-border); }
                .tp-about { max-width: 56rem; margin: 0 auto; padding: 0 1.5rem 4rem; }
                .lightbox { position: fixed; inset: 0; z-index: 60; display: flex; align-items: center; justify-content: center; padding: 1rem; background: rgba(0,0,0,0.85); }
                .lightbox img { max-width: min(1024px, 100%); max-height: 85vh; object-fit: contain; background: #000; border-radius: 12px; }
                .lightbox button { position: absolute; border: none; border-radius: 999px; width: 44px; height: 44px; background: rgba(255,255,255,0.15); color: #fff; cursor: pointer; }
                .lightbox .prev { left: 1rem; } .lightbox .next { right: 1rem; } .lightbox .close { top: 1rem; right: 1rem; }
                .inline-notice { font-size: 0.8rem; padding: 0.25rem 0.6rem; border-radius: 999px; }
                .inline-notice.success { background: rgba(34,197,94,0.15); color: #16a34a; }
                .inline-notice.failure { background: rgba(239,68,68,0.15); color: #dc2626; }
                .tp-footer { text-align: center; padding: 3rem 1.5rem; }
                .reduce-motion .tile { transition: none; transform: none; }
                "#}
            </style>

            <nav class="tp-nav">
                <div class="bar">
                    <a href="#top"><strong>{"Aamir"}</strong>{" · Thumbnail Designer"}</a>
                    <div class="links">
                        <a href="#gallery">{"Work"}</a>
                        <a href="#about">{"About"}</a>
                    </div>
                    <div class="actions">
                        <button class="pill-btn desktop-only" onclick={toggle_theme} aria-label="Toggle theme">
                            { theme.label() }
                        </button>
                        <a class="pill-btn accent desktop-only" href={whatsapp.clone()} target="_blank" rel="noopener noreferrer">
                            <WhatsAppIcon size={16} />{"WhatsApp"}
                        </a>
                        <button class="pill-btn menu-toggle" onclick={toggle_menu} aria-expanded={(*menu_open).to_string()} aria-label="Toggle menu">
                            { if *menu_open { "Close" } else { "Menu" } }
                        </button>
                    </div>
                </div>
                if *menu_open {
                    <div class="mobile-menu">
                        <a href="#gallery" onclick={close_menu.clone()}>{"Work"}</a>
                        <a href="#about" onclick={close_menu.clone()}>{"About"}</a>
                        <a class="pill-btn accent" href={whatsapp.clone()} onclick={close_menu}>{"Contact on WhatsApp"}</a>
                    </div>
                }
            </nav>

            <header id="top" class="tp-hero">
                <div>
                    <h1>{"Thumbnails that Stop The Scroll"}</h1>
                    <p class="value">{ CORE_VALUE }</p>
                    <div class="cta">
                        <a class="pill-btn accent" href={whatsapp.clone()} target="_blank" rel="noopener noreferrer">{"Get a quote"}</a>
                        <a class="pill-btn" href="#gallery">{"See work"}</a>
                        <button class="pill-btn" onclick={copy_pitch}>{"Copy pitch"}</button>
                        <NoticeView notice={notice.current().cloned()} />
                    </div>
                    <div class="stats">
                        <div><div class="num">{"+250"}</div><div class="lbl">{"Thumbnails delivered"}</div></div>
                        <div><div class="num">{"+35%"}</div><div class="lbl">{"Average CTR uplift"}</div></div>
                        <div><div class="num">{"48h"}</div><div class="lbl">{"Fast turnaround"}</div></div>
                    </div>
                </div>
                <div class="hero-thumb">
                    { hero.unwrap_or_default() }
                </div>
            </header>

            <main id="gallery" class="tp-gallery">
                <h2>{"Selected thumbnails"}</h2>
                <div class="tile-grid">
                    { for images.iter().enumerate().map(|(i, src)| {
                        let open = {
                            let lightbox = lightbox.clone();
                            let len = images.len();
                            Callback::from(move |_: MouseEvent| lightbox.set(Lightbox::open(i, len)))
                        };
                        html! {
                            <button key={src.clone()} class="tile" onclick={open} aria-label={format!("Open image {}", i + 1)}>
                                <ProgressiveImage
                                    src={transform_url(src, 800)}
                                    srcset={srcset(src, &[320, 640, 800])}
                                    sizes="(max-width:640px) 100vw, (max-width:1024px) 50vw, 33vw"
                                    placeholder={transform_url(src, 40)}
                                    alt={format!("thumb-{}", i + 1)}
                                    eager={i == 0}
                                    fallback_src={broken_image_fallback(i)}
                                />
                                <span class="tile-title">{ format!("Thumbnail {}", i + 1) }</span>
                            </button>
                        }
                    }) }
                </div>
                <div class="cases">
                    { for CASE_STUDIES.iter().map(|(title, body)| html! {
                        <div class="case"><strong>{ *title }</strong><p>{ *body }</p></div>
                    }) }
                </div>
            </main>

            <section id="about" class="tp-about">
                <div class="case">
                    <h3>{"About Aamir"}</h3>
                    <p>{"I design high-impact YouTube thumbnails focused on clear faces, bold titles, and contrast-first composition to increase CTR and long-term channel growth."}</p>
                    <a class="pill-btn accent" href={whatsapp.clone()} target="_blank" rel="noopener noreferrer">{"Contact"}</a>
                </div>
            </section>

            if let Some(active) = lightbox.active().and_then(|i| images.get(i).map(|src| (i, src))) {
                <div class="lightbox" role="dialog" aria-modal="true" onclick={close_lightbox.clone()}>
                    <button class="prev" onclick={step(Direction::Back)} aria-label="Previous image"><ChevronLeft /></button>
                    <img
                        src={transform_url(active.1, 1400)}
                        alt={format!("open-{}", active.0 + 1)}
                        decoding="async"
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    />
                    <button class="next" onclick={step(Direction::Forward)} aria-label="Next image"><ChevronRight /></button>
                    <button class="close" onclick={close_lightbox} aria-label="Close"><CloseIcon /></button>
                </div>
            }

            <footer class="tp-footer">
                <p>{"Let's craft thumbnails that make people click."}</p>
                <a class="pill-btn accent" href={whatsapp} target="_blank" rel="noopener noreferrer">{"Book a slot on WhatsApp"}</a>
            </footer>
        </div>
    }
}
