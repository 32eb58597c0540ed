use yew::prelude::*;
use yew_router::prelude::*;

use crate::contact::default_whatsapp_link;
use crate::data::services::{self, Service, ShowcaseEmbed};
use crate::media::modal::embed_url;
use crate::media::{use_viewport_gate, MountConfig, Variant};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ShowcaseLinkProps {
    pub url: AttrValue,
    pub title: String,
}

/// One showcase link: an inline player for standard videos, an outbound
/// link for everything else. The player iframe is mounted near the viewport.
#[function_component(ShowcaseLink)]
pub fn showcase_link(props: &ShowcaseLinkProps) -> Html {
    let node = use_node_ref();
    let gate = use_viewport_gate(node.clone(), MountConfig { eager: false });

    match ShowcaseEmbed::for_link(&props.url) {
        ShowcaseEmbed::Inline { id } => html! {
            <div ref={node} class="showcase-embed" style={format!("padding-bottom: {};", Variant::Standard.aspect_padding())}>
                if gate.should_mount() {
                    <iframe
                        src={embed_url(&id)}
                        title={props.title.clone()}
                        frameborder="0"
                        allowfullscreen=true
                        onload={gate.on_loaded.reform(|_: Event| ())}
                    />
                }
            </div>
        },
        ShowcaseEmbed::OpenShorts => html! {
            <a ref={node} href={props.url.clone()} target="_blank" rel="noopener noreferrer" class="showcase-link">{"Open Shorts"}</a>
        },
        ShowcaseEmbed::OpenVideo => html! {
            <a ref={node} href={props.url.clone()} target="_blank" rel="noopener noreferrer" class="showcase-link">{"Open Video"}</a>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    pub slug: String,
}

#[function_component(ServicePage)]
pub fn service_page(props: &ServicePageProps) -> Html {
    let Some(service) = services::find(&props.slug) else {
        log::info!("unknown service slug {}", props.slug);
        return html! {
            <main class="service-page not-found">
                <h2>{"Service not found"}</h2>
                <p>
                    {"Please go back to the "}
                    <Link<Route> to={Route::Home}>{"services page"}</Link<Route>>
                    {"."}
                </p>
            </main>
        };
    };

    html! {
        <main class="service-page">
            <style>
                {r#"
                .service-page { max-width: 1024px; margin: 0 auto; padding: 5rem 1.5rem; display: grid; gap: 2.5rem; }
                @media (min-width: 1024px) { .service-page { grid-template-columns: 2fr 1fr; } }
                .service-page.not-found { display: block; text-align: center; }
                .service-page h1 { font-size: 1.9rem; font-weight: 800; }
                .service-page .sub { margin-top: 1rem; color: #4b5563; }
                .service-page ul { margin-top: 0.5rem; padding-left: 1.2rem; color: #4b5563; }
                .service-actions { margin-top: 1.5rem; display: flex; gap: 0.75rem; }
                .service-actions a { padding: 0.5rem 1rem; border-radius: 8px; border: 1px solid #e5e7eb; text-decoration: none; }
                .service-actions a.primary { background: #4f46e5; color: #fff; border-color: #4f46e5; }
                .showcase-aside { padding: 1.5rem; border-radius: 18px; border: 1px solid #e5e7eb; background: #fff; display: flex; flex-direction: column; gap: 1rem; }
                .showcase-embed { position: relative; height: 0; overflow: hidden; border-radius: 10px; background: #111827; }
                .showcase-embed iframe { position: absolute; inset: 0; width: 100%; height: 100%; }
                .showcase-link { text-decoration: underline; color: #4f46e5; }
                "#}
            </style>
            <ServiceDetails service={*service} />
            <aside class="showcase-aside">
                <h4>{"Showcase"}</h4>
                if service.showcase.is_empty() {
                    <div class="muted">{"No showcase links yet."}</div>
                } else {
                    { for service.showcase.iter().enumerate().map(|(i, url)| html! {
                        <ShowcaseLink key={*url} url={AttrValue::Static(*url)} title={format!("{} {}", service.title, i + 1)} />
                    }) }
                }
            </aside>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceDetailsProps {
    service: Service,
}

#[function_component(ServiceDetails)]
fn service_details(props: &ServiceDetailsProps) -> Html {
    let service = &props.service;
    html! {
        <div>
            <h1>{ service.hero }</h1>
            <p class="sub">{ service.sub }</p>
            <section>
                <h3>{"About this service"}</h3>
                <p>{ service.description }</p>
                <h4>{"Key features"}</h4>
                <ul>
                    { for service.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                </ul>
                <div class="service-actions">
                    <a class="primary" href={default_whatsapp_link()} target="_blank" rel="noopener noreferrer">{"Request this edit"}</a>
                    <Link<Route> to={Route::PortfolioVideo}>{"See the full portfolio"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
