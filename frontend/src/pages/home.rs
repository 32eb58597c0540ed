use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::quick_actions::QuickActions;
use crate::contact::default_whatsapp_link;
use crate::data::services::SERVICES;
use crate::pages::service::ShowcaseLink;
use crate::Route;

const WHY_CHOOSE: [(&str, &str); 5] = [
    ("Quick Delivery", "48-72h standard; rush options available."),
    ("Realtor-First Expertise", "Editing optimized to highlight salable features."),
    ("Flexible Pricing", "Per-edit, bundle, and subscription options."),
    ("US-Based Editors", "Fast, timezone-friendly communication."),
    ("100% Satisfaction", "Revisions until you're happy."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let whatsapp = default_whatsapp_link();

    html! {
        <main class="home">
            <style>
                {r#"
                .home { max-width: 1280px; margin: 0 auto; padding: 5rem 1.5rem; }
                .home h1 { font-size: 2.25rem; font-weight: 800; line-height: 1.15; }
                .home .lead { margin-top: 1rem; font-size: 1.1rem; color: #4b5563; }
                .home .cta-row { margin-top: 1.5rem; display: flex; flex-wrap: wrap; gap: 0.75rem; }
                .home .cta-row a { padding: 0.75rem 1.25rem; border-radius: 999px; border: 1px solid #e5e7eb; text-decoration: none; }
                .home .cta-row a.primary { background: #4f46e5; color: #fff; border-color: #4f46e5; font-weight: 600; }
                .home .stats { margin-top: 2rem; display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; text-align: center; }
                .home .stats strong { display: block; font-size: 1.5rem; }
                .home section { margin-top: 5rem; }
                .card-grid { margin-top: 1.5rem; display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
                .card-grid > div { padding: 1.5rem; border-radius: 18px; border: 1px solid #e5e7eb; background: #fff; }
                .card-grid .card-links { margin-top: 1rem; display: flex; justify-content: space-between; }
                .showcase-embed { position: relative; height: 0; overflow: hidden; border-radius: 10px; background: #111827; margin-top: 0.75rem; }
                .showcase-embed iframe { position: absolute; inset: 0; width: 100%; height: 100%; }
                "#}
            </style>

            <div class="home-hero">
                <h1>{"Video Editing for Realtors: Sell Homes Faster"}</h1>
                <p class="lead">
                    {"I edit property videos that shorten time on market: dynamic montages, cinematic walkthroughs, viral shorts, and aerial neighborhood highlights. Fast delivery, realtor-focused edits, and social-ready deliverables."}
                </p>
                <div class="cta-row">
                    <a class="primary" href={whatsapp.clone()} target="_blank" rel="noopener noreferrer">{"Get a quote"}</a>
                    <a href="#services">{"See services"}</a>
                    <Link<Route> to={Route::PortfolioVideo}>{"Watch the reel"}</Link<Route>>
                </div>
                <ul class="stats">
                    <li><strong>{"48-72h"}</strong>{"Typical delivery"}</li>
                    <li><strong>{"Realtor-First"}</strong>{"Templated for listings"}</li>
                    <li><strong>{"US Editors"}</strong>{"Timezone-friendly"}</li>
                </ul>
            </div>

            <section id="services">
                <h2>{"Services"}</h2>
                <p>{"Four focused services tailored for property marketing."}</p>
                <div class="card-grid">
                    { for SERVICES.iter().map(|s| html! {
                        <div key={s.slug}>
                            <h3>{ s.title }</h3>
                            <p>{ s.sub }</p>
                            <ul>
                                { for s.features.iter().take(3).map(|f| html! { <li>{ format!("• {}", f) }</li> }) }
                            </ul>
                            <div class="card-links">
                                <Link<Route> to={Route::Service { slug: s.slug.to_string() }}>{"Learn more →"}</Link<Route>>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="why">
                <h2>{"Why Choose Me"}</h2>
                <div class="card-grid">
                    { for WHY_CHOOSE.iter().map(|(title, body)| html! {
                        <div>
                            <h4>{ *title }</h4>
                            <p>{ *body }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="showcase-section">
                <h2>{"Showcase"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().filter(|s| !s.showcase.is_empty()).map(|s| html! {
                        <div key={s.slug}>
                            <h4>{ s.title }</h4>
                            { for s.showcase.iter().take(2).enumerate().map(|(i, url)| html! {
                                <ShowcaseLink url={AttrValue::Static(*url)} title={format!("{} demo {}", s.title, i + 1)} />
                            }) }
                        </div>
                    }) }
                </div>
            </section>

            <QuickActions whatsapp_link={whatsapp} />
        </main>
    }
}
