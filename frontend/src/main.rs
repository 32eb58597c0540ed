use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::window;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod contact;
mod error;
mod prefs;
mod tracking;
mod media;
mod data {
    pub mod designs;
    pub mod services;
    pub mod showcase;
}
mod components {
    pub mod gallery;
    pub mod icons;
    pub mod media_card;
    pub mod media_modal;
    pub mod notice;
    pub mod progressive_image;
    pub mod quick_actions;
}
mod pages {
    pub mod home;
    pub mod portfolio;
    pub mod portfolio_video;
    pub mod service;
}

use pages::{
    home::Home,
    portfolio::Portfolio,
    portfolio_video::PortfolioVideo,
    service::ServicePage,
};
use prefs::UiCapabilities;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/portfolio")]
    Portfolio,
    #[at("/portfolio-video")]
    PortfolioVideo,
    #[at("/services/:slug")]
    Service { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The portfolio pages carry their own navigation.
    fn has_site_nav(&self) -> bool {
        !matches!(self, Route::Portfolio | Route::PortfolioVideo)
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        Route::PortfolioVideo => {
            info!("Rendering Video Portfolio page");
            html! { <PortfolioVideo /> }
        },
        Route::Service { slug } => {
            info!("Rendering Service page for {}", slug);
            html! { <ServicePage {slug} /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <main class="not-found">
                    <h2>{"Page not found"}</h2>
                    <Link<Route> to={Route::Home}>{"Back to services"}</Link<Route>>
                </main>
            }
        },
    }
}

#[function_component]
fn Nav() -> Html {
    let route = use_route::<Route>();
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let scroll_callback = Closure::<dyn FnMut()>::new({
                let window = window.clone();
                move || {
                    let scroll_top = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 80.0);
                }
            });

            if let Some(w) = &window {
                if let Err(err) = w.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    log::warn!("scroll listener not attached: {:?}", err);
                }
            }

            move || {
                if let Some(w) = &window {
                    let _ = w.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    if !route.map(|r| r.has_site_nav()).unwrap_or(true) {
        return html! {};
    }

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                .top-nav { position: sticky; top: 0; z-index: 40; display: flex; align-items: center; justify-content: space-between; padding: 0 1.5rem; height: 64px; background: #fff; border-bottom: 1px solid transparent; transition: box-shadow 0.2s ease; }
                .top-nav.scrolled { border-bottom-color: #f3f4f6; box-shadow: 0 6px 20px rgba(0,0,0,0.06); }
                .top-nav .nav-links { display: flex; gap: 1.5rem; font-size: 0.9rem; }
                .top-nav a { color: #111827; text-decoration: none; }
                .not-found { max-width: 48rem; margin: 0 auto; padding: 7rem 1.5rem; text-align: center; }
                "#}
            </style>
            <Link<Route> to={Route::Home} classes="brand"><strong>{"Sohel"}</strong>{" · Realtor Video Editor"}</Link<Route>>
            <div class="nav-links">
                <Link<Route> to={Route::PortfolioVideo}>{"Video portfolio"}</Link<Route>>
                <Link<Route> to={Route::Portfolio}>{"Thumbnails"}</Link<Route>>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let capabilities = use_memo(|_| UiCapabilities::detect(), ());

    html! {
        <ContextProvider<UiCapabilities> context={*capabilities}>
            <div class={classes!("app-root", capabilities.motion.root_class())}>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </div>
        </ContextProvider<UiCapabilities>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", err.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
