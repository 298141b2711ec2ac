use ::common::{Navigation, NavigationSource, PageId, ScrollBehavior, ViewRouter};
use web_sys::ScrollToOptions;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
mod router;
pub mod api_client;
pub mod common;
pub mod settings;

use crate::common::OverlayProvider;
use components::layout::{Footer, Navbar};
use pages::{About, ContactPage, Home, PredictPage, SubmitDataPage};
use router::Route;

fn scroll_to_top(behavior: ScrollBehavior) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(match behavior {
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    });
    window.scroll_to_with_scroll_to_options(&options);
}

fn page_content(page: PageId, on_navigate: &Callback<PageId>) -> Html {
    log::trace!("Rendering {} page", page);
    match page {
        PageId::Home => html! { <Home on_navigate={on_navigate.clone()} /> },
        PageId::Predict => html! { <PredictPage /> },
        PageId::SubmitData => html! { <SubmitDataPage /> },
        PageId::About => html! { <About /> },
        PageId::Contact => html! { <ContactPage /> },
    }
}

/// Keeps every page section mounted once visited and shows only the active one.
#[function_component(Shell)]
fn shell() -> Html {
    let router = use_mut_ref(ViewRouter::new);
    let last_path = use_mut_ref(|| None::<String>);
    let pending_link = use_mut_ref(|| false);
    let pending_scroll = use_mut_ref(|| None::<Navigation>);
    let location = use_location();
    let navigator = use_navigator();

    let path = location.map(|l| l.path().to_string()).unwrap_or_default();

    if last_path.borrow().as_deref() != Some(path.as_str()) {
        let source = if last_path.borrow().is_none() {
            NavigationSource::Initial
        } else if pending_link.replace(false) {
            NavigationSource::Link
        } else {
            NavigationSource::Fragment
        };
        let navigation = router.borrow_mut().navigate(&path, source);
        log::debug!("Navigated to {:?} from {:?} ({:?})", navigation.page, navigation.previous, source);
        if navigation.first_visit {
            log::info!("Initializing {} page", navigation.page);
        }
        *last_path.borrow_mut() = Some(path.clone());
        *pending_scroll.borrow_mut() = Some(navigation);
    }

    {
        let pending_scroll = pending_scroll.clone();
        use_effect_with(path, move |_| {
            if let Some(navigation) = pending_scroll.borrow_mut().take() {
                scroll_to_top(navigation.scroll);
            }
            || ()
        });
    }

    let on_navigate = {
        let router = router.clone();
        let pending_link = pending_link.clone();
        Callback::from(move |page: PageId| {
            if router.borrow().active() == Some(page) {
                scroll_to_top(ScrollBehavior::Smooth);
                return;
            }
            match &navigator {
                Some(navigator) => {
                    *pending_link.borrow_mut() = true;
                    navigator.push(&Route::from(page));
                }
                None => log::error!("Navigator unavailable, cannot open {}", page),
            }
        })
    };

    let router = router.borrow();
    let sections = PageId::ALL.into_iter().map(|id| {
        let page = router.page(id);
        let content = if page.initialized {
            page_content(id, &on_navigate)
        } else {
            html! {}
        };
        html! {
            <section
                key={id.as_str()}
                id={id.as_str()}
                class={classes!("page", page.active.then_some("active"), (!page.active).then_some("hidden"))}
            >
                {content}
            </section>
        }
    });

    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar active={router.active()} on_navigate={on_navigate.clone()} />
            <main class="flex-1">
                { for sections }
            </main>
            <Footer />
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <HashRouter>
            <OverlayProvider>
                <Shell />
            </OverlayProvider>
        </HashRouter>
    }
}

/// Rewrites a `#predict` style fragment to the `#/predict` form the hash router reads.
fn normalize_fragment() {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return;
    };
    let Ok(hash) = location.hash() else {
        return;
    };
    if let Some(name) = hash.strip_prefix('#').filter(|name| !name.is_empty() && !name.starts_with('/')) {
        log::debug!("Normalizing fragment {}", hash);
        if let Err(e) = location.replace(&format!("#/{}", name)) {
            log::warn!("Could not normalize fragment {}: {:?}", hash, e);
        }
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== AgriPredict Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    normalize_fragment();

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
