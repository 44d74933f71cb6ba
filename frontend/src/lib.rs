use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use pages::{home::HomePage, members::MemberAccountPage};

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    state::notifications::provide_notifier();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/members/:member_number" view=MemberAccountPage/>
            </Routes>
        </Router>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount_app() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Starting memberdesk frontend (wasm)");

    // Resolve runtime config early; API calls await the same cached value.
    spawn_local(async move {
        config::init().await;
    });

    mount_to_body(|| view! { <App/> });
}
