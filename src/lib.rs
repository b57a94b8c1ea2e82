// lib.rs - Root module for the product_widgets library
//
// The library holds the recommendation widgets (web_app) and the built-in
// fixture catalogs. With the `hydrate` feature it is also the WASM entry
// point that hydrates the server-rendered page.

/// Built-in recommendation catalogs for the demo endpoint and tests
pub mod fixtures;

pub mod web_app;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    // No tracing subscriber runs in the browser, so events fall through to
    // `log` and from there to the console. Err means a logger is already set.
    console_log::init_with_level(log::Level::Info).ok();

    leptos::mount::hydrate_body(web_app::App);
}
