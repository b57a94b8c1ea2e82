// web_app/mod.rs - Root module for the recommendation widgets
//
// Architecture:
// - model/: Product records (wire + display)
// - enrichment.rs: MockEnrichment, the placeholder price/rating step
// - state.rs: FetchState and the per-widget UI state
// - config.rs: endpoint and enrichment configuration
// - api/: HTTP client for the recommendation endpoint
// - hooks.rs: use_recommendations(), the fetch-once hook every widget uses (SSR + hydrate)
// - components/: atoms, product cards and the four widgets (SSR + hydrate)
// - pages/: the page that mounts the widgets side by side (SSR + hydrate)
// - app.rs: root component and SSR shell (SSR + hydrate)

pub mod model;
pub mod enrichment;
pub mod state;
pub mod config;
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod hooks;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
