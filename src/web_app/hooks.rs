// web_app/hooks.rs - Hooks shared by the recommendation widgets
//
// use_recommendations() is the one data-loading path for every widget: it
// fires a single request after mount, runs the records through mock
// enrichment and resolves the widget's FetchState exactly once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{FetchError, RecommendationClient};
use crate::web_app::config::WidgetConfig;
use crate::web_app::enrichment::MockEnrichment;
use crate::web_app::model::Product;
use crate::web_app::state::FetchState;

/// Fetch state of a recommendation widget
pub type RecommendationState = FetchState<Vec<Product>>;

/// Tracks whether the owning widget is still mounted
///
/// Cleared from `on_cleanup`; responses that arrive afterwards are dropped.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// A guard released when the current reactive owner is cleaned up
    pub fn for_current_owner() -> Self {
        let guard = Self::new();
        on_cleanup({
            let guard = guard.clone();
            move || guard.release()
        });
        guard
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Load recommendations once for the calling widget
///
/// The config comes from context (see `WidgetConfig`), falling back to the
/// build-time configuration. Effects only run in the browser, so on the server
/// the widget renders in `Loading` and the request starts after hydration.
pub fn use_recommendations(widget: &'static str) -> ReadSignal<RecommendationState> {
    let config = use_context::<WidgetConfig>().unwrap_or_default();
    let (state, set_state) = signal(RecommendationState::Loading);
    let guard = MountGuard::for_current_owner();

    Effect::new(move |started: Option<()>| {
        if started.is_some() {
            return;
        }
        spawn_local(load_recommendations(widget, config.clone(), guard.clone(), set_state));
    });

    state
}

/// The task behind `use_recommendations`: one request, then resolve the state
pub async fn load_recommendations(
    widget: &'static str,
    config: WidgetConfig,
    guard: MountGuard,
    set_state: WriteSignal<RecommendationState>,
) {
    let client = RecommendationClient::new(&config);
    let mode = config.enrichment;

    tracing::debug!(widget, endpoint = client.endpoint(), %mode, "Loading recommendations");

    let mut enrichment = MockEnrichment::new(mode);
    let outcome = client.fetch_products(&mut enrichment).await;
    apply_outcome(widget, &guard, set_state, outcome);
}

/// Resolve the widget's state with the fetch outcome, unless it was unmounted
pub fn apply_outcome(
    widget: &'static str,
    guard: &MountGuard,
    set_state: WriteSignal<RecommendationState>,
    outcome: Result<Vec<Product>, FetchError>,
) {
    if !guard.is_mounted() {
        tracing::debug!(widget, "Dropping recommendations that arrived after unmount");
        return;
    }

    let outcome = outcome.map_err(|e| {
        tracing::warn!(widget, error = %e, "Fetching recommendations failed");
        e.user_message()
    });

    if set_state.try_update(|state| state.resolve(outcome)).is_none() {
        tracing::debug!(widget, "Widget state already disposed, result dropped");
    }
}

/// Stub add-to-cart action; records the intent and changes nothing else
pub fn log_add_to_cart(widget: &str, product_id: u64) {
    tracing::info!(widget, product_id, "Add to cart requested");
}

/// Add-to-cart callback for a widget
pub fn use_add_to_cart(widget: &'static str) -> Callback<u64> {
    Callback::new(move |product_id: u64| log_add_to_cart(widget, product_id))
}
