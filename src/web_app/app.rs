// web_app/app.rs - Root application component
//
// Sets up meta tags, the widget configuration context and routing. The SSR
// shell lives here too so the server binary and the tests render the same
// document.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::config::WidgetConfig;
use crate::web_app::pages::RecommendationsPage;

/// HTML document wrapping the App for server-side rendering
#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone()/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component
///
/// A host that already provided a `WidgetConfig` keeps it; otherwise the
/// build-time configuration is used.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<WidgetConfig>().is_none() {
        let config = WidgetConfig::from_build_env();
        tracing::debug!(endpoint = %config.endpoint, enrichment = %config.enrichment, "Using build-time widget config");
        provide_context(config);
    }

    view! {
        <Title text="Product Recommendations" />
        <Meta name="description" content="Product recommendation widgets: grid, carousel, scroll row and spotlight" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/product_widgets.css" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=RecommendationsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-[#633cff] text-white rounded-lg hover:bg-[#5232d3] transition-colors"
                >
                    "Back to recommendations"
                </a>
            </div>
        </div>
    }
}
