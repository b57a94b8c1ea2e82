// web_app/pages/recommendations.rs - Recommendations page
//
// Mounts the four widgets side by side. Each widget fetches independently,
// so one failing endpoint call only affects its own widget.

use leptos::prelude::*;

use crate::web_app::components::{
    CarouselWidget, GridWidget, HorizontalScrollWidget, SingleProductCarousel,
};

/// Page with every recommendation widget
#[component]
pub fn RecommendationsPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 py-8 space-y-12">
            <GridWidget />
            <CarouselWidget />
            <HorizontalScrollWidget />
            <SingleProductCarousel />
        </div>
    }
}
