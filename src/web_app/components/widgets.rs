// web_app/components/widgets.rs - The four recommendation widgets
//
// Every widget is split in two:
// - XxxWidget: no props; mounts use_recommendations() and owns the fetch
// - XxxView: renders a given fetch state; holds the widget's UI state
//
// The views share fetch_state_view() for the Loading / Failed branches, so the
// only widget-specific code is the Ready layout.

use leptos::prelude::*;

use super::common::{ErrorDisplay, Loading, ModalWrapper, NavButton};
use super::product::{CarouselSlide, ProductCard, ProductSpotlight, QuickViewPanel, ScrollCard};
use crate::web_app::hooks::{use_add_to_cart, use_recommendations, RecommendationState};
use crate::web_app::model::Product;
use crate::web_app::state::{FetchState, QuickViewSelection, SelectionIndex, WishlistSet};

/// Render the shared Loading / Failed branches, or the widget layout when Ready
pub fn fetch_state_view<V>(state: RecommendationState, ready: impl FnOnce(Vec<Product>) -> V) -> AnyView
where
    V: IntoView + 'static,
{
    match state {
        FetchState::Loading => view! { <Loading message="Loading recommendations..." /> }.into_any(),
        FetchState::Failed(error) => view! { <ErrorDisplay error=error /> }.into_any(),
        FetchState::Ready(products) => ready(products).into_any(),
    }
}

// ===== Grid =====

/// Grid of every recommended product
#[component]
pub fn GridWidget() -> impl IntoView {
    let state = use_recommendations("grid");
    view! { <GridView state=state /> }
}

#[component]
pub fn GridView(#[prop(into)] state: Signal<RecommendationState>) -> impl IntoView {
    let add_to_cart = use_add_to_cart("grid");

    view! {
        <section class="max-w-4xl mx-auto p-4" data-widget="grid">
            <h2 class="text-2xl font-bold mb-4">"Recommended for You"</h2>
            {move || fetch_state_view(state.get(), |products| view! {
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4" data-role="product-grid">
                    <For
                        each=move || products.clone()
                        key=|product| product.id
                        children=move |product| view! {
                            <ProductCard product=product on_add_to_cart=add_to_cart />
                        }
                    />
                </div>
            })}
        </section>
    }
}

// ===== Carousel with quick view =====

/// One slide at a time, with prev/next and a quick view overlay
#[component]
pub fn CarouselWidget() -> impl IntoView {
    let state = use_recommendations("carousel");
    view! { <CarouselView state=state /> }
}

#[component]
pub fn CarouselView(
    #[prop(into)] state: Signal<RecommendationState>,
    /// Slide cursor; a fresh one starting at 0 when omitted
    #[prop(optional)]
    index: Option<RwSignal<SelectionIndex>>,
    /// Quick view selection; empty when omitted
    #[prop(optional)]
    quick_view: Option<RwSignal<QuickViewSelection>>,
) -> impl IntoView {
    let index = index.unwrap_or_else(|| RwSignal::new(SelectionIndex::new()));
    let quick_view = quick_view.unwrap_or_else(|| RwSignal::new(QuickViewSelection::default()));
    let add_to_cart = use_add_to_cart("carousel");

    let on_quick_view = Callback::new(move |product: Product| {
        quick_view.update(|selection| selection.open(product));
    });
    let on_close = Callback::new(move |()| quick_view.update(QuickViewSelection::close));

    view! {
        <section class="max-w-4xl mx-auto p-4 relative" data-widget="carousel">
            <h2 class="text-2xl font-bold mb-4">"Trending Now"</h2>
            {move || fetch_state_view(state.get(), |products| {
                let len = products.len();
                view! {
                    <div class="relative">
                        <div class="overflow-hidden">
                            <div
                                class="flex transition-transform duration-300 ease-in-out"
                                data-role="slide-track"
                                style=move || {
                                    format!("transform: translateX(-{}%);", index.get().track_offset_percent())
                                }
                            >
                                {products.into_iter().map(|product| view! {
                                    <CarouselSlide product=product on_quick_view=on_quick_view />
                                }).collect_view()}
                            </div>
                        </div>
                        <NavButton
                            forward=false
                            on_click=Callback::new(move |()| index.update(|i| *i = i.previous(len)))
                        />
                        <NavButton
                            forward=true
                            on_click=Callback::new(move |()| index.update(|i| *i = i.next(len)))
                        />
                    </div>
                }
            })}

            {move || quick_view.with(|selection| selection.product().cloned()).map(|product| view! {
                <ModalWrapper title="Quick View" on_close=on_close>
                    <QuickViewPanel product=product on_add_to_cart=add_to_cart on_close=on_close />
                </ModalWrapper>
            })}
        </section>
    }
}

// ===== Horizontal scroll with wishlist =====

/// Single scrollable row with a wishlist toggle on every card
#[component]
pub fn HorizontalScrollWidget() -> impl IntoView {
    let state = use_recommendations("horizontal-scroll");
    view! { <HorizontalScrollView state=state /> }
}

#[component]
pub fn HorizontalScrollView(
    #[prop(into)] state: Signal<RecommendationState>,
    /// Wishlist ids; empty when omitted
    #[prop(optional)]
    wishlist: Option<RwSignal<WishlistSet>>,
) -> impl IntoView {
    let wishlist = wishlist.unwrap_or_else(|| RwSignal::new(WishlistSet::new()));
    let add_to_cart = use_add_to_cart("horizontal-scroll");

    let on_toggle = Callback::new(move |id: u64| {
        wishlist.update(|set| {
            let member = set.toggle(id);
            tracing::debug!(product_id = id, member, "Wishlist toggled");
        });
    });

    view! {
        <section class="max-w-4xl mx-auto p-4" data-widget="horizontal-scroll">
            <h2 class="text-2xl font-bold mb-4">"You Might Also Like"</h2>
            {move || fetch_state_view(state.get(), |products| view! {
                <div class="flex overflow-x-auto pb-4 -mx-4" data-role="scroll-row">
                    {products.into_iter().map(|product| {
                        let id = product.id;
                        let wishlisted = Signal::derive(move || wishlist.with(|set| set.contains(id)));
                        view! {
                            <ScrollCard
                                product=product
                                wishlisted=wishlisted
                                on_toggle_wishlist=on_toggle
                                on_add_to_cart=add_to_cart
                            />
                        }
                    }).collect_view()}
                </div>
            })}
        </section>
    }
}

// ===== Single product carousel =====

/// One product at a time with an add-to-cart action
#[component]
pub fn SingleProductCarousel() -> impl IntoView {
    let state = use_recommendations("single-product");
    view! { <SingleProductView state=state /> }
}

#[component]
pub fn SingleProductView(
    #[prop(into)] state: Signal<RecommendationState>,
    /// Product cursor; a fresh one starting at 0 when omitted
    #[prop(optional)]
    index: Option<RwSignal<SelectionIndex>>,
) -> impl IntoView {
    let index = index.unwrap_or_else(|| RwSignal::new(SelectionIndex::new()));
    let add_to_cart = use_add_to_cart("single-product");

    view! {
        <section
            class="max-w-md mx-auto bg-white shadow-lg rounded-lg overflow-hidden"
            data-widget="single-product"
        >
            {move || fetch_state_view(state.get(), |products| {
                if products.is_empty() {
                    return view! {
                        <p class="text-center p-4 text-gray-500" data-role="empty">
                            "No recommendations available"
                        </p>
                    }
                    .into_any();
                }

                let len = products.len();
                view! {
                    <div class="relative">
                        {move || index.get().current(&products).cloned().map(|product| view! {
                            <ProductSpotlight product=product on_add_to_cart=add_to_cart />
                        })}
                        <NavButton
                            forward=false
                            on_click=Callback::new(move |()| index.update(|i| *i = i.previous(len)))
                        />
                        <NavButton
                            forward=true
                            on_click=Callback::new(move |()| index.update(|i| *i = i.next(len)))
                        />
                    </div>
                }
                .into_any()
            })}
        </section>
    }
}
