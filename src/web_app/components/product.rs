// web_app/components/product.rs - Product display components
//
// Components for displaying a single product inside a widget:
// - ProductCard: grid card with add-to-cart
// - ScrollCard: horizontal-scroll card with a wishlist toggle
// - CarouselSlide: full-width slide with a Quick View button
// - QuickViewPanel: expanded detail shown inside the quick view modal
// - ProductSpotlight: single product with gallery, used by SingleProductCarousel

use leptos::prelude::*;

use super::common::{
    Button, CartIcon, DiscountBadge, HeartIcon, PriceDisplay, ProductImage, SecondaryButton,
    StarRating,
};
use crate::web_app::model::Product;

/// Product card for the grid widget
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
    /// Add-to-cart handler, receives the product id
    on_add_to_cart: Callback<u64>,
) -> impl IntoView {
    let product_id = product.id;
    let discount = product.discount_label();

    view! {
        <div
            class="bg-white rounded-lg shadow-md overflow-hidden flex flex-col"
            data-role="product-card"
            data-product-id=product_id.to_string()
        >
            <div class="relative">
                <ProductImage
                    src=product.primary_image().map(str::to_string)
                    alt=product.title.clone()
                    width=300
                    height=192
                    class="h-48"
                />
                {discount.map(|label| view! {
                    <div class="absolute top-2 left-2">
                        <DiscountBadge label=label />
                    </div>
                })}
            </div>

            <div class="p-4 flex flex-col flex-1">
                <h3 class="text-sm font-semibold mb-1 truncate" data-role="product-title">
                    {product.title.clone()}
                </h3>
                <p class="text-xs text-gray-600 mb-2">{product.product_type.clone()}</p>

                <div class="flex justify-between items-center mb-3">
                    <PriceDisplay price=product.price />
                    <StarRating rating=product.rating />
                </div>

                <Button
                    class="w-full text-sm mt-auto"
                    title="Add to Cart"
                    on_click=Callback::new(move |()| on_add_to_cart.run(product_id))
                >
                    <CartIcon />
                    "Add to Cart"
                </Button>
            </div>
        </div>
    }
}

/// Card for the horizontal scroll widget
///
/// The heart button reflects and toggles wishlist membership.
#[component]
pub fn ScrollCard(
    product: Product,
    /// Whether the product is currently on the wishlist
    #[prop(into)]
    wishlisted: Signal<bool>,
    on_toggle_wishlist: Callback<u64>,
    on_add_to_cart: Callback<u64>,
) -> impl IntoView {
    let product_id = product.id;

    view! {
        <div class="flex-none w-64 mx-2" data-role="product-card" data-product-id=product_id.to_string()>
            <div class="bg-white rounded-lg shadow-md overflow-hidden">
                <div class="relative">
                    <ProductImage
                        src=product.primary_image().map(str::to_string)
                        alt=product.title.clone()
                        width=256
                        height=192
                        class="h-48"
                    />
                    <button
                        type="button"
                        class="absolute top-2 right-2 bg-white rounded-full p-2 shadow-md"
                        title="Toggle wishlist"
                        aria-label="Toggle wishlist"
                        data-role="wishlist-toggle"
                        aria-pressed=move || { if wishlisted.get() { "true" } else { "false" } }
                        on:click=move |_| on_toggle_wishlist.run(product_id)
                    >
                        <HeartIcon filled=wishlisted />
                    </button>
                </div>

                <div class="p-4">
                    <h3 class="text-sm font-semibold mb-2 truncate" data-role="product-title">
                        {product.title.clone()}
                    </h3>
                    <p class="text-xs text-gray-600 mb-2">{product.product_type.clone()}</p>
                    <div class="flex justify-between items-center mb-3">
                        <PriceDisplay price=product.price />
                        <StarRating rating=product.rating />
                    </div>
                    <Button
                        class="w-full text-sm"
                        title="Add to Cart"
                        on_click=Callback::new(move |()| on_add_to_cart.run(product_id))
                    >
                        <CartIcon />
                        "Add to Cart"
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// One slide of the carousel widget
#[component]
pub fn CarouselSlide(
    product: Product,
    /// Opens the quick view for this product
    on_quick_view: Callback<Product>,
) -> impl IntoView {
    let title = product.title.clone();
    let image = product.primary_image().map(str::to_string);
    let product_id = product.id;

    view! {
        <div
            class="relative w-full flex-shrink-0"
            data-role="slide"
            data-product-id=product_id.to_string()
        >
            <ProductImage src=image alt=title.clone() width=896 height=256 class="h-64" />
            <div class="absolute bottom-0 left-0 right-0 bg-black/50 text-white p-4">
                <h3 class="text-lg font-semibold mb-2" data-role="product-title">{title}</h3>
                <button
                    type="button"
                    class="bg-white text-black text-sm py-2 px-4 rounded hover:bg-gray-200 transition duration-200"
                    data-role="quick-view"
                    on:click=move |_| on_quick_view.run(product.clone())
                >
                    "Quick View"
                </button>
            </div>
        </div>
    }
}

/// Expanded product details for the quick view modal
#[component]
pub fn QuickViewPanel(
    product: Product,
    on_add_to_cart: Callback<u64>,
    on_close: Callback<()>,
) -> impl IntoView {
    let product_id = product.id;

    view! {
        <div class="space-y-4" data-role="quick-view-panel">
            <h3 class="text-xl font-semibold">{product.title.clone()}</h3>
            <ProductImage
                src=product.primary_image().map(str::to_string)
                alt=product.title.clone()
                width=512
                height=256
                class="h-64"
            />
            <p class="text-gray-600">{product.product_type.clone()}</p>

            <div class="flex items-center gap-3">
                <PriceDisplay price=product.price highlight=true />
                {product.discount_label().map(|label| view! { <DiscountBadge label=label /> })}
                <StarRating rating=product.rating />
            </div>

            <div class="flex justify-between">
                <Button on_click=Callback::new(move |()| on_add_to_cart.run(product_id))>
                    <CartIcon />
                    "Add to Cart"
                </Button>
                <SecondaryButton on_click=on_close>
                    "Close"
                </SecondaryButton>
            </div>
        </div>
    }
}

/// The current product of the single-product carousel
#[component]
pub fn ProductSpotlight(product: Product, on_add_to_cart: Callback<u64>) -> impl IntoView {
    let product_id = product.id;
    let gallery: Vec<String> = product.images.iter().skip(1).cloned().collect();
    let title = product.title.clone();

    view! {
        <div data-role="spotlight" data-product-id=product_id.to_string()>
            <ProductImage
                src=product.primary_image().map(str::to_string)
                alt=title.clone()
                width=400
                height=256
                class="h-64"
            />

            <div class="p-4">
                <h2 class="text-xl font-semibold text-gray-800 mb-2" data-role="product-title">
                    {title.clone()}
                </h2>
                <p class="text-gray-600 mb-2">{product.product_type.clone()}</p>
                <div class="flex items-center justify-between mb-4">
                    <PriceDisplay price=product.price highlight=true />
                    <StarRating rating=product.rating />
                </div>

                {(!gallery.is_empty()).then(|| view! {
                    <div class="flex gap-2 mb-4" data-role="gallery">
                        {gallery.into_iter().map(|src| view! {
                            <ProductImage
                                src=Some(src)
                                alt=title.clone()
                                width=64
                                height=64
                                class="h-16 w-16 rounded"
                            />
                        }).collect_view()}
                    </div>
                })}

                <Button
                    class="w-full"
                    on_click=Callback::new(move |()| on_add_to_cart.run(product_id))
                >
                    <CartIcon class="w-5 h-5 mr-2" />
                    "Add to Cart"
                </Button>
            </div>
        </div>
    }
}
