// Common component render tests
//
// The atoms every widget is built from, rendered on the server.

mod common;

use common::*;
use leptos::prelude::*;
use rust_decimal::Decimal;

use product_widgets::web_app::components::*;

#[test]
fn test_star_rating_filled_and_empty() {
    for rating in 0..=5u8 {
        let html = render_html(move || view! { <StarRating rating=rating /> });
        assert_eq!(count(&html, "star-filled"), rating as usize, "Filled for {}", rating);
        assert_eq!(count(&html, "star-empty"), 5 - rating as usize, "Empty for {}", rating);
    }
}

#[test]
fn test_star_rating_clamps_to_five() {
    let html = render_html(|| view! { <StarRating rating=9 /> });

    assert_eq!(count(&html, "star-filled"), 5);
    assert_eq!(count(&html, "star-empty"), 0);
    assert!(html.contains("Rating: 5 out of 5"));
}

#[test]
fn test_price_display_two_decimals() {
    let cases = [
        (Decimal::new(1999, 2), "19.99"),
        (Decimal::new(5, 0), "5.00"),
        (Decimal::new(42, 1), "4.20"),
        (Decimal::new(0, 2), "0.00"),
    ];

    for (price, expected) in cases {
        let html = render_html(move || view! { <PriceDisplay price=price /> });
        assert_eq!(price_amounts(&html), vec![expected.to_string()]);
        assert!(html.contains("$"));
    }
}

#[test]
fn test_error_display_prefix() {
    let html = render_html(|| view! { <ErrorDisplay error="Failed to fetch products".to_string() /> });

    assert!(html.contains("Error: Failed to fetch products"));
    assert!(html.contains("data-role=\"error\""));
}

#[test]
fn test_loading_default_message() {
    let html = render_html(|| view! { <Loading /> });

    assert!(html.contains("Loading..."));
    assert!(html.contains("data-role=\"loading\""));
}

#[test]
fn test_product_image_with_url() {
    let html = render_html(|| view! {
        <ProductImage
            src=Some("https://cdn.example.com/1.jpg".to_string())
            alt="Trunk".to_string()
            width=300
            height=192
        />
    });

    assert!(html.contains("src=\"https://cdn.example.com/1.jpg\""));
    assert!(html.contains("alt=\"Trunk\""));
    assert!(html.contains("width=\"300\""));
    assert!(html.contains("loading=\"lazy\""));
}

#[test]
fn test_product_image_placeholder() {
    let html = render_html(|| view! {
        <ProductImage src=None alt="Trunk".to_string() width=300 height=192 />
    });

    assert!(!html.contains("<img"));
    assert!(html.contains("role=\"img\""));
    assert!(html.contains("📦"));
}

#[test]
fn test_product_card_discount_badge() {
    let mut product = sample_product(1, "Alpha", 4);
    product.discount = Some(Decimal::new(15, 0));

    let html = render_html(move || {
        let on_add_to_cart = Callback::new(|_: u64| {});
        view! { <ProductCard product=product on_add_to_cart=on_add_to_cart /> }
    });

    assert!(html.contains("data-role=\"discount\""));
    assert!(html.contains("15% off"));
    assert!(html.contains("data-product-id=\"1\""));
}

#[test]
fn test_product_card_without_discount() {
    let html = render_html(|| {
        let on_add_to_cart = Callback::new(|_: u64| {});
        view! { <ProductCard product=sample_product(1, "Alpha", 4) on_add_to_cart=on_add_to_cart /> }
    });

    assert!(!html.contains("data-role=\"discount\""));
}

#[test]
fn test_nav_button_roles() {
    let html = render_html(|| {
        let on_click = Callback::new(|()| {});
        view! {
            <NavButton forward=true on_click=on_click />
            <NavButton forward=false on_click=on_click />
        }
    });

    assert!(html.contains("data-role=\"next\""));
    assert!(html.contains("data-role=\"previous\""));
    assert!(html.contains("aria-label=\"Next product\""));
}

#[test]
fn test_modal_is_focusable_dialog() {
    let html = render_html(|| {
        let on_close = Callback::new(|()| {});
        view! {
            <ModalWrapper title="Quick View" on_close=on_close>
                <p>"Body"</p>
            </ModalWrapper>
        }
    });

    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("tabindex=\"-1\""));
    assert!(html.contains("aria-modal=\"true\""));
    assert!(html.contains(">Quick View</h2>"));
    assert!(html.contains("<p>Body</p>"));
    assert!(is_dismiss_key("Escape"));
}
