// common/mod.rs - Shared test utilities for rendering and endpoint stubs
//
// This module provides:
// 1. Sample products with fixed prices and ratings
// 2. Server-side rendering of a view to a plain HTML string
// 3. Throwaway recommendation endpoints on random local ports

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use rust_decimal::Decimal;

use product_widgets::web_app::model::Product;

/// Path the stub endpoint listens on
pub const ENDPOINT_PATH: &str = "/getProductRecommendations";

/// A product with a fixed price of 19.99 and the given rating
pub fn sample_product(id: u64, title: &str, rating: u8) -> Product {
    Product {
        id,
        title: title.to_string(),
        handle: title.to_lowercase().replace(' ', "-"),
        product_type: "Trunk".to_string(),
        images: vec![format!("https://cdn.example.com/{}.jpg", id)],
        price: Decimal::new(1999, 2),
        discount: None,
        rating,
    }
}

/// Three products titled "Alpha", "Bravo" and "Charlie" with ids 1..=3
pub fn sample_products() -> Vec<Product> {
    vec![
        sample_product(1, "Alpha", 3),
        sample_product(2, "Bravo", 4),
        sample_product(3, "Charlie", 5),
    ]
}

/// Render a view on the server inside a fresh reactive owner
///
/// Hydration markers (`<!>`) are stripped so assertions can match plain markup.
pub fn render_html<V, F>(build: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    let html = owner.with(|| build().to_html());
    html.replace("<!>", "")
}

/// Number of non-overlapping occurrences of `needle`
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Text content of every `<span class="price-amount">` in document order
pub fn price_amounts(html: &str) -> Vec<String> {
    const OPEN: &str = "<span class=\"price-amount\">";
    html.split(OPEN)
        .skip(1)
        .filter_map(|rest| rest.split("</span>").next())
        .map(str::to_string)
        .collect()
}

/// True for strings like `12.50`: digits, a dot, exactly two digits
pub fn is_two_decimal_amount(amount: &str) -> bool {
    match amount.split_once('.') {
        Some((whole, cents)) => {
            !whole.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && cents.len() == 2
                && cents.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Start a stub endpoint that answers every GET with `status` and `body`
///
/// Returns the full endpoint URL. The server lives until the test runtime stops.
pub async fn spawn_endpoint(status: u16, body: impl Into<String>) -> anyhow::Result<String> {
    let stub = spawn_stub(status, body, Duration::ZERO).await?;
    Ok(stub.url)
}

/// A running stub endpoint and the number of requests it has answered
pub struct StubEndpoint {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl StubEndpoint {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Like `spawn_endpoint`, but counts requests and waits `delay` before answering
pub async fn spawn_stub(status: u16, body: impl Into<String>, delay: Duration) -> anyhow::Result<StubEndpoint> {
    let status = StatusCode::from_u16(status)?;
    let body = body.into();
    let hits = Arc::new(AtomicUsize::new(0));

    let server = HttpServer::new({
        let hits = Arc::clone(&hits);
        move || {
            let body = body.clone();
            let hits = Arc::clone(&hits);
            App::new().route(
                ENDPOINT_PATH,
                web::get().to(move || {
                    let body = body.clone();
                    let hits = Arc::clone(&hits);
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        if !delay.is_zero() {
                            actix_web::rt::time::sleep(delay).await;
                        }
                        HttpResponse::build(status)
                            .content_type("application/json")
                            .body(body)
                    }
                }),
            )
        }
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("stub endpoint did not bind"))?;

    actix_web::rt::spawn(server.run());

    Ok(StubEndpoint {
        url: format!("http://{}{}", addr, ENDPOINT_PATH),
        hits,
    })
}

/// URL of a local port with nothing listening on it
pub fn unreachable_endpoint() -> anyhow::Result<String> {
    let listener = std::net::TcpListener::bind(("127.0.0.1", 0))?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}{}", addr, ENDPOINT_PATH))
}
