#![recursion_limit = "256"]

// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - A demo recommendation endpoint backed by the built-in catalog
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use product_widgets::web_app::app::{shell, App as WebApp};
    use tracing_subscriber::EnvFilter;

    // Load environment variables before reading RUST_LOG
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Leptos configuration
    let conf = leptos_config::get_configuration(None)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        App::new()
            // Demo recommendation endpoint, same shape as the production service
            .route("/getProductRecommendations", web::get().to(recommendations))
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options))
    })
    .bind(&addr)?
    .run()
    .await
}

/// Serve the built-in catalog as the recommendation list
#[cfg(feature = "ssr")]
async fn recommendations() -> actix_web::HttpResponse {
    use actix_web::HttpResponse;
    use product_widgets::fixtures::{DemoCatalog, FixtureCatalog};

    match DemoCatalog::to_json() {
        Ok(body) => {
            tracing::debug!("Serving demo recommendations");
            HttpResponse::Ok().content_type("application/json").body(body)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode demo recommendations");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
