#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use docs_web::config::CONFIG;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use leptos_meta::MetaTags;
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let conf = get_configuration(None).context("failed to load Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(docs_web::app::App);
    log::info!("registered {} routes", routes.len());

    let site_root = leptos_options.site_root.clone();
    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let options = leptos_options.clone();
            move || {
                use docs_web::app::App;
                view! {
                    <!DOCTYPE html>
                    <html lang="en">
                        <head>
                            <meta charset="utf-8" />
                            <meta name="viewport" content="width=device-width, initial-scale=1" />
                            <meta name="theme-color" content="#f8f6f1" media="(prefers-color-scheme: light)" />
                            <meta name="theme-color" content="#1a1a1a" media="(prefers-color-scheme: dark)" />
                            <meta name="generator" content=CONFIG.name />
                            <link rel="stylesheet" href="/pkg/docs-web.css" />
                            <AutoReload options=options.clone() />
                            <HydrationScripts options=options.clone() />
                            <MetaTags />
                        </head>
                        <body>
                            <App />
                        </body>
                    </html>
                }
            }
        })
        .fallback_service(ServeDir::new(&*site_root))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    log::info!("listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client builds hydrate through the lib's `hydrate` entry point
}
