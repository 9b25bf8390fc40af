//! Catalog Admin
//!
//! Server builds render the admin UI with SSR and hydrate it in the browser;
//! web builds are the WASM client.

use catalog_admin::app::App;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "server")]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        // Initialize logging
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "catalog_admin=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init();

        tracing::info!("Starting Catalog Admin v{}", env!("CARGO_PKG_VERSION"));

        // Load configuration
        let config = catalog_admin::config::load_config()?;
        tracing::info!(?config, "Configuration loaded");
        catalog_admin::config::use_api_base_url(&config);

        // The fullstack server reads its listen port from PORT
        if std::env::var_os("PORT").is_none() {
            std::env::set_var("PORT", config.port.to_string());
        }
    }

    dioxus::launch(App);
    Ok(())
}
