// Handlers and page seams are only wired to the browser on wasm32
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

// Modules
mod behaviors;
mod config;
mod error;
mod page;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting admin console page behaviors");

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = boot() {
            log::error!("Failed to initialize page behaviors: {:#}", e);
        }
    }
}

/// Defer binding until the markup is parsed, then bind once
#[cfg(target_arch = "wasm32")]
fn boot() -> anyhow::Result<()> {
    use anyhow::Context;

    let window = page::web::window().context("page behaviors need a browser window")?;
    let document = window.document().context("window has no document")?;

    let ready_document = document.clone();
    page::web::on_document_ready(&document, move || {
        let raw_config = page::web::config_source(&ready_document);
        let config = config::BehaviorConfig::load(raw_config.as_deref());
        let root = page::web::PageRoot::discover(&ready_document);

        match page::web::init_page_behaviors(&root, &config) {
            Ok(count) => log::info!("Bound {} page behavior handler(s)", count),
            Err(e) => log::error!("Failed to bind page behaviors: {}", e),
        }
    })
    .context("failed to wait for document ready")?;

    Ok(())
}
