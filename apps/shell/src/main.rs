use anyhow::Context;
use atlas_shell::ShellApp;
use atlas_shell::routes::{self, App};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    let (config, _logger) = atlas_shell::bootstrap::bootstrap()?;

    #[cfg(target_arch = "wasm32")]
    let config = {
        dioxus::logger::initialize_default();
        atlas_kernel::domain::config::ClientConfig::default()
    };

    let layout = routes::build().context("Critical: route table is malformed")?;
    tracing::info!(bindings = layout.routes().len(), "Mounting shell");

    ShellApp::new().with_window(config.window.clone()).launch(App, Arc::new(layout));

    Ok(())
}
