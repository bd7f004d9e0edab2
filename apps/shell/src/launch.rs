use crate::routes::Page;
use atlas_kernel::domain::config::WindowConfig;
use atlas_kernel::routing::RouteLayout;
use dioxus::prelude::*;
use std::sync::Arc;

/// Launcher for the shell on the renderer selected by cargo features.
#[derive(Debug, Default)]
pub struct ShellApp {
    #[cfg_attr(not(feature = "desktop"), allow(dead_code))]
    window: WindowConfig,
}

impl ShellApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Window settings; only the desktop renderer uses them.
    #[must_use]
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Mounts `root` and provides `routes` as shared context to every component.
    pub fn launch(self, root: fn() -> Element, routes: Arc<RouteLayout<Page>>) {
        #[cfg(feature = "desktop")]
        let builder = LaunchBuilder::desktop().with_cfg(desktop_config(&self.window));
        #[cfg(not(feature = "desktop"))]
        let builder = LaunchBuilder::new();

        builder.with_context_provider(move || Box::new(Arc::clone(&routes))).launch(root);
    }
}

#[cfg(feature = "desktop")]
fn desktop_config(window: &WindowConfig) -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let builder = WindowBuilder::new()
        .with_title(&window.title)
        .with_inner_size(LogicalSize { width: window.width, height: window.height });

    Config::default().with_window(builder).with_custom_head(
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
    )
}
