//! Configuration types for Correspondence Markup rendering.
//!
//! [`AppConfig`] implements [`serde::Deserialize`] so it can be loaded from a
//! TOML file:
//!
//! ```toml
//! [render]
//! escaped = true
//! br = [true, false]
//! ```
//!
//! # Example
//!
//! ```
//! # use corrml::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.render().escaped().is_none());
//! ```

use serde::Deserialize;

use corrml_core::options::RenderOptions;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Render options applied to every translation of a document.
    #[serde(default)]
    render: RenderOptions,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given render options.
    pub fn new(render: RenderOptions) -> Self {
        Self { render }
    }

    /// Returns the render options.
    pub fn render(&self) -> &RenderOptions {
        &self.render
    }

    /// Replaces the render options.
    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}
