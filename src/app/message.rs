// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::kitty;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Kitty(kitty::Message),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Placeholder image shown while the kitty loads.
    /// Takes precedence over `[kitty] loading_image`.
    pub loading_image: Option<String>,
    /// Image-search endpoint override.
    pub endpoint: Option<String>,
    /// Display bound override, in pixels.
    pub max_dimension: Option<u32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `KITTY_VIEWER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
