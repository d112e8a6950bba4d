// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the kitty component to localization and the theme.
//! Startup resolution (config file, CLI overrides, required placeholder image)
//! happens in [`prepare`] before the iced runtime starts, so a missing
//! argument is reported on the terminal instead of in a window.

pub mod config;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::kitty::MaxDimension;
use crate::ui::design_tokens::spacing;
use crate::ui::kitty;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    kitty: kitty::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("kitty", &self.kitty)
            .finish()
    }
}

/// Space around the picture, in pixels, on top of the display bound.
const WINDOW_MARGIN: f32 = 2.0 * spacing::LG + 40.0;

/// Everything the application needs, resolved before the window opens.
#[derive(Debug, Clone)]
pub struct Startup {
    pub lang: Option<String>,
    pub config: Config,
    pub props: kitty::Props,
}

/// Merges CLI flags over the config file into component props.
///
/// # Errors
///
/// Returns [`Error::MissingLoadingImage`] when neither the CLI nor the config
/// names a placeholder image.
pub fn resolve_props(flags: &Flags, config: &Config) -> Result<kitty::Props> {
    let loading_image = flags
        .loading_image
        .clone()
        .or_else(|| config.kitty.loading_image.clone())
        .filter(|path| !path.trim().is_empty())
        .ok_or(Error::MissingLoadingImage)?;

    let endpoint = flags
        .endpoint
        .clone()
        .unwrap_or_else(|| config.kitty.endpoint_or_default().to_string());

    let max_dimension = flags
        .max_dimension
        .map(MaxDimension::new)
        .unwrap_or_else(|| config.kitty.max_dimension_or_default());

    Ok(kitty::Props {
        loading_image: PathBuf::from(loading_image),
        endpoint,
        max_dimension,
    })
}

/// Loads the config and resolves props for [`run`].
///
/// # Errors
///
/// See [`resolve_props`].
pub fn prepare(flags: Flags) -> Result<Startup> {
    let (config, warning) = config::load();
    if let Some(key) = warning {
        let i18n = I18n::new(flags.lang.clone(), &config);
        log::warn!("{}", i18n.tr(&key));
    }

    let props = resolve_props(&flags, &config)?;
    log::debug!("Resolved props: {props:?}");

    Ok(Startup {
        lang: flags.lang,
        config,
        props,
    })
}

/// Window settings sized so the largest possible picture fits.
pub fn window_settings(max_dimension: MaxDimension) -> window::Settings {
    let side = max_dimension.value() as f32 + WINDOW_MARGIN;
    window::Settings {
        size: iced::Size::new(side, side),
        min_size: Some(iced::Size::new(side / 2.0, side / 2.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(startup: Startup) -> iced::Result {
    use std::cell::RefCell;

    let window = window_settings(startup.props.max_dimension);

    // iced requires a `Fn` boot closure; the startup value is consumed once.
    let boot_state = RefCell::new(Some(startup));
    let boot = move || {
        let startup = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(startup)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .run()
}

impl App {
    /// Builds the app and kicks off the single kitty fetch.
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let i18n = I18n::new(startup.lang, &startup.config);
        let (kitty, task) = kitty::State::new(startup.props);

        let app = App {
            i18n,
            theme_mode: startup.config.general.theme_mode,
            kitty,
        };

        (app, task.map(Message::Kitty))
    }

    /// Builds the app in its loading state without touching the network.
    #[cfg(test)]
    fn without_fetch(props: kitty::Props) -> Self {
        App {
            i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
            theme_mode: ThemeMode::Dark,
            kitty: kitty::State::without_fetch(props),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            kitty: &mut self.kitty,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            kitty: &self.kitty,
        })
    }
}
