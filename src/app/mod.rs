// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the search gallery.
//!
//! The `App` struct wires together the gallery, localization, theming and
//! toast notifications. Network clients are built before the event loop
//! starts so that a broken TLS setup is reported on the command line
//! instead of inside the window.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::ImageSearch;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{ImageFetcher, PixabayClient};
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    gallery: gallery::State,
    /// Search notices and the startup config warning.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("gallery", &self.gallery)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Everything `App::new` needs, resolved before the window opens.
pub struct Startup {
    pub flags: Flags,
    pub config: config::Config,
    /// Why `settings.toml` was ignored, reported once the window is up.
    pub config_error: Option<Error>,
    pub search: Arc<dyn ImageSearch>,
    pub fetcher: ImageFetcher,
}

impl Startup {
    /// Loads the config and builds the HTTP clients for `flags`.
    pub fn prepare(flags: Flags) -> Result<Self> {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_error) = config::load();

        let settings = config
            .api
            .to_pixabay_settings(config::api_key_override(flags.api_key.clone()));
        if settings.api_key.is_none() {
            log::warn!(
                "no API key configured; set {} or pass --api-key",
                config::ENV_API_KEY
            );
        }

        let fetcher = ImageFetcher::new(settings.timeout)?;
        let search: Arc<dyn ImageSearch> = Arc::new(PixabayClient::new(settings)?);

        Ok(Self {
            flags,
            config,
            config_error,
            search,
            fetcher,
        })
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    let startup = Startup::prepare(flags)?;

    // Wrap startup in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming it once (iced 0.14 requires Fn, not FnOnce)
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
        .window(window_settings())
        .subscription(App::subscription)
        .run()
        .map_err(|err| Error::Gui(err.to_string()))
}

impl App {
    /// Initializes application state and submits the initial query, if any.
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            flags,
            config,
            config_error,
            search,
            fetcher,
        } = startup;

        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme = AppTheme::new(config.general.theme_mode);
        let gallery = gallery::State::new(search, fetcher, config.display.columns());

        let mut app = Self {
            i18n,
            theme,
            gallery,
            notifications: notifications::Manager::new(),
        };

        if config_error.is_some() {
            app.notifications.push(Notification::config_unreadable());
        }

        let task = match flags.query.filter(|q| !q.trim().is_empty()) {
            Some(query) => {
                let _ = app.update(Message::Gallery(gallery::Message::QueryChanged(query)));
                app.update(Message::Gallery(gallery::Message::SubmitQuery))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.search().query() {
            Some(query) => format!("{} - {}", query.as_str(), app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_gallery_subscription(&self.gallery),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                let mut ctx = update::UpdateContext {
                    gallery: &mut self.gallery,
                    notifications: &mut self.notifications,
                };
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.expire(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }
}
