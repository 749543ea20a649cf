// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the breed browser, localization and toast
//! notifications together, and performs the side effects components ask
//! for (such as opening a URL in the system browser).

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::{open_in_browser, UrlOpener};

use crate::config::{self, ApiConfig, Config};
use crate::domain::catalog::BreedId;
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::infrastructure::CatApiClient;
use crate::ui::browser::Browser;
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    browser: Browser,
    notifications: notifications::Manager,
    /// Resolved once at startup; system detection is not free.
    theme: Theme,
    columns: u16,
    open_url: UrlOpener,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("breed", self.browser.state().breed())
            .field("load_state", self.browser.state().load_state())
            .field("columns", &self.columns)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            browser: Browser::new(
                build_client(config.api.clone()),
                config.browser.breed_options(),
                config.browser.initial_breed(),
            ),
            notifications: notifications::Manager::new(),
            theme: config.general.theme_mode.iced_theme(),
            columns: config.browser.columns(),
            open_url: open_in_browser,
        }
    }
}

/// Builds the HTTP client. On failure the browser stays usable and every
/// search settles with the setup error.
fn build_client(api: ApiConfig) -> Result<CatApiClient, FetchError> {
    CatApiClient::new(api).map_err(|err| {
        tracing::error!(%err, "HTTP client setup failed");
        FetchError::Network(err.to_string())
    })
}

impl App {
    /// Reads settings from disk and issues the first search.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::from_config(flags, &config, config_warning)
    }

    /// Builds the app from already-loaded settings and issues the first search.
    pub fn from_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);
        let breed = flags
            .breed
            .filter(|b| !b.trim().is_empty())
            .map_or_else(|| config.browser.initial_breed(), BreedId::new);

        tracing::info!(
            locale = %i18n.current_locale(),
            %breed,
            "starting browser"
        );

        let mut app = App {
            i18n,
            browser: Browser::new(
                build_client(config.api.clone()),
                config.browser.breed_options(),
                breed,
            ),
            notifications: notifications::Manager::new(),
            theme: config.general.theme_mode.iced_theme(),
            columns: config.browser.columns(),
            open_url: open_in_browser,
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = app.browser.start().map(Message::Browser);
        (app, task)
    }

    /// Replaces the launcher used for [`Effect::OpenUrl`](crate::ui::browser::Effect::OpenUrl).
    #[must_use]
    pub fn with_url_opener(mut self, open_url: UrlOpener) -> Self {
        self.open_url = open_url;
        self
    }

    #[must_use]
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.browser.has_detail()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Browser(browser_message) => {
                let mut ctx = update::UpdateContext {
                    browser: &mut self.browser,
                    notifications: &mut self.notifications,
                    open_url: self.open_url,
                };
                update::handle_browser_message(&mut ctx, browser_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            browser: &self.browser,
            notifications: &self.notifications,
            columns: self.columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{BreedOption, DetailOutcome, ImageSummary};
    use crate::ui::browser::{self, state::SearchTicket, Layout};

    fn summary(id: &str) -> ImageSummary {
        ImageSummary {
            id: id.into(),
            url: format!("https://cdn.example/{id}.jpg"),
            width: None,
            height: None,
        }
    }

    fn failing_opener(_url: &str) -> std::io::Result<()> {
        Err(std::io::Error::other("no browser"))
    }

    fn quiet_opener(_url: &str) -> std::io::Result<()> {
        Ok(())
    }

    fn search_finished(generation: u64, breed: &str, result: Result<Vec<ImageSummary>, FetchError>) -> Message {
        Message::Browser(browser::Message::SearchFinished {
            ticket: SearchTicket {
                generation,
                breed: BreedId::new(breed),
            },
            result,
        })
    }

    fn started_app() -> App {
        let flags = Flags {
            lang: Some("en-US".into()),
            ..Flags::default()
        };
        let (app, _task) = App::from_config(flags, &Config::default(), None);
        app.with_url_opener(quiet_opener)
    }

    #[test]
    fn default_app_waits_for_first_search() {
        let app = App::default();
        assert!(matches!(app.browser().state().layout(), Layout::Loading));
        assert_eq!(app.browser().state().breed(), &BreedId::new(config::DEFAULT_BREED));
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn breed_flag_overrides_config() {
        let flags = Flags {
            breed: Some("siam".into()),
            ..Flags::default()
        };
        let (app, _task) = App::from_config(flags, &Config::default(), None);
        assert_eq!(app.browser().state().breed(), &BreedId::new("siam"));
    }

    #[test]
    fn config_warning_becomes_toast() {
        let (app, _task) = App::from_config(
            Flags::default(),
            &Config::default(),
            Some("notification-config-load-error".into()),
        );
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn search_results_render_as_grid() {
        let mut app = started_app();
        let _ = app.update(search_finished(1, "beng", Ok(vec![summary("a"), summary("b")])));

        match app.browser().state().layout() {
            Layout::Grid { cards, .. } => assert_eq!(cards.len(), 2),
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn search_failure_renders_error() {
        let mut app = started_app();
        let _ = app.update(search_finished(1, "beng", Err(FetchError::Status(500))));
        assert!(matches!(app.browser().state().layout(), Layout::Failed(_)));
    }

    #[test]
    fn open_original_does_not_touch_browser_state() {
        let mut app = started_app();
        let _ = app.update(search_finished(1, "beng", Ok(vec![summary("a")])));

        let _ = app.update(Message::Browser(browser::Message::OpenOriginal(
            "https://cdn.example/a.jpg".into(),
        )));

        assert_eq!(app.browser().state().results().len(), 1);
        assert!(!app.browser().has_detail());
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn launcher_failure_shows_warning() {
        let mut app = started_app().with_url_opener(failing_opener);
        let _ = app.update(Message::Browser(browser::Message::OpenOriginal(
            "https://cdn.example/a.jpg".into(),
        )));

        let keys: Vec<&str> = app.notifications().visible().map(|n| n.message_key()).collect();
        assert_eq!(keys, vec!["notification-open-url-error"]);
    }

    #[test]
    fn detail_panel_opens_and_closes() {
        let mut app = started_app();
        let _ = app.update(search_finished(1, "beng", Ok(vec![summary("a")])));
        let _ = app.update(Message::Browser(browser::Message::DetailFetched {
            id: "a".into(),
            outcome: DetailOutcome::Unavailable,
        }));
        assert!(app.browser().has_detail());

        let _ = app.update(Message::Browser(browser::Message::DismissDetail));
        assert!(!app.browser().has_detail());
    }

    #[test]
    fn notification_dismiss_message_is_routed() {
        let (mut app, _task) = App::from_config(
            Flags::default(),
            &Config::default(),
            Some("notification-config-load-error".into()),
        );
        let id = app
            .notifications()
            .visible()
            .next()
            .map(Notification::id)
            .expect("warning toast");

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn selecting_new_breed_shows_loading() {
        let mut app = started_app();
        let _ = app.update(search_finished(1, "beng", Ok(vec![summary("a")])));
        let _ = app.update(Message::Browser(browser::Message::BreedSelected(
            BreedOption::new("pers", "Persian"),
        )));
        assert!(matches!(app.browser().state().layout(), Layout::Loading));
    }
}
