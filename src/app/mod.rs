// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the translator and
//! settings views.
//!
//! The `App` struct wires together the domains (translation panel,
//! localization, preferences) and translates messages into side effects like
//! config persistence. This file intentionally keeps policy decisions
//! (minimum window size, persistence format, localization switching) close to
//! the main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::I18n;
use crate::ui::navbar;
use crate::ui::panel;
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    panel: panel::State,
    theme_mode: ThemeMode,
    config: config::Config,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("loading", &self.panel.is_loading)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 560;

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
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
        Self {
            i18n: I18n::default(),
            screen: Screen::Translator,
            panel: panel::State::default(),
            theme_mode: ThemeMode::System,
            config: config::Config::default(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and `Flags`
    /// received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = config_warning {
            eprintln!("Configuration problem ({}), using defaults", key);
        }

        let i18n = I18n::new(flags.lang, &config);
        let panel = panel::State::new(&config.translator);

        let app = App {
            i18n,
            screen: Screen::Translator,
            panel,
            theme_mode: config.general.theme_mode,
            config,
        };

        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Panel(message) => {
                let task = self.panel.update(message).map(Message::Panel);
                self.persist_language_pair();
                task
            }
            Message::Navbar(navbar::Message::OpenSettings) => {
                self.screen = Screen::Settings;
                Task::none()
            }
            Message::Navbar(navbar::Message::Back) => {
                self.screen = Screen::Translator;
                Task::none()
            }
            Message::SwitchScreen(screen) => {
                self.screen = screen;
                Task::none()
            }
            Message::Settings(settings::Message::LocaleSelected(locale)) => {
                self.i18n.set_locale(locale);
                self.config.general.language = Some(self.i18n.current_locale().to_string());
                self.save_config();
                Task::none()
            }
            Message::Settings(settings::Message::ThemeModeSelected(mode)) => {
                self.theme_mode = mode;
                self.config.general.theme_mode = mode;
                self.save_config();
                Task::none()
            }
            Message::Tick(_) => {
                if self.panel.is_loading {
                    self.panel
                        .update(panel::Message::SpinnerTick)
                        .map(Message::Panel)
                } else {
                    Task::none()
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            panel: &self.panel,
            theme_mode: self.theme_mode,
        })
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.panel.is_loading)
    }

    /// Remembers the last-used translation pair across sessions. Only writes
    /// when the pair actually changed, so keystrokes never touch the disk.
    fn persist_language_pair(&mut self) {
        let source = self.panel.source_language.code;
        let target = self.panel.target_language.code;

        let stored_source = self.config.translator.source_language.as_deref();
        let stored_target = self.config.translator.target_language.as_deref();

        if stored_source == Some(source) && stored_target == Some(target) {
            return;
        }

        self.config.translator.source_language = Some(source.to_string());
        self.config.translator.target_language = Some(target.to_string());
        self.save_config();
    }

    fn save_config(&self) {
        if let Err(error) = config::save(&self.config) {
            eprintln!("Failed to save settings: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::paths::{ENV_CONFIG_DIR, ENV_MUTEX};
    use tempfile::tempdir;

    #[test]
    fn navbar_messages_switch_screens() {
        let mut app = App::default();
        assert_eq!(app.screen, Screen::Translator);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::Navbar(navbar::Message::Back));
        assert_eq!(app.screen, Screen::Translator);
    }

    #[test]
    fn tick_is_ignored_while_idle() {
        let mut app = App::default();
        let rotation = app.panel.spinner_rotation();

        let _ = app.update(Message::Tick(std::time::Instant::now()));

        assert_eq!(app.panel.spinner_rotation(), rotation);
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert_ne!(app.title(), "MISSING: window-title");
    }

    #[test]
    fn explicit_theme_modes_map_to_iced_themes() {
        let mut app = App::default();

        app.theme_mode = ThemeMode::Light;
        assert!(matches!(app.theme(), Theme::Light));

        app.theme_mode = ThemeMode::Dark;
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn swap_persists_the_new_language_pair() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

        let mut app = App::default();
        let _ = app.update(Message::Panel(panel::Message::SwapLanguages));

        let (config, warning) = config::load();
        assert!(warning.is_none());
        assert_eq!(
            config.translator.source_language,
            Some("en-US".to_string())
        );
        assert_eq!(
            config.translator.target_language,
            Some("pt-BR".to_string())
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn selecting_theme_mode_persists_it() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

        let mut app = App::default();
        let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
            ThemeMode::Dark,
        )));

        assert_eq!(app.theme_mode, ThemeMode::Dark);
        let (config, _) = config::load();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn selecting_an_available_locale_switches_the_ui_language() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

        let mut app = App::default();
        let locale: unic_langid::LanguageIdentifier = "pt-BR".parse().unwrap();
        let _ = app.update(Message::Settings(settings::Message::LocaleSelected(
            locale.clone(),
        )));

        assert_eq!(app.i18n.current_locale(), &locale);
        assert_eq!(app.title(), "Tradutor");

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
