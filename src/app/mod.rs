// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the viewer, localization and toast
//! notifications, and translates viewer effects into iced tasks (dialogs,
//! background scans and renders, the slideshow timer, window mode).

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::shortcut;

use crate::config::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;
use iced::task::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: component::State,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    window_id: Option<window::Id>,
    slideshow_timer: Option<Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer", &self.viewer)
            .field("theme_mode", &self.theme_mode)
            .field("window_id", &self.window_id)
            .field("slideshow_timer_armed", &self.slideshow_timer.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        // Close requests arrive as events and go through Command::Exit
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once.
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

impl App {
    /// Builds the initial state from the loaded configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            config,
            config_warning,
        } = flags;

        let mut app = App {
            i18n: I18n::new(&config),
            viewer: component::State::new(config.slideshow.interval()),
            notifications: notifications::Manager::new(),
            theme_mode: config.general.theme_mode,
            window_id: None,
            slideshow_timer: None,
        };

        if let Some(message) = config_warning {
            app.notifications.push(
                notifications::Notification::warning("notification-config-warning")
                    .with_arg("message", message),
            );
        }

        log::info!("starting with locale {}", app.i18n.current_locale());
        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.viewer.current_file_name() {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            notifications: &mut self.notifications,
            window_id: self.window_id,
            slideshow_timer: &mut self.slideshow_timer,
        };

        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, &mut self.viewer, viewer_message)
            }
            Message::WindowResized { window, size } => {
                self.window_id = Some(window);
                ctx.window_id = Some(window);
                update::handle_viewer_message(
                    &mut ctx,
                    &mut self.viewer,
                    component::Message::WindowResized(size),
                )
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            notifications: &self.notifications,
        })
    }
}
