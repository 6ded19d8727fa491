// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events keep the viewport in sync and route close requests through
//! the Exit command. Keyboard events that no widget captured are translated
//! into browser commands.

use super::Message;
use crate::ui::viewer::component::{self, Command};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// How often toast expiry is checked while toasts are on screen.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::Viewer(component::Message::Command(Command::Exit)))
        }
        Event::Window(iced::window::Event::Opened { size, .. })
        | Event::Window(iced::window::Event::Resized(size)) => Some(Message::WindowResized {
            window: window_id,
            size,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => match status {
            event::Status::Ignored => shortcut(&key, modifiers).map(Message::Viewer),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the tick subscription used to expire toasts.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps a key press to a viewer message.
///
/// | Key            | Action             |
/// |----------------|--------------------|
/// | Right / Left   | next / previous    |
/// | `+` `=` / `-`  | zoom in / out      |
/// | Space          | toggle slideshow   |
/// | F11            | toggle fullscreen  |
/// | Escape         | leave fullscreen   |
/// | Ctrl+O         | open folder        |
/// | Ctrl+Q         | exit               |
#[must_use]
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<component::Message> {
    let command = |command| Some(component::Message::Command(command));

    match key.as_ref() {
        Key::Named(Named::ArrowRight) => command(Command::Next),
        Key::Named(Named::ArrowLeft) => command(Command::Previous),
        Key::Named(Named::Space) => Some(component::Message::ToggleSlideshow),
        Key::Named(Named::F11) => command(Command::ToggleFullscreen),
        Key::Named(Named::Escape) => Some(component::Message::LeaveFullscreen),
        Key::Character(c) if modifiers.command() => match c.to_ascii_lowercase().as_str() {
            "o" => command(Command::OpenFolder),
            "q" => command(Command::Exit),
            _ => None,
        },
        Key::Character("+" | "=") => command(Command::ZoomIn),
        Key::Character("-") => command(Command::ZoomOut),
        _ => None,
    }
}
