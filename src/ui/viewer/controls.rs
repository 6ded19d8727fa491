// SPDX-License-Identifier: MPL-2.0
//! Toolbar with one button per command.
//!
//! Commands that have nothing to act on (navigation, zoom, slideshow with
//! an empty set) are rendered disabled. The handlers treat them as no-ops
//! anyway, so keyboard shortcuts stay harmless.

use super::component::{Command, Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Toolbar buttons in display order, with their label key.
const BUTTONS: [(Command, &str); 9] = [
    (Command::OpenFolder, "toolbar-open-folder"),
    (Command::Previous, "toolbar-previous"),
    (Command::Next, "toolbar-next"),
    (Command::ZoomIn, "toolbar-zoom-in"),
    (Command::ZoomOut, "toolbar-zoom-out"),
    (Command::StartSlideshow, "toolbar-slideshow-start"),
    (Command::StopSlideshow, "toolbar-slideshow-stop"),
    (Command::ToggleFullscreen, "toolbar-fullscreen"),
    (Command::Exit, "toolbar-exit"),
];

/// Whether `command` would do anything in the current state.
#[must_use]
pub fn is_enabled(state: &State, command: Command) -> bool {
    match command {
        Command::OpenFolder | Command::ToggleFullscreen | Command::Exit => true,
        Command::Previous | Command::Next | Command::ZoomIn | Command::ZoomOut => {
            state.has_images()
        }
        Command::StartSlideshow => state.has_images() && !state.is_slideshow_running(),
        Command::StopSlideshow => state.is_slideshow_running(),
    }
}

pub fn view<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    for (command, label_key) in BUTTONS {
        if command == Command::Exit {
            row = row.push(Space::new().width(Length::Fill));
        }

        let enabled = is_enabled(state, command);
        let style = if command == Command::OpenFolder
            || (command == Command::StopSlideshow && enabled)
        {
            styles::button::primary
        } else {
            styles::button::secondary
        };

        row = row.push(
            button(Text::new(i18n.tr(label_key)).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(style)
                .on_press_maybe(enabled.then_some(Message::Command(command))),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .padding([spacing::XS, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::bar)
        .into()
}
