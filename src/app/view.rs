// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The viewer fills the window; toasts float above it in the bottom-right
//! corner.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::viewer::{self, component};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a component::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = viewer::view(ctx.viewer, ctx.i18n).map(Message::Viewer);
    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
