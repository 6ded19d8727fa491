// SPDX-License-Identifier: MPL-2.0
//! Image browser screen: header, toolbar, canvas and status bar.
//!
//! In fullscreen only the canvas is drawn.

pub mod canvas;
pub mod component;
pub mod controls;
pub mod status;

use self::component::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let canvas = canvas::view(state, i18n);
    if state.is_fullscreen() {
        return canvas;
    }

    Column::new()
        .push(header(state, i18n))
        .push(controls::view(state, i18n))
        .push(canvas)
        .push(status_bar(state, i18n))
        .into()
}

fn header<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let name = state
        .current_file_name()
        .unwrap_or_else(|| i18n.tr("header-no-image"));

    Container::new(Text::new(name).size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::bar)
        .into()
}

fn status_bar<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let status = state.status();
    let mut label = Text::new(status.localize(i18n)).size(typography::CAPTION);
    if status.is_error() {
        label = label.color(crate::ui::design_tokens::palette::ERROR_500);
    }

    Container::new(label)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STATUS_BAR_HEIGHT))
        .padding([0.0, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::bar)
        .into()
}
