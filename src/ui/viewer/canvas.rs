// SPDX-License-Identifier: MPL-2.0
//! Image canvas: the rendered frame centered in the available area, or a
//! placeholder explaining why nothing is shown.

use super::component::{Message, Placeholder, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{image, Column, Container, Text};
use iced::{alignment, Color, ContentFit, Element, Length};

pub fn view<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match state.frame() {
        #[allow(clippy::cast_precision_loss)]
        Some(frame) => image(frame.handle.clone())
            .width(Length::Fixed(frame.width as f32))
            .height(Length::Fixed(frame.height as f32))
            .content_fit(ContentFit::None)
            .into(),
        None => placeholder(state.placeholder(), i18n),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(styles::container::canvas)
        .into()
}

/// Label keys for a placeholder: title and optional hint.
fn placeholder_keys(placeholder: Placeholder) -> (&'static str, Option<&'static str>) {
    match placeholder {
        Placeholder::NoFolder => ("empty-state-title", Some("empty-state-hint")),
        Placeholder::NoImages => ("empty-state-no-images", Some("empty-state-hint")),
        Placeholder::LoadFailed => ("empty-state-load-failed", None),
        Placeholder::Loading => ("", None),
    }
}

fn placeholder<'a>(placeholder: Placeholder, i18n: &I18n) -> Element<'a, Message> {
    let (title_key, hint_key) = placeholder_keys(placeholder);
    if title_key.is_empty() {
        return Column::new().into();
    }

    let title_color = if placeholder == Placeholder::LoadFailed {
        palette::ERROR_500
    } else {
        palette::GRAY_200
    };

    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr(title_key))
                .size(typography::TITLE_MD)
                .color(title_color),
        );

    if let Some(hint_key) = hint_key {
        column = column.push(
            Text::new(i18n.tr(hint_key))
                .size(typography::BODY)
                .color(Color {
                    a: 0.7,
                    ..palette::GRAY_400
                }),
        );
    }

    column.into()
}
