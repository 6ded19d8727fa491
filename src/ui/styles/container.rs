// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Header, toolbar and status bar surface.
///
/// Derived from the active theme background with a slight opacity so the
/// bars read as separate from the canvas in both light and dark modes.
pub fn bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Image canvas backdrop. Always dark so photos keep their contrast.
pub fn canvas(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}
