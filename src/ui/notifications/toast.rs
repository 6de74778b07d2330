// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders one notification as a card with a colored accent.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let accent_color = notification.severity().color();

        let accent = Container::new(Space::new().width(Length::Fixed(sizing::TOAST_ACCENT)))
            .height(Length::Fixed(typography::BODY * 2.0))
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(accent_color)),
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let message = text(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss = button(text("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(accent)
            .push(Container::new(message).width(Length::Fill))
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders all visible toasts stacked in the bottom-right corner.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager.visible().map(Self::view).collect();

        if toasts.is_empty() {
            return Space::new().into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |alpha: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
    }
}
