// SPDX-License-Identifier: MPL-2.0
//! Designer layout.

use super::{Message, PresetEntry, State};
use crate::app::config::{PREVIEW_SIZE, SWATCH_SIZE};
use crate::domain::design::{direction_bounds, BackgroundType, DesignState, HexColor, Shape};
use crate::export::ExportFormat;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use iced::widget::{
    button, container, image, pick_list, scrollable, slider, text, text_input, Column, Container,
    Row, Space,
};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub state: &'a State,
    pub design: &'a DesignState,
}

/// Renders the designer: controls on the left, preview in the middle,
/// presets on the right.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Row::new()
        .push(sidebar(&ctx))
        .push(preview_pane(ctx.state))
        .push(preset_list(ctx.state))
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn section_title(label: &str) -> Element<'_, Message> {
    text(label).size(typography::TITLE_SM).into()
}

fn field<'a>(label: &'a str, control: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .push(text(label).size(typography::CAPTION))
        .push(control)
        .spacing(spacing::XXS)
        .into()
}

fn sidebar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let design = ctx.design;

    let label = text_input("1-20", design.label_input())
        .on_input(Message::LabelChanged)
        .size(typography::BODY_LG);

    let background = pick_list(
        BackgroundType::ALL,
        Some(design.background()),
        Message::BackgroundSelected,
    )
    .width(Length::Fill);

    let degrees = design.direction().degrees();
    let direction = Column::new()
        .push(
            slider(
                direction_bounds::MIN..=direction_bounds::MAX,
                degrees,
                Message::DirectionChanged,
            )
            .step(1),
        )
        .push(text(format!("{degrees}°")).size(typography::CAPTION));

    let shape = pick_list(Shape::ALL, Some(design.shape()), Message::ShapeSelected)
        .width(Length::Fill);

    let controls = Column::new()
        .push(section_title("Icon"))
        .push(field("Number", label))
        .push(field("Background", background))
        .push(field("Gradient direction", direction))
        .push(field("Shape", shape))
        .push(section_title("Colors"))
        .push(color_cells(ctx))
        .push(section_title("Export"))
        .push(actions())
        .spacing(spacing::SM);

    Container::new(scrollable(controls))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .into()
}

fn color_cells<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let view = ctx.state.colors();
    let mut cells = Column::new().spacing(spacing::XS);

    for cell in &view.cells {
        let index = cell.index;
        let committed = ctx.design.colors().get(index).unwrap_or(cell.color);

        let input = text_input("#rrggbb", ctx.state.color_draft(index))
            .on_input(move |value| Message::ColorDraftChanged { index, value })
            .width(Length::Fill);

        let remove = button(text("Remove").size(typography::CAPTION))
            .on_press_maybe(cell.removable.then_some(Message::RemoveColor(index)));

        cells = cells.push(
            Row::new()
                .push(color_chip(committed))
                .push(input)
                .push(remove)
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center),
        );
    }

    let add = button(text("Add color").size(typography::BODY))
        .on_press_maybe(view.can_add.then_some(Message::AddColor));

    cells.push(add).into()
}

fn color_chip<'a>(color: HexColor) -> Element<'a, Message> {
    let (r, g, b) = color.rgb();
    let fill = Color::from_rgb8(r, g, b);
    Container::new(
        Space::new()
            .width(Length::Fixed(sizing::CHIP))
            .height(Length::Fixed(sizing::CHIP)),
    )
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    })
    .into()
}

fn actions<'a>() -> Element<'a, Message> {
    let wide = |label: &'a str, message: Message| {
        button(text(label).size(typography::BODY))
            .on_press(message)
            .width(Length::Fill)
    };

    Column::new()
        .push(wide("Save preset", Message::SavePreset))
        .push(wide("Download PNG", Message::Download(ExportFormat::Png)))
        .push(wide("Download SVG", Message::Download(ExportFormat::Svg)))
        .push(wide("Copy PNG", Message::CopyPng))
        .spacing(spacing::XS)
        .into()
}

fn preview_pane(state: &State) -> Element<'_, Message> {
    #[allow(clippy::cast_precision_loss)]
    let side = Length::Fixed(PREVIEW_SIZE as f32);

    let content: Element<'_, Message> = match state.preview_image() {
        Some(handle) => image(handle.clone()).width(side).height(side).into(),
        None => text("Preview unavailable")
            .size(typography::BODY)
            .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn preset_list(state: &State) -> Element<'_, Message> {
    let mut list = Column::new()
        .push(section_title("Presets"))
        .spacing(spacing::XS);

    if state.presets().is_empty() {
        list = list.push(text("No presets saved yet").size(typography::CAPTION));
    }

    for entry in state.presets() {
        list = list.push(preset_row(entry));
    }

    Container::new(scrollable(list))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .into()
}

fn preset_row(entry: &PresetEntry) -> Element<'_, Message> {
    #[allow(clippy::cast_precision_loss)]
    let side = Length::Fixed(SWATCH_SIZE as f32);
    let index = entry.row.index;

    let swatch: Element<'_, Message> = match &entry.swatch {
        Some(handle) => image(handle.clone()).width(side).height(side).into(),
        None => Space::new().width(side).height(side).into(),
    };

    let mut row = Row::new()
        .push(swatch)
        .push(Space::new().width(Length::Fill))
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    for (label, message) in preset_actions(index) {
        row = row.push(button(text(label).size(typography::CAPTION)).on_press(message));
    }

    row.into()
}

fn preset_actions(index: usize) -> [(&'static str, Message); 3] {
    [
        ("Apply Preset", Message::ApplyPreset(index)),
        ("Apply Theme", Message::ApplyTheme(index)),
        ("Remove", Message::RemovePreset(index)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_row_actions_target_their_row() {
        let [apply, theme, remove] = preset_actions(4);
        assert_eq!(apply.0, "Apply Preset");
        assert!(matches!(apply.1, Message::ApplyPreset(4)));
        assert_eq!(theme.0, "Apply Theme");
        assert!(matches!(theme.1, Message::ApplyTheme(4)));
        assert_eq!(remove.0, "Remove");
        assert!(matches!(remove.1, Message::RemovePreset(4)));
    }
}
