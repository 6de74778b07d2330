// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::design::DesignState;
use crate::ui::designer;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub designer: &'a designer::State,
    pub design: &'a DesignState,
    pub notifications: &'a Manager,
}

/// Renders the designer with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = designer::view(designer::ViewContext {
        state: ctx.designer,
        design: ctx.design,
    })
    .map(Message::Designer);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .push(screen)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
