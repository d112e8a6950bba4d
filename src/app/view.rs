// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::kitty;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub kitty: &'a kitty::State,
}

/// Renders the kitty component filling the window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = ctx.kitty.view(ctx.i18n).map(Message::Kitty);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
