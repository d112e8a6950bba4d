// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::kitty::Transition;
use crate::ui::kitty;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub kitty: &'a mut kitty::State,
}

/// Routes a top-level message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Kitty(kitty_message) => handle_kitty_message(ctx, kitty_message),
    }
}

fn handle_kitty_message(ctx: &mut UpdateContext<'_>, message: kitty::Message) -> Task<Message> {
    match ctx.kitty.update(message) {
        Transition::Loaded | Transition::Failed => {
            log::debug!("Kitty lifecycle settled");
        }
        Transition::Ignored => {}
    }
    // The lifecycle is terminal after one transition; nothing left to schedule.
    Task::none()
}
