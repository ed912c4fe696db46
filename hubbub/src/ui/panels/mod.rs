mod call;
mod channel_list;
mod conversation_list;
mod discovery;
mod message_thread;
mod server_dock;

pub use call::*;
pub use channel_list::*;
pub use conversation_list::*;
pub use discovery::*;
pub use message_thread::*;
pub use server_dock::*;

use iced::widget::{Space, container, text};
use iced::{Element, Length, Theme};

use crate::ui::theme::styles;

pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const PANEL_GAP: u16 = 8;

/// Round avatar holding an emoji glyph.
pub(crate) fn avatar<'a, M: 'a>(glyph: &'a str, size: f32, glyph_size: f32) -> Element<'a, M> {
    container(text(glyph).size(glyph_size))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center_x(Length::Fixed(size))
        .center_y(Length::Fixed(size))
        .style(styles::avatar)
        .into()
}

/// Small filled circle (presence and unread markers).
pub(crate) fn dot<'a, M: 'a>(size: f32, style: fn(&Theme) -> container::Style) -> Element<'a, M> {
    container(Space::new(size, size))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(style)
        .into()
}

pub(crate) fn horizontal_rule<'a, M: 'a>() -> Element<'a, M> {
    container(Space::with_height(1))
        .width(Length::Fill)
        .style(styles::divider)
        .into()
}
