use iced::widget::{Space, button, column, container, row, scrollable, stack, text, text_input};
use iced::{Alignment, Element, Length, Padding, Theme};

use crate::models::Conversation;
use crate::navigation::{NavEvent, NavigationState};
use crate::sample;
use crate::ui::core::{DecorativeControl, Panel, PanelCommand};
use crate::ui::icons::{self, SEARCH_ICON};
use crate::ui::theme::{colors, styles};

use super::{SIDEBAR_WIDTH, avatar, dot};

#[derive(Clone, Debug)]
pub enum ConversationListMessage {
    SelectConversation(u32),
    SearchChanged(String),
}

/// Sidebar listing the direct-message conversations.
#[derive(Default)]
pub struct ConversationListPanel {
    search_query: String,
}

impl ConversationListPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed into the search box. It never filters the list.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Row highlighted for the given navigation state. Unknown ids fall back
    /// to the first conversation.
    pub fn highlighted(nav: &NavigationState) -> &'static Conversation {
        sample::conversation(nav.active_chat)
    }

    fn build_row<'a>(
        &self,
        conversation: &'static Conversation,
        selected: bool,
        theme: &Theme,
    ) -> Element<'a, ConversationListMessage> {
        let avatar_el: Element<'a, ConversationListMessage> = if conversation.online {
            stack![
                avatar(conversation.avatar_glyph, 40.0, 18.0),
                container(dot(14.0, styles::online_dot))
                    .width(Length::Fixed(42.0))
                    .height(Length::Fixed(42.0))
                    .align_x(iced::alignment::Horizontal::Right)
                    .align_y(iced::alignment::Vertical::Bottom),
            ]
            .into()
        } else {
            avatar(conversation.avatar_glyph, 40.0, 18.0)
        };

        let details = column![
            row![
                text(conversation.display_name)
                    .size(14)
                    .color(colors::text_primary(theme))
                    .wrapping(text::Wrapping::None),
                Space::with_width(Length::Fill),
                text(conversation.last_message_time)
                    .size(11)
                    .color(colors::text_muted(theme)),
            ]
            .align_y(Alignment::Center),
            container(
                text(conversation.last_message_preview)
                    .size(12)
                    .color(colors::text_secondary(theme))
                    .wrapping(text::Wrapping::None),
            )
            .height(Length::Fixed(16.0))
            .clip(true),
        ]
        .spacing(2)
        .width(Length::Fill);

        let mut content = row![avatar_el, Space::with_width(12), details]
            .align_y(Alignment::Center);

        if conversation.has_unread() {
            let badge = container(text(conversation.unread_count.to_string()).size(10))
                .center_x(Length::Fixed(20.0))
                .center_y(Length::Fixed(20.0))
                .style(styles::unread_badge);
            content = content.push(Space::with_width(8)).push(badge);
        }

        button(content)
            .on_press(ConversationListMessage::SelectConversation(conversation.id))
            .padding(Padding::from([10, 12]))
            .width(Length::Fill)
            .style(move |t: &Theme, status| styles::list_row(t, status, selected))
            .into()
    }
}

impl Panel for ConversationListPanel {
    type Message = ConversationListMessage;

    fn update(
        &mut self,
        message: ConversationListMessage,
        _nav: &NavigationState,
    ) -> PanelCommand<ConversationListMessage> {
        match message {
            ConversationListMessage::SelectConversation(id) => {
                PanelCommand::Navigate(NavEvent::SelectConversation(id))
            }
            ConversationListMessage::SearchChanged(value) => {
                self.search_query = value;
                DecorativeControl::Search.press()
            }
        }
    }

    fn view<'a>(
        &'a self,
        nav: &'a NavigationState,
        theme: &'a Theme,
    ) -> Element<'a, ConversationListMessage> {
        let search = row![
            icons::icon(SEARCH_ICON, 16.0, colors::text_muted(theme)),
            Space::with_width(8),
            text_input("Search...", &self.search_query)
                .on_input(ConversationListMessage::SearchChanged)
                .size(13)
                .padding(6),
        ]
        .align_y(Alignment::Center);

        let header = column![
            text("Messages").size(16).color(colors::text_primary(theme)),
            Space::with_height(12),
            container(search)
                .padding(Padding::from([2, 12]))
                .style(styles::control_bar),
        ]
        .padding(Padding::from([16, 16]).bottom(8));

        let highlighted = Self::highlighted(nav).id;
        let rows = sample::CONVERSATIONS
            .iter()
            .map(|c| self.build_row(c, c.id == highlighted, theme));
        let list = scrollable(column(rows).spacing(2).padding(Padding::from([0, 8]).bottom(8)))
            .height(Length::Fill);

        container(column![header, list])
            .width(Length::Fixed(SIDEBAR_WIDTH))
            .height(Length::Fill)
            .style(styles::floating_panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selecting_row_requests_navigation() {
        let mut panel = ConversationListPanel::new();
        let nav = NavigationState::default();
        let cmd = panel.update(ConversationListMessage::SelectConversation(4), &nav);
        assert_eq!(cmd.navigation(), Some(&NavEvent::SelectConversation(4)));
    }

    #[test]
    fn test_search_keeps_text_but_is_decorative() {
        let mut panel = ConversationListPanel::new();
        let nav = NavigationState::default();
        let cmd = panel.update(ConversationListMessage::SearchChanged("maya".into()), &nav);
        assert!(cmd.is_none());
        assert_eq!(panel.search_query(), "maya");
    }

    #[test]
    fn test_unknown_id_highlights_first_row() {
        let nav = NavigationState::default().select_conversation(999);
        assert_eq!(ConversationListPanel::highlighted(&nav).id, 1);
        let nav = nav.select_conversation(3);
        assert_eq!(ConversationListPanel::highlighted(&nav).display_name, "Jordan Taylor");
    }
}
