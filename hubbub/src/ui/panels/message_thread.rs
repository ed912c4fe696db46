use iced::widget::{Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Padding, Task, Theme};

use crate::models::{Message, ThreadKind};
use crate::navigation::NavigationState;
use crate::sample;
use crate::ui::core::{DecorativeControl, Panel, PanelCommand};
use crate::ui::icons::{
    self, ATTACH_ICON, IMAGE_ICON, PHONE_ICON, PIN_ICON, SEARCH_ICON, SEND_ICON, SMILE_ICON,
    VIDEO_ICON,
};
use crate::ui::theme::{colors, styles};

use super::{avatar, horizontal_rule};

const BUBBLE_MAX_WIDTH: f32 = 440.0;

#[derive(Clone, Debug)]
pub enum ThreadMessage {
    DraftChanged(String),
    Send,
    Attach,
    AttachImage,
    Emoji,
    VoiceCall,
    VideoCall,
    Pin,
    Search,
}

/// Title line, subtitle and avatar shown above the messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreadHeader {
    pub avatar: &'static str,
    pub title: String,
    pub subtitle: &'static str,
    pub kind: ThreadKind,
}

impl ThreadHeader {
    /// The DM header follows the selected conversation while the log below
    /// it stays the shared direct sample, so other senders keep their names.
    pub fn for_nav(nav: &NavigationState) -> Self {
        match nav.thread_kind() {
            ThreadKind::Direct => {
                let conversation = sample::conversation(nav.active_chat);
                Self {
                    avatar: conversation.avatar_glyph,
                    title: conversation.display_name.to_string(),
                    subtitle: conversation.status_text(),
                    kind: ThreadKind::Direct,
                }
            }
            ThreadKind::Channel => {
                let channel = sample::text_channel(&nav.active_channel);
                Self {
                    avatar: "#",
                    title: format!("# {}", channel.name),
                    subtitle: sample::COMMUNITY_NAME,
                    kind: ThreadKind::Channel,
                }
            }
        }
    }

    /// Composer placeholder text.
    pub fn placeholder(&self) -> String {
        format!("Message {}...", self.title)
    }
}

/// Message log with header and composer. The log content depends only on
/// the thread kind; the composer keeps a draft that is never sent.
pub struct MessageThreadPanel {
    draft: String,
    scroll_id: scrollable::Id,
}

impl Default for MessageThreadPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageThreadPanel {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            scroll_id: scrollable::Id::unique(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Scroll the log to the latest message.
    pub fn snap_to_end<M>(&self) -> Task<M> {
        scrollable::snap_to(self.scroll_id.clone(), scrollable::RelativeOffset::END)
    }

    fn header<'a>(&self, header: ThreadHeader, theme: &Theme) -> Element<'a, ThreadMessage> {
        let subtitle_color = if header.kind == ThreadKind::Direct && header.subtitle == "Online" {
            colors::online(theme)
        } else {
            colors::text_secondary(theme)
        };

        let mut actions = row![].spacing(8).align_y(Alignment::Center);
        if header.kind == ThreadKind::Direct {
            actions = actions
                .push(
                    button(
                        row![
                            icons::icon(PHONE_ICON, 16.0, colors::text_primary(theme)),
                            text("Voice").size(13),
                        ]
                        .spacing(6)
                        .align_y(Alignment::Center),
                    )
                    .on_press(ThreadMessage::VoiceCall)
                    .padding(Padding::from([6, 14]))
                    .style(styles::pill_soft),
                )
                .push(
                    button(
                        row![
                            icons::icon(VIDEO_ICON, 16.0, colors::text_primary(theme)),
                            text("Video").size(13),
                        ]
                        .spacing(6)
                        .align_y(Alignment::Center),
                    )
                    .on_press(ThreadMessage::VideoCall)
                    .padding(Padding::from([6, 14]))
                    .style(styles::pill_soft),
                );
        }
        actions = actions
            .push(
                button(icons::icon(PIN_ICON, 18.0, colors::text_secondary(theme)))
                    .on_press(ThreadMessage::Pin)
                    .padding(8)
                    .style(styles::button_icon),
            )
            .push(
                button(icons::icon(SEARCH_ICON, 18.0, colors::text_secondary(theme)))
                    .on_press(ThreadMessage::Search)
                    .padding(8)
                    .style(styles::button_icon),
            );

        container(
            row![
                avatar(header.avatar, 40.0, 18.0),
                Space::with_width(12),
                column![
                    text(header.title).size(16).color(colors::text_primary(theme)),
                    text(header.subtitle).size(12).color(subtitle_color),
                ]
                .spacing(2)
                .width(Length::Fill),
                actions,
            ]
            .align_y(Alignment::Center),
        )
        .padding(Padding::from([12, 20]))
        .into()
    }

    fn bubble<'a>(message: &'static Message, theme: &Theme) -> Element<'a, ThreadMessage> {
        if message.authored_by_viewer {
            let bubble = container(text(message.content).size(14))
                .padding(Padding::from([10, 14]))
                .max_width(BUBBLE_MAX_WIDTH)
                .style(styles::bubble_mine);
            return column![
                bubble,
                text(message.timestamp)
                    .size(10)
                    .color(colors::text_muted(theme)),
            ]
            .spacing(4)
            .align_x(Alignment::End)
            .width(Length::Fill)
            .into();
        }

        let meta = row![
            text(message.sender_name)
                .size(12)
                .color(colors::text_secondary(theme)),
            text(message.timestamp)
                .size(10)
                .color(colors::text_muted(theme)),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let bubble = container(text(message.content).size(14))
            .padding(Padding::from([10, 14]))
            .max_width(BUBBLE_MAX_WIDTH)
            .style(styles::bubble_other);

        row![
            avatar(message.avatar_glyph, 32.0, 15.0),
            Space::with_width(10),
            column![meta, bubble].spacing(4),
        ]
        .align_y(Alignment::End)
        .width(Length::Fill)
        .into()
    }

    fn composer<'a>(&'a self, placeholder: &str, theme: &Theme) -> Element<'a, ThreadMessage> {
        let icon_button = |source: &'static str, message: ThreadMessage| {
            button(icons::icon(source, 18.0, colors::text_secondary(theme)))
                .on_press(message)
                .padding(8)
                .style(styles::button_icon)
        };

        let input = text_input(placeholder, &self.draft)
            .on_input(ThreadMessage::DraftChanged)
            .on_submit(ThreadMessage::Send)
            .size(14)
            .padding(8)
            .width(Length::Fill);

        let send = button(icons::icon(
            SEND_ICON,
            18.0,
            theme.extended_palette().primary.base.text,
        ))
        .on_press(ThreadMessage::Send)
        .padding(10)
        .style(styles::pill_primary);

        container(
            container(
                row![
                    icon_button(ATTACH_ICON, ThreadMessage::Attach),
                    icon_button(IMAGE_ICON, ThreadMessage::AttachImage),
                    input,
                    icon_button(SMILE_ICON, ThreadMessage::Emoji),
                    send,
                ]
                .spacing(4)
                .align_y(Alignment::Center),
            )
            .padding(Padding::from([4, 8]))
            .style(styles::control_bar),
        )
        .padding(Padding::from([12, 20]).top(8))
        .into()
    }
}

impl Panel for MessageThreadPanel {
    type Message = ThreadMessage;

    fn update(
        &mut self,
        message: ThreadMessage,
        _nav: &NavigationState,
    ) -> PanelCommand<ThreadMessage> {
        match message {
            ThreadMessage::DraftChanged(value) => {
                self.draft = value;
                PanelCommand::None
            }
            ThreadMessage::Send => DecorativeControl::ComposerSend.press(),
            ThreadMessage::Attach => DecorativeControl::ComposerAttach.press(),
            ThreadMessage::AttachImage => DecorativeControl::ComposerImage.press(),
            ThreadMessage::Emoji => DecorativeControl::ComposerEmoji.press(),
            ThreadMessage::VoiceCall => DecorativeControl::HeaderVoiceCall.press(),
            ThreadMessage::VideoCall => DecorativeControl::HeaderVideoCall.press(),
            ThreadMessage::Pin => DecorativeControl::HeaderPin.press(),
            ThreadMessage::Search => DecorativeControl::HeaderSearch.press(),
        }
    }

    fn view<'a>(
        &'a self,
        nav: &'a NavigationState,
        theme: &'a Theme,
    ) -> Element<'a, ThreadMessage> {
        let header = ThreadHeader::for_nav(nav);
        let placeholder = header.placeholder();

        let bubbles = sample::messages(header.kind)
            .iter()
            .map(|m| Self::bubble(m, theme));
        let log = scrollable(column(bubbles).spacing(16).padding(Padding::from([16, 20])))
            .id(self.scroll_id.clone())
            .height(Length::Fill);

        container(column![
            self.header(header, theme),
            horizontal_rule(),
            log,
            self.composer(&placeholder, theme),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::floating_panel)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommunityId, View};

    #[test]
    fn test_direct_header_uses_selected_conversation() {
        let nav = NavigationState::default().select_conversation(2);
        let header = ThreadHeader::for_nav(&nav);
        assert_eq!(header.title, "Maya Chen");
        assert_eq!(header.subtitle, "Online");
        assert_eq!(header.kind, ThreadKind::Direct);
        assert_eq!(header.placeholder(), "Message Maya Chen...");
    }

    #[test]
    fn test_direct_header_changes_but_log_is_shared() {
        // Arrange
        let first = NavigationState::default();
        let second = first.select_conversation(2);

        // Act
        let before = ThreadHeader::for_nav(&first);
        let after = ThreadHeader::for_nav(&second);

        // Assert
        assert_eq!(before.title, "Alex Rivera");
        assert_eq!(after.title, "Maya Chen");
        assert_eq!(sample::messages(before.kind), sample::messages(after.kind));
        assert!(
            sample::messages(after.kind)
                .iter()
                .filter(|m| !m.authored_by_viewer)
                .all(|m| m.sender_name == "Alex Rivera")
        );
    }

    #[test]
    fn test_channel_header_uses_selected_channel() {
        let nav = NavigationState::default()
            .select_view(View::Community(CommunityId::Music))
            .select_channel("announcements");
        let header = ThreadHeader::for_nav(&nav);
        assert_eq!(header.avatar, "#");
        assert_eq!(header.title, "# announcements");
        assert_eq!(header.subtitle, sample::COMMUNITY_NAME);
        assert_eq!(header.kind, ThreadKind::Channel);
    }

    #[test]
    fn test_send_leaves_messages_and_draft_alone() {
        // Arrange
        let mut panel = MessageThreadPanel::new();
        let nav = NavigationState::default();
        panel.update(ThreadMessage::DraftChanged("hello".into()), &nav);

        // Act
        let cmd = panel.update(ThreadMessage::Send, &nav);

        // Assert
        assert!(cmd.is_none());
        assert_eq!(panel.draft(), "hello");
        assert_eq!(sample::messages(ThreadKind::Direct).len(), 6);
    }
}
