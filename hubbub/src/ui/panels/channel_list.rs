use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Padding, Theme};

use crate::models::Channel;
use crate::navigation::{NavEvent, NavigationState};
use crate::sample;
use crate::ui::core::{DecorativeControl, Panel, PanelCommand};
use crate::ui::icons::{self, CHEVRON_DOWN_ICON, HASH_ICON, SETTINGS_ICON, SPEAKER_ICON};
use crate::ui::theme::{colors, styles};

use super::{SIDEBAR_WIDTH, avatar, dot, horizontal_rule};

const HEADER_BANNER: &str = "banner-1";

#[derive(Clone, Debug)]
pub enum ChannelListMessage {
    SelectChannel(&'static str),
    JoinVoice(&'static str),
    OpenSettings,
}

/// Sidebar of a community: banner, text channels, voice channels and the
/// viewer's own status strip.
#[derive(Default)]
pub struct CommunityChannelPanel;

impl CommunityChannelPanel {
    pub fn new() -> Self {
        Self
    }

    fn section_label<'a>(label: &'a str, theme: &Theme) -> Element<'a, ChannelListMessage> {
        container(text(label).size(11).color(colors::text_muted(theme)))
            .padding(Padding::from([8, 12]).top(16))
            .into()
    }

    fn text_row<'a>(
        channel: &'static Channel,
        active: &str,
        theme: &Theme,
    ) -> Element<'a, ChannelListMessage> {
        let selected = channel.id == active;
        let name_color = if selected {
            colors::text_primary(theme)
        } else {
            colors::text_secondary(theme)
        };

        let mut content = row![
            icons::icon(HASH_ICON, 16.0, colors::text_muted(theme)),
            Space::with_width(8),
            text(channel.name).size(14).color(name_color),
            Space::with_width(Length::Fill),
        ]
        .align_y(Alignment::Center);

        if channel.shows_unread_dot(active) {
            content = content.push(dot(8.0, styles::unread_dot));
        }

        button(content)
            .on_press(ChannelListMessage::SelectChannel(channel.id))
            .padding(Padding::from([8, 12]))
            .width(Length::Fill)
            .style(move |t: &Theme, status| styles::list_row(t, status, selected))
            .into()
    }

    fn voice_row<'a>(channel: &'static Channel, theme: &Theme) -> Element<'a, ChannelListMessage> {
        let mut content = row![
            icons::icon(SPEAKER_ICON, 16.0, colors::text_muted(theme)),
            Space::with_width(8),
            text(channel.name).size(14).color(colors::text_secondary(theme)),
            Space::with_width(Length::Fill),
        ]
        .align_y(Alignment::Center);

        if let Some(occupants) = channel.occupants() {
            content = content.push(
                text(occupants.to_string())
                    .size(12)
                    .color(colors::text_muted(theme)),
            );
        }

        button(content)
            .on_press(ChannelListMessage::JoinVoice(channel.id))
            .padding(Padding::from([8, 12]))
            .width(Length::Fill)
            .style(|t: &Theme, status| styles::list_row(t, status, false))
            .into()
    }

    fn user_strip<'a>(theme: &Theme) -> Element<'a, ChannelListMessage> {
        let settings = button(icons::icon(SETTINGS_ICON, 18.0, colors::text_secondary(theme)))
            .on_press(ChannelListMessage::OpenSettings)
            .padding(8)
            .style(styles::button_icon);

        container(
            row![
                avatar(sample::VIEWER_AVATAR, 36.0, 16.0),
                Space::with_width(10),
                column![
                    text(sample::VIEWER_NAME)
                        .size(14)
                        .color(colors::text_primary(theme)),
                    text("Online").size(11).color(colors::online(theme)),
                ]
                .width(Length::Fill),
                settings,
            ]
            .align_y(Alignment::Center),
        )
        .padding(12)
        .into()
    }
}

impl Panel for CommunityChannelPanel {
    type Message = ChannelListMessage;

    fn update(
        &mut self,
        message: ChannelListMessage,
        _nav: &NavigationState,
    ) -> PanelCommand<ChannelListMessage> {
        match message {
            ChannelListMessage::SelectChannel(id) => {
                PanelCommand::Navigate(NavEvent::SelectChannel(id.to_string()))
            }
            ChannelListMessage::JoinVoice(id) => {
                tracing::info!(channel = id, "Joining voice channel");
                PanelCommand::Navigate(NavEvent::EnterCall(Some(id.to_string())))
            }
            ChannelListMessage::OpenSettings => DecorativeControl::UserSettings.press(),
        }
    }

    fn view<'a>(
        &'a self,
        nav: &'a NavigationState,
        theme: &'a Theme,
    ) -> Element<'a, ChannelListMessage> {
        let banner = container(
            row![
                text(sample::COMMUNITY_NAME).size(18).color(iced::Color::WHITE),
                Space::with_width(Length::Fill),
                icons::icon(CHEVRON_DOWN_ICON, 18.0, iced::Color::WHITE),
            ]
            .align_y(Alignment::Center),
        )
        .padding(Padding::from([0, 16]))
        .height(Length::Fixed(96.0))
        .width(Length::Fill)
        .align_y(iced::alignment::Vertical::Bottom)
        .style(|_| styles::banner(HEADER_BANNER));

        let active = sample::text_channel(&nav.active_channel).id;

        let mut channels = column![Self::section_label("TEXT CHANNELS", theme)].spacing(2);
        for channel in sample::TEXT_CHANNELS.iter() {
            channels = channels.push(Self::text_row(channel, active, theme));
        }
        channels = channels.push(Self::section_label("VOICE CHANNELS", theme));
        for channel in sample::VOICE_CHANNELS.iter() {
            channels = channels.push(Self::voice_row(channel, theme));
        }

        let body =
            scrollable(channels.padding(Padding::from([0, 8]).bottom(8))).height(Length::Fill);

        container(column![
            container(banner).padding(8),
            body,
            horizontal_rule(),
            Self::user_strip(theme),
        ])
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::floating_panel)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommunityId, View};

    fn community_nav() -> NavigationState {
        NavigationState::default().select_view(View::Community(CommunityId::Gaming))
    }

    #[test]
    fn test_select_channel_requests_navigation() {
        let mut panel = CommunityChannelPanel::new();
        let cmd = panel.update(ChannelListMessage::SelectChannel("off-topic"), &community_nav());
        assert_eq!(
            cmd.navigation(),
            Some(&NavEvent::SelectChannel("off-topic".to_string()))
        );
    }

    #[test]
    fn test_voice_row_enters_call_with_channel() {
        let mut panel = CommunityChannelPanel::new();
        let cmd = panel.update(ChannelListMessage::JoinVoice("music"), &community_nav());
        assert_eq!(
            cmd.navigation(),
            Some(&NavEvent::EnterCall(Some("music".to_string())))
        );
    }

    #[test]
    fn test_settings_is_decorative() {
        let mut panel = CommunityChannelPanel::new();
        assert!(
            panel
                .update(ChannelListMessage::OpenSettings, &community_nav())
                .is_none()
        );
    }
}
