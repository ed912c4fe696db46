use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Padding, Theme};

use crate::models::CallParticipant;
use crate::navigation::{NavEvent, NavigationState};
use crate::sample;
use crate::ui::core::{DecorativeControl, Panel, PanelCommand};
use crate::ui::icons::{
    self, MAXIMIZE_ICON, MIC_OFF_ICON, MIC_ON_ICON, MONITOR_ICON, PHONE_OFF_ICON, VIDEO_ICON,
    VIDEO_OFF_ICON,
};
use crate::ui::theme::{colors, styles};

use super::avatar;

const TILE_COLUMNS: usize = 3;
const TILE_HEIGHT: f32 = 180.0;

#[derive(Clone, Debug)]
pub enum CallMessage {
    ToggleMute,
    ToggleVideo,
    ScreenShare,
    Maximize,
    EndCall,
}

/// Voice/video call surface. Mute and camera state live here and start
/// fresh for every call.
pub struct CallPanel {
    muted: bool,
    video_on: bool,
}

impl Default for CallPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CallPanel {
    pub fn new() -> Self {
        Self {
            muted: false,
            video_on: true,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_video_on(&self) -> bool {
        self.video_on
    }

    /// Header title: the joined voice channel, or the default room name.
    pub fn title(nav: &NavigationState) -> &'static str {
        nav.call_channel
            .as_deref()
            .and_then(sample::voice_channel)
            .map(|c| c.name)
            .unwrap_or(sample::DEFAULT_CALL_TITLE)
    }

    /// Participant as drawn; the viewer's tile follows the local toggles.
    pub fn displayed(&self, participant: &CallParticipant) -> CallParticipant {
        if participant.is_viewer() {
            CallParticipant {
                muted: self.muted,
                video_on: self.video_on,
                ..*participant
            }
        } else {
            *participant
        }
    }

    fn tile<'a>(participant: CallParticipant, theme: &Theme) -> Element<'a, CallMessage> {
        let mut tag = row![text(participant.name).size(12)]
            .spacing(6)
            .align_y(Alignment::Center);
        if participant.muted {
            tag = tag.push(icons::icon(MIC_OFF_ICON, 12.0, colors::text_danger(theme)));
        }

        let content = column![
            container(avatar(participant.avatar_glyph, 72.0, 32.0))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            container(tag)
                .padding(Padding::from([4, 10]))
                .style(styles::name_tag),
        ]
        .padding(12);

        container(content)
            .width(Length::FillPortion(1))
            .height(Length::Fixed(TILE_HEIGHT))
            .style(move |t: &Theme| {
                styles::participant_tile(t, participant.speaking, participant.video_on)
            })
            .into()
    }

    fn control<'a>(
        source: &'static str,
        message: CallMessage,
        alert: bool,
        theme: &Theme,
    ) -> Element<'a, CallMessage> {
        let color = if alert {
            theme.extended_palette().danger.base.text
        } else {
            colors::text_primary(theme)
        };
        button(icons::icon(source, 22.0, color))
            .on_press(message)
            .padding(14)
            .style(move |t: &Theme, status| styles::call_control(t, status, alert))
            .into()
    }
}

impl Panel for CallPanel {
    type Message = CallMessage;

    fn update(
        &mut self,
        message: CallMessage,
        _nav: &NavigationState,
    ) -> PanelCommand<CallMessage> {
        match message {
            CallMessage::ToggleMute => {
                self.muted = !self.muted;
                tracing::debug!(muted = self.muted, "Microphone toggled");
                PanelCommand::None
            }
            CallMessage::ToggleVideo => {
                self.video_on = !self.video_on;
                tracing::debug!(video_on = self.video_on, "Camera toggled");
                PanelCommand::None
            }
            CallMessage::ScreenShare => DecorativeControl::ScreenShare.press(),
            CallMessage::Maximize => DecorativeControl::Maximize.press(),
            CallMessage::EndCall => {
                tracing::info!("Leaving call");
                PanelCommand::Navigate(NavEvent::ExitCall)
            }
        }
    }

    fn view<'a>(&'a self, nav: &'a NavigationState, theme: &'a Theme) -> Element<'a, CallMessage> {
        let header = row![
            column![
                text(Self::title(nav))
                    .size(20)
                    .color(colors::text_primary(theme)),
                text(format!(
                    "{} participants • Voice Channel",
                    sample::CALL_PARTICIPANTS.len()
                ))
                .size(13)
                .color(colors::text_secondary(theme)),
            ]
            .spacing(4)
            .width(Length::Fill),
            button(icons::icon(MAXIMIZE_ICON, 18.0, colors::text_secondary(theme)))
                .on_press(CallMessage::Maximize)
                .padding(8)
                .style(styles::button_icon),
        ]
        .align_y(Alignment::Center);

        let grid = sample::CALL_PARTICIPANTS.chunks(TILE_COLUMNS).fold(
            column![].spacing(16),
            |grid, chunk| {
                let line = chunk.iter().fold(row![].spacing(16), |line, p| {
                    line.push(Self::tile(self.displayed(p), theme))
                });
                grid.push(line)
            },
        );

        let (mic_icon, video_icon) = (
            if self.muted { MIC_OFF_ICON } else { MIC_ON_ICON },
            if self.video_on { VIDEO_ICON } else { VIDEO_OFF_ICON },
        );
        let controls = container(
            row![
                Self::control(mic_icon, CallMessage::ToggleMute, self.muted, theme),
                Self::control(video_icon, CallMessage::ToggleVideo, !self.video_on, theme),
                Self::control(MONITOR_ICON, CallMessage::ScreenShare, false, theme),
                button(icons::icon(
                    PHONE_OFF_ICON,
                    22.0,
                    theme.extended_palette().danger.base.text,
                ))
                .on_press(CallMessage::EndCall)
                .padding(Padding::from([14, 28]))
                .style(styles::button_danger),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        )
        .padding(Padding::from([10, 16]))
        .style(styles::control_bar);

        container(
            column![
                header,
                scrollable(grid).height(Length::Fill),
                container(controls).center_x(Length::Fill),
            ]
            .spacing(20)
            .padding(24),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::call_surface)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommunityId, View};

    fn call_nav() -> NavigationState {
        NavigationState::default()
            .select_view(View::Community(CommunityId::Gaming))
            .enter_call()
    }

    #[test]
    fn test_toggle_mute_twice_restores_state() {
        let mut panel = CallPanel::new();
        let nav = call_nav();
        assert!(panel.update(CallMessage::ToggleMute, &nav).is_none());
        assert!(panel.is_muted());
        panel.update(CallMessage::ToggleMute, &nav);
        assert!(!panel.is_muted());
    }

    #[test]
    fn test_viewer_tile_follows_local_toggles() {
        // Arrange
        let mut panel = CallPanel::new();
        let nav = call_nav();
        let viewer = sample::CALL_PARTICIPANTS[0];

        // Act
        panel.update(CallMessage::ToggleMute, &nav);
        panel.update(CallMessage::ToggleVideo, &nav);

        // Assert
        let shown = panel.displayed(&viewer);
        assert!(shown.muted);
        assert!(!shown.video_on);
        let other = sample::CALL_PARTICIPANTS[2];
        assert_eq!(panel.displayed(&other), other);
    }

    #[test]
    fn test_end_call_requests_exit() {
        let mut panel = CallPanel::new();
        let cmd = panel.update(CallMessage::EndCall, &call_nav());
        assert_eq!(cmd.navigation(), Some(&NavEvent::ExitCall));
    }

    #[test]
    fn test_title_uses_joined_voice_channel() {
        let nav = NavigationState::default()
            .select_view(View::Community(CommunityId::Dev))
            .enter_call_in("music");
        assert_eq!(CallPanel::title(&nav), "Music Vibes");
        assert_eq!(CallPanel::title(&call_nav()), sample::DEFAULT_CALL_TITLE);
        let nav = nav.exit_call().enter_call_in("nowhere");
        assert_eq!(CallPanel::title(&nav), sample::DEFAULT_CALL_TITLE);
    }
}
