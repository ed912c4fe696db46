use iced::widget::{container, row};
use iced::{Element, Length, Task, Theme};

use crate::config::AppConfig;
use crate::navigation::{MainPanel, NavEvent, NavigationState, Sidebar, reduce};
use crate::ui::core::{Panel, PanelCommand};
use crate::ui::panels::{
    CallMessage, CallPanel, ChannelListMessage, CommunityChannelPanel, CommunityDiscoveryPanel,
    ConversationListMessage, ConversationListPanel, DiscoveryMessage, DockMessage,
    MessageThreadPanel, PANEL_GAP, ServerDock, ThreadMessage,
};

/// Top-level window state: navigation plus one instance of every panel.
pub struct AppShell {
    nav: NavigationState,
    theme: Theme,
    dock: ServerDock,
    conversations: ConversationListPanel,
    channels: CommunityChannelPanel,
    thread: MessageThreadPanel,
    discovery: CommunityDiscoveryPanel,
    call: CallPanel,
}

#[derive(Clone)]
pub enum AppMessage {
    Dock(DockMessage),
    Conversations(ConversationListMessage),
    Channels(ChannelListMessage),
    Thread(ThreadMessage),
    Discovery(DiscoveryMessage),
    Call(CallMessage),
}

impl std::fmt::Debug for AppMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppMessage::Dock(msg) => write!(f, "Dock({:?})", msg),
            AppMessage::Conversations(msg) => write!(f, "Conversations({:?})", msg),
            AppMessage::Channels(msg) => write!(f, "Channels({:?})", msg),
            // Draft text stays out of the logs
            AppMessage::Thread(ThreadMessage::DraftChanged(_)) => {
                write!(f, "Thread(DraftChanged(<text>))")
            }
            AppMessage::Thread(msg) => write!(f, "Thread({:?})", msg),
            AppMessage::Discovery(msg) => write!(f, "Discovery({:?})", msg),
            AppMessage::Call(msg) => write!(f, "Call({:?})", msg),
        }
    }
}

impl AppShell {
    pub fn new(config: AppConfig) -> (Self, Task<AppMessage>) {
        tracing::info!(
            theme = config.theme.name(),
            start_view = %config.start_view,
            "Starting hubbub"
        );
        let shell = Self {
            nav: NavigationState::starting_at(config.start_view),
            theme: config.theme.to_iced_theme(),
            dock: ServerDock::new(),
            conversations: ConversationListPanel::new(),
            channels: CommunityChannelPanel::new(),
            thread: MessageThreadPanel::new(),
            discovery: CommunityDiscoveryPanel::new(),
            call: CallPanel::new(),
        };
        (shell, Task::none())
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn call_panel(&self) -> &CallPanel {
        &self.call
    }

    pub fn title(&self) -> String {
        match self.nav.main_panel() {
            MainPanel::Discovery => "hubbub: Discover".to_string(),
            MainPanel::Call => format!("hubbub: {}", CallPanel::title(&self.nav)),
            MainPanel::DirectThread | MainPanel::ChannelThread => "hubbub".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Apply a navigation event and run the side effects of the new layout.
    fn navigate(&mut self, event: NavEvent) -> Task<AppMessage> {
        let before = self.nav.main_panel();
        let next = reduce(&self.nav, event);
        if next == self.nav {
            return Task::none();
        }
        self.nav = next;
        match self.nav.main_panel() {
            MainPanel::Call if before != MainPanel::Call => {
                self.call = CallPanel::new();
                Task::none()
            }
            MainPanel::DirectThread | MainPanel::ChannelThread => self.thread.snap_to_end(),
            _ => Task::none(),
        }
    }

    /// Turn a panel command into a task for the runtime
    fn handle_panel_command<M, F>(&mut self, cmd: PanelCommand<M>, wrap: F) -> Task<AppMessage>
    where
        M: Send + 'static,
        F: Fn(M) -> AppMessage + 'static + Send + Sync + Clone,
    {
        match cmd {
            PanelCommand::None => Task::none(),
            PanelCommand::Message(task) => task.map(wrap),
            PanelCommand::Navigate(event) => self.navigate(event),
        }
    }

    pub fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        tracing::trace!(?message, "Update");
        match message {
            AppMessage::Dock(msg) => {
                let cmd = self.dock.update(msg, &self.nav);
                self.handle_panel_command(cmd, AppMessage::Dock)
            }
            AppMessage::Conversations(msg) => {
                let cmd = self.conversations.update(msg, &self.nav);
                self.handle_panel_command(cmd, AppMessage::Conversations)
            }
            AppMessage::Channels(msg) => {
                let cmd = self.channels.update(msg, &self.nav);
                self.handle_panel_command(cmd, AppMessage::Channels)
            }
            AppMessage::Thread(msg) => {
                let cmd = self.thread.update(msg, &self.nav);
                self.handle_panel_command(cmd, AppMessage::Thread)
            }
            AppMessage::Discovery(msg) => {
                let cmd = self.discovery.update(msg, &self.nav);
                self.handle_panel_command(cmd, AppMessage::Discovery)
            }
            AppMessage::Call(msg) => {
                let cmd = self.call.update(msg, &self.nav);
                self.handle_panel_command(cmd, AppMessage::Call)
            }
        }
    }

    pub fn view(&self) -> Element<'_, AppMessage> {
        let nav = &self.nav;
        let theme = &self.theme;

        let dock = self.dock.view(nav, theme).map(AppMessage::Dock);

        let sidebar = nav.sidebar().map(|sidebar| match sidebar {
            Sidebar::Conversations => self
                .conversations
                .view(nav, theme)
                .map(AppMessage::Conversations),
            Sidebar::Channels => self.channels.view(nav, theme).map(AppMessage::Channels),
        });

        let main = match nav.main_panel() {
            MainPanel::DirectThread | MainPanel::ChannelThread => {
                self.thread.view(nav, theme).map(AppMessage::Thread)
            }
            MainPanel::Discovery => self.discovery.view(nav, theme).map(AppMessage::Discovery),
            MainPanel::Call => self.call.view(nav, theme).map(AppMessage::Call),
        };

        let layout = row![dock]
            .push_maybe(sidebar)
            .push(main)
            .spacing(PANEL_GAP)
            .height(Length::Fill);

        container(layout)
            .padding(PANEL_GAP)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommunityId, View};
    use crate::ui::theme::ThemePreference;

    fn shell() -> AppShell {
        AppShell::new(AppConfig::default()).0
    }

    #[test]
    fn test_new_uses_configured_start_view() {
        let config = AppConfig {
            theme: ThemePreference::Light,
            start_view: View::Discovery,
        };
        let (app, _) = AppShell::new(config);
        assert_eq!(app.nav().view, View::Discovery);
        assert_eq!(app.title(), "hubbub: Discover");
    }

    #[test]
    fn test_dock_message_switches_view() {
        let mut app = shell();
        let _ = app.update(AppMessage::Dock(DockMessage::SelectView(View::Community(
            CommunityId::Dev,
        ))));
        assert_eq!(app.nav().sidebar(), Some(Sidebar::Channels));
        assert_eq!(app.nav().main_panel(), MainPanel::ChannelThread);
    }

    #[test]
    fn test_entering_call_resets_local_toggles() {
        // Arrange
        let mut app = shell();
        let _ = app.update(AppMessage::Dock(DockMessage::SelectView(View::Community(
            CommunityId::Gaming,
        ))));
        let _ = app.update(AppMessage::Channels(ChannelListMessage::JoinVoice("lounge")));
        let _ = app.update(AppMessage::Call(CallMessage::ToggleMute));
        assert!(app.call_panel().is_muted());

        // Act
        let _ = app.update(AppMessage::Call(CallMessage::EndCall));
        let _ = app.update(AppMessage::Channels(ChannelListMessage::JoinVoice("gaming")));

        // Assert
        assert_eq!(app.nav().main_panel(), MainPanel::Call);
        assert!(!app.call_panel().is_muted());
        assert!(app.call_panel().is_video_on());
        assert_eq!(app.title(), "hubbub: Gaming Room");
    }

    #[test]
    fn test_voice_row_outside_community_is_ignored() {
        let mut app = shell();
        let _ = app.update(AppMessage::Channels(ChannelListMessage::JoinVoice("lounge")));
        assert!(!app.nav().in_call);
        assert_eq!(app.nav().main_panel(), MainPanel::DirectThread);
    }
}
