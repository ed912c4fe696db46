use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Padding, Theme};

use crate::models::{CommunityId, View};
use crate::navigation::{NavEvent, NavigationState};
use crate::ui::core::{DecorativeControl, Panel, PanelCommand};
use crate::ui::icons::{self, ADD_ICON, COMPASS_ICON, MESSAGE_ICON};
use crate::ui::theme::{colors, styles};

const DOCK_WIDTH: f32 = 72.0;
const DOCK_BUTTON: f32 = 48.0;

#[derive(Clone, Debug)]
pub enum DockMessage {
    SelectView(View),
    AddServer,
}

/// Vertical strip of view switch buttons on the far left.
#[derive(Default)]
pub struct ServerDock;

impl ServerDock {
    pub fn new() -> Self {
        Self
    }

    fn dock_button<'a>(
        &self,
        content: Element<'a, DockMessage>,
        target: View,
        active: bool,
    ) -> Element<'a, DockMessage> {
        let accent = target.community();
        let btn = button(
            container(content)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(Length::Fixed(DOCK_BUTTON))
        .height(Length::Fixed(DOCK_BUTTON))
        .padding(0)
        .on_press(DockMessage::SelectView(target))
        .style(move |t: &Theme, status| styles::dock_button(t, status, active, accent));

        let indicator: Element<'a, DockMessage> = if active {
            container(Space::new(4, 32))
                .style(styles::dock_indicator)
                .into()
        } else {
            Space::new(4, 32).into()
        };

        row![indicator, Space::with_width(8), btn, Space::with_width(12)]
            .align_y(Alignment::Center)
            .into()
    }

    fn separator<'a>() -> Element<'a, DockMessage> {
        container(Space::new(32, 2)).style(styles::divider).into()
    }
}

impl Panel for ServerDock {
    type Message = DockMessage;

    fn update(&mut self, message: DockMessage, nav: &NavigationState) -> PanelCommand<DockMessage> {
        match message {
            DockMessage::SelectView(view) => {
                tracing::debug!(from = %nav.view, to = %view, "Dock view selected");
                PanelCommand::Navigate(NavEvent::SelectView(view))
            }
            DockMessage::AddServer => DecorativeControl::AddServer.press(),
        }
    }

    fn view<'a>(&'a self, nav: &'a NavigationState, theme: &'a Theme) -> Element<'a, DockMessage> {
        let active = nav.view;
        let dms_color = if active == View::DirectMessages {
            theme.extended_palette().primary.base.text
        } else {
            colors::text_primary(theme)
        };
        let discovery_color = if active == View::Discovery {
            theme.extended_palette().primary.base.text
        } else {
            colors::text_primary(theme)
        };

        let mut col = column![
            self.dock_button(
                icons::icon(MESSAGE_ICON, 22.0, dms_color).into(),
                View::DirectMessages,
                active == View::DirectMessages,
            ),
            Self::separator(),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        for id in CommunityId::ALL {
            let target = View::Community(id);
            col = col.push(self.dock_button(
                text(id.glyph()).size(20).into(),
                target,
                active == target,
            ));
        }

        let add_server = button(
            container(icons::icon(ADD_ICON, 22.0, colors::online(theme)))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(Length::Fixed(DOCK_BUTTON))
        .height(Length::Fixed(DOCK_BUTTON))
        .padding(0)
        .on_press(DockMessage::AddServer)
        .style(styles::dock_add_button);

        col = col
            .push(Self::separator())
            .push(row![Space::with_width(12), add_server, Space::with_width(12)])
            .push(self.dock_button(
                icons::icon(COMPASS_ICON, 22.0, discovery_color).into(),
                View::Discovery,
                active == View::Discovery,
            ));

        container(scrollable(col.padding(Padding::from([12, 0]))))
            .width(Length::Fixed(DOCK_WIDTH))
            .height(Length::Fill)
            .style(styles::dock)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_view_requests_navigation() {
        let mut dock = ServerDock::new();
        let nav = NavigationState::default();
        let cmd = dock.update(
            DockMessage::SelectView(View::Community(CommunityId::Art)),
            &nav,
        );
        assert_eq!(
            cmd.navigation(),
            Some(&NavEvent::SelectView(View::Community(CommunityId::Art)))
        );
    }

    #[test]
    fn test_add_server_is_decorative() {
        let mut dock = ServerDock::new();
        let nav = NavigationState::default();
        let cmd = dock.update(DockMessage::AddServer, &nav);
        assert!(cmd.is_none());
    }
}
