use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Padding, Theme};

use crate::models::CommunityCard;
use crate::navigation::NavigationState;
use crate::sample;
use crate::ui::core::{DecorativeControl, Panel, PanelCommand};
use crate::ui::icons::{self, TRENDING_ICON, USERS_ICON};
use crate::ui::theme::{colors, styles};

const GRID_COLUMNS: usize = 3;
const GRID_SPACING: u16 = 20;

#[derive(Clone, Debug)]
pub enum DiscoveryMessage {
    FilterCategory(&'static str),
    Join(u32),
}

/// Grid of community cards with category pills on top.
#[derive(Default)]
pub struct CommunityDiscoveryPanel;

impl CommunityDiscoveryPanel {
    pub fn new() -> Self {
        Self
    }

    fn card<'a>(community: &'static CommunityCard, theme: &Theme) -> Element<'a, DiscoveryMessage> {
        let banner = container(Space::with_height(Length::Fixed(96.0)))
            .width(Length::Fill)
            .style(move |_| styles::banner(community.banner_ref));

        let icon = container(text(community.icon_glyph).size(26))
            .center_x(Length::Fixed(56.0))
            .center_y(Length::Fixed(56.0))
            .style(styles::community_icon);

        let members = row![
            icons::icon(USERS_ICON, 14.0, colors::text_muted(theme)),
            text(community.members_label())
                .size(12)
                .color(colors::text_muted(theme)),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        let join = button(text("Join").size(13))
            .on_press(DiscoveryMessage::Join(community.id))
            .padding(Padding::from([6, 16]))
            .style(styles::pill_primary);

        let body = column![
            container(icon).padding(Padding::ZERO.top(12)),
            text(community.name).size(16).color(colors::text_primary(theme)),
            text(community.description)
                .size(13)
                .color(colors::text_secondary(theme)),
            Space::with_height(8),
            row![members, Space::with_width(Length::Fill), join].align_y(Alignment::Center),
        ]
        .spacing(6)
        .padding(Padding::from([0, 16]).bottom(16));

        container(column![banner, body])
            .width(Length::FillPortion(1))
            .clip(true)
            .style(styles::community_card)
            .into()
    }
}

impl Panel for CommunityDiscoveryPanel {
    type Message = DiscoveryMessage;

    fn update(
        &mut self,
        message: DiscoveryMessage,
        _nav: &NavigationState,
    ) -> PanelCommand<DiscoveryMessage> {
        match message {
            DiscoveryMessage::FilterCategory(category) => {
                DecorativeControl::CategoryFilter(category).press()
            }
            DiscoveryMessage::Join(id) => DecorativeControl::JoinCommunity(id).press(),
        }
    }

    fn view<'a>(
        &'a self,
        _nav: &'a NavigationState,
        theme: &'a Theme,
    ) -> Element<'a, DiscoveryMessage> {
        let title = row![
            icons::icon(TRENDING_ICON, 26.0, colors::primary(theme)),
            text("Discover Communities")
                .size(26)
                .color(colors::text_primary(theme)),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let pills = sample::DISCOVERY_CATEGORIES
            .iter()
            .enumerate()
            .fold(row![].spacing(8), |pills, (index, &category)| {
                let pill = button(text(category).size(13))
                    .on_press(DiscoveryMessage::FilterCategory(category))
                    .padding(Padding::from([8, 18]));
                let pill = if index == 0 {
                    pill.style(styles::pill_primary)
                } else {
                    pill.style(styles::pill_secondary)
                };
                pills.push(pill)
            });

        let grid = sample::COMMUNITIES
            .chunks(GRID_COLUMNS)
            .fold(column![].spacing(GRID_SPACING), |grid, chunk| {
                let mut line = row![].spacing(GRID_SPACING);
                for community in chunk {
                    line = line.push(Self::card(community, theme));
                }
                for _ in chunk.len()..GRID_COLUMNS {
                    line = line.push(Space::with_width(Length::FillPortion(1)));
                }
                grid.push(line)
            });

        container(scrollable(
            column![title, pills, grid]
                .spacing(24)
                .padding(32)
                .width(Length::Fill),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::floating_panel)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_filters_are_decorative() {
        let mut panel = CommunityDiscoveryPanel::new();
        let nav = NavigationState::default();
        assert!(panel.update(DiscoveryMessage::Join(3), &nav).is_none());
        for category in sample::DISCOVERY_CATEGORIES {
            assert!(
                panel
                    .update(DiscoveryMessage::FilterCategory(category), &nav)
                    .is_none()
            );
        }
    }
}
