//! Theme management for the hubbub UI
//!
//! Every panel draws its colours from the active iced palette through the
//! helpers below, so switching between the light and dark preference
//! restyles the whole window.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Degrees, Gradient, Shadow, Theme, Vector, gradient};
use serde::{Deserialize, Serialize};

use crate::models::CommunityId;

/// Theme preference that can be stored in config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn to_iced_theme(self) -> Theme {
        match self {
            Self::Light => Theme::CatppuccinLatte,
            Self::Dark => Theme::CatppuccinMocha,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

pub const PANEL_RADIUS: f32 = 24.0;
pub const BUBBLE_RADIUS: f32 = 18.0;
pub const PILL_RADIUS: f32 = 999.0;

fn linear(from: Color, to: Color) -> Background {
    Background::Gradient(Gradient::Linear(
        gradient::Linear::new(Degrees(135.0))
            .add_stop(0.0, from)
            .add_stop(1.0, to),
    ))
}

fn float_shadow() -> Shadow {
    Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector::new(0.0, 6.0),
        blur_radius: 18.0,
    }
}

/// Custom styles for various UI components
pub mod styles {
    use super::*;

    /// Style for the thin separators between dock groups and header rows
    pub fn divider(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.strong.color)),
            border: Border {
                radius: 1.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Rounded floating card used by sidebars and main panels
    pub fn floating_panel(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            border: Border {
                radius: PANEL_RADIUS.into(),
                ..Default::default()
            },
            shadow: float_shadow(),
            ..Default::default()
        }
    }

    /// Call panel sits directly on the window background
    pub fn call_surface(theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(colors::background_base(theme))),
            border: Border {
                radius: PANEL_RADIUS.into(),
                ..Default::default()
            },
            shadow: float_shadow(),
            ..Default::default()
        }
    }

    pub fn dock(theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(colors::surface(theme))),
            border: Border {
                radius: PANEL_RADIUS.into(),
                ..Default::default()
            },
            shadow: float_shadow(),
            ..Default::default()
        }
    }

    /// Dock button; the active one is filled with the accent (or primary) colour
    pub fn dock_button(
        theme: &Theme,
        status: button::Status,
        active: bool,
        accent: Option<CommunityId>,
    ) -> button::Style {
        let palette = theme.extended_palette();
        let background = match (active, accent) {
            (true, Some(id)) => {
                let (from, to) = colors::community_accent(id);
                linear(from, to)
            }
            (true, None) => Background::Color(palette.primary.base.color),
            (false, _) => match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Background::Color(palette.background.strong.color)
                }
                _ => Background::Color(colors::surface_elevated(theme)),
            },
        };
        button::Style {
            background: Some(background),
            text_color: if active {
                palette.primary.base.text
            } else {
                palette.background.base.text
            },
            border: Border {
                radius: if active { 16.0 } else { 18.0 }.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Decorative "Add Server" button
    pub fn dock_add_button(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                let mut c = palette.success.base.color;
                c.a = 0.2;
                c
            }
            _ => colors::surface_elevated(theme),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette.success.base.color,
            border: Border {
                radius: 18.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Small bar left of the active dock button
    pub fn dock_indicator(theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(colors::primary(theme))),
            border: Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Conversation and channel rows in the sidebars
    pub fn list_row(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
        let palette = theme.extended_palette();
        let background = if selected {
            Some(Background::Color(palette.background.strong.color))
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => {
                    let mut c = palette.background.strong.color;
                    c.a = 0.5;
                    Some(Background::Color(c))
                }
                _ => Some(Background::Color(Color::TRANSPARENT)),
            }
        };
        button::Style {
            background,
            text_color: if selected {
                colors::text_primary(theme)
            } else {
                colors::text_secondary(theme)
            },
            border: Border {
                radius: 16.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Filled pill ("Join", active category, send)
    pub fn pill_primary(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        let mut background = palette.primary.base.color;
        if matches!(status, button::Status::Hovered) {
            background.a = 0.9;
        }
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette.primary.base.text,
            border: Border {
                radius: PILL_RADIUS.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color {
                    a: 0.35,
                    ..palette.primary.base.color
                },
                offset: Vector::new(0.0, 0.0),
                blur_radius: 10.0,
            },
            ..Default::default()
        }
    }

    /// Soft primary pill used by the DM header "Voice" and "Video" buttons
    pub fn pill_soft(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        let mut background = palette.primary.base.color;
        background.a = match status {
            button::Status::Hovered | button::Status::Pressed => 0.2,
            _ => 0.1,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette.primary.base.color,
            border: Border {
                radius: PILL_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Inactive category pill
    pub fn pill_secondary(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => colors::surface_elevated(theme),
            _ => palette.background.strong.color,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette.background.base.text,
            border: Border {
                radius: PILL_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Style for icon buttons (transparent background)
    pub fn button_icon(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        let background = match status {
            button::Status::Hovered => palette.background.strong.color,
            button::Status::Pressed => palette.background.base.color,
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors::text_secondary(theme),
            border: Border {
                radius: PILL_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Round call control; `alert` paints it red (muted mic, camera off)
    pub fn call_control(theme: &Theme, status: button::Status, alert: bool) -> button::Style {
        let palette = theme.extended_palette();
        let (background, text_color) = if alert {
            let mut c = palette.danger.base.color;
            c.a = 0.2;
            (c, palette.danger.base.color)
        } else if matches!(status, button::Status::Hovered) {
            (palette.background.strong.color, palette.background.base.text)
        } else {
            (colors::surface_elevated(theme), palette.background.base.text)
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: PILL_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Style for danger/destructive buttons
    pub fn button_danger(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        let pair = match status {
            button::Status::Hovered => palette.danger.strong,
            _ => palette.danger.base,
        };
        button::Style {
            background: Some(Background::Color(pair.color)),
            text_color: pair.text,
            border: Border {
                radius: PILL_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Rounded bar holding the composer and call controls
    pub fn control_bar(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.strong.color)),
            border: Border {
                radius: PILL_RADIUS.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        }
    }

    pub fn avatar(theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(colors::surface_elevated(theme))),
            border: Border {
                radius: PILL_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Bubble for messages written by the viewer; tail at the bottom right
    pub fn bubble_mine(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.primary.base.color)),
            text_color: Some(palette.primary.base.text),
            border: Border {
                radius: iced::border::Radius {
                    top_left: BUBBLE_RADIUS,
                    top_right: BUBBLE_RADIUS,
                    bottom_right: 6.0,
                    bottom_left: BUBBLE_RADIUS,
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Bubble for everyone else; tail at the bottom left
    pub fn bubble_other(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.strong.color)),
            text_color: Some(palette.background.strong.text),
            border: Border {
                radius: iced::border::Radius {
                    top_left: BUBBLE_RADIUS,
                    top_right: BUBBLE_RADIUS,
                    bottom_right: BUBBLE_RADIUS,
                    bottom_left: 6.0,
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn unread_badge(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.danger.base.color)),
            text_color: Some(palette.danger.base.text),
            border: Border {
                radius: PILL_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn unread_dot(theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(colors::primary(theme))),
            border: Border {
                radius: PILL_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Presence dot; the border matches the panel so it looks cut out
    pub fn online_dot(theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(colors::online(theme))),
            border: Border {
                color: colors::background_weak(theme),
                width: 2.0,
                radius: PILL_RADIUS.into(),
            },
            ..Default::default()
        }
    }

    /// Banner stand-in for community artwork
    pub fn banner(banner_ref: &str) -> container::Style {
        let (from, to) = colors::banner(banner_ref);
        container::Style {
            background: Some(linear(from, to)),
            ..Default::default()
        }
    }

    /// Discovery card body
    pub fn community_card(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.strong.color)),
            border: Border {
                radius: PANEL_RADIUS.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        }
    }

    /// Discovery card icon, bordered with the card colour
    pub fn community_icon(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(colors::surface_elevated(theme))),
            border: Border {
                color: palette.background.strong.color,
                width: 4.0,
                radius: 16.0.into(),
            },
            ..Default::default()
        }
    }

    /// Participant tile; speakers get a primary ring
    pub fn participant_tile(theme: &Theme, speaking: bool, video_on: bool) -> container::Style {
        let palette = theme.extended_palette();
        let background = if video_on {
            linear(
                colors::surface_elevated(theme),
                palette.background.strong.color,
            )
        } else {
            Background::Color(palette.background.strong.color)
        };
        container::Style {
            background: Some(background),
            border: Border {
                color: if speaking {
                    palette.primary.base.color
                } else {
                    Color::TRANSPARENT
                },
                width: if speaking { 2.0 } else { 0.0 },
                radius: PANEL_RADIUS.into(),
            },
            ..Default::default()
        }
    }

    pub fn name_tag(theme: &Theme) -> container::Style {
        let mut background = colors::background_base(theme);
        background.a = 0.6;
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(colors::text_primary(theme)),
            border: Border {
                radius: PILL_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Helper functions to get colors from theme
pub mod colors {
    use super::*;

    pub fn text_primary(theme: &Theme) -> Color {
        theme.extended_palette().background.base.text
    }

    pub fn text_secondary(theme: &Theme) -> Color {
        let mut color = theme.extended_palette().background.base.text;
        color.a = 0.7;
        color
    }

    pub fn text_muted(theme: &Theme) -> Color {
        let mut color = theme.extended_palette().background.base.text;
        color.a = 0.5;
        color
    }

    pub fn text_danger(theme: &Theme) -> Color {
        theme.extended_palette().danger.base.color
    }

    pub fn background_base(theme: &Theme) -> Color {
        theme.extended_palette().background.base.color
    }

    pub fn background_weak(theme: &Theme) -> Color {
        theme.extended_palette().background.weak.color
    }

    /// Dock background, a step darker than the panels
    pub fn surface(theme: &Theme) -> Color {
        let palette = theme.extended_palette();
        let base = palette.background.base.color;
        let weak = palette.background.weak.color;
        Color::from_rgb(
            (base.r + weak.r) / 2.0,
            (base.g + weak.g) / 2.0,
            (base.b + weak.b) / 2.0,
        )
    }

    /// Raised surfaces: avatars, idle dock buttons, video tiles
    pub fn surface_elevated(theme: &Theme) -> Color {
        let palette = theme.extended_palette();
        let strong = palette.background.strong.color;
        let text = palette.background.base.text;
        Color::from_rgb(
            strong.r * 0.85 + text.r * 0.15,
            strong.g * 0.85 + text.g * 0.15,
            strong.b * 0.85 + text.b * 0.15,
        )
    }

    pub fn primary(theme: &Theme) -> Color {
        theme.extended_palette().primary.base.color
    }

    pub fn online(theme: &Theme) -> Color {
        theme.extended_palette().success.base.color
    }

    pub fn community_accent(id: CommunityId) -> (Color, Color) {
        match id {
            CommunityId::Gaming => (Color::from_rgb8(59, 130, 246), Color::from_rgb8(34, 211, 238)),
            CommunityId::Music => (Color::from_rgb8(236, 72, 153), Color::from_rgb8(251, 113, 133)),
            CommunityId::Dev => (Color::from_rgb8(16, 185, 129), Color::from_rgb8(45, 212, 191)),
            CommunityId::Art => (Color::from_rgb8(249, 115, 22), Color::from_rgb8(251, 191, 36)),
        }
    }

    /// Gradient pair standing in for a banner image
    pub fn banner(banner_ref: &str) -> (Color, Color) {
        match banner_ref {
            "banner-1" => (Color::from_rgb8(30, 64, 175), Color::from_rgb8(6, 182, 212)),
            "banner-2" => (Color::from_rgb8(190, 24, 93), Color::from_rgb8(251, 146, 60)),
            "banner-3" => (Color::from_rgb8(15, 23, 42), Color::from_rgb8(16, 185, 129)),
            "banner-4" => (Color::from_rgb8(22, 101, 52), Color::from_rgb8(163, 230, 53)),
            "banner-5" => (Color::from_rgb8(88, 28, 135), Color::from_rgb8(236, 72, 153)),
            "banner-6" => (Color::from_rgb8(69, 10, 10), Color::from_rgb8(234, 179, 8)),
            _ => (Color::from_rgb8(55, 65, 81), Color::from_rgb8(107, 114, 128)),
        }
    }
}
