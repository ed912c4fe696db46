use iced::{Element, Task, Theme};
use std::fmt::Debug;

use crate::navigation::{NavEvent, NavigationState};

/// Command returned from panel update methods
pub enum PanelCommand<M> {
    /// No action needed
    None,
    /// Execute a command with panel's message type
    Message(Task<M>),
    /// Ask the shell to apply a navigation event
    Navigate(NavEvent),
}

/// Controls that look interactive but are not wired to any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecorativeControl {
    AddServer,
    Search,
    UserSettings,
    HeaderVoiceCall,
    HeaderVideoCall,
    HeaderPin,
    HeaderSearch,
    ComposerAttach,
    ComposerImage,
    ComposerEmoji,
    ComposerSend,
    CategoryFilter(&'static str),
    JoinCommunity(u32),
    ScreenShare,
    Maximize,
}

impl DecorativeControl {
    /// Record the press. Decorative controls never change state.
    pub fn press<M>(self) -> PanelCommand<M> {
        tracing::trace!(control = ?self, "Decorative control pressed");
        PanelCommand::None
    }
}

/// Base trait for the panels composed by the application shell
pub trait Panel {
    /// Message type for this panel
    type Message: Debug + Clone + Send + 'static;

    /// Process a panel message against the current navigation state
    fn update(
        &mut self,
        message: Self::Message,
        nav: &NavigationState,
    ) -> PanelCommand<Self::Message>;

    /// Create the view for this panel
    fn view<'a>(&'a self, nav: &'a NavigationState, theme: &'a Theme) -> Element<'a, Self::Message>;
}

/// Helper methods for PanelCommand
impl<M> PanelCommand<M> {
    /// Navigation event requested by the panel, if any
    pub fn navigation(&self) -> Option<&NavEvent> {
        match self {
            PanelCommand::Navigate(event) => Some(event),
            _ => None,
        }
    }

    /// Check if this is a None command
    pub fn is_none(&self) -> bool {
        matches!(self, PanelCommand::None)
    }
}
