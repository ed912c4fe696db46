//! Navigation state for the application shell.
//!
//! The state is an immutable value; every transition goes through [`reduce`]
//! and produces a new value, so panels and tests can reason about it without
//! a rendering backend.

use crate::models::{ThreadKind, View};
use crate::sample;

/// Sidebar shown next to the server dock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sidebar {
    Conversations,
    Channels,
}

/// Panel occupying the main area of the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainPanel {
    DirectThread,
    ChannelThread,
    Discovery,
    Call,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    SelectView(View),
    SelectConversation(u32),
    SelectChannel(String),
    /// Join a call; carries the voice channel id when one was clicked.
    EnterCall(Option<String>),
    ExitCall,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub view: View,
    pub active_chat: u32,
    pub active_channel: String,
    pub in_call: bool,
    pub call_channel: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::starting_at(View::DirectMessages)
    }
}

impl NavigationState {
    pub fn starting_at(view: View) -> Self {
        Self {
            view,
            active_chat: sample::CONVERSATIONS[0].id,
            active_channel: sample::TEXT_CHANNELS[0].id.to_string(),
            in_call: false,
            call_channel: None,
        }
    }

    pub fn select_view(&self, view: View) -> Self {
        reduce(self, NavEvent::SelectView(view))
    }

    pub fn select_conversation(&self, id: u32) -> Self {
        reduce(self, NavEvent::SelectConversation(id))
    }

    pub fn select_channel(&self, id: impl Into<String>) -> Self {
        reduce(self, NavEvent::SelectChannel(id.into()))
    }

    pub fn enter_call(&self) -> Self {
        reduce(self, NavEvent::EnterCall(None))
    }

    pub fn enter_call_in(&self, voice_channel: impl Into<String>) -> Self {
        reduce(self, NavEvent::EnterCall(Some(voice_channel.into())))
    }

    pub fn exit_call(&self) -> Self {
        reduce(self, NavEvent::ExitCall)
    }

    /// True exactly when a community (not DMs, not discovery) is selected.
    pub fn is_community(&self) -> bool {
        self.view.is_community()
    }

    pub fn sidebar(&self) -> Option<Sidebar> {
        match self.view {
            View::DirectMessages => Some(Sidebar::Conversations),
            View::Discovery => None,
            View::Community(_) => Some(Sidebar::Channels),
        }
    }

    pub fn main_panel(&self) -> MainPanel {
        match self.view {
            View::Discovery => MainPanel::Discovery,
            _ if self.in_call => MainPanel::Call,
            View::DirectMessages => MainPanel::DirectThread,
            View::Community(_) => MainPanel::ChannelThread,
        }
    }

    pub fn thread_kind(&self) -> ThreadKind {
        if self.is_community() {
            ThreadKind::Channel
        } else {
            ThreadKind::Direct
        }
    }
}

/// Applies one navigation event. Total over every event; unknown ids are
/// stored as given and resolved by the panels at render time.
pub fn reduce(state: &NavigationState, event: NavEvent) -> NavigationState {
    let mut next = state.clone();
    match event {
        NavEvent::SelectView(view) => {
            // Leaving the view hides the call panel; it does not hang up.
            next.view = view;
            next.in_call = false;
            next.call_channel = None;
        }
        NavEvent::SelectConversation(id) => {
            next.active_chat = id;
        }
        NavEvent::SelectChannel(id) => {
            next.active_channel = id;
        }
        NavEvent::EnterCall(voice_channel) => {
            if !state.is_community() {
                tracing::debug!(view = %state.view, "Ignoring call outside of a community");
                return next;
            }
            next.in_call = true;
            next.call_channel = voice_channel;
        }
        NavEvent::ExitCall => {
            next.in_call = false;
            next.call_channel = None;
        }
    }
    tracing::debug!(
        view = %next.view,
        chat = next.active_chat,
        channel = %next.active_channel,
        in_call = next.in_call,
        "Navigation updated"
    );
    next
}
