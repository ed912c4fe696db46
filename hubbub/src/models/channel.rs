#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Text { unread: bool },
    Voice { occupants: u32 },
}

/// A text or voice channel inside a community.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ChannelKind,
}

impl Channel {
    pub fn is_voice(&self) -> bool {
        matches!(self.kind, ChannelKind::Voice { .. })
    }

    /// Unread marker is hidden for the channel that is currently open.
    pub fn shows_unread_dot(&self, active_channel: &str) -> bool {
        match self.kind {
            ChannelKind::Text { unread } => unread && self.id != active_channel,
            ChannelKind::Voice { .. } => false,
        }
    }

    pub fn occupants(&self) -> Option<u32> {
        match self.kind {
            ChannelKind::Voice { occupants } => Some(occupants),
            ChannelKind::Text { .. } => None,
        }
    }
}
