/// A direct-message conversation shown in the conversation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conversation {
    pub id: u32,
    pub display_name: &'static str,
    pub avatar_glyph: &'static str,
    pub last_message_preview: &'static str,
    pub last_message_time: &'static str,
    pub unread_count: u32,
    pub online: bool,
}

impl Conversation {
    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }

    pub fn status_text(&self) -> &'static str {
        if self.online { "Online" } else { "Offline" }
    }
}
