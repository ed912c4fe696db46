#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallParticipant {
    pub id: u32,
    pub name: &'static str,
    pub avatar_glyph: &'static str,
    pub speaking: bool,
    pub muted: bool,
    pub video_on: bool,
}

impl CallParticipant {
    pub fn is_viewer(&self) -> bool {
        self.name == crate::sample::VIEWER_NAME
    }
}
