/// Which of the two sample message logs a thread displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThreadKind {
    Direct,
    Channel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u32,
    pub sender_name: &'static str,
    pub avatar_glyph: &'static str,
    pub content: &'static str,
    pub timestamp: &'static str,
    pub authored_by_viewer: bool,
}
