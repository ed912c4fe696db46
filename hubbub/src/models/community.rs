/// A card in the community discovery grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommunityCard {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub member_count_text: &'static str,
    pub banner_ref: &'static str,
    pub icon_glyph: &'static str,
    pub category: &'static str,
}

impl CommunityCard {
    pub fn members_label(&self) -> String {
        format!("{} members", self.member_count_text)
    }
}
