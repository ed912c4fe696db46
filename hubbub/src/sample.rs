//! Hard-coded sample records rendered by the panels.
//!
//! Nothing here is ever mutated. Lookups that take an id fall back to the
//! first record of the collection when the id is unknown.

use crate::models::{
    CallParticipant, Channel, ChannelKind, CommunityCard, Conversation, Message, ThreadKind,
};

pub const VIEWER_NAME: &str = "You";
pub const VIEWER_AVATAR: &str = "😎";

/// Header name of the community sidebar, shared by every community.
pub const COMMUNITY_NAME: &str = "Gaming Hub";

/// Call header title used when the joined voice channel is unknown.
pub const DEFAULT_CALL_TITLE: &str = "Gaming Room";

pub const DISCOVERY_CATEGORIES: [&str; 5] = ["All", "Gaming", "Music", "Art", "Technology"];

pub static CONVERSATIONS: [Conversation; 6] = [
    Conversation {
        id: 1,
        display_name: "Alex Rivera",
        avatar_glyph: "🧑‍💻",
        last_message_preview: "Check out this new feature!",
        last_message_time: "2m",
        unread_count: 3,
        online: true,
    },
    Conversation {
        id: 2,
        display_name: "Maya Chen",
        avatar_glyph: "👩‍🎨",
        last_message_preview: "The design looks amazing",
        last_message_time: "15m",
        unread_count: 1,
        online: true,
    },
    Conversation {
        id: 3,
        display_name: "Jordan Taylor",
        avatar_glyph: "🎮",
        last_message_preview: "GG! Next round?",
        last_message_time: "1h",
        unread_count: 0,
        online: false,
    },
    Conversation {
        id: 4,
        display_name: "Sam Wilson",
        avatar_glyph: "🎵",
        last_message_preview: "Listen to this track",
        last_message_time: "3h",
        unread_count: 0,
        online: true,
    },
    Conversation {
        id: 5,
        display_name: "Riley Brooks",
        avatar_glyph: "📸",
        last_message_preview: "Sent you the photos",
        last_message_time: "5h",
        unread_count: 0,
        online: false,
    },
    Conversation {
        id: 6,
        display_name: "Casey Morgan",
        avatar_glyph: "🚀",
        last_message_preview: "Ready for launch!",
        last_message_time: "1d",
        unread_count: 0,
        online: false,
    },
];

pub static DIRECT_MESSAGES: [Message; 6] = [
    Message {
        id: 1,
        sender_name: "Alex Rivera",
        avatar_glyph: "🧑‍💻",
        content: "Hey! Have you seen the latest update?",
        timestamp: "10:23 AM",
        authored_by_viewer: false,
    },
    Message {
        id: 2,
        sender_name: VIEWER_NAME,
        avatar_glyph: VIEWER_AVATAR,
        content: "Not yet! What changed?",
        timestamp: "10:24 AM",
        authored_by_viewer: true,
    },
    Message {
        id: 3,
        sender_name: "Alex Rivera",
        avatar_glyph: "🧑‍💻",
        content: "They completely redesigned the UI. It's so much cleaner now with these bubbly elements ✨",
        timestamp: "10:25 AM",
        authored_by_viewer: false,
    },
    Message {
        id: 4,
        sender_name: VIEWER_NAME,
        avatar_glyph: VIEWER_AVATAR,
        content: "That sounds amazing! I love the new direction they're going. The rounded corners everywhere give it such a friendly feel 🎉",
        timestamp: "10:26 AM",
        authored_by_viewer: true,
    },
    Message {
        id: 5,
        sender_name: "Alex Rivera",
        avatar_glyph: "🧑‍💻",
        content: "Right? And the floating panels are gorgeous. Want to hop on a call and I'll show you?",
        timestamp: "10:27 AM",
        authored_by_viewer: false,
    },
    Message {
        id: 6,
        sender_name: VIEWER_NAME,
        avatar_glyph: VIEWER_AVATAR,
        content: "Sure, let me grab my headphones! 🎧",
        timestamp: "10:28 AM",
        authored_by_viewer: true,
    },
];

pub static CHANNEL_MESSAGES: [Message; 5] = [
    Message {
        id: 1,
        sender_name: "Maya Chen",
        avatar_glyph: "👩‍🎨",
        content: "Who's up for some gaming tonight? 🎮",
        timestamp: "8:15 PM",
        authored_by_viewer: false,
    },
    Message {
        id: 2,
        sender_name: "Jordan Taylor",
        avatar_glyph: "🎮",
        content: "Count me in! What are we playing?",
        timestamp: "8:16 PM",
        authored_by_viewer: false,
    },
    Message {
        id: 3,
        sender_name: VIEWER_NAME,
        avatar_glyph: VIEWER_AVATAR,
        content: "I'm down! Let's do a few rounds of Valorant",
        timestamp: "8:18 PM",
        authored_by_viewer: true,
    },
    Message {
        id: 4,
        sender_name: "Sam Wilson",
        avatar_glyph: "🎵",
        content: "I'll join the voice channel and DJ while you guys play 🎶",
        timestamp: "8:20 PM",
        authored_by_viewer: false,
    },
    Message {
        id: 5,
        sender_name: "Maya Chen",
        avatar_glyph: "👩‍🎨",
        content: "Perfect! See everyone in the Gaming Room voice channel at 9!",
        timestamp: "8:22 PM",
        authored_by_viewer: false,
    },
];

pub static TEXT_CHANNELS: [Channel; 4] = [
    Channel {
        id: "general",
        name: "general",
        kind: ChannelKind::Text { unread: true },
    },
    Channel {
        id: "introductions",
        name: "introductions",
        kind: ChannelKind::Text { unread: false },
    },
    Channel {
        id: "off-topic",
        name: "off-topic",
        kind: ChannelKind::Text { unread: true },
    },
    Channel {
        id: "announcements",
        name: "announcements",
        kind: ChannelKind::Text { unread: false },
    },
];

pub static VOICE_CHANNELS: [Channel; 3] = [
    Channel {
        id: "lounge",
        name: "Lounge",
        kind: ChannelKind::Voice { occupants: 3 },
    },
    Channel {
        id: "gaming",
        name: "Gaming Room",
        kind: ChannelKind::Voice { occupants: 7 },
    },
    Channel {
        id: "music",
        name: "Music Vibes",
        kind: ChannelKind::Voice { occupants: 2 },
    },
];

pub static COMMUNITIES: [CommunityCard; 6] = [
    CommunityCard {
        id: 1,
        name: "Gaming Legends",
        description: "The ultimate gaming community",
        member_count_text: "24.5K",
        banner_ref: "banner-1",
        icon_glyph: "🎮",
        category: "Gaming",
    },
    CommunityCard {
        id: 2,
        name: "Creative Studio",
        description: "Design, art, and creativity hub",
        member_count_text: "18.2K",
        banner_ref: "banner-2",
        icon_glyph: "🎨",
        category: "Art",
    },
    CommunityCard {
        id: 3,
        name: "Dev Central",
        description: "Code, build, and ship together",
        member_count_text: "31.7K",
        banner_ref: "banner-3",
        icon_glyph: "💻",
        category: "Technology",
    },
    CommunityCard {
        id: 4,
        name: "Nature Vibes",
        description: "Explore the natural world",
        member_count_text: "12.1K",
        banner_ref: "banner-4",
        icon_glyph: "🌿",
        category: "Nature",
    },
    CommunityCard {
        id: 5,
        name: "Music Lounge",
        description: "Discover and share music",
        member_count_text: "42.3K",
        banner_ref: "banner-5",
        icon_glyph: "🎵",
        category: "Music",
    },
    CommunityCard {
        id: 6,
        name: "Film Club",
        description: "Movies, shows, and cinema",
        member_count_text: "9.8K",
        banner_ref: "banner-6",
        icon_glyph: "🎬",
        category: "Entertainment",
    },
];

pub static CALL_PARTICIPANTS: [CallParticipant; 6] = [
    CallParticipant {
        id: 1,
        name: VIEWER_NAME,
        avatar_glyph: VIEWER_AVATAR,
        speaking: false,
        muted: false,
        video_on: true,
    },
    CallParticipant {
        id: 2,
        name: "Alex Rivera",
        avatar_glyph: "🧑‍💻",
        speaking: true,
        muted: false,
        video_on: true,
    },
    CallParticipant {
        id: 3,
        name: "Maya Chen",
        avatar_glyph: "👩‍🎨",
        speaking: false,
        muted: true,
        video_on: false,
    },
    CallParticipant {
        id: 4,
        name: "Jordan Taylor",
        avatar_glyph: "🎮",
        speaking: false,
        muted: false,
        video_on: true,
    },
    CallParticipant {
        id: 5,
        name: "Sam Wilson",
        avatar_glyph: "🎵",
        speaking: false,
        muted: false,
        video_on: true,
    },
    CallParticipant {
        id: 6,
        name: "Riley Brooks",
        avatar_glyph: "📸",
        speaking: false,
        muted: true,
        video_on: false,
    },
];

pub fn messages(kind: ThreadKind) -> &'static [Message] {
    match kind {
        ThreadKind::Direct => &DIRECT_MESSAGES,
        ThreadKind::Channel => &CHANNEL_MESSAGES,
    }
}

pub fn conversation(id: u32) -> &'static Conversation {
    CONVERSATIONS
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&CONVERSATIONS[0])
}

pub fn text_channel(id: &str) -> &'static Channel {
    TEXT_CHANNELS
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&TEXT_CHANNELS[0])
}

/// Voice channel lookup used for the call header. Unlike the other lookups
/// an unknown id yields `None` so the caller can show the default title.
pub fn voice_channel(id: &str) -> Option<&'static Channel> {
    VOICE_CHANNELS.iter().find(|c| c.id == id)
}
