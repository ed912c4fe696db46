use hubbub::models::{ChannelKind, CommunityId, View};
use hubbub::sample;

#[test]
fn test_view_parse_and_display() {
    for view in [
        View::DirectMessages,
        View::Discovery,
        View::Community(CommunityId::Gaming),
        View::Community(CommunityId::Music),
        View::Community(CommunityId::Dev),
        View::Community(CommunityId::Art),
    ] {
        let parsed: View = view.to_string().parse().expect("parse failed");
        assert_eq!(parsed, view);
    }
    assert_eq!(" gaming ".parse::<View>().unwrap(), View::Community(CommunityId::Gaming));
}

#[test]
fn test_view_parse_rejects_unknown() {
    let err = "lobby".parse::<View>().unwrap_err();
    assert!(err.to_string().contains("Unknown view 'lobby'"));
    assert!("Gaming".parse::<CommunityId>().is_err());
}

#[test]
fn test_view_serde_uses_short_names() {
    let json = serde_json::to_string(&View::Community(CommunityId::Dev)).unwrap();
    assert_eq!(json, "\"dev\"");
    let view: View = serde_json::from_str("\"dms\"").unwrap();
    assert_eq!(view, View::DirectMessages);
    assert!(serde_json::from_str::<View>("\"nowhere\"").is_err());
}

#[test]
fn test_channel_unread_dot_hidden_for_active() {
    let general = sample::text_channel("general");
    assert!(matches!(general.kind, ChannelKind::Text { unread: true }));
    assert!(!general.shows_unread_dot("general"));
    assert!(general.shows_unread_dot("off-topic"));
    assert!(!sample::text_channel("introductions").shows_unread_dot("general"));
}

#[test]
fn test_voice_channels_report_occupants() {
    let occupants: Vec<Option<u32>> = sample::VOICE_CHANNELS
        .iter()
        .map(|c| c.occupants())
        .collect();
    assert_eq!(occupants, vec![Some(3), Some(7), Some(2)]);
    assert!(sample::VOICE_CHANNELS.iter().all(|c| c.is_voice()));
    assert!(sample::TEXT_CHANNELS.iter().all(|c| c.occupants().is_none()));
}

#[test]
fn test_conversation_helpers() {
    let alex = sample::conversation(1);
    assert!(alex.has_unread());
    assert_eq!(alex.status_text(), "Online");
    let jordan = sample::conversation(3);
    assert!(!jordan.has_unread());
    assert_eq!(jordan.status_text(), "Offline");
}

#[test]
fn test_community_card_members_label() {
    assert_eq!(sample::COMMUNITIES[0].members_label(), "24.5K members");
}
