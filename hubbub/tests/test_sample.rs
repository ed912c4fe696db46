use hubbub::models::ThreadKind;
use hubbub::sample;

#[test]
fn test_collection_sizes() {
    assert_eq!(sample::CONVERSATIONS.len(), 6);
    assert_eq!(sample::messages(ThreadKind::Direct).len(), 6);
    assert_eq!(sample::messages(ThreadKind::Channel).len(), 5);
    assert_eq!(sample::TEXT_CHANNELS.len(), 4);
    assert_eq!(sample::VOICE_CHANNELS.len(), 3);
    assert_eq!(sample::COMMUNITIES.len(), 6);
    assert_eq!(sample::CALL_PARTICIPANTS.len(), 6);
}

#[test]
fn test_first_messages() {
    let direct = &sample::messages(ThreadKind::Direct)[0];
    assert_eq!(direct.sender_name, "Alex Rivera");
    assert_eq!(direct.content, "Hey! Have you seen the latest update?");
    assert!(!direct.authored_by_viewer);
    let channel = &sample::messages(ThreadKind::Channel)[0];
    assert_eq!(channel.sender_name, "Maya Chen");
    assert_eq!(channel.content, "Who's up for some gaming tonight? 🎮");
}

#[test]
fn test_viewer_messages_are_flagged() {
    for kind in [ThreadKind::Direct, ThreadKind::Channel] {
        for message in sample::messages(kind) {
            assert_eq!(
                message.authored_by_viewer,
                message.sender_name == sample::VIEWER_NAME
            );
        }
    }
}

#[test]
fn test_ids_are_unique() {
    let mut ids: Vec<u32> = sample::CONVERSATIONS.iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), sample::CONVERSATIONS.len());
    let mut channels: Vec<&str> = sample::TEXT_CHANNELS
        .iter()
        .chain(sample::VOICE_CHANNELS.iter())
        .map(|c| c.id)
        .collect();
    channels.sort();
    channels.dedup();
    assert_eq!(channels.len(), 7);
}

#[test]
fn test_viewer_is_first_call_participant() {
    let viewer = &sample::CALL_PARTICIPANTS[0];
    assert!(viewer.is_viewer());
    assert_eq!(
        sample::CALL_PARTICIPANTS.iter().filter(|p| p.is_viewer()).count(),
        1
    );
    assert!(sample::CALL_PARTICIPANTS.iter().any(|p| p.speaking));
}

#[test]
fn test_voice_channel_lookup() {
    assert_eq!(sample::voice_channel("gaming").map(|c| c.name), Some("Gaming Room"));
    assert!(sample::voice_channel("general").is_none());
}
