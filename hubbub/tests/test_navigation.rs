use hubbub::models::{CommunityId, ThreadKind, View};
use hubbub::navigation::{MainPanel, NavEvent, NavigationState, Sidebar, reduce};
use hubbub::sample;

fn community(id: CommunityId) -> NavigationState {
    NavigationState::default().select_view(View::Community(id))
}

#[test]
fn test_default_state() {
    let nav = NavigationState::default();
    assert_eq!(nav.view, View::DirectMessages);
    assert_eq!(nav.active_chat, 1);
    assert_eq!(nav.active_channel, "general");
    assert!(!nav.in_call);
    assert_eq!(nav.call_channel, None);
    assert_eq!(nav.sidebar(), Some(Sidebar::Conversations));
    assert_eq!(nav.main_panel(), MainPanel::DirectThread);
}

#[test]
fn test_layout_for_every_view() {
    let nav = NavigationState::default().select_view(View::Discovery);
    assert_eq!(nav.sidebar(), None);
    assert_eq!(nav.main_panel(), MainPanel::Discovery);
    assert!(!nav.is_community());

    for id in CommunityId::ALL {
        let nav = community(id);
        assert!(nav.is_community());
        assert_eq!(nav.sidebar(), Some(Sidebar::Channels));
        assert_eq!(nav.main_panel(), MainPanel::ChannelThread);
        assert_eq!(nav.thread_kind(), ThreadKind::Channel);
    }
}

#[test]
fn test_select_conversation_keeps_shared_messages() {
    // Arrange
    let before = sample::messages(NavigationState::default().thread_kind());

    // Act
    let nav = NavigationState::default().select_conversation(4);

    // Assert
    assert_eq!(nav.active_chat, 4);
    assert_eq!(nav.main_panel(), MainPanel::DirectThread);
    assert_eq!(sample::messages(nav.thread_kind()), before);
    assert_eq!(sample::conversation(nav.active_chat).display_name, "Sam Wilson");
}

#[test]
fn test_select_channel_changes_header_only() {
    let nav = community(CommunityId::Gaming).select_channel("off-topic");
    assert_eq!(nav.active_channel, "off-topic");
    assert_eq!(nav.main_panel(), MainPanel::ChannelThread);
    assert_eq!(sample::messages(nav.thread_kind()).len(), 5);
}

#[test]
fn test_enter_then_exit_call_returns_to_channel() {
    let start = community(CommunityId::Music).select_channel("introductions");
    let in_call = start.enter_call();
    assert!(in_call.in_call);
    assert_eq!(in_call.main_panel(), MainPanel::Call);
    assert_eq!(in_call.sidebar(), Some(Sidebar::Channels));

    let back = in_call.exit_call();
    assert_eq!(back, start);
    assert_eq!(back.main_panel(), MainPanel::ChannelThread);
}

#[test]
fn test_switching_view_clears_call() {
    let nav = community(CommunityId::Art).enter_call_in("gaming");
    assert_eq!(nav.call_channel.as_deref(), Some("gaming"));

    let nav = nav.select_view(View::Discovery);
    assert!(!nav.in_call);
    assert_eq!(nav.call_channel, None);

    let nav = nav.select_view(View::Community(CommunityId::Art));
    assert_eq!(nav.main_panel(), MainPanel::ChannelThread);
}

#[test]
fn test_call_requires_community() {
    let dms = NavigationState::default();
    assert_eq!(dms.enter_call(), dms);
    let discovery = dms.select_view(View::Discovery);
    assert_eq!(discovery.enter_call_in("lounge"), discovery);
}

#[test]
fn test_discovery_wins_over_call_flag() {
    let nav = NavigationState {
        in_call: true,
        ..NavigationState::starting_at(View::Discovery)
    };
    assert_eq!(nav.main_panel(), MainPanel::Discovery);
}

#[test]
fn test_selection_survives_view_changes() {
    let nav = NavigationState::default()
        .select_conversation(5)
        .select_view(View::Community(CommunityId::Dev))
        .select_channel("announcements")
        .select_view(View::DirectMessages);
    assert_eq!(nav.active_chat, 5);
    assert_eq!(nav.active_channel, "announcements");
}

#[test]
fn test_unknown_ids_are_stored_and_resolve_to_first() {
    let nav = NavigationState::default()
        .select_conversation(42)
        .select_channel("does-not-exist");
    assert_eq!(nav.active_chat, 42);
    assert_eq!(sample::conversation(nav.active_chat).id, 1);
    assert_eq!(sample::text_channel(&nav.active_channel).id, "general");
}

#[test]
fn test_full_session_scenario() {
    // dms -> pick a chat -> gaming -> channel -> voice -> leave -> discovery
    let events = [
        NavEvent::SelectConversation(2),
        NavEvent::SelectView(View::Community(CommunityId::Gaming)),
        NavEvent::SelectChannel("off-topic".to_string()),
        NavEvent::EnterCall(Some("lounge".to_string())),
        NavEvent::ExitCall,
        NavEvent::SelectView(View::Discovery),
    ];
    let panels: Vec<MainPanel> = events
        .iter()
        .scan(NavigationState::default(), |nav, event| {
            *nav = reduce(nav, event.clone());
            Some(nav.main_panel())
        })
        .collect();
    assert_eq!(
        panels,
        vec![
            MainPanel::DirectThread,
            MainPanel::ChannelThread,
            MainPanel::ChannelThread,
            MainPanel::Call,
            MainPanel::ChannelThread,
            MainPanel::Discovery,
        ]
    );
}

#[test]
fn test_dms_to_gaming_voice_scenario() {
    let nav = NavigationState::default();
    assert_eq!(nav.active_chat, 1);
    let direct = sample::messages(nav.thread_kind());
    assert_eq!(direct.len(), 6);
    assert_eq!(direct[0].content, "Hey! Have you seen the latest update?");

    let nav = nav.select_view(View::Community(CommunityId::Gaming));
    assert_eq!(nav.sidebar(), Some(Sidebar::Channels));
    assert_eq!(sample::text_channel(&nav.active_channel).name, "general");
    let channel = sample::messages(nav.thread_kind());
    assert_eq!(channel.len(), 5);
    assert_eq!(channel[0].content, "Who's up for some gaming tonight? 🎮");

    let nav = nav.enter_call_in(sample::VOICE_CHANNELS[0].id);
    assert_eq!(nav.main_panel(), MainPanel::Call);
    assert_eq!(sample::CALL_PARTICIPANTS.len(), 6);
}
