//! Tests for reading Teams member accounts out of activities and roster
//! responses.

use teams::{Activity, TeamsChannelAccount};

#[test]
fn test_aad_object_id_from_conversation_update() {
    let activity: Activity =
        serde_json::from_str(include_str!("fixtures/conversation_update_members_added.json"))
            .unwrap();

    let user = activity.from.expect("fixture has a sender");
    let teams_user = user.as_teams_channel_account().unwrap();

    assert_eq!(
        teams_user.object_id.as_deref(),
        Some("c38bfc8f-d1d7-46b3-b7c2-0e2b0d3e4f5a")
    );
}

#[test]
fn test_aad_object_id_from_message() {
    let activity: Activity =
        serde_json::from_str(include_str!("fixtures/message_with_aad_object_id.json")).unwrap();

    let user = activity.from.expect("fixture has a sender");
    let teams_user = user.as_teams_channel_account().unwrap();

    assert!(teams_user.object_id.is_some());
    assert_eq!(teams_user.name.as_deref(), Some("Megan Bowen"));
}

#[test]
fn test_roster_response() {
    let members: Vec<TeamsChannelAccount> =
        serde_json::from_str(include_str!("fixtures/roster_response.json")).unwrap();

    assert_eq!(members.len(), 2);
    for member in &members {
        assert!(!member.id.is_empty());
        assert!(member.object_id.as_deref().is_some_and(|s| !s.is_empty()));
        assert!(member
            .user_principal_name
            .as_deref()
            .is_some_and(|s| !s.is_empty()));
        assert!(member.email.as_deref().is_some_and(|s| !s.is_empty()));
        assert!(member.name.as_deref().is_some_and(|s| !s.is_empty()));
    }
}
