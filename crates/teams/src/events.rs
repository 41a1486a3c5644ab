//! Conversation update events raised by Teams.
//!
//! Teams reports team and channel lifecycle changes as `conversationUpdate`
//! activities whose channel data carries an `eventType` discriminator.
//! [`conversation_update_data`] turns such an activity into a [`TeamEvent`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

use crate::channel_data::{teams_channel_data, ChannelInfo, TeamInfo, TenantInfo};
use crate::error::{Result, TeamsError};
use crate::models::{Activity, ActivityType, ChannelAccount};

/// Discriminator literals found in `channelData.eventType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamEventType {
    /// Members joined the team
    #[serde(rename = "teamMemberAdded")]
    MembersAdded,
    /// Members left the team
    #[serde(rename = "teamMemberRemoved")]
    MembersRemoved,
    /// A channel was created
    #[serde(rename = "channelCreated")]
    ChannelCreated,
    /// A channel was deleted
    #[serde(rename = "channelDeleted")]
    ChannelDeleted,
    /// A channel was renamed
    #[serde(rename = "channelRenamed")]
    ChannelRenamed,
    /// The team was renamed
    #[serde(rename = "teamRenamed")]
    TeamRenamed,
}

impl TeamEventType {
    /// All event types, in wire order.
    pub const ALL: [Self; 6] = [
        Self::MembersAdded,
        Self::MembersRemoved,
        Self::ChannelCreated,
        Self::ChannelDeleted,
        Self::ChannelRenamed,
        Self::TeamRenamed,
    ];

    /// Get the wire literal for this event type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MembersAdded => "teamMemberAdded",
            Self::MembersRemoved => "teamMemberRemoved",
            Self::ChannelCreated => "channelCreated",
            Self::ChannelDeleted => "channelDeleted",
            Self::ChannelRenamed => "channelRenamed",
            Self::TeamRenamed => "teamRenamed",
        }
    }
}

/// Error returned when a string is not one of the six event literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown Teams event type: '{0}'")]
pub struct UnknownEventType(pub String);

impl FromStr for TeamEventType {
    type Err = UnknownEventType;

    /// Exact, case-sensitive match against the wire literals.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

impl fmt::Display for TeamEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Members were added to a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersAddedEvent {
    /// Accounts that joined, as sent on the activity
    pub members_added: Option<Vec<ChannelAccount>>,
    /// Team the members joined
    pub team: Option<TeamInfo>,
    /// Tenant the team belongs to
    pub tenant: Option<TenantInfo>,
}

/// Members were removed from a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersRemovedEvent {
    /// Accounts that left, as sent on the activity
    pub members_removed: Option<Vec<ChannelAccount>>,
    pub team: Option<TeamInfo>,
    pub tenant: Option<TenantInfo>,
}

/// A channel was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelCreatedEvent {
    /// The new channel
    pub channel: Option<ChannelInfo>,
    /// Team owning the channel; its id is also the general channel id
    pub team: Option<TeamInfo>,
    pub tenant: Option<TenantInfo>,
}

/// A channel was deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDeletedEvent {
    /// The deleted channel
    pub channel: Option<ChannelInfo>,
    pub team: Option<TeamInfo>,
    pub tenant: Option<TenantInfo>,
}

/// A channel was renamed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRenamedEvent {
    /// The channel, carrying its new name
    pub channel: Option<ChannelInfo>,
    pub team: Option<TeamInfo>,
    pub tenant: Option<TenantInfo>,
}

/// The team was renamed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRenamedEvent {
    /// The team, carrying its new name
    pub team: Option<TeamInfo>,
    pub tenant: Option<TenantInfo>,
}

/// A classified Teams conversation update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", content = "event")]
pub enum TeamEvent {
    /// `teamMemberAdded`
    #[serde(rename = "teamMemberAdded")]
    MembersAdded(MembersAddedEvent),
    /// `teamMemberRemoved`
    #[serde(rename = "teamMemberRemoved")]
    MembersRemoved(MembersRemovedEvent),
    /// `channelCreated`
    #[serde(rename = "channelCreated")]
    ChannelCreated(ChannelCreatedEvent),
    /// `channelDeleted`
    #[serde(rename = "channelDeleted")]
    ChannelDeleted(ChannelDeletedEvent),
    /// `channelRenamed`
    #[serde(rename = "channelRenamed")]
    ChannelRenamed(ChannelRenamedEvent),
    /// `teamRenamed`
    #[serde(rename = "teamRenamed")]
    TeamRenamed(TeamRenamedEvent),
}

impl TeamEvent {
    /// Get the discriminator this event was classified from.
    #[must_use]
    pub const fn event_type(&self) -> TeamEventType {
        match self {
            Self::MembersAdded(_) => TeamEventType::MembersAdded,
            Self::MembersRemoved(_) => TeamEventType::MembersRemoved,
            Self::ChannelCreated(_) => TeamEventType::ChannelCreated,
            Self::ChannelDeleted(_) => TeamEventType::ChannelDeleted,
            Self::ChannelRenamed(_) => TeamEventType::ChannelRenamed,
            Self::TeamRenamed(_) => TeamEventType::TeamRenamed,
        }
    }

    /// Get the team the event happened in.
    #[must_use]
    pub fn team(&self) -> Option<&TeamInfo> {
        match self {
            Self::MembersAdded(e) => e.team.as_ref(),
            Self::MembersRemoved(e) => e.team.as_ref(),
            Self::ChannelCreated(e) => e.team.as_ref(),
            Self::ChannelDeleted(e) => e.team.as_ref(),
            Self::ChannelRenamed(e) => e.team.as_ref(),
            Self::TeamRenamed(e) => e.team.as_ref(),
        }
    }

    /// Get the tenant owning the team.
    #[must_use]
    pub fn tenant(&self) -> Option<&TenantInfo> {
        match self {
            Self::MembersAdded(e) => e.tenant.as_ref(),
            Self::MembersRemoved(e) => e.tenant.as_ref(),
            Self::ChannelCreated(e) => e.tenant.as_ref(),
            Self::ChannelDeleted(e) => e.tenant.as_ref(),
            Self::ChannelRenamed(e) => e.tenant.as_ref(),
            Self::TeamRenamed(e) => e.tenant.as_ref(),
        }
    }

    /// Get the channel for channel lifecycle events.
    #[must_use]
    pub fn channel(&self) -> Option<&ChannelInfo> {
        match self {
            Self::ChannelCreated(e) => e.channel.as_ref(),
            Self::ChannelDeleted(e) => e.channel.as_ref(),
            Self::ChannelRenamed(e) => e.channel.as_ref(),
            Self::MembersAdded(_) | Self::MembersRemoved(_) | Self::TeamRenamed(_) => None,
        }
    }
}

/// Classify a `conversationUpdate` activity into a [`TeamEvent`].
///
/// Member lists are copied from the activity; channel, team and tenant come
/// from the channel data. A missing and an unrecognized `eventType` produce
/// the same error.
///
/// # Errors
///
/// - `InvalidArgument` if the activity is not a conversation update
/// - `MissingData` if the activity has no channel data
/// - `Malformed` / `Serialization` if the channel data does not decode or its
///   `eventType` is absent, empty or unrecognized
pub fn conversation_update_data(activity: &Activity) -> Result<TeamEvent> {
    if !activity.is_type(&ActivityType::ConversationUpdate) {
        return Err(TeamsError::InvalidArgument(
            "activity must be a ConversationUpdate".to_string(),
        ));
    }

    let data = teams_channel_data(activity)?;

    let Some(raw) = data.event_type() else {
        debug!("Conversation update has no eventType");
        return Err(TeamsError::channel_data_unprocessable());
    };

    let kind = match raw.parse::<TeamEventType>() {
        Ok(kind) => kind,
        Err(e) => {
            warn!(event_type = raw, error = %e, "Unrecognized Teams event type");
            return Err(TeamsError::channel_data_unprocessable());
        }
    };

    let team = data.team;
    let tenant = data.tenant;
    let channel = data.channel;

    let event = match kind {
        TeamEventType::MembersAdded => TeamEvent::MembersAdded(MembersAddedEvent {
            members_added: activity.members_added.clone(),
            team,
            tenant,
        }),
        TeamEventType::MembersRemoved => TeamEvent::MembersRemoved(MembersRemovedEvent {
            members_removed: activity.members_removed.clone(),
            team,
            tenant,
        }),
        TeamEventType::ChannelCreated => TeamEvent::ChannelCreated(ChannelCreatedEvent {
            channel,
            team,
            tenant,
        }),
        TeamEventType::ChannelDeleted => TeamEvent::ChannelDeleted(ChannelDeletedEvent {
            channel,
            team,
            tenant,
        }),
        TeamEventType::ChannelRenamed => TeamEvent::ChannelRenamed(ChannelRenamedEvent {
            channel,
            team,
            tenant,
        }),
        TeamEventType::TeamRenamed => TeamEvent::TeamRenamed(TeamRenamedEvent { team, tenant }),
    };

    debug!(event_type = %kind, "Classified conversation update");
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn conversation_update(channel_data: serde_json::Value) -> Activity {
        Activity {
            channel_data: Some(channel_data),
            ..Activity::new(ActivityType::ConversationUpdate)
        }
    }

    #[test]
    fn test_event_type_round_trips_literals() {
        for kind in TeamEventType::ALL {
            assert_eq!(kind.as_str().parse::<TeamEventType>(), Ok(kind));
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                json!(kind.as_str())
            );
        }
    }

    #[test]
    fn test_event_type_is_case_sensitive() {
        assert!("ChannelCreated".parse::<TeamEventType>().is_err());
        assert!("teammemberadded".parse::<TeamEventType>().is_err());
        assert!("".parse::<TeamEventType>().is_err());
    }

    #[test]
    fn test_unknown_event_type_error() {
        let err = "teamArchived".parse::<TeamEventType>().unwrap_err();
        assert_eq!(err, UnknownEventType("teamArchived".to_string()));
        assert_eq!(err.to_string(), "unknown Teams event type: 'teamArchived'");

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_team_renamed() {
        let activity = conversation_update(json!({
            "eventType": "teamRenamed",
            "team": {"id": "team-1", "name": "New name"},
            "tenant": {"id": "tenant-1"}
        }));

        let event = conversation_update_data(&activity).unwrap();

        assert_eq!(event.event_type(), TeamEventType::TeamRenamed);
        assert_eq!(
            event.team().and_then(|t| t.name.as_deref()),
            Some("New name")
        );
        assert_eq!(event.tenant().map(|t| t.id.as_str()), Some("tenant-1"));
        assert!(event.channel().is_none());
    }

    #[test]
    fn test_members_added_without_member_list() {
        let activity = conversation_update(json!({"eventType": "teamMemberAdded"}));

        let event = conversation_update_data(&activity).unwrap();

        assert_eq!(
            event,
            TeamEvent::MembersAdded(MembersAddedEvent::default())
        );
    }

    #[test]
    fn test_rejects_wrong_activity_type() {
        let activity = Activity {
            channel_data: Some(json!({"eventType": "teamRenamed"})),
            ..Activity::new(ActivityType::Message)
        };
        let err = conversation_update_data(&activity).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "activity must be a ConversationUpdate");
    }

    #[test]
    fn test_rejects_untyped_activity() {
        let err = conversation_update_data(&Activity::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_missing_and_unknown_event_type_share_error() {
        let missing = conversation_update_data(&conversation_update(json!({}))).unwrap_err();
        let empty =
            conversation_update_data(&conversation_update(json!({"eventType": ""}))).unwrap_err();
        let unknown =
            conversation_update_data(&conversation_update(json!({"eventType": "bogus"})))
                .unwrap_err();

        for err in [&missing, &empty, &unknown] {
            assert_eq!(err.kind(), ErrorKind::Malformed);
            assert_eq!(err.to_string(), "Failed to process channel data in Activity");
        }
    }

    #[test]
    fn test_tagged_serialization() {
        let event = TeamEvent::ChannelDeleted(ChannelDeletedEvent {
            channel: Some(ChannelInfo {
                id: "c1".to_string(),
                name: None,
            }),
            team: None,
            tenant: None,
        });
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["eventType"], json!("channelDeleted"));
        assert_eq!(value["event"]["channel"]["id"], json!("c1"));
    }
}
