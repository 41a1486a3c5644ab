//! Teams channel data.
//!
//! Teams attaches a `channelData` object to every activity it sends. Only the
//! fields this crate reads are modelled; anything else is ignored on input.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Activity;

/// Describes a team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    /// Team identifier
    #[serde(default)]
    pub id: String,
    /// Team name (present on rename events)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Describes a tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantInfo {
    /// Tenant identifier
    #[serde(default)]
    pub id: String,
}

/// Describes a channel inside a team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    /// Channel identifier
    #[serde(default)]
    pub id: String,
    /// Channel name (present on create and rename events)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Parsed Teams `channelData` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsChannelData {
    /// Conversation update discriminator, see [`crate::events::TeamEventType`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Team the activity was sent in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamInfo>,
    /// Tenant owning the team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<TenantInfo>,
    /// Channel the activity was sent in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelInfo>,
}

impl TeamsChannelData {
    /// Get the event type when it is present and non-empty.
    #[must_use]
    pub fn event_type(&self) -> Option<&str> {
        self.event_type.as_deref().filter(|s| !s.is_empty())
    }

    /// Get the tenant id when it is present and non-empty.
    #[must_use]
    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant
            .as_ref()
            .map(|tenant| tenant.id.as_str())
            .filter(|id| !id.is_empty())
    }
}

/// Parse the Teams channel data of an activity.
///
/// # Errors
///
/// `MissingData` when the activity has no channel data, `Serialization` when
/// the payload is not a Teams channel data object.
pub fn teams_channel_data(activity: &Activity) -> Result<TeamsChannelData> {
    activity.channel_data_as()
}
