//! Tenant and general channel lookups over Teams channel data.

use tracing::debug;

use crate::channel_data::{teams_channel_data, ChannelInfo, TeamsChannelData};
use crate::error::{Result, TeamsError};
use crate::models::Activity;

/// Get the general (default) channel of the team the activity came from.
///
/// Teams gives a team's general channel the same id as the team itself.
///
/// # Errors
///
/// `MissingData` if the activity has no channel data, `Malformed` if the
/// channel data has no team.
pub fn general_channel(activity: &Activity) -> Result<ChannelInfo> {
    let data = teams_channel_data(activity)?;
    general_channel_of(&data)
}

fn general_channel_of(data: &TeamsChannelData) -> Result<ChannelInfo> {
    let team = data.team.as_ref().ok_or_else(|| {
        TeamsError::Malformed(
            "Failed to process channel data in Activity. ChannelData is missing Team property."
                .to_string(),
        )
    })?;

    Ok(ChannelInfo {
        id: team.id.clone(),
        name: None,
    })
}

/// Get the id of the tenant the sender belongs to.
///
/// # Errors
///
/// `MissingData` if the activity has no channel data, `Malformed` if the
/// tenant id is absent or empty.
pub fn tenant_id(activity: &Activity) -> Result<String> {
    let data = teams_channel_data(activity)?;
    data.tenant_id()
        .map(str::to_string)
        .ok_or_else(TeamsError::channel_data_unprocessable)
}

/// Create a reply addressed to the general channel of the activity's team.
///
/// The reply's channel data holds the general channel plus the inbound team
/// and tenant.
///
/// # Errors
///
/// Whatever [`general_channel`] or decoding the inbound channel data returns.
pub fn create_reply_to_general_channel(
    activity: &Activity,
    text: Option<&str>,
    locale: Option<&str>,
) -> Result<Activity> {
    let data = teams_channel_data(activity)?;
    let channel = general_channel_of(&data)?;

    let reply_data = TeamsChannelData {
        event_type: None,
        channel: Some(channel),
        team: data.team,
        tenant: data.tenant,
    };

    let mut reply = activity.create_reply(text, locale);
    reply.channel_data = Some(serde_json::to_value(&reply_data)?);

    debug!(reply_to = ?activity.id, "Created reply to general channel");
    Ok(reply)
}
