//! @mention composition.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TeamsError};
use crate::models::{Activity, ChannelAccount, Entity, Mention};

/// Where the mention marker is placed relative to the existing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MentionTextLocation {
    /// `<at>name</at> text`
    #[default]
    PrependText,
    /// `text <at>name</at>`
    AppendText,
}

/// Build the marker Teams renders as a mention, e.g. `<at>Alice</at>`.
#[must_use]
pub fn mention_marker(display_text: &str) -> String {
    format!("<at>{display_text}</at>")
}

/// Insert an @mention of `mentioned` into the activity text and record the
/// matching `mention` entity.
///
/// The marker shows `mention_text` when given (even if empty), the user's
/// display name otherwise. The activity is modified in place; the returned
/// reference is the one passed in.
///
/// # Errors
///
/// `InvalidArgument` if the user has no id, or if both the display name and
/// `mention_text` are empty.
pub fn add_mention_to_text<'a>(
    activity: &'a mut Activity,
    mentioned: &ChannelAccount,
    location: MentionTextLocation,
    mention_text: Option<&str>,
) -> Result<&'a mut Activity> {
    if mentioned.id.is_empty() {
        return Err(TeamsError::InvalidArgument(
            "Mentioned user and user ID cannot be null".to_string(),
        ));
    }

    let name = mentioned.name.as_deref().unwrap_or_default();
    if name.is_empty() && mention_text.unwrap_or_default().is_empty() {
        return Err(TeamsError::InvalidArgument(
            "Either mentioned user name or mentionText must have a value".to_string(),
        ));
    }

    let marker = mention_marker(mention_text.unwrap_or(name));
    let original = activity.text.as_deref().unwrap_or_default();
    let text = match location {
        MentionTextLocation::AppendText => format!("{original} {marker}"),
        MentionTextLocation::PrependText => format!("{marker} {original}"),
    };

    let entity = Entity::try_from(Mention {
        mentioned: mentioned.clone(),
        text: marker,
    })?;

    activity.text = Some(text);
    activity.entities.get_or_insert_with(Vec::new).push(entity);

    debug!(mentioned_id = %mentioned.id, location = ?location, "Added mention to activity");
    Ok(activity)
}
