//! Bot Framework activity schema.
//!
//! These are the generic envelope types exchanged between a bot and a
//! channel. Teams-specific semantics live in the sibling modules; the types
//! here only carry what the connector protocol defines.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TeamsError};

/// Entity type name used for @mentions.
pub const MENTION_ENTITY_TYPE: &str = "mention";

/// Activity type discriminator.
///
/// Parsing is case-insensitive; values outside the known set are kept
/// verbatim in [`ActivityType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    /// A user or bot message
    Message,
    /// Membership or metadata of a conversation changed
    ConversationUpdate,
    /// The bot was added to or removed from a contact list
    ContactRelationUpdate,
    /// Typing indicator
    Typing,
    /// The conversation ended
    EndOfConversation,
    /// Out-of-band event
    Event,
    /// Synchronous request expecting a response
    Invoke,
    /// Reaction added to or removed from a message
    MessageReaction,
    /// The bot was installed or uninstalled
    InstallationUpdate,
    /// User asked for their data to be deleted
    DeleteUserData,
    /// A previously sent message was edited
    MessageUpdate,
    /// A previously sent message was deleted
    MessageDelete,
    /// Private suggestion to a single recipient
    Suggestion,
    /// Diagnostic trace
    Trace,
    /// Conversation handed off to another party
    Handoff,
    /// Any value not listed above
    Other(String),
}

impl ActivityType {
    const KNOWN: [Self; 15] = [
        Self::Message,
        Self::ConversationUpdate,
        Self::ContactRelationUpdate,
        Self::Typing,
        Self::EndOfConversation,
        Self::Event,
        Self::Invoke,
        Self::MessageReaction,
        Self::InstallationUpdate,
        Self::DeleteUserData,
        Self::MessageUpdate,
        Self::MessageDelete,
        Self::Suggestion,
        Self::Trace,
        Self::Handoff,
    ];

    /// Get the wire literal for this activity type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Message => "message",
            Self::ConversationUpdate => "conversationUpdate",
            Self::ContactRelationUpdate => "contactRelationUpdate",
            Self::Typing => "typing",
            Self::EndOfConversation => "endOfConversation",
            Self::Event => "event",
            Self::Invoke => "invoke",
            Self::MessageReaction => "messageReaction",
            Self::InstallationUpdate => "installationUpdate",
            Self::DeleteUserData => "deleteUserData",
            Self::MessageUpdate => "messageUpdate",
            Self::MessageDelete => "messageDelete",
            Self::Suggestion => "suggestion",
            Self::Trace => "trace",
            Self::Handoff => "handoff",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for ActivityType {
    fn from(value: String) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(&value))
            .unwrap_or(Self::Other(value))
    }
}

impl From<ActivityType> for String {
    fn from(value: ActivityType) -> Self {
        match value {
            ActivityType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ActivityType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user or bot participating in a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAccount {
    /// Channel-specific identifier
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Azure AD object id (Teams only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aad_object_id: Option<String>,
    /// Role of the account (`user` or `bot`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Any other properties the channel sent
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl ChannelAccount {
    /// Create an account with an id and display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Copy only the id and display name of this account.
    fn identity(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            ..Self::default()
        }
    }
}

/// The conversation an activity belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAccount {
    /// Conversation identifier
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the conversation has more than two participants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_group: Option<bool>,
    /// Channel-specific conversation type (`personal`, `channel`, `groupChat`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_type: Option<String>,
    /// Tenant the conversation lives in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Any other properties the channel sent
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// Generic typed annotation attached to an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity type (e.g. `mention`, `clientInfo`)
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Entity body
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// An inline annotation linking a span of text to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// The referenced user
    pub mentioned: ChannelAccount,
    /// The literal marker inside the activity text, e.g. `<at>Alice</at>`
    pub text: String,
}

impl TryFrom<Mention> for Entity {
    type Error = serde_json::Error;

    fn try_from(mention: Mention) -> std::result::Result<Self, Self::Error> {
        let mut properties = Map::new();
        properties.insert(
            "mentioned".to_string(),
            serde_json::to_value(mention.mentioned)?,
        );
        properties.insert("text".to_string(), Value::String(mention.text));
        Ok(Self {
            entity_type: MENTION_ENTITY_TYPE.to_string(),
            properties,
        })
    }
}

impl TryFrom<&Entity> for Mention {
    type Error = TeamsError;

    fn try_from(entity: &Entity) -> Result<Self> {
        if !entity.entity_type.eq_ignore_ascii_case(MENTION_ENTITY_TYPE) {
            return Err(TeamsError::InvalidArgument(format!(
                "entity of type '{}' is not a mention",
                entity.entity_type
            )));
        }
        Ok(serde_json::from_value(Value::Object(
            entity.properties.clone(),
        ))?)
    }
}

/// File or card attached to an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// MIME type or card content type
    pub content_type: String,
    /// Download URL for file attachments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    /// Inline content (cards)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    /// File name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// The message/event envelope exchanged between a bot and a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Activity type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    /// Activity identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// UTC time the activity was sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Endpoint replies should be posted to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
    /// Channel identifier (`msteams`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Sender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ChannelAccount>,
    /// Conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,
    /// Recipient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<ChannelAccount>,
    /// Message text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Locale of the text, e.g. `en-US`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Activity this one replies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
    /// Members that joined (conversation updates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_added: Option<Vec<ChannelAccount>>,
    /// Members that left (conversation updates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_removed: Option<Vec<ChannelAccount>>,
    /// Annotations such as mentions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    /// Attachments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Opaque channel-specific payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_data: Option<Value>,
    /// Any other properties the channel sent
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl Activity {
    /// Create an empty activity of the given type.
    #[must_use]
    pub fn new(activity_type: ActivityType) -> Self {
        Self {
            activity_type: Some(activity_type),
            ..Self::default()
        }
    }

    /// Check whether this activity has the given type.
    #[must_use]
    pub fn is_type(&self, activity_type: &ActivityType) -> bool {
        self.activity_type.as_ref() == Some(activity_type)
    }

    /// Decode the opaque channel data into a typed structure.
    ///
    /// # Errors
    ///
    /// [`TeamsError::MissingData`] if the activity has no channel data,
    /// [`TeamsError::Serialization`] if the payload does not fit `T`.
    pub fn channel_data_as<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self
            .channel_data
            .as_ref()
            .ok_or_else(TeamsError::channel_data_missing)?;
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Get every mention entity of this activity, in order.
    ///
    /// Entities that claim to be mentions but do not decode are skipped.
    #[must_use]
    pub fn mentions(&self) -> Vec<Mention> {
        self.entities
            .iter()
            .flatten()
            .filter_map(|entity| Mention::try_from(entity).ok())
            .collect()
    }

    /// Create a message activity replying to this one.
    ///
    /// Sender and recipient are swapped, the conversation and routing fields
    /// are carried over and the reply points back at this activity's id.
    /// Without a `locale` the inbound locale is kept.
    #[must_use]
    pub fn create_reply(&self, text: Option<&str>, locale: Option<&str>) -> Self {
        Self {
            activity_type: Some(ActivityType::Message),
            timestamp: Some(Utc::now()),
            from: self.recipient.as_ref().map(ChannelAccount::identity),
            recipient: self.from.as_ref().map(ChannelAccount::identity),
            reply_to_id: self.id.clone(),
            service_url: self.service_url.clone(),
            channel_id: self.channel_id.clone(),
            conversation: self
                .conversation
                .as_ref()
                .map(|conversation| ConversationAccount {
                    id: conversation.id.clone(),
                    name: conversation.name.clone(),
                    is_group: conversation.is_group,
                    ..ConversationAccount::default()
                }),
            text: Some(text.unwrap_or_default().to_string()),
            locale: locale.map(str::to_string).or_else(|| self.locale.clone()),
            entities: Some(Vec::new()),
            attachments: Some(Vec::new()),
            ..Self::default()
        }
    }
}
