//! Microsoft Teams extensions for Bot Framework activities.
//!
//! This crate layers Teams semantics on top of the generic activity envelope:
//!
//! - @mention composition ([`add_mention_to_text`])
//! - classification of `conversationUpdate` events ([`conversation_update_data`])
//! - tenant and general channel lookups ([`tenant_id`], [`general_channel`],
//!   [`create_reply_to_general_channel`])
//! - Teams member accounts and card payloads
//!
//! # Usage
//!
//! ```
//! use teams::{Activity, TeamEvent, TeamsActivityExt};
//!
//! let activity: Activity = serde_json::from_str(r#"{
//!     "type": "conversationUpdate",
//!     "membersAdded": [{"id": "29:new-member"}],
//!     "channelData": {
//!         "eventType": "teamMemberAdded",
//!         "team": {"id": "19:team@thread.skype"},
//!         "tenant": {"id": "tenant-1"}
//!     }
//! }"#).unwrap();
//!
//! match activity.conversation_update_data().unwrap() {
//!     TeamEvent::MembersAdded(event) => {
//!         assert_eq!(event.members_added.unwrap()[0].id, "29:new-member");
//!     }
//!     other => panic!("unexpected event {other:?}"),
//! }
//! assert_eq!(activity.tenant_id().unwrap(), "tenant-1");
//! ```
//!
//! Everything is a synchronous, in-memory transformation: no I/O, no shared
//! state. The only mutating operation, [`add_mention_to_text`], takes the
//! activity by `&mut` and hands the same reference back.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod account;
pub mod cards;
pub mod channel_data;
pub mod error;
pub mod events;
pub mod ext;
pub mod mention;
pub mod metadata;
pub mod models;

pub use account::TeamsChannelAccount;
pub use cards::{CardAction, CardImage, ListCard, ListItemBase, ListItemType, PersonCard};
pub use channel_data::{teams_channel_data, ChannelInfo, TeamInfo, TeamsChannelData, TenantInfo};
pub use error::{ErrorKind, Result, TeamsError};
pub use events::{
    conversation_update_data, ChannelCreatedEvent, ChannelDeletedEvent, ChannelRenamedEvent,
    MembersAddedEvent, MembersRemovedEvent, TeamEvent, TeamEventType, TeamRenamedEvent,
    UnknownEventType,
};
pub use ext::TeamsActivityExt;
pub use mention::{add_mention_to_text, mention_marker, MentionTextLocation};
pub use metadata::{create_reply_to_general_channel, general_channel, tenant_id};
pub use models::{
    Activity, ActivityType, Attachment, ChannelAccount, ConversationAccount, Entity, Mention,
};
