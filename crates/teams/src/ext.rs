//! Method-style access to the Teams helpers.

use crate::channel_data::{self, ChannelInfo, TeamsChannelData};
use crate::error::Result;
use crate::events::{self, TeamEvent};
use crate::mention::{self, MentionTextLocation};
use crate::metadata;
use crate::models::{Activity, ChannelAccount};

/// Teams helpers as methods on [`Activity`].
///
/// Each method delegates to the free function of the same name.
pub trait TeamsActivityExt {
    /// See [`mention::add_mention_to_text`].
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on a missing user id or missing mention text.
    fn add_mention_to_text(
        &mut self,
        mentioned: &ChannelAccount,
        location: MentionTextLocation,
        mention_text: Option<&str>,
    ) -> Result<&mut Self>;

    /// See [`events::conversation_update_data`].
    ///
    /// # Errors
    ///
    /// See the free function.
    fn conversation_update_data(&self) -> Result<TeamEvent>;

    /// See [`channel_data::teams_channel_data`].
    ///
    /// # Errors
    ///
    /// See the free function.
    fn teams_channel_data(&self) -> Result<TeamsChannelData>;

    /// See [`metadata::general_channel`].
    ///
    /// # Errors
    ///
    /// See the free function.
    fn general_channel(&self) -> Result<ChannelInfo>;

    /// See [`metadata::tenant_id`].
    ///
    /// # Errors
    ///
    /// See the free function.
    fn tenant_id(&self) -> Result<String>;

    /// See [`metadata::create_reply_to_general_channel`].
    ///
    /// # Errors
    ///
    /// See the free function.
    fn create_reply_to_general_channel(
        &self,
        text: Option<&str>,
        locale: Option<&str>,
    ) -> Result<Activity>;
}

impl TeamsActivityExt for Activity {
    fn add_mention_to_text(
        &mut self,
        mentioned: &ChannelAccount,
        location: MentionTextLocation,
        mention_text: Option<&str>,
    ) -> Result<&mut Self> {
        mention::add_mention_to_text(self, mentioned, location, mention_text)
    }

    fn conversation_update_data(&self) -> Result<TeamEvent> {
        events::conversation_update_data(self)
    }

    fn teams_channel_data(&self) -> Result<TeamsChannelData> {
        channel_data::teams_channel_data(self)
    }

    fn general_channel(&self) -> Result<ChannelInfo> {
        metadata::general_channel(self)
    }

    fn tenant_id(&self) -> Result<String> {
        metadata::tenant_id(self)
    }

    fn create_reply_to_general_channel(
        &self,
        text: Option<&str>,
        locale: Option<&str>,
    ) -> Result<Activity> {
        metadata::create_reply_to_general_channel(self, text, locale)
    }
}
