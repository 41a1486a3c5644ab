//! Teams-enriched member accounts.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::ChannelAccount;

/// A team member as returned by the Teams roster API, or upgraded from a
/// plain [`ChannelAccount`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsChannelAccount {
    /// Channel-specific identifier
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// Surname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// User principal name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
    /// Azure AD object id; activities send it as `aadObjectId`
    #[serde(default, alias = "aadObjectId", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

impl ChannelAccount {
    /// Reinterpret this account with the Teams member fields.
    ///
    /// Fields the channel sent beyond the generic schema (email, UPN, ...)
    /// are picked up from the account's extra properties.
    ///
    /// # Errors
    ///
    /// `Serialization` if the account does not re-encode as a Teams account.
    pub fn as_teams_channel_account(&self) -> Result<TeamsChannelAccount> {
        let mut value = serde_json::to_value(self)?;
        // both spellings may be present; aadObjectId wins
        if let (Some(object), Some(_)) = (value.as_object_mut(), &self.aad_object_id) {
            object.remove("objectId");
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_channel_account_with_aad_id() {
        let account: ChannelAccount = serde_json::from_value(json!({
            "id": "29:1GcS4EyB",
            "name": "Megan Bowen",
            "aadObjectId": "a1b2c3"
        }))
        .unwrap();

        let teams = account.as_teams_channel_account().unwrap();

        assert_eq!(teams.id, "29:1GcS4EyB");
        assert_eq!(teams.name.as_deref(), Some("Megan Bowen"));
        assert_eq!(teams.object_id.as_deref(), Some("a1b2c3"));
    }

    #[test]
    fn test_extra_properties_are_carried() {
        let account: ChannelAccount = serde_json::from_value(json!({
            "id": "29:1",
            "name": "Megan Bowen",
            "objectId": "obj-1",
            "email": "megan@contoso.com",
            "userPrincipalName": "megan@contoso.com",
            "givenName": "Megan",
            "surname": "Bowen"
        }))
        .unwrap();

        let teams = account.as_teams_channel_account().unwrap();

        assert_eq!(teams.object_id.as_deref(), Some("obj-1"));
        assert_eq!(teams.email.as_deref(), Some("megan@contoso.com"));
        assert_eq!(teams.given_name.as_deref(), Some("Megan"));
        assert_eq!(teams.surname.as_deref(), Some("Bowen"));
    }

    #[test]
    fn test_plain_account_has_no_object_id() {
        let teams = ChannelAccount::new("28:bot", "Bot")
            .as_teams_channel_account()
            .unwrap();
        assert!(teams.object_id.is_none());
    }

    #[test]
    fn test_serializes_object_id() {
        let teams = TeamsChannelAccount {
            id: "29:1".to_string(),
            object_id: Some("obj-1".to_string()),
            ..TeamsChannelAccount::default()
        };
        assert_eq!(
            serde_json::to_value(&teams).unwrap(),
            json!({"id": "29:1", "objectId": "obj-1"})
        );
    }
}
