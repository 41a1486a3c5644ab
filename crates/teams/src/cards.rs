//! Teams-specific card payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::models::Attachment;

/// Content type of a Teams list card attachment.
pub const LIST_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.teams.card.list";

/// A clickable action on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAction {
    /// Action type (`openUrl`, `imBack`, `invoke`, ...)
    #[serde(rename = "type")]
    pub action_type: String,
    /// Button text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Action parameter (URL, text, or invoke payload)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Button icon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// An image on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    /// Image URL
    pub url: String,
    /// Alternative text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Action when the image is tapped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap: Option<CardAction>,
}

/// Card representing a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCard {
    /// UPN of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upn: Option<String>,
    /// Text for the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<CardImage>>,
    /// Actions applicable to the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<CardAction>>,
    /// Action when the card is tapped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap: Option<CardAction>,
}

/// Kind of a list card row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListItemType {
    /// A file reference
    File,
    /// Generic search-result style row
    ResultItem,
    /// Section header
    Section,
    /// A person
    Person,
    /// Horizontal separator
    Separator,
}

/// One row of a [`ListCard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemBase {
    /// Item identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Row kind
    #[serde(rename = "type")]
    pub item_type: ListItemType,
    /// Title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Icon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Action when the row is tapped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap: Option<CardAction>,
}

/// A list card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCard {
    /// Title of the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ListItemBase>>,
    /// Actions applicable to the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<CardAction>>,
}

impl ListCard {
    /// Wrap this card in an activity attachment.
    ///
    /// # Errors
    ///
    /// `Serialization` if the card does not encode.
    pub fn to_attachment(&self) -> Result<Attachment> {
        Ok(Attachment {
            content_type: LIST_CARD_CONTENT_TYPE.to_string(),
            content_url: None,
            content: Some(serde_json::to_value(self)?),
            name: None,
            thumbnail_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_card_attachment() {
        let card = ListCard {
            title: Some("Files".to_string()),
            items: Some(vec![
                ListItemBase {
                    id: None,
                    item_type: ListItemType::Section,
                    title: Some("Recent".to_string()),
                    subtitle: None,
                    icon: None,
                    tap: None,
                },
                ListItemBase {
                    id: Some("f1".to_string()),
                    item_type: ListItemType::File,
                    title: Some("report.docx".to_string()),
                    subtitle: None,
                    icon: None,
                    tap: Some(CardAction {
                        action_type: "openUrl".to_string(),
                        title: None,
                        value: Some(json!("https://contoso.sharepoint.com/report.docx")),
                        image: None,
                    }),
                },
            ]),
            buttons: None,
        };

        let attachment = card.to_attachment().unwrap();

        assert_eq!(attachment.content_type, LIST_CARD_CONTENT_TYPE);
        let content = attachment.content.unwrap();
        assert_eq!(content["title"], json!("Files"));
        assert_eq!(content["items"][0]["type"], json!("section"));
        assert_eq!(content["items"][1]["type"], json!("file"));
        assert_eq!(content["items"][1]["tap"]["type"], json!("openUrl"));
    }

    #[test]
    fn test_parse_person_card() {
        let card: PersonCard = serde_json::from_value(json!({
            "upn": "megan@contoso.com",
            "text": "Product lead",
            "images": [{"url": "https://contoso.com/megan.png", "alt": "Megan"}],
            "buttons": [{"type": "imBack", "title": "Chat", "value": "chat megan"}]
        }))
        .unwrap();

        assert_eq!(card.upn.as_deref(), Some("megan@contoso.com"));
        assert_eq!(card.images.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            card.buttons.as_ref().map(|b| b[0].action_type.as_str()),
            Some("imBack")
        );
    }

    #[test]
    fn test_list_item_types() {
        let item: ListItemBase =
            serde_json::from_value(json!({"type": "resultItem", "title": "Result"})).unwrap();
        assert_eq!(item.item_type, ListItemType::ResultItem);

        assert!(serde_json::from_value::<ListItemBase>(json!({"type": "bogus"})).is_err());
    }
}
