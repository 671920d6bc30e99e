//! User and chat records

use crate::schema::{FromRecord, Record, Schema};
use crate::transformers::{boolean, integer, string};
use crate::Result;
use serde::Serialize;

/// A Telegram user as described in init data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// True if the user added the bot to the attachment menu
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_to_attachment_menu: Option<bool>,
    /// True if the user allowed the bot to message them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_write_to_pm: Option<bool>,
    /// First name
    pub first_name: String,
    /// Unique identifier
    pub id: i64,
    /// True if the user is a bot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bot: Option<bool>,
    /// True if the user has Telegram Premium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    /// IETF language tag of the user's language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Profile photo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl User {
    /// Field schema of a user record
    pub fn schema() -> Result<Schema> {
        Schema::builder("User")
            .field("addedToAttachmentMenu", boolean().optional())
            .field("allowsWriteToPm", boolean().optional())
            .field("firstName", string())
            .field("id", integer())
            .field("isBot", boolean().optional())
            .field("isPremium", boolean().optional())
            .field("languageCode", string().optional())
            .field("lastName", string().optional())
            .field("photoUrl", string().optional())
            .field("username", string().optional())
            .build()
    }
}

impl FromRecord for User {
    fn from_record(mut record: Record) -> Result<Self> {
        Ok(Self {
            added_to_attachment_menu: record.take("addedToAttachmentMenu")?,
            allows_write_to_pm: record.take("allowsWriteToPm")?,
            first_name: record.take("firstName")?,
            id: record.take("id")?,
            is_bot: record.take("isBot")?,
            is_premium: record.take("isPremium")?,
            language_code: record.take("languageCode")?,
            last_name: record.take("lastName")?,
            photo_url: record.take("photoUrl")?,
            username: record.take("username")?,
        })
    }
}

/// The chat a Mini App was opened from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Unique identifier
    pub id: i64,
    /// Chat type: `group`, `supergroup`, `channel`, ...
    #[serde(rename = "type")]
    pub chat_type: String,
    /// Title
    pub title: String,
    /// Chat photo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Chat {
    /// Field schema of a chat record
    pub fn schema() -> Result<Schema> {
        Schema::builder("Chat")
            .field("id", integer())
            .field("type", string())
            .field("title", string())
            .field("photoUrl", string().optional())
            .field("username", string().optional())
            .build()
    }
}

impl FromRecord for Chat {
    fn from_record(mut record: Record) -> Result<Self> {
        Ok(Self {
            id: record.take("id")?,
            chat_type: record.take("type")?,
            title: record.take("title")?,
            photo_url: record.take("photoUrl")?,
            username: record.take("username")?,
        })
    }
}
