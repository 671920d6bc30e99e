//! Init data: the signed parameter set passed to a Mini App on launch

use super::user::{Chat, User};
use crate::input::Input;
use crate::schema::{FromRecord, Record, Schema};
use crate::transformers::{
    create_transformer_gen, date, integer, object, search_params, string, TransformerGen,
};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Parsed init data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitData {
    /// When the init data was created
    pub auth_date: DateTime<Utc>,
    /// Seconds after which a message can be sent via `answerWebAppQuery`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_after: Option<i64>,
    /// Chat the app was opened from (attachment menu only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<Chat>,
    /// Global identifier of the chat the app was opened from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_instance: Option<String>,
    /// Type of the chat the app was opened from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<String>,
    /// Signature of all other parameters
    pub hash: String,
    /// Session identifier for `answerWebAppQuery`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    /// Chat partner in a private chat (attachment menu only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<User>,
    /// `startattach` / `startapp` parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_param: Option<String>,
    /// Current user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl FromRecord for InitData {
    fn from_record(mut record: Record) -> Result<Self> {
        Ok(Self {
            auth_date: record.take("authDate")?,
            can_send_after: record.take("canSendAfter")?,
            chat: record.take("chat")?,
            chat_instance: record.take("chatInstance")?,
            chat_type: record.take("chatType")?,
            hash: record.take("hash")?,
            query_id: record.take("queryId")?,
            receiver: record.take("receiver")?,
            start_param: record.take("startParam")?,
            user: record.take("user")?,
        })
    }
}

/// Transformer generator for init data (`InitData`).
///
/// Input is a parameter collection; `user`, `receiver` and `chat` arrive as
/// JSON-encoded objects.
pub fn transformer() -> TransformerGen<InitData> {
    create_transformer_gen("InitData", |value| {
        let user = object::<User>(User::schema()?).optional();
        let chat = object::<Chat>(Chat::schema()?).optional();

        let schema = Schema::builder("InitData")
            .field("authDate", date())
            .field("canSendAfter", integer().optional())
            .field("chat", chat)
            .field("chatInstance", string().optional())
            .field("chatType", string().optional())
            .field("hash", string())
            .field("queryId", string().optional())
            .field("receiver", user.clone())
            .field("startParam", string().optional())
            .field("user", user)
            .build()?;

        search_params::<InitData>(schema).parse(value)
    })
}

/// Parse init data, e.g. the raw `tgWebAppData` query string.
///
/// Fails with a [`TransformError`](crate::TransformError) rooted at
/// `InitData` on invalid input.
pub fn parse(input: impl Into<Input>) -> Result<InitData> {
    transformer().parse(input)
}
