use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::chat::ChatMessageDto,
    server::{error::AppError, util::parse::parse_stored},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Bot,
}

impl ChatSender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

impl FromStr for ChatSender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "bot" => Ok(Self::Bot),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i32,
    pub user_id: i32,
    pub sender: ChatSender,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_entity(entity: entity::chat_message::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            sender: parse_stored("chat_message.sender", entity.sender)?,
            message: entity.message,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ChatMessageDto {
        ChatMessageDto {
            id: self.id,
            sender: self.sender.as_str().to_string(),
            message: self.message,
            created_at: self.created_at,
        }
    }
}
