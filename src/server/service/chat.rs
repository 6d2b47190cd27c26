//! Maintenance and spare-parts assistant.
//!
//! Questions are forwarded to an OpenAI-compatible chat completions endpoint. Both
//! the question and the answer are appended to the user's message log.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use crate::server::{
    data::chat::ChatRepository,
    error::AppError,
    model::chat::{ChatMessage, ChatSender},
    util::validate::require_non_blank,
};

const CHAT_MODEL: &str = "deepseek-chat";

const SYSTEM_PROMPT: &str = "You are a helpful assistant for a heavy machinery spare parts store. \
    Answer questions about equipment maintenance, troubleshooting and choosing spare parts.";

const DEFAULT_CONTEXT: &str = "Heavy machinery maintenance and spare parts";

/// Chat completions endpoint and its API key.
#[derive(Debug, Clone, Copy)]
pub struct AssistantEndpoint<'a> {
    pub url: &'a str,
    pub api_key: &'a str,
}

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    endpoint: Option<AssistantEndpoint<'a>>,
}

impl<'a> ChatService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        endpoint: Option<AssistantEndpoint<'a>>,
    ) -> Self {
        Self {
            db,
            http_client,
            endpoint,
        }
    }

    /// Asks the assistant a question on behalf of the user.
    ///
    /// # Returns
    /// - `Ok(String)` - The assistant's answer
    /// - `Err(AppError::BadRequest)` - Blank question
    /// - `Err(AppError::InternalError)` - No assistant endpoint configured
    /// - `Err(AppError::Upstream)` - The assistant failed or answered without content
    pub async fn ask(
        &self,
        user_id: i32,
        question: &str,
        context: Option<&str>,
    ) -> Result<String, AppError> {
        let question = require_non_blank("question", question)?;
        let Some(endpoint) = self.endpoint else {
            return Err(AppError::InternalError(
                "CHAT_API_URL and CHAT_API_KEY are not configured".to_string(),
            ));
        };
        let context = context
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CONTEXT);

        let repo = ChatRepository::new(self.db);
        repo.append(user_id, ChatSender::User, question.clone(), Utc::now())
            .await?;

        let response = self
            .http_client
            .post(endpoint.url)
            .bearer_auth(endpoint.api_key)
            .json(&completion_request(&question, context))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Assistant unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "Assistant returned status {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid assistant response: {}", e)))?;
        let answer = answer_from(&body)
            .ok_or_else(|| AppError::Upstream("Assistant response has no answer".to_string()))?;

        repo.append(user_id, ChatSender::Bot, answer.clone(), Utc::now())
            .await?;

        Ok(answer)
    }

    pub async fn history(&self, user_id: i32) -> Result<Vec<ChatMessage>, AppError> {
        ChatRepository::new(self.db).history(user_id).await
    }
}

fn completion_request(question: &str, context: &str) -> Value {
    json!({
        "model": CHAT_MODEL,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": format!("Context: {}\nQuestion: {}", context, question) },
        ],
        "stream": false,
    })
}

fn answer_from(body: &Value) -> Option<String> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(str::trim)
        .filter(|answer| !answer.is_empty())
        .map(String::from)
}
