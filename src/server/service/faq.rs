//! Frequently asked questions.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::faq::FaqRepository,
    error::AppError,
    model::{
        faq::{Faq, FaqAuthor},
        user::{Role, User},
    },
    util::validate::require_non_blank,
};

pub struct FaqService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FaqService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a question. Entries from companies and admins are marked as company answers.
    pub async fn add(&self, author: &User, question: &str, answer: &str) -> Result<Faq, AppError> {
        let question = require_non_blank("question", question)?;
        let answer = require_non_blank("answer", answer)?;
        let added_by = match author.role {
            Role::Company | Role::Admin => FaqAuthor::Company,
            Role::Customer => FaqAuthor::User,
        };

        FaqRepository::new(self.db)
            .create(question, answer, added_by)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<Faq>, AppError> {
        FaqRepository::new(self.db).get_all().await
    }
}
