use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::faq::FaqDto,
    server::{error::AppError, util::parse::parse_stored},
};

/// Who contributed a FAQ entry. Admins and companies answer as the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqAuthor {
    User,
    Company,
}

impl FaqAuthor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Company => "company",
        }
    }
}

impl FromStr for FaqAuthor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "company" => Ok(Self::Company),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub added_by: FaqAuthor,
    pub created_at: DateTime<Utc>,
}

impl Faq {
    pub fn from_entity(entity: entity::faq::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            question: entity.question,
            answer: entity.answer,
            added_by: parse_stored("faq.added_by", entity.added_by)?,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> FaqDto {
        FaqDto {
            id: self.id,
            question: self.question,
            answer: self.answer,
            added_by: self.added_by.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}
