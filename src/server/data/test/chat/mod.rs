use chrono::{Duration, Utc};

use crate::server::{data::chat::ChatRepository, error::AppError, model::chat::ChatSender};
use test_utils::{builder::TestBuilder, factory};

mod history;
