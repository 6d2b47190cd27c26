use chrono::{Duration, Utc};

use crate::server::{data::offer::OfferRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod active;
