use crate::server::{error::AppError, service::card::CardService};
use chrono::Utc;
use test_utils::builder::TestBuilder;

mod create;
