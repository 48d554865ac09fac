use crate::server::{
    data::card::CardRepository,
    error::AppError,
    model::{card::CreateCardParams, object_id::ObjectId},
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_by_id;
