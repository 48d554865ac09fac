use crate::server::{error::AppError, model::object_id::ObjectId, service::board::BoardService};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_card;
mod get_by_alias;
