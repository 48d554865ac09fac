use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    controller::{
        board::{
            add_board, add_card_to_board, get_board_by_alias, get_board_by_get_all_alias,
            get_board_by_id, get_boards,
        },
        card::{add_card, get_card_by_id, get_cards},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/boards/get-all",
            get(get_boards).post(get_board_by_get_all_alias),
        )
        .route("/boards/get-by-id", post(get_board_by_id))
        .route("/boards/add", post(add_board))
        .route("/boards/add-card-to-board", post(add_card_to_board))
        .route("/boards/{alias}", post(get_board_by_alias))
        .route("/cards/get-all", get(get_cards))
        .route("/cards/get-by-id", post(get_card_by_id))
        .route("/cards/add", post(add_card))
}

/// Builds the complete application: routes, CORS, and shared state.
pub fn app(state: AppState) -> Router {
    router().layer(cors_layer()).with_state(state)
}

/// Allows any origin; preflight requests are answered by the layer itself.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}
