use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::GetByIdDto,
        card::{CardResponseDto, CardsResponseDto, CreateCardDto},
    },
    server::{
        error::AppError,
        service::card::CardService,
        state::AppState,
        util::{deadline::with_deadline, json_body::JsonBody},
    },
};

/// GET /cards/get-all - Get every card
///
/// # Returns
/// - `200 OK`: `{cards: [CardDto]}`
/// - `500 Internal Server Error`: Store or decode error
pub async fn get_cards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let card_service = CardService::new(&state.db);
    let cards = with_deadline(state.request_timeout, card_service.get_all()).await?;

    let cards = cards.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(CardsResponseDto { cards })))
}

/// POST /cards/get-by-id - Get a card by identifier
///
/// # Returns
/// - `200 OK`: `{card: CardDto}`
/// - `400 Bad Request`: Malformed JSON (plain text) or malformed identifier
/// - `404 Not Found`: No card with this identifier
pub async fn get_card_by_id(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<GetByIdDto>,
) -> Result<impl IntoResponse, AppError> {
    let card_service = CardService::new(&state.db);
    let card = with_deadline(state.request_timeout, card_service.get_by_id(&payload.id)).await?;

    Ok((
        StatusCode::OK,
        Json(CardResponseDto {
            card: card.into_dto(),
        }),
    ))
}

/// POST /cards/add - Create a card
///
/// # Request Body
/// - `title`, `description`, `section`: Card fields; the creation time is set by the
///   server
///
/// # Returns
/// - `200 OK`: `{card: CardDto}`
/// - `400 Bad Request`: Malformed JSON (plain text)
pub async fn add_card(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let card_service = CardService::new(&state.db);
    let card = with_deadline(
        state.request_timeout,
        card_service.create(payload.title, payload.description, payload.section),
    )
    .await?;

    tracing::info!("Created card {} in section {}", card.id, card.section);

    Ok((
        StatusCode::OK,
        Json(CardResponseDto {
            card: card.into_dto(),
        }),
    ))
}
