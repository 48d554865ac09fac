use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::GetByIdDto,
        board::{AddCardToBoardDto, BoardResponseDto, BoardsResponseDto, CreateBoardDto},
    },
    server::{
        error::AppError,
        service::board::BoardService,
        state::AppState,
        util::{deadline::with_deadline, json_body::JsonBody},
    },
};

/// GET /boards/get-all - Get every board
///
/// # Returns
/// - `200 OK`: `{boards: [BoardDto]}`
/// - `500 Internal Server Error`: Store or decode error
pub async fn get_boards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let board_service = BoardService::new(&state.db);
    let boards = with_deadline(state.request_timeout, board_service.get_all()).await?;

    let boards = boards.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(BoardsResponseDto { boards })))
}

/// POST /boards/get-by-id - Get a board by identifier
///
/// # Request Body
/// - `id`: 24 character hex board identifier
///
/// # Returns
/// - `200 OK`: `{board: BoardDto}`
/// - `400 Bad Request`: Malformed JSON (plain text) or malformed identifier
/// - `404 Not Found`: No board with this identifier
pub async fn get_board_by_id(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<GetByIdDto>,
) -> Result<impl IntoResponse, AppError> {
    let board_service = BoardService::new(&state.db);
    let board = with_deadline(state.request_timeout, board_service.get_by_id(&payload.id)).await?;

    Ok((
        StatusCode::OK,
        Json(BoardResponseDto {
            board: board.into_dto(),
        }),
    ))
}

/// POST /boards/{alias} - Get a board by alias
///
/// # Path Parameters
/// - `alias`: Exact alias, matched without normalization
///
/// # Returns
/// - `200 OK`: `{board: BoardDto}`
/// - `404 Not Found`: No board with this alias
pub async fn get_board_by_alias(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let board_service = BoardService::new(&state.db);
    let board = with_deadline(state.request_timeout, board_service.get_by_alias(&alias)).await?;

    Ok((
        StatusCode::OK,
        Json(BoardResponseDto {
            board: board.into_dto(),
        }),
    ))
}

/// POST /boards/get-all - Get the board whose alias is `get-all`
///
/// The path is shared with the GET listing route, so it never reaches the `{alias}`
/// route; boards named "Get-All" are served here instead.
///
/// # Returns
/// - `200 OK`: `{board: BoardDto}`
/// - `404 Not Found`: No board with this alias
pub async fn get_board_by_get_all_alias(
    state: State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    get_board_by_alias(state, Path("get-all".to_string())).await
}

/// POST /boards/add - Create a board
///
/// # Request Body
/// - `name`: Board name; the alias is its lowercase form
///
/// # Returns
/// - `200 OK`: `{board: BoardDto}` with an empty `cardIds`
/// - `400 Bad Request`: Malformed JSON (plain text)
pub async fn add_board(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let board_service = BoardService::new(&state.db);
    let board = with_deadline(
        state.request_timeout,
        board_service.create_board(payload.name),
    )
    .await?;

    tracing::info!("Created board {} ({})", board.id, board.alias);

    Ok((
        StatusCode::OK,
        Json(BoardResponseDto {
            board: board.into_dto(),
        }),
    ))
}

/// POST /boards/add-card-to-board - Add a card to a board's card set
///
/// Idempotent; the card is not checked for existence.
///
/// # Request Body
/// - `boardId`: Board identifier
/// - `cardId` (or `CardId`): Card identifier
///
/// # Returns
/// - `200 OK`: `{board: BoardDto}` as read after the update
/// - `400 Bad Request`: Malformed JSON (plain text) or malformed identifier
/// - `404 Not Found`: No board with this identifier
pub async fn add_card_to_board(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddCardToBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let board_service = BoardService::new(&state.db);
    let board = with_deadline(
        state.request_timeout,
        board_service.add_card(&payload.board_id, &payload.card_id),
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(BoardResponseDto {
            board: board.into_dto(),
        }),
    ))
}
