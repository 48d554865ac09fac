use super::*;

/// Tests getting boards from an empty store.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_boards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boards = BoardRepository::new(db).get_all().await?;

    assert!(boards.is_empty());

    Ok(())
}

/// Tests that every board comes back with its own card set, oldest board first.
///
/// Expected: Ok with two boards and their respective memberships
#[tokio::test]
async fn returns_boards_with_their_cards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::board::BoardFactory::new(db)
        .name("Older")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let newer = factory::board::BoardFactory::new(db)
        .name("Newer")
        .created_at(now)
        .build()
        .await?;
    let card_a = factory::create_card(db).await?;
    let card_b = factory::create_card(db).await?;
    factory::add_card_to_board(db, &older.id, &card_a.id).await?;
    factory::add_card_to_board(db, &older.id, &card_b.id).await?;
    factory::add_card_to_board(db, &newer.id, &card_b.id).await?;

    let boards = BoardRepository::new(db).get_all().await?;

    assert_eq!(boards.len(), 2);
    assert_eq!(boards[0].id.to_hex(), older.id);
    assert_eq!(boards[0].card_ids.len(), 2);
    assert_eq!(boards[1].id.to_hex(), newer.id);
    assert_eq!(
        boards[1].card_ids,
        vec![ObjectId::parse_str(&card_b.id).unwrap()]
    );

    Ok(())
}

/// Tests that a stored row with a corrupt identifier is reported as a decode error.
///
/// Expected: Err(AppError::DecodeError)
#[tokio::test]
async fn fails_with_decode_error_for_corrupt_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;
    factory::add_card_to_board(db, &board.id, "not-a-hex-id").await?;

    let result = BoardRepository::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::DecodeError(_))));

    Ok(())
}

/// Tests listing more boards than SQLite accepts bound parameters in one statement.
///
/// Seeds 40,000 boards in a single `INSERT ... SELECT` over a recursive CTE, with one
/// card attached to the last of them.
///
/// Expected: Ok with every board and its memberships
#[tokio::test]
async fn returns_boards_beyond_sqlite_parameter_limit() -> Result<(), AppError> {
    use sea_orm::ConnectionTrait;

    const BOARD_COUNT: usize = 40_000;

    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(&format!(
        "WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < {BOARD_COUNT}) \
         INSERT INTO board (id, name, alias, created_at) \
         SELECT printf('ff%022x', n), 'Bulk', 'bulk', '2026-01-05T12:30:00+00:00' FROM seq"
    ))
    .await?;
    let last_board_id = format!("ff{:022x}", BOARD_COUNT);
    let card = factory::create_card(db).await?;
    factory::add_card_to_board(db, &last_board_id, &card.id).await?;

    let boards = BoardRepository::new(db).get_all().await?;

    assert_eq!(boards.len(), BOARD_COUNT);
    let last = boards
        .iter()
        .find(|b| b.id.to_hex() == last_board_id)
        .unwrap();
    assert_eq!(last.card_ids, vec![ObjectId::parse_str(&card.id).unwrap()]);

    Ok(())
}
