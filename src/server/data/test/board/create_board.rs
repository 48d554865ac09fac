use super::*;

/// Tests creating a board without cards.
///
/// Verifies that the repository assigns a fresh identifier and stores every field.
///
/// Expected: Ok with board stored and empty card set
#[tokio::test]
async fn creates_board_with_assigned_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now();
    let repo = BoardRepository::new(db);
    let board = repo
        .create_board(CreateBoardParams {
            name: "Sprint One".to_string(),
            alias: "sprint one".to_string(),
            created_at,
        })
        .await?;

    assert_eq!(board.name, "Sprint One");
    assert_eq!(board.alias, "sprint one");
    assert!(board.card_ids.is_empty());
    assert!((board.created_at - created_at).num_milliseconds().abs() < 1);

    let stored = entity::prelude::Board::find_by_id(board.id.to_hex())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that two boards never receive the same identifier.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let params = CreateBoardParams {
        name: "Same".to_string(),
        alias: "same".to_string(),
        created_at: Utc::now(),
    };
    let first = repo.create_board(params.clone()).await?;
    let second = repo.create_board(params).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
