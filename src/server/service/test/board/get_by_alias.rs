use super::*;

/// Tests that lookup by alias and by identifier return the same board.
///
/// Expected: Ok with equal boards
#[tokio::test]
async fn matches_lookup_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BoardService::new(db);
    let board = service.create_board("Sprint One".to_string()).await?;
    let card = factory::create_card(db).await?;
    service.add_card(&board.id.to_hex(), &card.id).await?;

    let by_alias = service.get_by_alias("sprint one").await?;
    let by_id = service.get_by_id(&board.id.to_hex()).await?;

    assert_eq!(by_alias, by_id);
    assert_eq!(by_alias.card_ids.len(), 1);

    Ok(())
}

/// Tests that the display name is not accepted as an alias.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn does_not_match_display_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BoardService::new(db);
    service.create_board("Sprint One".to_string()).await?;

    let result = service.get_by_alias("Sprint One").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
