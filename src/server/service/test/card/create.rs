use super::*;

/// Tests creating a card and reading it back.
///
/// Verifies that the stored fields match the input and that the creation time comes
/// from the server clock at the moment of the call.
///
/// Expected: Ok(Card) equal to the fetched card
#[tokio::test]
async fn creates_card_with_server_timestamp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let service = CardService::new(db);
    let card = service
        .create("Fix bug".to_string(), "desc".to_string(), "todo".to_string())
        .await?;

    let fetched = service.get_by_id(&card.id.to_hex()).await?;

    assert_eq!(fetched.title, "Fix bug");
    assert_eq!(fetched.description, "desc");
    assert_eq!(fetched.section, "todo");
    assert!(card.created_at >= before - chrono::Duration::milliseconds(1));
    assert!((fetched.created_at - card.created_at).num_milliseconds().abs() < 1);

    Ok(())
}

/// Tests that created cards are listed.
///
/// Expected: Ok with both cards listed
#[tokio::test]
async fn lists_created_cards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CardService::new(db);
    let first = service
        .create("One".to_string(), String::new(), "todo".to_string())
        .await?;
    let second = service
        .create("Two".to_string(), String::new(), "done".to_string())
        .await?;

    let cards = service.get_all().await?;

    assert_eq!(cards.len(), 2);
    assert!(cards.iter().any(|c| c.id == first.id));
    assert!(cards.iter().any(|c| c.id == second.id));

    Ok(())
}
