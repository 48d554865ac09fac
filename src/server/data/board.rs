//! Board data repository for database operations.
//!
//! Provides the `BoardRepository` for inserting, querying, and updating boards. A board's
//! card set lives in the `board_card` table; every read reassembles it, and every write
//! that touches it runs in a transaction scoped to that one board.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::{
        board::{Board, BoardUpdate, CreateBoardParams},
        object_id::ObjectId,
    },
};

/// Repository providing database operations for boards and their card sets.
pub struct BoardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardRepository<'a> {
    /// Creates a new BoardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BoardRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored board with its card set, oldest first.
    ///
    /// Memberships for all boards are fetched in one query and grouped per board.
    ///
    /// # Returns
    /// - `Ok(Vec<Board>)` - All boards (empty if none exist)
    /// - `Err(AppError::StoreUnavailable)` - Database error during query
    /// - `Err(AppError::DecodeError)` - A stored row could not be converted
    pub async fn get_all(&self) -> Result<Vec<Board>, AppError> {
        let boards = entity::prelude::Board::find()
            .order_by_asc(entity::board::Column::CreatedAt)
            .order_by_asc(entity::board::Column::Id)
            .all(self.db)
            .await
            .inspect_err(|e| tracing::error!("Error finding boards: {}", e))?;

        // No `IN` filter: SQLite caps a statement at 32766 bound parameters.
        let mut memberships: HashMap<String, Vec<entity::board_card::Model>> = HashMap::new();
        for membership in entity::prelude::BoardCard::find()
            .all(self.db)
            .await
            .inspect_err(|e| tracing::error!("Error finding board memberships: {}", e))?
        {
            memberships
                .entry(membership.board_id.clone())
                .or_default()
                .push(membership);
        }

        boards
            .into_iter()
            .map(|board| {
                let cards = memberships.remove(&board.id).unwrap_or_default();
                Board::from_entity(board, cards)
            })
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| tracing::error!("Error decoding boards: {}", e))
    }

    /// Gets a board by its hex identifier.
    ///
    /// # Arguments
    /// - `id` - Board identifier as supplied by the client
    ///
    /// # Returns
    /// - `Ok(Board)` - The matching board with its card set
    /// - `Err(AppError::InvalidIdentifier)` - `id` is not a valid identifier; the store
    ///   is not queried
    /// - `Err(AppError::NotFound)` - No board has this identifier
    /// - `Err(AppError::StoreUnavailable)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<Board, AppError> {
        let object_id = ObjectId::parse_str(id)
            .inspect_err(|e| tracing::debug!("Invalid board id: {}", e))?;

        self.find_by_object_id(self.db, object_id)
            .await?
            .ok_or_else(|| board_not_found(object_id))
    }

    /// Gets a board by exact alias match.
    ///
    /// No normalization is applied to `alias`. Aliases are not unique; when several
    /// boards share one, which of them is returned is unspecified.
    ///
    /// # Returns
    /// - `Ok(Board)` - A board with this alias
    /// - `Err(AppError::NotFound)` - No board has this alias
    /// - `Err(AppError::StoreUnavailable)` - Database error during query
    pub async fn get_by_alias(&self, alias: &str) -> Result<Board, AppError> {
        let entity = entity::prelude::Board::find()
            .filter(entity::board::Column::Alias.eq(alias))
            .one(self.db)
            .await?
            .ok_or_else(|| {
                tracing::debug!("No board with alias {}", alias);
                AppError::NotFound(format!("Board with alias {} not found", alias))
            })?;

        let memberships = self.memberships(self.db, &entity.id).await?;
        Board::from_entity(entity, memberships)
    }

    /// Inserts a new board with an empty card set under a freshly assigned identifier.
    ///
    /// # Arguments
    /// - `params` - Board fields including the derived alias and creation time
    ///
    /// # Returns
    /// - `Ok(Board)` - The stored board including its identifier
    /// - `Err(AppError::StoreUnavailable)` - Database error during insert
    pub async fn create_board(&self, params: CreateBoardParams) -> Result<Board, AppError> {
        let entity = entity::board::ActiveModel {
            id: ActiveValue::Set(ObjectId::new().to_hex()),
            name: ActiveValue::Set(params.name),
            alias: ActiveValue::Set(params.alias),
            created_at: ActiveValue::Set(params.created_at),
        }
        .insert(self.db)
        .await
        .inspect_err(|e| tracing::error!("Error inserting board: {}", e))?;

        Board::from_entity(entity, Vec::new())
    }

    /// Applies an atomic partial update to a board, then re-reads it.
    ///
    /// The existence check and the write share one transaction, so concurrent updates of
    /// the same board cannot interleave with it. The re-read is a separate step: another
    /// writer may change or delete the board in between, and the returned state would
    /// then reflect that writer.
    ///
    /// # Arguments
    /// - `id` - Identifier of the board to update
    /// - `update` - The change to apply
    ///
    /// # Returns
    /// - `Ok(Board)` - The board as read after the update
    /// - `Err(AppError::NotFound)` - The board is missing at the update or the re-read
    /// - `Err(AppError::StoreUnavailable)` - Database error during update or query
    pub async fn update_board(&self, id: ObjectId, update: BoardUpdate) -> Result<Board, AppError> {
        let txn = self.db.begin().await?;

        let exists = entity::prelude::Board::find_by_id(id.to_hex())
            .one(&txn)
            .await?
            .is_some();
        if !exists {
            tracing::debug!("No board with ID {} to update", id);
            return Err(board_not_found(id));
        }

        match update {
            BoardUpdate::AddCardId(card_id) => {
                Self::add_membership(&txn, &id.to_hex(), card_id).await?;
            }
        }

        txn.commit().await?;

        self.find_by_object_id(self.db, id)
            .await?
            .ok_or_else(|| board_not_found(id))
    }

    /// Set-union insert of a card into a board's card set; existing pairs are left as is.
    async fn add_membership<C: ConnectionTrait>(
        conn: &C,
        board_id: &str,
        card_id: ObjectId,
    ) -> Result<(), AppError> {
        entity::prelude::BoardCard::insert(entity::board_card::ActiveModel {
            board_id: ActiveValue::Set(board_id.to_string()),
            card_id: ActiveValue::Set(card_id.to_hex()),
        })
        .on_conflict_do_nothing()
        .exec(conn)
        .await
        .inspect_err(|e| tracing::error!("Error adding card {} to board {}: {}", card_id, board_id, e))?;

        Ok(())
    }

    async fn find_by_object_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: ObjectId,
    ) -> Result<Option<Board>, AppError> {
        let Some(entity) = entity::prelude::Board::find_by_id(id.to_hex())
            .one(conn)
            .await?
        else {
            return Ok(None);
        };

        let memberships = self.memberships(conn, &entity.id).await?;
        Board::from_entity(entity, memberships).map(Some)
    }

    async fn memberships<C: ConnectionTrait>(
        &self,
        conn: &C,
        board_id: &str,
    ) -> Result<Vec<entity::board_card::Model>, AppError> {
        let memberships = entity::prelude::BoardCard::find()
            .filter(entity::board_card::Column::BoardId.eq(board_id))
            .all(conn)
            .await?;

        Ok(memberships)
    }
}

fn board_not_found(id: ObjectId) -> AppError {
    AppError::NotFound(format!("Board with id {} not found", id))
}
