use sea_orm::entity::prelude::*;

/// Membership of a card in a board's card set.
///
/// The composite primary key keeps each `(board_id, card_id)` pair unique. `card_id`
/// has no foreign key: a board may reference a card that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board_card")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub board_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub card_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::board::Entity",
        from = "Column::BoardId",
        to = "super::board::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Board,
}

impl Related<super::board::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Board.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
