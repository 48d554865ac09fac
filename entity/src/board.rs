use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(indexed)]
    pub alias: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::board_card::Entity")]
    BoardCard,
}

impl Related<super::board_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardCard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
