use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flashcard")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub set_id: Uuid,
    pub position: i32,
    pub question: String,
    pub answer: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flashcard_set::Entity",
        from = "Column::SetId",
        to = "super::flashcard_set::Column::Id"
    )]
    FlashcardSet,
}

impl Related<super::flashcard_set::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlashcardSet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
