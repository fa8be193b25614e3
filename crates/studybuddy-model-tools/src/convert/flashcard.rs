use sea_orm::ActiveValue::{NotSet, Set};
use studybuddy_entity::flashcard::flashcard::{ActiveModel as FlashcardActiveModel, Model as FlashcardModel};
use studybuddy_entity::flashcard::flashcard_set::Model as FlashcardSetModel;
use studybuddy_model::flashcard::{FlashcardItem, FlashcardSet};

use crate::convert::{FromDbModel, FromModel};

impl FromDbModel<FlashcardModel> for FlashcardItem {
    fn from_db_model(model: FlashcardModel) -> Self {
        Self {
            question: model.question,
            answer: model.answer,
        }
    }
}

impl FromModel<FlashcardItem> for FlashcardActiveModel {
    fn from_model(card: FlashcardItem) -> Self {
        Self {
            id: NotSet,
            set_id: NotSet,
            position: NotSet,
            question: Set(card.question),
            answer: Set(card.answer),
        }
    }
}

impl FromDbModel<(FlashcardSetModel, Vec<FlashcardModel>)> for FlashcardSet {
    fn from_db_model((set, cards): (FlashcardSetModel, Vec<FlashcardModel>)) -> Self {
        Self {
            id: set.id,
            owner_id: set.owner_id,
            title: set.title,
            description: set.description,
            cards: cards.into_iter().map(FlashcardItem::from_db_model).collect(),
            provenance: FromDbModel::from_db_model(set.provenance),
            created_at: set.created_at,
        }
    }
}
