//! Évaluation entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub pole: String,
    pub module: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub contexte: Option<String>,
    pub date_creation: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::evaluation_items::Entity")]
    EvaluationItems,
    #[sea_orm(has_many = "super::evaluation_attributions::Entity")]
    Attributions,
    #[sea_orm(has_many = "super::validations::Entity")]
    Validations,
}

impl Related<super::evaluation_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationItems.def()
    }
}

impl Related<super::evaluation_attributions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attributions.def()
    }
}

impl Related<super::validations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Validations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation(self) -> crate::models::evaluations::entities::Evaluation {
        use chrono::{DateTime, Utc};
        use crate::models::evaluations::entities::Evaluation;

        Evaluation {
            id: self.id,
            pole: self.pole,
            module: self.module,
            contexte: self.contexte,
            date_creation: DateTime::<Utc>::from_timestamp(self.date_creation, 0)
                .unwrap_or_default(),
        }
    }
}
