//! Validation entity: one mastery level per (élève, évaluation, item).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "validations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub utilisateur_id: i64,
    pub evaluation_id: i64,
    pub item_id: i64,
    pub niveau_validation: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub commentaire: Option<String>,
    pub validateur: Option<String>,
    pub date_validation: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utilisateurs::Entity",
        from = "Column::UtilisateurId",
        to = "super::utilisateurs::Column::Id"
    )]
    Utilisateur,
    #[sea_orm(
        belongs_to = "super::evaluations::Entity",
        from = "Column::EvaluationId",
        to = "super::evaluations::Column::Id"
    )]
    Evaluation,
    #[sea_orm(
        belongs_to = "super::items::Entity",
        from = "Column::ItemId",
        to = "super::items::Column::Id"
    )]
    Item,
}

impl Related<super::utilisateurs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utilisateur.def()
    }
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl Related<super::items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_validation(self) -> crate::models::validations::entities::Validation {
        use chrono::{DateTime, Utc};
        use crate::models::validations::entities::Validation;

        Validation {
            id: self.id,
            utilisateur_id: self.utilisateur_id,
            evaluation_id: self.evaluation_id,
            item_id: self.item_id,
            niveau_validation: self.niveau_validation,
            commentaire: self.commentaire,
            validateur: self.validateur,
            date_validation: DateTime::<Utc>::from_timestamp(self.date_validation, 0)
                .unwrap_or_default(),
        }
    }
}
