//! Item entity (assessable sub-skill of a compétence).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub competence_id: i64,
    pub code_item: String,
    pub sous_item: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::competences::Entity",
        from = "Column::CompetenceId",
        to = "super::competences::Column::Id"
    )]
    Competence,
    #[sea_orm(has_many = "super::evaluation_items::Entity")]
    EvaluationItems,
    #[sea_orm(has_many = "super::validations::Entity")]
    Validations,
}

impl Related<super::competences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Competence.def()
    }
}

impl Related<super::evaluation_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationItems.def()
    }
}

impl Related<super::validations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Validations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
