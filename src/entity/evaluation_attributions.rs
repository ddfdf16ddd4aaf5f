//! Attribution entity: links an évaluation to a whole class or one élève.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluation_attributions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub evaluation_id: i64,
    pub classe: Option<String>,
    pub utilisateur_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluations::Entity",
        from = "Column::EvaluationId",
        to = "super::evaluations::Column::Id"
    )]
    Evaluation,
    #[sea_orm(
        belongs_to = "super::utilisateurs::Entity",
        from = "Column::UtilisateurId",
        to = "super::utilisateurs::Column::Id"
    )]
    Utilisateur,
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl Related<super::utilisateurs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utilisateur.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_attribution(self) -> crate::models::evaluations::entities::Attribution {
        crate::models::evaluations::entities::Attribution {
            id: self.id,
            evaluation_id: self.evaluation_id,
            classe: self.classe,
            utilisateur_id: self.utilisateur_id,
        }
    }
}
