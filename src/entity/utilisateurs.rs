//! Élève (utilisateur) entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "utilisateurs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    #[sea_orm(unique)]
    pub email: String,
    pub classe: Option<String>,
    pub specialite: Option<String>,
    pub date_naissance: Option<Date>,
    pub date_entree_bac: Option<i32>,
    pub date_certification: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::validations::Entity")]
    Validations,
    #[sea_orm(has_many = "super::evaluation_attributions::Entity")]
    Attributions,
}

impl Related<super::validations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Validations.def()
    }
}

impl Related<super::evaluation_attributions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attributions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_utilisateur(self) -> crate::models::utilisateurs::entities::Utilisateur {
        use chrono::{DateTime, Utc};
        use crate::models::utilisateurs::entities::Utilisateur;

        Utilisateur {
            id: self.id,
            nom: self.nom,
            prenom: self.prenom,
            email: self.email,
            classe: self.classe,
            specialite: self.specialite,
            date_naissance: self.date_naissance,
            date_entree_bac: self.date_entree_bac,
            date_certification: self.date_certification,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
