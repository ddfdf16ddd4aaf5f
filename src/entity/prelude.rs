//! Entity re-exports under storage-friendly aliases.

pub use super::competences::{
    ActiveModel as CompetenceActiveModel, Entity as Competences, Model as CompetenceModel,
};
pub use super::evaluation_attributions::{
    ActiveModel as AttributionActiveModel, Entity as EvaluationAttributions,
    Model as AttributionModel,
};
pub use super::evaluation_items::{
    ActiveModel as EvaluationItemActiveModel, Entity as EvaluationItems,
    Model as EvaluationItemModel,
};
pub use super::evaluations::{
    ActiveModel as EvaluationActiveModel, Entity as Evaluations, Model as EvaluationModel,
};
pub use super::items::{ActiveModel as ItemActiveModel, Entity as Items, Model as ItemModel};
pub use super::utilisateurs::{
    ActiveModel as UtilisateurActiveModel, Entity as Utilisateurs, Model as UtilisateurModel,
};
pub use super::validations::{
    ActiveModel as ValidationActiveModel, Entity as Validations, Model as ValidationModel,
};
