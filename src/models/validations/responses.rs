use serde::Serialize;

use super::entities::Validation;

/// Résultat d'un upsert: la validation et si elle vient d'être créée.
#[derive(Debug, Serialize)]
pub struct UpsertValidationResponse {
    #[serde(flatten)]
    pub validation: Validation,
    pub created: bool,
}

/// Bilan d'un lot de validations.
#[derive(Debug, Serialize)]
pub struct ValiderMultipleResponse {
    pub total: usize,
    pub crees: usize,
    pub mis_a_jour: usize,
    pub erreurs: Vec<String>,
}

/// Validation d'un élève, jointe avec l'item et la compétence.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationUtilisateurDetail {
    #[serde(flatten)]
    pub validation: Validation,
    pub code_item: String,
    pub sous_item: Option<String>,
    pub description: Option<String>,
    pub competence_code: String,
    pub competence_libelle: String,
    pub evaluation_module: String,
    pub evaluation_pole: String,
}

/// Validation vue depuis une évaluation, jointe avec l'élève et l'item.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationEvaluationDetail {
    #[serde(flatten)]
    pub validation: Validation,
    pub nom: String,
    pub prenom: String,
    pub classe: Option<String>,
    pub code_item: String,
    pub competence_code: String,
}
