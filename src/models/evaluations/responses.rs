use serde::Serialize;

use super::entities::{Attribution, Evaluation};
use crate::models::referentiel::entities::ItemDetail;

/// Évaluation listée avec le nombre d'items rattachés.
#[derive(Debug, Serialize)]
pub struct EvaluationSummary {
    #[serde(flatten)]
    pub evaluation: Evaluation,
    pub nombre_items: i64,
}

/// Détail `GET /api/evaluations/{id}`: l'évaluation et ses items joints
/// avec leur compétence.
#[derive(Debug, Serialize)]
pub struct EvaluationDetailResponse {
    pub evaluation: Evaluation,
    pub items: Vec<ItemDetail>,
}

/// Attribution enrichie avec l'identité de l'élève ciblé, le cas échéant.
#[derive(Debug, Serialize)]
pub struct AttributionDetail {
    #[serde(flatten)]
    pub attribution: Attribution,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub user_classe: Option<String>,
}
