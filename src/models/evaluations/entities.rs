use serde::{Deserialize, Serialize};

/// Évaluation créée par un enseignant: un contexte pédagogique et un
/// sous-ensemble d'items du référentiel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: i64,
    pub pole: String,
    pub module: String,
    pub contexte: Option<String>,
    pub date_creation: chrono::DateTime<chrono::Utc>,
}

/// Attribution d'une évaluation: exactement une des deux cibles (classe
/// entière ou élève) est renseignée.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribution {
    pub id: i64,
    pub evaluation_id: i64,
    pub classe: Option<String>,
    pub utilisateur_id: Option<i64>,
}
